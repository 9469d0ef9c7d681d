//! Pagination module
//!
//! Cursor-based paging over the list operations of the service.
//!
//! # Overview
//!
//! List responses carry `next.start` while more pages exist. A [`Pager`]
//! owns a copy of the list options, feeds each cursor back as `start`, and
//! stops once a page arrives without one. Page order is exactly the order
//! the service returns.

mod pager;
mod types;

pub use pager::{PageItem, Pager};
pub use types::{ListOperation, Page, PaginationState};

use crate::service::{
    ListActionControlAssignmentsOptions, ListActionControlTemplateVersionsOptions,
    ListActionControlTemplatesOptions, ListPoliciesOptions, ListPolicyAssignmentsOptions,
    ListPolicyTemplateVersionsOptions, ListPolicyTemplatesOptions, ListV2PoliciesOptions,
};

/// Pager over v1 policies
pub type PoliciesPager = Pager<ListPoliciesOptions>;
/// Pager over v2 policies
pub type V2PoliciesPager = Pager<ListV2PoliciesOptions>;
/// Pager over policy templates
pub type PolicyTemplatesPager = Pager<ListPolicyTemplatesOptions>;
/// Pager over the versions of a policy template
pub type PolicyTemplateVersionsPager = Pager<ListPolicyTemplateVersionsOptions>;
/// Pager over policy assignments
pub type PolicyAssignmentsPager = Pager<ListPolicyAssignmentsOptions>;
/// Pager over action control templates
pub type ActionControlTemplatesPager = Pager<ListActionControlTemplatesOptions>;
/// Pager over the versions of an action control template
pub type ActionControlTemplateVersionsPager = Pager<ListActionControlTemplateVersionsOptions>;
/// Pager over action control assignments
pub type ActionControlAssignmentsPager = Pager<ListActionControlAssignmentsOptions>;

#[cfg(test)]
mod tests;
