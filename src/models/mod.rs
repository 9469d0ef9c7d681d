//! Wire models
//!
//! Request and response bodies of the IAM Policy Management API. Optional
//! fields are `Option`s that are left out of serialized JSON when absent.

mod action_control;
mod assignment;
mod common;
mod policy;
mod role;
mod settings;
mod template;
mod v2_policy;

pub use action_control::{
    ActionControlAssignment, ActionControlAssignmentCollection, ActionControlAssignmentResource,
    ActionControlAssignmentResourceActionControl, ActionControlAssignmentTemplate,
    ActionControlTemplate, ActionControlTemplateCollection,
    ActionControlTemplateVersionsCollection, TemplateActionControl,
};
pub use assignment::{
    AssignmentTemplateDetails, PolicyAssignmentResourcePolicy, PolicyAssignmentV1,
    PolicyAssignmentV1Collection, PolicyAssignmentV1Resources, PolicyAssignmentV1Subject,
    PolicyTemplateAssignmentCollection,
};
pub use common::{
    AssignmentTargetDetails, ConflictsWith, ErrorDetails, ErrorObject, ErrorResponse, First,
    Next, Previous, ResourceCreated, TemplateMetadata,
};
pub use policy::{
    Policy, PolicyCollection, PolicyResource, PolicyRole, PolicySubject, ResourceAttribute,
    ResourceTag, SubjectAttribute,
};
pub use role::{CustomRole, Role, RoleCollection};
pub use settings::{
    AccountSettingsAccessManagement, ExternalAccountIdentityInteraction,
    ExternalAccountIdentityInteractionPatch, IdentityTypes, IdentityTypesBase,
    IdentityTypesPatch,
};
pub use template::{
    PolicyTemplate, PolicyTemplateCollection, PolicyTemplateVersionsCollection, TemplatePolicy,
};
pub use v2_policy::{
    Control, ControlResponse, EnrichedRoles, Grant, GrantWithEnrichedRoles, NestedCondition,
    RoleAction, Roles, RuleAttribute, V2Policy, V2PolicyCollection, V2PolicyResource,
    V2PolicyResourceAttribute, V2PolicyResourceTag, V2PolicyRule, V2PolicySubject,
    V2PolicySubjectAttribute,
};
