//! Access management account settings

use serde::{Deserialize, Serialize};

/// Interaction setting for one identity type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityTypesBase {
    /// `enabled`, `monitor` or `limited`
    pub state: String,
    /// Accounts allowed to interact when the state is `limited`
    #[serde(default)]
    pub external_allowed_accounts: Vec<String>,
}

impl IdentityTypesBase {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            external_allowed_accounts: Vec::new(),
        }
    }
}

/// Settings per identity type. Used for reads and for partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<IdentityTypesBase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<IdentityTypesBase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<IdentityTypesBase>,
}

/// Patch form of [`IdentityTypes`]
pub type IdentityTypesPatch = IdentityTypes;

/// How identities from other accounts may interact with this account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalAccountIdentityInteraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_types: Option<IdentityTypes>,
}

/// Patch form of [`ExternalAccountIdentityInteraction`]
pub type ExternalAccountIdentityInteractionPatch = ExternalAccountIdentityInteraction;

/// Access management settings of an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsAccessManagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_account_identity_interaction: Option<ExternalAccountIdentityInteraction>,
}
