//! Access management account settings

use super::IamPolicyManagement;
use crate::error::Result;
use crate::http::{DetailedResponse, RequestBuilder};
use crate::models::{AccountSettingsAccessManagement, ExternalAccountIdentityInteractionPatch};
use crate::operation::{required, required_str, Operation};
use crate::types::HeaderList;
use serde::Serialize;

const SETTINGS_PATH: &str = "/v1/accounts/{account_id}/settings/access_management";

/// Options of [`IamPolicyManagement::get_settings`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetSettingsOptions {
    /// Required
    pub account_id: Option<String>,
    pub accept_language: Option<String>,
    pub headers: HeaderList,
}

impl GetSettingsOptions {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }
}

options_setters!(GetSettingsOptions {
    with_account_id => account_id: String,
    with_accept_language => accept_language: String,
});

impl Operation for GetSettingsOptions {
    type Output = AccountSettingsAccessManagement;
    const OPERATION_ID: &'static str = "GetSettings";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required_str(&self.account_id, "account_id")?;
        Ok(RequestBuilder::get(SETTINGS_PATH)
            .path_param("account_id", account_id)
            .headers(&self.headers)
            .optional_header("Accept-Language", self.accept_language.as_ref()))
    }
}

#[derive(Serialize)]
struct UpdateSettingsBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    external_account_identity_interaction: Option<&'a ExternalAccountIdentityInteractionPatch>,
}

/// Options of [`IamPolicyManagement::update_settings`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSettingsOptions {
    /// Required
    pub account_id: Option<String>,
    /// Required
    pub if_match: Option<String>,
    pub accept_language: Option<String>,
    /// Only the identity types present are changed
    pub external_account_identity_interaction: Option<ExternalAccountIdentityInteractionPatch>,
    pub headers: HeaderList,
}

impl UpdateSettingsOptions {
    pub fn new(account_id: impl Into<String>, if_match: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            if_match: Some(if_match.into()),
            ..Self::default()
        }
    }
}

options_setters!(UpdateSettingsOptions {
    with_account_id => account_id: String,
    with_if_match => if_match: String,
    with_accept_language => accept_language: String,
    with_external_account_identity_interaction =>
        external_account_identity_interaction: ExternalAccountIdentityInteractionPatch,
});

impl Operation for UpdateSettingsOptions {
    type Output = AccountSettingsAccessManagement;
    const OPERATION_ID: &'static str = "UpdateSettings";

    fn build_request(&self) -> Result<RequestBuilder> {
        let account_id = required_str(&self.account_id, "account_id")?;
        let if_match = required(&self.if_match, "if_match")?;

        RequestBuilder::patch(SETTINGS_PATH)
            .path_param("account_id", account_id)
            .headers(&self.headers)
            .header("If-Match", if_match.clone())
            .optional_header("Accept-Language", self.accept_language.as_ref())
            .json_body(&UpdateSettingsBody {
                external_account_identity_interaction: self
                    .external_account_identity_interaction
                    .as_ref(),
            })
    }
}

impl IamPolicyManagement {
    /// Get the access management settings of an account
    pub async fn get_settings(
        &self,
        options: &GetSettingsOptions,
    ) -> Result<DetailedResponse<AccountSettingsAccessManagement>> {
        self.execute(options).await
    }

    /// Update the access management settings of an account
    pub async fn update_settings(
        &self,
        options: &UpdateSettingsOptions,
    ) -> Result<DetailedResponse<AccountSettingsAccessManagement>> {
        self.execute(options).await
    }
}
