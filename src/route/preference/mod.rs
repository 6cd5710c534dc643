use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

pub mod app;
pub mod submit_preference;

/// Clothing preferences of a user.
///
/// No member is required and none is interpreted; any JSON value is accepted.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSubmission {
    pub user_id: Option<Value>,
    pub styles: Option<Value>,
    pub patterns: Option<Value>,
    pub purposes: Option<Value>,
    pub colors: Option<Value>,
}
