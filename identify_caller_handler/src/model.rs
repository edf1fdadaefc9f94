use serde::{Deserialize, Serialize};

/// The principal the SDK authenticated as, as reported by STS
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    /// AWS account id
    pub account: Option<String>,
    /// unique identifier of the principal or session
    pub user_id: Option<String>,
    /// ARN of the user or assumed role
    pub arn: Option<String>,
}

/// What the lambda returns to its invoker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifyCallerResponse {
    /// always true, failures surface as invocation errors
    pub ok: bool,
    pub identity: CallerIdentity,
}
