mod get_caller_identity;

use aws_sdk_sts as sts;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(not(test))]
pub use StsClient as Sts;

#[cfg(test)]
pub use MockStsClient as Sts;

use crate::model::CallerIdentity;

#[derive(Clone, Debug)]
pub struct StsClient {
    inner: sts::Client,
}

#[cfg_attr(test, automock)]
impl StsClient {
    pub fn new(inner: sts::Client) -> Self {
        Self { inner }
    }

    /// Asks STS which principal the current credentials belong to.
    #[tracing::instrument(skip(self))]
    pub async fn get_caller_identity(&self) -> anyhow::Result<CallerIdentity> {
        get_caller_identity::get_caller_identity(&self.inner).await
    }
}
