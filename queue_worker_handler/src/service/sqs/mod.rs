mod send_message;

use aws_sdk_sqs as sqs;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(not(test))]
pub use SqsClient as Sqs;

#[cfg(test)]
pub use MockSqsClient as Sqs;

#[derive(Clone, Debug)]
pub struct SqsClient {
    inner: sqs::Client,
}

#[cfg_attr(test, automock)]
impl SqsClient {
    pub fn new(inner: sqs::Client) -> Self {
        Self { inner }
    }

    #[tracing::instrument(skip(self))]
    pub async fn send_message(&self, queue_url: &str, body: &str) -> anyhow::Result<Option<String>> {
        send_message::send_message(&self.inner, queue_url, body).await
    }
}
