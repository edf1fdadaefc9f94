mod head_object;

use anyhow::Result;
use aws_sdk_s3 as s3;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

use crate::model::ObjectHead;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    #[tracing::instrument(skip(self))]
    pub async fn head_object(&self, bucket: &str, key: &str) -> Result<ObjectHead> {
        head_object::head_object(&self.inner, bucket, key).await
    }
}
