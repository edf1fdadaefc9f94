mod put_image_metadata;

use aws_sdk_dynamodb as dynamodb;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(not(test))]
pub use DBClient as DB;

#[cfg(test)]
pub use MockDBClient as DB;

use crate::model::ImageMetadataItem;

/// Result of a conditional metadata write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    /// the item did not exist and was written
    Written,
    /// an item for the same object version was already there
    AlreadyPresent,
}

#[derive(Clone, Debug)]
pub struct DBClient {
    inner: dynamodb::Client,
    table: String,
}

#[cfg_attr(test, automock)]
impl DBClient {
    pub fn new(inner: dynamodb::Client, table: String) -> Self {
        Self { inner, table }
    }

    #[tracing::instrument(skip(self, item))]
    pub async fn put_image_metadata(&self, item: &ImageMetadataItem) -> anyhow::Result<PutOutcome> {
        put_image_metadata::put_image_metadata(&self.inner, &self.table, item).await
    }
}
