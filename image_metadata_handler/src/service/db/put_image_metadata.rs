use anyhow::Context;
use aws_sdk_dynamodb::{
    Client,
    error::{ProvideErrorMetadata, SdkError},
};
use dynamodb_client::{NOT_EXISTS_CONDITION, is_conditional_check_failed};

use super::PutOutcome;
use crate::model::ImageMetadataItem;

/// Conditional put keyed on object path and ETag, so replays of the same upload are no-ops
#[tracing::instrument(skip(client, item), fields(pk = %item.pk, sk = %item.sk))]
pub async fn put_image_metadata(
    client: &Client,
    table: &str,
    item: &ImageMetadataItem,
) -> anyhow::Result<PutOutcome> {
    let attributes = serde_dynamo::to_item(item).context("failed to serialize item")?;

    let result = client
        .put_item()
        .table_name(table)
        .set_item(Some(attributes))
        .condition_expression(NOT_EXISTS_CONDITION)
        .send()
        .await;

    put_outcome(result)
}

/// A failed not-exists condition means this object version was ingested before
fn put_outcome<O, E, R>(result: Result<O, SdkError<E, R>>) -> anyhow::Result<PutOutcome>
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    match result {
        Ok(_) => Ok(PutOutcome::Written),
        Err(e) if is_conditional_check_failed(&e) => Ok(PutOutcome::AlreadyPresent),
        Err(e) => Err(e).context("failed to put image metadata"),
    }
}
