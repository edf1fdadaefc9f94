use anyhow::Context;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use dynamodb_client::collect_query_pages;

use super::NoteStoreError;
use crate::model::{NOTE_PK, NOTE_SK_PREFIX, Note};

pub(super) async fn list_notes(client: &Client, table: &str) -> Result<Vec<Note>, NoteStoreError> {
    let items = collect_query_pages(|start_key| {
        client
            .query()
            .table_name(table)
            .key_condition_expression("PK = :pk AND begins_with(SK, :sk)")
            .expression_attribute_values(":pk", AttributeValue::S(NOTE_PK.to_string()))
            .expression_attribute_values(":sk", AttributeValue::S(NOTE_SK_PREFIX.to_string()))
            .scan_index_forward(false)
            .set_exclusive_start_key(start_key)
            .send()
    })
    .await
    .context("failed to query notes")?;

    let notes = serde_dynamo::from_items(items).context("unable to deserialize notes")?;

    Ok(notes)
}
