use anyhow::Context;
use aws_sdk_dynamodb::Client;
use dynamodb_client::{NOT_EXISTS_CONDITION, is_conditional_check_failed};

use super::NoteStoreError;
use crate::model::Note;

pub(super) async fn put_note(client: &Client, table: &str, note: &Note) -> Result<(), NoteStoreError> {
    let item = serde_dynamo::to_item(note).context("failed to serialize note")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .condition_expression(NOT_EXISTS_CONDITION)
        .send()
        .await
        .map_err(|e| {
            if is_conditional_check_failed(&e) {
                anyhow::anyhow!("a note with id {} already exists", note.note_id)
            } else {
                anyhow::Error::new(e).context("failed to put note")
            }
        })?;

    Ok(())
}
