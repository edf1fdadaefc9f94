use anyhow::Context;
use aws_sdk_dynamodb::{Client, types::AttributeValue};

use super::NoteStoreError;
use crate::model::{NOTE_PK, Note, note_sk};

pub(super) async fn get_note(
    client: &Client,
    table: &str,
    note_id: &str,
) -> Result<Note, NoteStoreError> {
    let output = client
        .get_item()
        .table_name(table)
        .key("PK", AttributeValue::S(NOTE_PK.to_string()))
        .key("SK", AttributeValue::S(note_sk(note_id)))
        .send()
        .await
        .context("failed to get note")?;

    let item = output.item.ok_or(NoteStoreError::NotFound)?;
    let note = serde_dynamo::from_item(item).context("unable to deserialize note")?;

    Ok(note)
}
