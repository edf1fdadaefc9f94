use aws_sdk_dynamodb::{Client, types::AttributeValue};
use dynamodb_client::EXISTS_CONDITION;

use super::{NoteStoreError, not_found_on_condition};
use crate::model::{NOTE_PK, note_sk};

pub(super) async fn delete_note(
    client: &Client,
    table: &str,
    note_id: &str,
) -> Result<(), NoteStoreError> {
    client
        .delete_item()
        .table_name(table)
        .key("PK", AttributeValue::S(NOTE_PK.to_string()))
        .key("SK", AttributeValue::S(note_sk(note_id)))
        .condition_expression(EXISTS_CONDITION)
        .send()
        .await
        .map_err(|e| not_found_on_condition(e, "failed to delete note"))?;

    Ok(())
}
