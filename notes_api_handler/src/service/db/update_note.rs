use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::{
    Client,
    types::{AttributeValue, ReturnValue},
};
use dynamodb_client::EXISTS_CONDITION;

use super::{NoteStoreError, not_found_on_condition};
use crate::model::{NOTE_PK, Note, NoteUpdate, note_sk};

/// `SET` expression touching only the provided fields, plus `updatedAt` which always changes
pub(super) fn update_expression(update: &NoteUpdate) -> (String, HashMap<String, String>) {
    let mut sets = Vec::with_capacity(3);
    let mut values = HashMap::new();

    if let Some(title) = &update.title {
        sets.push("title = :t");
        values.insert(":t".to_string(), title.clone());
    }

    if let Some(content) = &update.content {
        sets.push("content = :c");
        values.insert(":c".to_string(), content.clone());
    }

    sets.push("updatedAt = :now");
    values.insert(":now".to_string(), update.updated_at.clone());

    (format!("SET {}", sets.join(", ")), values)
}

pub(super) async fn update_note(
    client: &Client,
    table: &str,
    note_id: &str,
    update: &NoteUpdate,
) -> Result<Note, NoteStoreError> {
    let (expression, values) = update_expression(update);
    let values = values
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect();

    let output = client
        .update_item()
        .table_name(table)
        .key("PK", AttributeValue::S(NOTE_PK.to_string()))
        .key("SK", AttributeValue::S(note_sk(note_id)))
        .update_expression(expression)
        .set_expression_attribute_values(Some(values))
        .condition_expression(EXISTS_CONDITION)
        .return_values(ReturnValue::AllNew)
        .send()
        .await
        .map_err(|e| not_found_on_condition(e, "failed to update note"))?;

    let attributes = output
        .attributes
        .context("UpdateItem returned no attributes")?;
    let note = serde_dynamo::from_item(attributes).context("unable to deserialize note")?;

    Ok(note)
}
