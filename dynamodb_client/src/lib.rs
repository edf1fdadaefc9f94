//! Helpers shared by the lambdas that write to single-table DynamoDB layouts keyed on `PK`/`SK`.

use std::{collections::HashMap, future::Future};

use aws_sdk_dynamodb::{
    error::{ProvideErrorMetadata, SdkError},
    operation::query::QueryOutput,
    types::AttributeValue,
};

/// A raw DynamoDB item keyed by attribute name
pub type Item = HashMap<String, AttributeValue>;

/// Error code returned when a `ConditionExpression` evaluates to false
pub const CONDITIONAL_CHECK_FAILED: &str = "ConditionalCheckFailedException";

/// Only write when no item with the same primary key exists yet
pub const NOT_EXISTS_CONDITION: &str = "attribute_not_exists(PK) AND attribute_not_exists(SK)";

/// Only touch an item that already exists
pub const EXISTS_CONDITION: &str = "attribute_exists(PK) AND attribute_exists(SK)";

/// Returns true when the request was rejected because its condition expression failed
pub fn is_conditional_check_failed<E, R>(err: &SdkError<E, R>) -> bool
where
    E: ProvideErrorMetadata,
{
    err.as_service_error()
        .and_then(|e| e.code())
        .map(|code| code == CONDITIONAL_CHECK_FAILED)
        .unwrap_or(false)
}

/// Drives a query to completion. `fetch_page` receives the previous page's
/// `LastEvaluatedKey` as its exclusive start key, `None` for the first page.
pub async fn collect_query_pages<F, Fut, E>(mut fetch_page: F) -> Result<Vec<Item>, E>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<QueryOutput, E>>,
{
    let mut items = Vec::new();
    let mut start_key = None;

    loop {
        let page = fetch_page(start_key).await?;
        items.extend(page.items.unwrap_or_default());

        start_key = page.last_evaluated_key;
        if start_key.is_none() {
            return Ok(items);
        }
    }
}
