use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent, SqsMessage};
use lambda_runtime::{Error, LambdaEvent};

use crate::config::Config;

/// Any body containing this marker is treated as a poison message and always fails
pub const POISON_MARKER: &str = "FAIL";

const BODY_PREVIEW_CHARS: usize = 200;

/// Processes every record of the batch and reports only the failed ones back to SQS,
/// which requires `ReportBatchItemFailures` on the event source mapping.
/// A failing record never fails the invocation, otherwise the whole batch would be redelivered.
#[tracing::instrument(skip(config, event), fields(record_count = event.payload.records.len()))]
pub async fn handler(
    config: &Config,
    event: LambdaEvent<SqsEvent>,
) -> Result<SqsBatchResponse, Error> {
    let mut response = SqsBatchResponse::default();

    for record in event.payload.records.iter() {
        let message_id = record.message_id.clone().unwrap_or_default();
        let receive_count = receive_count(record);

        if let Err(e) = process_message(config, record).await {
            tracing::error!(
                message_id = %message_id,
                receive_count,
                error_message = %e,
                "processed FAILED"
            );
            response.batch_item_failures.push(BatchItemFailure {
                item_identifier: message_id,
            });
        }
    }

    Ok(response)
}

/// Does the "work" for a single message
#[tracing::instrument(skip_all, fields(message_id = record.message_id.as_deref().unwrap_or_default()))]
pub async fn process_message(config: &Config, record: &SqsMessage) -> anyhow::Result<()> {
    let body = record.body.as_deref().unwrap_or_default();

    tracing::info!(
        receive_count = receive_count(record),
        body_preview = %body_preview(body),
        "processing message"
    );

    if body.contains(POISON_MARKER) {
        anyhow::bail!("Simulated processing failure (poison message)");
    }

    tokio::time::sleep(config.simulated_work).await;

    tracing::info!("processed OK");

    Ok(())
}

/// How many times SQS has handed this message out, defaulting to the first delivery
pub fn receive_count(record: &SqsMessage) -> u32 {
    record
        .attributes
        .get("ApproximateReceiveCount")
        .and_then(|count| count.parse().ok())
        .unwrap_or(1)
}

/// First characters of the body, cut on a char boundary
pub fn body_preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
