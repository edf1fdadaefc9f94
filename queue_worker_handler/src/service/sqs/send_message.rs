use anyhow::Context;
use aws_sdk_sqs as sqs;

/// Sends a single message and returns the id SQS assigned to it
#[tracing::instrument(skip(client, body))]
pub async fn send_message(
    client: &sqs::Client,
    queue_url: &str,
    body: &str,
) -> anyhow::Result<Option<String>> {
    let resp = client
        .send_message()
        .queue_url(queue_url)
        .message_body(body)
        .send()
        .await
        .context("SendMessage failed")?;

    Ok(resp.message_id().map(str::to_string))
}
