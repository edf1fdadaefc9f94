use crate::{handler::POISON_MARKER, model::SentMessage, service::sqs::Sqs};

/// Two healthy messages followed by one that will end up in the DLQ
pub fn test_message_bodies() -> [String; 3] {
    [
        "hello-1".to_string(),
        "hello-2".to_string(),
        format!("{POISON_MARKER}-please-retry-me"),
    ]
}

/// Sends the test bodies in order, stopping at the first failure
#[tracing::instrument(skip(sqs))]
pub async fn send_test_messages(sqs: &Sqs, queue_url: &str) -> anyhow::Result<Vec<SentMessage>> {
    let mut sent = Vec::new();

    for body in test_message_bodies() {
        let message_id = sqs.send_message(queue_url, &body).await?;
        tracing::info!(body = %body, message_id = ?message_id, "sent");
        sent.push(SentMessage { body, message_id });
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;

    const QUEUE_URL: &str = "https://sqs.us-west-2.amazonaws.com/123456789012/lab1-source";

    #[tokio::test]
    async fn sends_bodies_in_order() {
        let mut sqs = Sqs::default();
        let mut seq = Sequence::new();
        for (idx, body) in ["hello-1", "hello-2", "FAIL-please-retry-me"]
            .into_iter()
            .enumerate()
        {
            sqs.expect_send_message()
                .with(eq(QUEUE_URL), eq(body))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_, _| Ok(Some(format!("id-{idx}"))));
        }

        let sent = send_test_messages(&sqs, QUEUE_URL).await.unwrap();

        assert_eq!(sent.len(), 3);
        assert_eq!(sent[2].body, "FAIL-please-retry-me");
        assert_eq!(sent[2].message_id.as_deref(), Some("id-2"));
    }

    #[tokio::test]
    async fn stops_at_first_failure() {
        let mut sqs = Sqs::default();
        sqs.expect_send_message()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("AWS.SimpleQueueService.NonExistentQueue")));

        let err = send_test_messages(&sqs, QUEUE_URL).await.unwrap_err();

        assert!(err.to_string().contains("NonExistentQueue"));
    }
}
