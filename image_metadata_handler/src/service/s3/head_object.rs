use anyhow::Context;
use aws_sdk_s3 as s3;

use crate::model::ObjectHead;

/// Reads the object headers without downloading the content
#[tracing::instrument(skip(client))]
pub async fn head_object(client: &s3::Client, bucket: &str, key: &str) -> anyhow::Result<ObjectHead> {
    let resp = client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .with_context(|| format!("HeadObject failed for s3://{bucket}/{key}"))?;

    let last_modified = resp.last_modified().and_then(|dt| {
        chrono::DateTime::<chrono::Utc>::from_timestamp(dt.secs(), dt.subsec_nanos())
            .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Millis, true))
    });

    Ok(ObjectHead {
        etag: resp.e_tag().map(str::to_string),
        content_length: resp.content_length(),
        content_type: resp.content_type().map(str::to_string),
        last_modified,
    })
}
