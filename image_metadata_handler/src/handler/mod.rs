use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use lambda_runtime::{Error, LambdaEvent};

use crate::{
    context::Context,
    ingest::{Ingested, write_metadata_from_s3_object},
    model::key::decode_event_key,
};


/// Processes the s3 event.
/// Records are handled in order and the first failure fails the invocation so S3 retries it;
/// records that were already written are skipped on the retry by the conditional put.
#[tracing::instrument(skip(ctx, event))]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<(), Error> {
    tracing::info!(
        record_count = event.payload.records.len(),
        "received s3 event records"
    );

    for record in event.payload.records.iter() {
        process_record(&ctx, record).await?;
    }

    tracing::trace!("processing complete");

    Ok(())
}

/// Ingests a single record. Records without a usable bucket or key are skipped since
/// retrying them can never succeed.
#[tracing::instrument(skip_all)]
pub async fn process_record(ctx: &Context, record: &S3EventRecord) -> anyhow::Result<()> {
    let (Some(bucket), Some(encoded_key)) = (
        record.s3.bucket.name.as_deref(),
        record.s3.object.key.as_deref(),
    ) else {
        tracing::warn!("record is missing bucket or key, skipping");
        return Ok(());
    };

    let key = match decode_event_key(encoded_key) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!(error = ?e, key = %encoded_key, "unable to decode key, skipping");
            return Ok(());
        }
    };

    let event_time = record
        .event_time
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    tracing::info!(bucket = %bucket, key = %key, event_time = %event_time, "processing object");

    let result = write_metadata_from_s3_object(ctx, bucket, &key, Some(event_time)).await;
    let ingested = match result {
        Ok(ingested) => ingested,
        Err(e) => {
            tracing::error!(bucket = %bucket, key = %key, error = %e, "failed processing record");
            return Err(e.into());
        }
    };

    let item = ingested.item();
    tracing::info!(
        pk = %item.pk,
        sk = %item.sk,
        already_present = matches!(ingested, Ingested::AlreadyPresent(_)),
        "recorded image metadata"
    );

    Ok(())
}
