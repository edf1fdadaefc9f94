use thiserror::Error;

use crate::{
    context::Context,
    model::{ImageMetadataItem, normalize_etag},
    service::db::PutOutcome,
};

#[derive(Debug, Error)]
pub enum IngestError {
    /// HeadObject answered without an ETag, usually a permissions problem
    #[error("Missing ETag from HeadObject for s3://{bucket}/{key}")]
    MissingEtag { bucket: String, key: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// What happened to a single object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    Written(ImageMetadataItem),
    /// the same object version had been ingested by an earlier delivery
    AlreadyPresent(ImageMetadataItem),
}

impl Ingested {
    /// The item that is now in the table, whoever wrote it
    pub fn item(&self) -> &ImageMetadataItem {
        match self {
            Ingested::Written(item) | Ingested::AlreadyPresent(item) => item,
        }
    }
}

/// Reads the object headers and records them, at most once per object version
#[tracing::instrument(skip(ctx))]
pub async fn write_metadata_from_s3_object(
    ctx: &Context,
    bucket: &str,
    key: &str,
    event_time: Option<String>,
) -> Result<Ingested, IngestError> {
    let head = ctx.s3.head_object(bucket, key).await?;

    let etag = normalize_etag(head.etag.as_deref().unwrap_or_default());
    if etag.is_empty() {
        return Err(IngestError::MissingEtag {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });
    }

    let item = ImageMetadataItem::new(bucket, key, etag, head, event_time);

    match ctx.db.put_image_metadata(&item).await? {
        PutOutcome::Written => Ok(Ingested::Written(item)),
        PutOutcome::AlreadyPresent => Ok(Ingested::AlreadyPresent(item)),
    }
}
