use serde::{Deserialize, Serialize};

pub mod key;

/// Stable partition key for an object path. Retried events for the same object
/// always land on the same partition.
pub fn pk_for(bucket: &str, key: &str) -> String {
    format!("IMG#{bucket}#{key}")
}

/// Sort key for one version of the object content.
/// A new upload changes the ETag and therefore adds a new item instead of overwriting history.
pub fn sk_for(etag: &str) -> String {
    format!("META#{etag}")
}

/// S3 returns the ETag wrapped in quotes, e.g. `"\"abc123\""`
pub fn normalize_etag(etag: &str) -> String {
    etag.replace('"', "")
}

/// What `HeadObject` told us about the object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectHead {
    pub etag: Option<String>,
    pub content_length: Option<i64>,
    pub content_type: Option<String>,
    /// ISO-8601
    pub last_modified: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadataItem {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "SK")]
    pub sk: String,
    pub bucket: String,
    pub key: String,
    pub etag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
}

impl ImageMetadataItem {
    /// Builds the item for an object whose ETag was already normalized
    pub fn new(
        bucket: &str,
        key: &str,
        etag: String,
        head: ObjectHead,
        event_time: Option<String>,
    ) -> Self {
        Self {
            pk: pk_for(bucket, key),
            sk: sk_for(&etag),
            bucket: bucket.to_string(),
            key: key.to_string(),
            etag,
            size_bytes: head.content_length,
            content_type: head.content_type,
            last_modified: head.last_modified,
            event_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_deterministic() {
        assert_eq!(pk_for("photos", "2024/cat.jpg"), "IMG#photos#2024/cat.jpg");
        assert_eq!(sk_for("abc123"), "META#abc123");
    }

    #[test]
    fn strips_every_quote_from_etag() {
        assert_eq!(normalize_etag("\"abc123\""), "abc123");
        assert_eq!(normalize_etag("abc123"), "abc123");
        assert_eq!(normalize_etag("\"\""), "");
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let item = ImageMetadataItem::new(
            "photos",
            "cat.jpg",
            "abc123".to_string(),
            ObjectHead {
                content_length: Some(42),
                ..Default::default()
            },
            None,
        );

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({
                "PK": "IMG#photos#cat.jpg",
                "SK": "META#abc123",
                "bucket": "photos",
                "key": "cat.jpg",
                "etag": "abc123",
                "sizeBytes": 42,
            })
        );
    }
}
