use anyhow::Context;

/// Object keys arrive form-encoded in S3 notifications: spaces become `+` and
/// everything else is percent-encoded.
pub fn decode_event_key(encoded: &str) -> anyhow::Result<String> {
    let with_spaces = encoded.replace('+', " ");
    let decoded = urlencoding::decode(&with_spaces).context("key is not valid UTF-8")?;
    Ok(decoded.into_owned())
}
