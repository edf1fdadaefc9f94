//! Minimal deployable lambda used to prove the packaging and role work before wiring the S3 trigger.

use lab_entrypoint::LabEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SmokeResponse {
    status_code: u16,
    body: String,
}

#[derive(Serialize)]
struct SmokeBody {
    ok: bool,
    lab: &'static str,
    ts: bool,
}

async fn handler(_event: LambdaEvent<serde_json::Value>) -> Result<SmokeResponse, Error> {
    let body = serde_json::to_string(&SmokeBody {
        ok: true,
        lab: "04",
        ts: true,
    })?;

    Ok(SmokeResponse {
        status_code: 200,
        body,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    LabEntrypoint::default().init();

    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_proxy_shaped_ok() {
        let event = LambdaEvent::new(serde_json::json!({}), lambda_runtime::Context::default());
        let response = handler(event).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "statusCode": 200,
                "body": "{\"ok\":true,\"lab\":\"04\",\"ts\":true}"
            })
        );
    }
}
