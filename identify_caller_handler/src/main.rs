#![recursion_limit = "256"]

use identify_caller_handler::{handler::handler, service::sts::Sts};
use lab_entrypoint::LabEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    LabEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let sts = Arc::new(Sts::new(aws_sdk_sts::Client::new(&aws_config)));

    tracing::trace!("initialized sts client");

    let func = service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let sts = sts.clone();
        async move { handler(&sts, event).await }
    });

    run(func).await
}
