#![recursion_limit = "256"]

use anyhow::Context as _;
use aws_lambda_events::event::s3::S3Event;
use image_metadata_handler::{
    config::Config,
    context::Context,
    handler::handler,
    service::{db::DB, s3::S3},
};
use lab_entrypoint::LabEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    LabEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Config::from_env().context("missing environment variables")?;

    tracing::trace!(table = %config.table_name, "initialized config");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let ctx = Context {
        s3: Arc::new(S3::new(aws_sdk_s3::Client::new(&aws_config))),
        db: Arc::new(DB::new(
            aws_sdk_dynamodb::Client::new(&aws_config),
            config.table_name,
        )),
    };

    tracing::trace!("initialized aws clients");

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = ctx.clone();
        async move { handler(ctx, event).await }
    });

    run(func).await
}
