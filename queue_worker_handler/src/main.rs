use anyhow::Context;
use aws_lambda_events::event::sqs::SqsEvent;
use lab_entrypoint::LabEntrypoint;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use queue_worker_handler::{config::Config, handler::handler};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    LabEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = Arc::new(Config::from_env().context("invalid worker configuration")?);

    tracing::trace!(config = ?config, "initialized config");

    let func = service_fn(move |event: LambdaEvent<SqsEvent>| {
        let config = config.clone();
        async move { handler(&config, event).await }
    });

    run(func).await
}
