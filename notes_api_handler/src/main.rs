use anyhow::Context;
use lab_entrypoint::LabEntrypoint;
use lambda_http::{Error, Request, run, service_fn};
use notes_api_handler::{config::Config, handler::handler, service::db::NotesTable};
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
    let db = Arc::new(NotesTable::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name,
    ));

    tracing::trace!("initialized dynamodb client");

    let func = service_fn(move |request: Request| {
        let db = db.clone();
        async move { handler(&db, request).await }
    });

    run(func).await
}
