//! Local sanity check that the default credential chain resolves to the expected principal.

use clap::Parser;
use identify_caller_handler::{handler::identify_caller, service::sts::Sts};
use lab_entrypoint::LabEntrypoint;

#[derive(Parser)]
#[command(name = "identify_caller")]
#[command(about = "Print the principal the default AWS credentials resolve to")]
struct Args {
    /// Log spans as an indented tree with this width (ENVIRONMENT=local only)
    #[arg(long, value_name = "INDENT")]
    tree_tracing: Option<usize>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    LabEntrypoint::default()
        .with_tree_tracing(args.tree_tracing)
        .init();

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let sts = Sts::new(aws_sdk_sts::Client::new(&aws_config));

    match identify_caller(&sts).await {
        Ok(identity) => match serde_json::to_string_pretty(&identity) {
            Ok(rendered) => println!("CallerIdentity: {rendered}"),
            Err(e) => tracing::warn!(error = ?e, "unable to render identity"),
        },
        Err(e) => {
            tracing::error!(error = ?e, "GetCallerIdentity failed");
            std::process::exit(1);
        }
    }
}
