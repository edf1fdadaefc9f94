//! Seeds the source queue with two healthy messages and one poison message.

use clap::Parser;
use lab_entrypoint::LabEntrypoint;
use queue_worker_handler::{service::sqs::Sqs, test_messages::send_test_messages};

#[derive(Parser)]
#[command(name = "send_test_messages")]
#[command(about = "Send test messages to the lab worker's source queue")]
struct Args {
    /// URL of the queue the worker consumes from
    #[arg(env = "QUEUE_URL")]
    queue_url: String,

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
    let sqs = Sqs::new(aws_sdk_sqs::Client::new(&aws_config));

    match send_test_messages(&sqs, &args.queue_url).await {
        Ok(sent) => {
            for message in sent {
                println!("Sent: {} {:?}", message.body, message.message_id);
            }
        }
        Err(e) => {
            tracing::error!(error = ?e, "send_test_messages failed");
            std::process::exit(1);
        }
    }
}
