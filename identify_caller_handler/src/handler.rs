use lambda_runtime::{Error, LambdaEvent};

use crate::{
    model::{CallerIdentity, IdentifyCallerResponse},
    service::sts::Sts,
};

/// Looks up the caller identity and logs the parts worth checking in CloudWatch
#[tracing::instrument(skip(sts))]
pub async fn identify_caller(sts: &Sts) -> anyhow::Result<CallerIdentity> {
    let identity = sts.get_caller_identity().await?;

    tracing::info!(
        account = ?identity.account,
        user_id = ?identity.user_id,
        arn = ?identity.arn,
        "caller identity"
    );

    Ok(identity)
}

/// The payload is ignored, any invocation performs the lookup
#[tracing::instrument(skip(sts, event))]
pub async fn handler(
    sts: &Sts,
    event: LambdaEvent<serde_json::Value>,
) -> Result<IdentifyCallerResponse, Error> {
    tracing::trace!(request_id = %event.context.request_id, "handler invoked");

    let identity = identify_caller(sts).await.map_err(|e| {
        tracing::error!(error = ?e, "GetCallerIdentity failed");
        e
    })?;

    Ok(IdentifyCallerResponse { ok: true, identity })
}
