use anyhow::Context;
use aws_sdk_sts as sts;

use crate::model::CallerIdentity;

#[tracing::instrument(skip(client))]
pub async fn get_caller_identity(client: &sts::Client) -> anyhow::Result<CallerIdentity> {
    let resp = client
        .get_caller_identity()
        .send()
        .await
        .context("GetCallerIdentity failed")?;

    Ok(CallerIdentity {
        account: resp.account().map(str::to_string),
        user_id: resp.user_id().map(str::to_string),
        arn: resp.arn().map(str::to_string),
    })
}
