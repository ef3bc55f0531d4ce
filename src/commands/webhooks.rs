use std::io::Write;

use anyhow::Result;
use log::info;

use super::acquire_session;
use crate::api::PlatformApi;
use crate::ui::prompts::Prompter;
use crate::ui::report::{self, ResourceKind};

/// List the webhooks registered in one environment.
pub async fn list_for_environment_command<A, P, W>(
    api: &mut A,
    prompter: &P,
    out: &mut W,
) -> Result<()>
where
    A: PlatformApi + ?Sized,
    P: Prompter + ?Sized,
    W: Write,
{
    let environment = prompter.prompt("Name of Environment to get Webhooks for?")?;
    info!("Listing webhooks for environment {}", environment);

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let outcome = api.list_webhooks(&environment).await;
    report::listing(out, ResourceKind::Webhook, &outcome)
}
