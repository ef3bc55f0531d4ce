use std::io::Write;

use anyhow::Result;
use log::{error, info};

use super::acquire_session;
use crate::api::PlatformApi;
use crate::ui::prompts::Prompter;
use crate::ui::report::{self, ResourceKind};

/// List all subscriptions in the organization.
pub async fn list_command<A, W>(api: &mut A, out: &mut W) -> Result<()>
where
    A: PlatformApi + ?Sized,
    W: Write,
{
    info!("Listing subscriptions");

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let outcome = api.list_subscriptions().await;
    report::listing(out, ResourceKind::Subscription, &outcome)
}

/// Point the subscription webhook of one environment at a new URL.
/// Prompts for the environment and then the URL before authenticating.
pub async fn update_webhook_url_command<A, P, W>(
    api: &mut A,
    prompter: &P,
    out: &mut W,
) -> Result<()>
where
    A: PlatformApi + ?Sized,
    P: Prompter + ?Sized,
    W: Write,
{
    let environment = prompter.prompt("Name of Environment to update Subscription Webhook for?")?;
    let url = prompter.prompt("Enter new URL")?;
    info!(
        "Updating subscription webhook URL for environment {}",
        environment
    );

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    match api.update_subscription_webhook_url(&environment, &url).await {
        Ok(()) => {
            writeln!(out, "Subscription Webhook URL successfully updated!")?;
        }
        Err(e) => {
            error!("Webhook URL update failed: {:#}", e);
            writeln!(out, "Error updating subscription webhook url")?;
        }
    }
    Ok(())
}
