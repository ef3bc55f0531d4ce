//! Command orchestration: prompt, authenticate, call, report.
//!
//! Every handler follows the same contract: failures are converted into a
//! terminal user-facing sentence at the point of detection and never bubble
//! past the command boundary. The process exit code stays zero either way.

pub mod catalog;
pub mod environments;
pub mod services;
pub mod subscriptions;
pub mod webhooks;

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use log::error;

use crate::api::{CentralClient, PlatformApi};
use crate::cli::Command;
use crate::cli::app::USAGE;
use crate::config::Config;
use crate::ui::prompts::TerminalPrompter;

pub const TOKEN_ERROR_MSG: &str = "Error retrieving access token for API access. Please make sure that your configuration is correct!";

/// Map a command tag to its handler. The `Help` and `Invalid` paths never
/// touch the platform and never fail.
pub async fn dispatch(command: Command, config: &Config) -> Result<()> {
    let mut out = std::io::stdout();

    match command {
        Command::Help => help_command(&mut out),
        Command::Invalid => invalid_command(&mut out),
        _ => {
            let mut api = CentralClient::new(config.clone())?;
            let prompter = TerminalPrompter;
            match command {
                Command::GetEnvironments => environments::list_command(&mut api, &mut out).await,
                Command::GetCatalogItems => catalog::list_command(&mut api, &mut out).await,
                Command::GetEnvironmentCatalogItems => {
                    catalog::list_for_environment_command(&mut api, &prompter, &mut out).await
                }
                Command::GetEnvironmentApiServices => {
                    services::list_for_environment_command(&mut api, &prompter, &mut out).await
                }
                Command::DeleteEnvironmentApiServices => {
                    services::delete_all_command(&mut api, &prompter, &mut out).await
                }
                Command::GetSubscriptions => {
                    subscriptions::list_command(&mut api, &mut out).await
                }
                Command::GetEnvironmentWebhooks => {
                    webhooks::list_for_environment_command(&mut api, &prompter, &mut out).await
                }
                Command::UpdateSubscriptionWebhookUrl => {
                    subscriptions::update_webhook_url_command(&mut api, &prompter, &mut out).await
                }
                Command::Help | Command::Invalid => unreachable!("handled above"),
            }
        }
    }
}

pub fn help_command<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", USAGE)?;
    Ok(())
}

pub fn invalid_command<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Invalid command or no command passed".red())?;
    help_command(out)
}

/// Acquire the per-invocation session. On failure the fixed token error
/// sentence is the only output and the caller must not issue any resource
/// call.
pub(crate) async fn acquire_session<A, W>(api: &mut A, out: &mut W) -> Result<bool>
where
    A: PlatformApi + ?Sized,
    W: Write,
{
    match api.authenticate().await {
        Ok(()) => Ok(true),
        Err(e) => {
            error!("Authentication failed: {:#}", e);
            writeln!(out, "{}", TOKEN_ERROR_MSG)?;
            Ok(false)
        }
    }
}
