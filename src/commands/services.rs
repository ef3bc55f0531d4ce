use std::io::Write;

use anyhow::Result;
use log::{error, info, warn};

use super::acquire_session;
use crate::api::PlatformApi;
use crate::ui::prompts::Prompter;
use crate::ui::report::{self, ResourceKind};

/// List the API services registered in one environment.
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
    let environment = prompter.prompt("Name of Environment to get API Services for?")?;
    info!("Listing API services for environment {}", environment);

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let outcome = api.list_api_services(&environment).await;
    report::listing(out, ResourceKind::ApiService, &outcome)
}

/// Delete every API service in one environment.
///
/// The deletes are issued together as a concurrent fan-out and all of them
/// are awaited before the summary is printed, so partial failure is visible
/// to the operator. If the preceding query fails, no delete is issued.
pub async fn delete_all_command<A, P, W>(api: &mut A, prompter: &P, out: &mut W) -> Result<()>
where
    A: PlatformApi + ?Sized,
    P: Prompter + ?Sized,
    W: Write,
{
    let environment = prompter.prompt("Name of Environment to delete ALL API Services for?")?;
    info!("Deleting all API services in environment {}", environment);

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let services = match api.list_api_services(&environment).await {
        Ok(services) => services,
        Err(e) => {
            error!("API service query failed: {:#}", e);
            writeln!(out, "{}", ResourceKind::ApiService.failure_message())?;
            return Ok(());
        }
    };

    let total = services.len();
    let api: &A = api;
    let deletes = services
        .iter()
        .map(|service| api.delete_api_service(&environment, &service.name));
    let results = futures::future::join_all(deletes).await;

    let mut deleted = 0;
    for (service, result) in services.iter().zip(results) {
        match result {
            Ok(()) => deleted += 1,
            Err(e) => {
                warn!("Failed to delete API service {}: {:#}", service.name, e);
                writeln!(out, "Failed to delete {}: {}", service.name, e)?;
            }
        }
    }

    writeln!(out, "Deleted {} of {} API Services", deleted, total)?;
    Ok(())
}
