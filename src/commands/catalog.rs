use std::io::Write;

use anyhow::Result;
use log::info;

use super::acquire_session;
use crate::api::PlatformApi;
use crate::ui::prompts::Prompter;
use crate::ui::report::{self, ResourceKind};

/// List every catalog item in the organization.
pub async fn list_command<A, W>(api: &mut A, out: &mut W) -> Result<()>
where
    A: PlatformApi + ?Sized,
    W: Write,
{
    info!("Listing catalog items");

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let outcome = api.list_catalog_items().await;
    report::listing(out, ResourceKind::CatalogItem, &outcome)
}

/// List the catalog items published from one environment. The environment
/// name is collected interactively before anything else happens.
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
    let environment = prompter.prompt("Name of Environment to get Catalog Items for?")?;
    info!("Listing catalog items for environment {}", environment);

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let outcome = api.list_catalog_items_for_environment(&environment).await;
    report::listing(out, ResourceKind::CatalogItem, &outcome)
}
