use std::io::Write;

use anyhow::Result;
use log::info;

use super::acquire_session;
use crate::api::PlatformApi;
use crate::ui::report::{self, ResourceKind};

/// List all environments in the organization.
pub async fn list_command<A, W>(api: &mut A, out: &mut W) -> Result<()>
where
    A: PlatformApi + ?Sized,
    W: Write,
{
    info!("Listing environments");

    if !acquire_session(api, out).await? {
        return Ok(());
    }

    let outcome = api.list_environments().await;
    report::listing(out, ResourceKind::Environment, &outcome)
}
