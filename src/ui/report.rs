use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use log::error;

/// The resource kinds acutils reports on. The kind determines the section
/// header and the failure sentence; the record itself determines the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Environment,
    CatalogItem,
    ApiService,
    Subscription,
    Webhook,
}

impl ResourceKind {
    pub fn header(&self) -> &'static str {
        match self {
            Self::Environment => "Environments",
            Self::CatalogItem => "Catalog Items",
            Self::ApiService => "API Services",
            Self::Subscription => "Subscriptions",
            Self::Webhook => "Webhooks",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Environment => "Error retrieving environments!",
            Self::CatalogItem => "Error retrieving Catalog Items!",
            Self::ApiService => "Error retrieving API Services!",
            Self::Subscription => "Error retrieving Subscriptions!",
            Self::Webhook => "Error retrieving Webhooks!",
        }
    }
}

/// Projection of a record into its report line(s).
pub trait ListItem {
    fn render_line(&self) -> String;
}

/// Render a full query outcome: a green section header plus one line per
/// record and a trailing blank line, or the kind's failure sentence.
///
/// An `Ok` with zero records is not an error; it renders the header and no
/// item lines. Nothing is written until the full outcome is known.
pub fn listing<T: ListItem, W: Write>(
    out: &mut W,
    kind: ResourceKind,
    outcome: &Result<Vec<T>>,
) -> Result<()> {
    match outcome {
        Ok(items) => {
            let header = format!("==============\n{}\n==============", kind.header());
            writeln!(out, "{}", header.green())?;
            for item in items {
                writeln!(out, "{}", item.render_line())?;
            }
            writeln!(out)?;
        }
        Err(e) => {
            error!("{} query failed: {:#}", kind.header(), e);
            writeln!(out, "{}", kind.failure_message())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct Named(&'static str);

    impl ListItem for Named {
        fn render_line(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn ok_outcome_renders_header_items_and_blank_line() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let outcome: Result<Vec<Named>> = Ok(vec![Named("prod"), Named("dev")]);
        listing(&mut out, ResourceKind::Environment, &outcome).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "==============\nEnvironments\n==============\nprod\ndev\n\n"
        );
    }

    #[test]
    fn empty_ok_outcome_renders_header_and_no_items() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let outcome: Result<Vec<Named>> = Ok(vec![]);
        listing(&mut out, ResourceKind::Webhook, &outcome).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "==============\nWebhooks\n==============\n\n"
        );
    }

    #[test]
    fn failed_outcome_renders_single_failure_line() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let outcome: Result<Vec<Named>> = Err(anyhow!("boom"));
        listing(&mut out, ResourceKind::CatalogItem, &outcome).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error retrieving Catalog Items!\n"
        );
    }
}
