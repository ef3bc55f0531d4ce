use clap::Parser;

/// Usage guide printed by `acutils help` and on invalid input.
pub const USAGE: &str = "\
USAGE: acutils <command>

The acutils CLI helps you manage your Amplify Central resources from the command line.

Make sure you set your client id, client secret, base URL and organization id
in the configuration file (or via ACUTILS_* environment variables) prior to running!

COMMANDS:
  help                     get help
  getenv                   get a list of environments
  getci                    get a list of catalog items (APIs)
  getenvci                 get a list of catalog items (APIs) for a given environment
  getenvapiservices        get a list of API Services for a given environment
  delenvapiservices        delete all API Services for a given environment
  getsubs                  get a list of all subscriptions
  getenvwh                 get a list of webhooks for a given environment
  updatesubswhurl          update subscription webhook URL
";

#[derive(Parser)]
#[command(name = "acutils")]
#[command(about = "A CLI tool for managing Amplify Central resources")]
pub struct Cli {
    /// Command to run, see `acutils help`
    pub command: Option<String>,
}

impl Cli {
    pub fn command(&self) -> Command {
        Command::from_arg(self.command.as_deref())
    }
}

/// The closed set of commands acutils understands. Anything else maps to
/// `Invalid`, which renders the usage guide instead of executing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    GetEnvironments,
    GetCatalogItems,
    GetEnvironmentCatalogItems,
    GetEnvironmentApiServices,
    DeleteEnvironmentApiServices,
    GetSubscriptions,
    GetEnvironmentWebhooks,
    UpdateSubscriptionWebhookUrl,
    Invalid,
}

impl Command {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("help") => Self::Help,
            Some("getenv") => Self::GetEnvironments,
            Some("getci") => Self::GetCatalogItems,
            Some("getenvci") => Self::GetEnvironmentCatalogItems,
            Some("getenvapiservices") => Self::GetEnvironmentApiServices,
            Some("delenvapiservices") => Self::DeleteEnvironmentApiServices,
            Some("getsubs") => Self::GetSubscriptions,
            Some("getenvwh") => Self::GetEnvironmentWebhooks,
            Some("updatesubswhurl") => Self::UpdateSubscriptionWebhookUrl,
            _ => Self::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_commands_map_to_their_tags() {
        assert_eq!(Command::from_arg(Some("help")), Command::Help);
        assert_eq!(Command::from_arg(Some("getenv")), Command::GetEnvironments);
        assert_eq!(Command::from_arg(Some("getci")), Command::GetCatalogItems);
        assert_eq!(
            Command::from_arg(Some("getenvci")),
            Command::GetEnvironmentCatalogItems
        );
        assert_eq!(
            Command::from_arg(Some("getenvapiservices")),
            Command::GetEnvironmentApiServices
        );
        assert_eq!(
            Command::from_arg(Some("delenvapiservices")),
            Command::DeleteEnvironmentApiServices
        );
        assert_eq!(Command::from_arg(Some("getsubs")), Command::GetSubscriptions);
        assert_eq!(
            Command::from_arg(Some("getenvwh")),
            Command::GetEnvironmentWebhooks
        );
        assert_eq!(
            Command::from_arg(Some("updatesubswhurl")),
            Command::UpdateSubscriptionWebhookUrl
        );
    }

    #[test]
    fn unknown_missing_and_empty_map_to_invalid() {
        assert_eq!(Command::from_arg(Some("xyz")), Command::Invalid);
        assert_eq!(Command::from_arg(Some("")), Command::Invalid);
        assert_eq!(Command::from_arg(Some("GETENV")), Command::Invalid);
        assert_eq!(Command::from_arg(None), Command::Invalid);
    }
}
