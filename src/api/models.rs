use serde::Deserialize;
use std::collections::BTreeMap;

use crate::ui::report::ListItem;

/// An Amplify Central environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Environment {
    pub name: String,
}

impl ListItem for Environment {
    fn render_line(&self) -> String {
        self.name.clone()
    }
}

/// A catalog item (published API).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub name: String,
}

impl ListItem for CatalogItem {
    fn render_line(&self) -> String {
        self.name.clone()
    }
}

/// An API service registered in an environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiService {
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl ListItem for ApiService {
    fn render_line(&self) -> String {
        format!("{} ({})", self.title, self.name)
    }
}

/// A consumer subscription to a catalog item.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    pub name: String,
    #[serde(default)]
    pub state: String,
}

impl ListItem for Subscription {
    fn render_line(&self) -> String {
        format!("{} - {}", self.name, self.state)
    }
}

/// A webhook registered in an environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Webhook {
    pub name: String,
    pub spec: WebhookSpec,
}

// BTreeMap keeps header rendering deterministic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookSpec {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ListItem for Webhook {
    fn render_line(&self) -> String {
        let headers = serde_json::to_string(&self.spec.headers).unwrap_or_default();
        format!(
            "name: {}\nurl: {}\nheaders:{}",
            self.name, self.spec.url, headers
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_renders_name_only() {
        let environment = Environment {
            name: "prod".to_string(),
        };
        assert_eq!(environment.render_line(), "prod");
    }

    #[test]
    fn api_service_renders_title_then_name() {
        let service = ApiService {
            name: "svc1".to_string(),
            title: "Service One".to_string(),
        };
        assert_eq!(service.render_line(), "Service One (svc1)");
    }

    #[test]
    fn subscription_renders_name_and_state() {
        let subscription = Subscription {
            name: "sub-1".to_string(),
            state: "ACTIVE".to_string(),
        };
        assert_eq!(subscription.render_line(), "sub-1 - ACTIVE");
    }

    #[test]
    fn webhook_renders_three_lines_with_json_headers() {
        let webhook = Webhook {
            name: "wh-1".to_string(),
            spec: WebhookSpec {
                url: "https://example.com/hook".to_string(),
                headers: BTreeMap::from([("x-key".to_string(), "abc".to_string())]),
            },
        };
        assert_eq!(
            webhook.render_line(),
            "name: wh-1\nurl: https://example.com/hook\nheaders:{\"x-key\":\"abc\"}"
        );
    }

    #[test]
    fn webhook_deserializes_nested_spec() {
        let webhook: Webhook = serde_json::from_str(
            r#"{"name":"wh-1","spec":{"url":"https://example.com/hook","headers":{"a":"1"}}}"#,
        )
        .unwrap();
        assert_eq!(webhook.spec.url, "https://example.com/hook");
        assert_eq!(webhook.spec.headers.get("a").map(String::as_str), Some("1"));
    }
}
