use serde::{Deserialize, Serialize};

use crate::{
    action::params::DonateParams,
    config::Config,
    constant::{
        ACTIONS_PATH_PATTERN, AMOUNT_PLACEHOLDER, CUSTOM_AMOUNT_LABEL,
        CUSTOM_AMOUNT_PARAMETER_LABEL,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionGetResponse {
    pub title: String,
    pub icon: String,
    pub description: String,
    /// Ignored by wallets when `links.actions` is present
    pub label: String,
    pub links: ActionLinks,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLinks {
    pub actions: Vec<ActionLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ActionParameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

/// GET metadata: one button per preset amount plus a free-form amount input.
/// `origin` is prefixed to every href and to a path-style icon.
pub fn create_get_response(
    config: &Config,
    params: &DonateParams,
    origin: &str,
) -> ActionGetResponse {
    let base_href = format!("{origin}{}?to={}", config.server.action_path, params.to);

    let mut actions: Vec<ActionLink> = config
        .donate
        .preset_amounts
        .iter()
        .map(|amount| {
            let amount = amount.normalize();
            ActionLink {
                label: format!("Send {amount} SOL"),
                href: format!("{base_href}&amount={amount}"),
                parameters: vec![],
            }
        })
        .collect();

    actions.push(ActionLink {
        label: CUSTOM_AMOUNT_LABEL.to_string(),
        href: format!("{base_href}&amount={AMOUNT_PLACEHOLDER}"),
        parameters: vec![ActionParameter {
            name: "amount".to_string(),
            label: CUSTOM_AMOUNT_PARAMETER_LABEL.to_string(),
            required: true,
        }],
    });

    ActionGetResponse {
        title: config.donate.title.clone(),
        icon: resolve_icon(&config.donate.icon, origin),
        description: config.donate.description.clone(),
        label: config.donate.label.clone(),
        links: ActionLinks { actions },
    }
}

fn resolve_icon(icon: &str, origin: &str) -> String {
    if icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with("data:") {
        return icon.to_string();
    }
    if icon.starts_with('/') {
        format!("{origin}{icon}")
    } else {
        format!("{origin}/{icon}")
    }
}

pub fn create_actions_json() -> ActionsJson {
    ActionsJson {
        rules: vec![ActionRule {
            path_pattern: ACTIONS_PATH_PATTERN.to_string(),
            api_path: ACTIONS_PATH_PATTERN.to_string(),
        }],
    }
}
