use serde::{Deserialize, Serialize};

/// One entry of a template registry file
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct YmlSettings {
    pub name: String,
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
