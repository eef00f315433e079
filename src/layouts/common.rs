use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::lenient_url;

/// `{ __image_url__, __image_prompt__ }` as produced by the image pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ImageRef {
    #[serde(rename = "__image_url__", default, deserialize_with = "lenient_url")]
    #[schemars(with = "String", description = "URL to image")]
    pub url: String,
    #[serde(rename = "__image_prompt__", skip_serializing_if = "Option::is_none")]
    #[schemars(length(min = 10, max = 100), description = "Prompt used to generate the image")]
    pub prompt: Option<String>,
}

impl ImageRef {
    pub fn new(url: &str, prompt: &str) -> Self {
        Self { url: url.to_string(), prompt: Some(prompt.to_string()) }
    }

    /// An empty URL means an invalid one was discarded.
    pub fn is_present(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn alt(&self) -> &str {
        self.prompt.as_deref().unwrap_or("")
    }
}

/// `{ __icon_url__, __icon_query__ }` as produced by the icon search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IconRef {
    #[serde(rename = "__icon_url__", default, deserialize_with = "lenient_url")]
    #[schemars(with = "String", description = "URL to icon")]
    pub url: String,
    #[serde(rename = "__icon_query__")]
    #[schemars(length(min = 3, max = 40), description = "Query used to search the icon")]
    pub query: String,
}

pub const ICON_BASE: &str = "https://presenton-public.s3.ap-southeast-1.amazonaws.com/static/icons/bold";

impl IconRef {
    /// One of the bundled bold icons, by file name.
    pub fn bold(name: &str, query: &str) -> Self {
        Self { url: format!("{ICON_BASE}/{name}-bold.svg"), query: query.to_string() }
    }

    pub fn is_present(&self) -> bool {
        !self.url.is_empty()
    }
}
