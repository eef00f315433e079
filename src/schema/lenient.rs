use serde::{Deserialize, Deserializer};

/// Absolute http(s) URLs and root-relative paths (locally served images).
pub fn is_image_url(value: &str) -> bool {
    if value.starts_with('/') && !value.starts_with("//") {
        return true;
    }
    matches!(url::Url::parse(value), Ok(u) if u.scheme() == "http" || u.scheme() == "https")
}

/// Image and icon URLs never fail a slide: anything unusable becomes `""`,
/// and templates skip the `<img>` for an empty URL.
pub fn lenient_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() || is_image_url(&raw) {
        Ok(raw)
    } else {
        log::debug!("Coercing invalid image URL to empty string");
        Ok(String::new())
    }
}
