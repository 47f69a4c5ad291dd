//! Scheme metadata: opaque catalog record carried alongside a NAV history.

use serde::{Deserialize, Deserializer, Serialize};

/// Catalog metadata for a mutual fund scheme.
///
/// The engine never interprets these fields; they are passed through so
/// reports can label their output. Accepts both snake_case and the camelCase
/// keys used by some catalog APIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeMeta {
    #[serde(default, alias = "schemeCode", deserialize_with = "string_or_number")]
    pub scheme_code: Option<String>,
    #[serde(default, alias = "schemeName")]
    pub scheme_name: Option<String>,
    #[serde(default, alias = "fundHouse")]
    pub fund_house: Option<String>,
    #[serde(default, alias = "schemeType")]
    pub scheme_type: Option<String>,
    #[serde(default, alias = "schemeCategory")]
    pub scheme_category: Option<String>,
}

impl SchemeMeta {
    /// Best available label: name, then code, then a placeholder.
    pub fn label(&self) -> &str {
        self.scheme_name
            .as_deref()
            .or(self.scheme_code.as_deref())
            .unwrap_or("unknown scheme")
    }
}

// Scheme codes arrive as JSON numbers from some feeds and strings from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
