use serde::Deserialize;

/// Top-level petra configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PetraConfig {
    /// Parse policy.
    #[serde(default)]
    pub parse: ParseToml,
}

/// Action names (`ignore`, `warn`, `throw`) per parse issue.
///
/// `default` is applied to every issue first; the per-issue fields then
/// override it.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ParseToml {
    pub default: Option<String>,
    pub unknown_keyword: Option<String>,
    pub missing_records: Option<String>,
    pub extra_records: Option<String>,
    pub extra_data: Option<String>,
    pub missing_items: Option<String>,
}
