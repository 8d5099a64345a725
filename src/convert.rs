//! Pure conversion functions: TOML config structs -> crate API config types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use petra_schema::{Action, Issue, ParseContext};

use crate::config::{ParseToml, PetraConfig};

/// Parses an action name into the corresponding enum variant.
pub fn parse_action(s: &str) -> Result<Action> {
    match s.to_lowercase().as_str() {
        "ignore" => Ok(Action::Ignore),
        "warn" => Ok(Action::Warn),
        "throw" | "error" => Ok(Action::Throw),
        other => bail!("unknown parse action: {other:?}"),
    }
}

/// Builds a [`ParseContext`] from the TOML parse policy.
pub fn build_parse_context(parse: &ParseToml) -> Result<ParseContext> {
    let mut context = ParseContext::default();
    if let Some(ref action) = parse.default {
        context.update_all(parse_action(action).context("parse.default")?);
    }
    let overrides = [
        (Issue::UnknownKeyword, &parse.unknown_keyword),
        (Issue::MissingRecords, &parse.missing_records),
        (Issue::ExtraRecords, &parse.extra_records),
        (Issue::ExtraData, &parse.extra_data),
        (Issue::MissingItems, &parse.missing_items),
    ];
    for (issue, action) in overrides {
        if let Some(action) = action {
            let action = parse_action(action).with_context(|| format!("parse.{}", issue.name()))?;
            context.update(issue, action);
        }
    }
    Ok(context)
}

/// Reads the config file at `path`, or uses the default policy without one.
pub fn load_parse_context(path: Option<&Path>) -> Result<ParseContext> {
    let Some(path) = path else {
        return Ok(ParseContext::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: PetraConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    build_parse_context(&config.parse)
}
