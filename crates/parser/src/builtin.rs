//! Keywords every [`Parser`](crate::Parser) knows out of the box.

use petra_deck::ValueType;
use petra_schema::{KeywordRegistry, ParserItem, ParserKW, ParserRecord, SchemaError, SizeType};
use petra_units::UnitSystemKind;

/// Section keywords; bodyless.
pub const SECTION_KEYWORDS: [&str; 8] = [
    "RUNSPEC", "GRID", "EDIT", "PROPS", "REGIONS", "SOLUTION", "SUMMARY", "SCHEDULE",
];

/// Unit-system keywords; bodyless, each switches the active unit system.
pub const UNIT_KEYWORDS: [UnitSystemKind; 3] = [
    UnitSystemKind::Metric,
    UnitSystemKind::Field,
    UnitSystemKind::Lab,
];

/// `START`: one record `DAY MONTH YEAR TIME`, every item defaulted.
pub fn start() -> Result<ParserKW, SchemaError> {
    let record = ParserRecord::from_items([
        ParserItem::new("DAY", ValueType::Int).with_default(1),
        ParserItem::new("MONTH", ValueType::String).with_default("JAN"),
        ParserItem::new("YEAR", ValueType::Int).with_default(1983),
        ParserItem::new("TIME", ValueType::String).with_default("00:00:00"),
    ])?;
    Ok(ParserKW::fixed("START", 1, record))
}

/// `DATES`: any number of `DAY MONTH YEAR [TIME]` records.
pub fn dates() -> Result<ParserKW, SchemaError> {
    let record = ParserRecord::from_items([
        ParserItem::new("DAY", ValueType::Int),
        ParserItem::new("MONTH", ValueType::String),
        ParserItem::new("YEAR", ValueType::Int),
        ParserItem::new("TIME", ValueType::String).with_default("00:00:00"),
    ])?;
    Ok(ParserKW::repeating("DATES", record))
}

/// `TSTEP`: one record of step lengths in days.
pub fn tstep() -> Result<ParserKW, SchemaError> {
    let record = ParserRecord::from_items([ParserItem::new("STEP_SIZE", ValueType::Double)
        .with_size_type(SizeType::All)
        .with_dimension("Timestep")])?;
    Ok(ParserKW::fixed("TSTEP", 1, record))
}

/// Every built-in keyword schema.
pub fn keywords() -> Result<Vec<ParserKW>, SchemaError> {
    let mut keywords = vec![start()?, dates()?, tstep()?];
    keywords.extend(UNIT_KEYWORDS.map(|kind| ParserKW::bodyless(kind.keyword())));
    keywords.extend(SECTION_KEYWORDS.map(ParserKW::bodyless));
    Ok(keywords)
}

/// A registry holding [`keywords`].
pub fn registry() -> Result<KeywordRegistry, SchemaError> {
    let mut registry = KeywordRegistry::new();
    for keyword in keywords()? {
        registry.add(keyword)?;
    }
    Ok(registry)
}
