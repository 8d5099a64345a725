use petra_raw::{
    NoShapes, RawDeck, RawError, RawField, RawKeyword, RawShape, strip_comments, tokenize,
};

fn shapes(name: &str) -> Option<RawShape> {
    match name {
        "START" | "TSTEP" => Some(RawShape::Records(1)),
        "DATES" => Some(RawShape::SlashTerminated),
        "RUNSPEC" | "SCHEDULE" | "METRIC" | "FIELD" => Some(RawShape::Records(0)),
        _ => None,
    }
}

fn texts<'a>(keyword: &'a RawKeyword, record: usize) -> Vec<&'a str> {
    keyword.records()[record]
        .fields()
        .iter()
        .map(RawField::as_str)
        .collect()
}

const CALENDAR_DECK: &str = "\
RUNSPEC
-- simulation calendar
START
 21 MAY 1981 /

SCHEDULE

TSTEP
 1 2 3 4 5 /

DATES
 1 JAN 1982 /
 1 JAN 1982 13:55:44 /
 3 JAN 1982 14:56:45.123 /
/

TSTEP
 6 7 /
";

#[test]
fn calendar_deck_keywords_in_order() {
    let deck = RawDeck::parse(&strip_comments(CALENDAR_DECK), &shapes).unwrap();
    let names: Vec<&str> = deck.iter().map(RawKeyword::name).collect();
    assert_eq!(
        names,
        vec!["RUNSPEC", "START", "SCHEDULE", "TSTEP", "DATES", "TSTEP"]
    );
    assert_eq!(deck.count("TSTEP"), 2);
}

#[test]
fn calendar_deck_record_contents() {
    let deck = tokenize(&strip_comments(CALENDAR_DECK), &shapes).unwrap();

    let dates = deck.get_keyword("DATES").unwrap();
    assert_eq!(dates.size(), 3);
    assert_eq!(texts(dates, 1), vec!["1", "JAN", "1982", "13:55:44"]);
    assert_eq!(texts(dates, 2), vec!["3", "JAN", "1982", "14:56:45.123"]);

    let tstep = deck.get_keyword_at("TSTEP", 0).unwrap();
    assert_eq!(texts(tstep, 0), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn source_lines_survive_comment_stripping() {
    let deck = tokenize(&strip_comments(CALENDAR_DECK), &shapes).unwrap();
    let start = deck.get_keyword("START").unwrap();
    assert_eq!(start.line(), 3);
    assert_eq!(start.records()[0].line(), 4);
}

#[test]
fn unregistered_keywords_without_lookup() {
    let text = "\
GRUPTREE
 'INJE' 'FIELD' /
 'PROD' 'FIELD' /
/
ENDSCALE
'NODIR'  'REVERS'  1  20 /
";
    let deck = tokenize(text, &NoShapes).unwrap();
    assert_eq!(deck.size(), 2);

    let gruptree = deck.get_keyword("GRUPTREE").unwrap();
    assert_eq!(gruptree.size(), 2);
    assert!(gruptree.records()[0].get(0).unwrap().is_quoted());

    let endscale = deck.get_keyword("ENDSCALE").unwrap();
    assert_eq!(texts(endscale, 0), vec!["NODIR", "REVERS", "1", "20"]);
}

#[test]
fn render_and_reparse_keeps_structure() {
    let deck = tokenize(&strip_comments(CALENDAR_DECK), &shapes).unwrap();
    let rendered = deck.to_string();
    let again = tokenize(&rendered, &shapes).unwrap();
    assert_eq!(deck.size(), again.size());
    for (a, b) in deck.iter().zip(again.iter()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.size(), b.size());
        for (ra, rb) in a.records().iter().zip(b.records()) {
            assert_eq!(ra.fields(), rb.fields());
        }
    }
}

#[test]
fn data_outside_any_keyword() {
    let err = tokenize("-- comment only\n 1 2 /\n", &shapes).unwrap_err();
    assert!(matches!(err, RawError::UnexpectedData { line: 2, .. }));
}

#[test]
fn error_messages_name_the_line() {
    let err = tokenize("TSTEP\n 1 2\n", &shapes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 2: record in keyword TSTEP is not terminated by '/'"
    );
}
