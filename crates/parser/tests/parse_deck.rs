use approx::assert_relative_eq;
use petra_deck::{Deck, ValueType};
use petra_parser::Parser;
use petra_schema::{
    Action, Issue, MessageContainer, ParseContext, ParseError, ParserItem, ParserKW,
    ParserRecord, Severity,
};

const SCHEDULE_DECK: &str = "\
RUNSPEC
METRIC

-- start of the simulation
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

fn parse(text: &str, ctx: &ParseContext) -> Result<(Deck, MessageContainer), ParseError> {
    let parser = Parser::new().unwrap();
    let mut messages = MessageContainer::new();
    let deck = parser.parse_string(text, ctx, &mut messages)?;
    Ok((deck, messages))
}

#[test]
fn keyword_order_is_preserved() {
    let (deck, messages) = parse(SCHEDULE_DECK, &ParseContext::default()).unwrap();
    let names: Vec<&str> = deck.iter().map(|kw| kw.name()).collect();
    assert_eq!(
        names,
        vec!["RUNSPEC", "METRIC", "START", "SCHEDULE", "TSTEP", "DATES", "TSTEP"]
    );
    assert!(deck.iter().all(|kw| kw.is_known()));
    assert!(messages.is_empty());
}

#[test]
fn dates_records_are_typed() {
    let (deck, _) = parse(SCHEDULE_DECK, &ParseContext::default()).unwrap();
    let dates = deck.get_keyword("DATES").unwrap();
    assert_eq!(dates.size(), 3);
    assert!(dates.is_slash_terminated());

    let first = dates.get_record(0).unwrap();
    assert_eq!(first.get_item_by_name("DAY").unwrap().get_int(0).unwrap(), 1);
    assert_eq!(first.get_item_by_name("MONTH").unwrap().get_string(0).unwrap(), "JAN");
    let time = first.get_item_by_name("TIME").unwrap();
    assert!(time.default_applied(0).unwrap());
    assert_eq!(time.get_string(0).unwrap(), "00:00:00");

    let third = dates.get_record(2).unwrap();
    assert_eq!(
        third.get_item_by_name("TIME").unwrap().get_string(0).unwrap(),
        "14:56:45.123"
    );
}

#[test]
fn tstep_values_in_seconds() {
    let (deck, _) = parse(SCHEDULE_DECK, &ParseContext::default()).unwrap();
    let second = deck.get_keyword_at("TSTEP", 1).unwrap();
    let item = second.get_record(0).unwrap().get_item_by_name("STEP_SIZE").unwrap();
    assert_eq!(item.value_type(), ValueType::Double);
    let si = item.get_si_double_data().unwrap();
    assert_relative_eq!(si[0], 6.0 * 86_400.0);
    assert_relative_eq!(si[1], 7.0 * 86_400.0);
}

#[test]
fn rendered_deck_parses_to_same_content() {
    let (deck, _) = parse(SCHEDULE_DECK, &ParseContext::default()).unwrap();
    let rendered = deck.to_string();
    let (again, _) = parse(&rendered, &ParseContext::default()).unwrap();
    assert_eq!(deck.size(), again.size());
    for (a, b) in deck.iter().zip(again.iter()) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.size(), b.size());
    }
    let time = again
        .get_keyword("DATES")
        .unwrap()
        .get_record(0)
        .unwrap()
        .get_item_by_name("TIME")
        .unwrap();
    assert!(time.default_applied(0).unwrap());
}

#[test]
fn start_without_values_uses_defaults() {
    let (deck, _) = parse("START\n/\n", &ParseContext::default()).unwrap();
    let record = deck.get_keyword("START").unwrap().get_record(0).unwrap();
    assert_eq!(record.get_item_by_name("YEAR").unwrap().get_int(0).unwrap(), 1983);
    assert!(
        record
            .iter()
            .all(|item| item.default_applied(0).unwrap())
    );
}

#[test]
fn missing_start_record_follows_policy() {
    let (deck, messages) = parse("START\nSCHEDULE\n", &ParseContext::default()).unwrap();
    assert_eq!(deck.get_keyword("START").unwrap().size(), 0);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages.iter().next().unwrap().severity, Severity::Warning);

    let err = parse("START\nSCHEDULE\n", &ParseContext::strict()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::Rejected {
            issue: Issue::MissingRecords,
            ..
        }
    ));
}

#[test]
fn extra_data_in_start() {
    let text = "START\n 1 JAN 2000 00:00:00 EXTRA /\n";
    assert!(matches!(
        parse(text, &ParseContext::default()),
        Err(ParseError::Rejected {
            issue: Issue::ExtraData,
            ..
        })
    ));
    let ctx = ParseContext::default().with_action(Issue::ExtraData, Action::Ignore);
    let (deck, messages) = parse(text, &ctx).unwrap();
    assert_eq!(deck.get_keyword("START").unwrap().get_record(0).unwrap().size(), 4);
    assert!(messages.is_empty());
}

#[test]
fn invalid_value_is_fatal_even_when_permissive() {
    let err = parse("DATES\n 1 JAN 198X /\n/\n", &ParseContext::permissive()).unwrap_err();
    match err {
        ParseError::InvalidValue {
            location, value, ..
        } => {
            assert_eq!(value, "198X");
            assert_eq!(location.keyword, "DATES");
            assert_eq!(location.line, Some(2));
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn repeat_count_errors_name_the_raw_field() {
    let err = parse("TSTEP\n 3*1.0 X /\n", &ParseContext::default()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidValue { ref location, ref value, .. }
            if value == "X" && location.field == Some(1)
    ));

    let err = parse("TSTEP\n 4000000000*1 /\n", &ParseContext::permissive()).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidValue { ref location, .. } if location.field == Some(0)
    ));
}

#[test]
fn custom_keywords_extend_the_registry() {
    let mut parser = Parser::new().unwrap();
    let record = ParserRecord::from_items([
        ParserItem::new("WELL", ValueType::String),
        ParserItem::new("RATE", ValueType::Double).with_dimension("LiquidSurfaceVolume/Time"),
    ])
    .unwrap();
    parser.add_keyword(ParserKW::repeating("WRATE", record)).unwrap();
    assert!(parser.has_keyword("WRATE"));

    let mut messages = MessageContainer::new();
    let deck = parser
        .parse_string(
            "WRATE\n 'P1' 100 /\n 'P2' 1* /\n/\n",
            &ParseContext::default(),
            &mut messages,
        )
        .unwrap();
    let wrate = deck.get_keyword("WRATE").unwrap();
    let rate = wrate.get_record(0).unwrap().get_item_by_name("RATE").unwrap();
    assert_relative_eq!(
        rate.get_si_double(0).unwrap(),
        100.0 / 86_400.0,
        max_relative = 1e-12
    );
    let defaulted = wrate.get_record(1).unwrap().get_item_by_name("RATE").unwrap();
    assert!(defaulted.default_applied(0).unwrap());
    assert!(!defaulted.has_value(0));
}

#[test]
fn one_parser_serves_concurrent_parses() {
    let parser = Parser::new().unwrap();
    let results: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut messages = MessageContainer::new();
                    parser
                        .parse_string(SCHEDULE_DECK, &ParseContext::default(), &mut messages)
                        .map(|deck| deck.size())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    assert_eq!(results, vec![7; 4]);
}
