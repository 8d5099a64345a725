use approx::assert_relative_eq;
use petra_calendar::{CalendarError, TimeMap, forward, forward_hms, mkdate};
use petra_deck::Deck;
use petra_parser::Parser;
use petra_schema::{MessageContainer, ParseContext};

const DAY: f64 = 86_400.0;

fn parse(text: &str) -> Deck {
    let parser = Parser::new().unwrap();
    let mut messages = MessageContainer::new();
    parser
        .parse_string(text, &ParseContext::default(), &mut messages)
        .unwrap()
}

fn time_map(text: &str) -> TimeMap {
    TimeMap::from_deck(&parse(text)).unwrap()
}

#[test]
fn single_dates_record() {
    let map = time_map(
        "START\n 21 MAY 1981 /\n\nTSTEP\n 1 2 3 4 5 /\n\nDATES\n 1 JAN 1982 /\n/\n\nTSTEP\n 6 7 /\n",
    );
    let start = mkdate(1981, 5, 21).unwrap();
    assert_eq!(map.size(), 9);
    assert_eq!(map.get_start_time(0).unwrap(), start);
    assert_relative_eq!(map.get_time_step_length(0).unwrap(), DAY);
    assert_eq!(map.get_start_time(6).unwrap(), mkdate(1982, 1, 1).unwrap());
    assert_relative_eq!(map.get_time_step_length(6).unwrap(), 6.0 * DAY);
    assert_relative_eq!(map.get_time_step_length(7).unwrap(), 7.0 * DAY);
    assert!(map.get_time_step_length(8).is_err());
}

#[test]
fn time_steps_with_times_of_day() {
    let map = time_map(
        "\
START
 21 MAY 1981 /

TSTEP
 1 2 3 4 5 /

DATES
 1 JAN 1982 /
 1 JAN 1982 13:55:44 /
 3 JAN 1982 14:56:45.123 /
/

TSTEP
 6 7 /
",
    );
    let start = mkdate(1981, 5, 21).unwrap();
    let mut elapsed = 0.0;
    for (step, days) in [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().enumerate() {
        assert_relative_eq!(map.get_time_step_length(step).unwrap(), days * DAY);
        elapsed += days * DAY;
        assert_relative_eq!(map.get_time_passed_until(step + 1).unwrap(), elapsed);
    }
    assert_eq!(map.get_start_time(1).unwrap(), forward(start, 86_400).unwrap());
    assert_eq!(map.get_start_time(3).unwrap(), forward(start, 6 * 86_400).unwrap());
    assert_eq!(map.get_start_time(5).unwrap(), forward(start, 15 * 86_400).unwrap());

    let new_year = mkdate(1982, 1, 1).unwrap();
    assert_eq!(map.get_start_time(6).unwrap(), new_year);
    assert_eq!(
        map.get_start_time(7).unwrap(),
        forward_hms(new_year, 13, 55, 44).unwrap()
    );
    assert_eq!(
        map.get_start_time(8).unwrap(),
        forward_hms(mkdate(1982, 1, 3).unwrap(), 14, 56, 45).unwrap()
    );
    assert_relative_eq!(map.get_time_step_length(8).unwrap(), 6.0 * DAY);
    assert_relative_eq!(map.get_time_step_length(9).unwrap(), 7.0 * DAY);
    assert_eq!(map.num_timesteps(), 10);
}

#[test]
fn first_of_months_and_years() {
    let map = time_map(
        "\
START
 21 MAY 1981 /

TSTEP
 1 2 3 4 5 /

DATES
 5 JUL 1981 /
 6 JUL 1981 /
 5 AUG 1981 /
 5 SEP 1981 /
 1 OCT 1981 /
 1 NOV 1981 /
 1 DEC 1981 /
 1 JAN 1982 /
 1 JAN 1982 13:55:44 /
 3 JAN 1982 14:56:45.123 /
/

TSTEP
 6 7 /
",
    );
    assert_eq!(map.size(), 18);
    let months = [5, 6, 8, 9, 10, 11, 12, 13];
    for step in 0..map.size() {
        assert_eq!(
            map.is_timestep_in_first_of_months_years_sequence(step, false, true),
            months.contains(&step),
            "month {step}"
        );
        assert_eq!(
            map.is_timestep_in_first_of_months_years_sequence(step, true, false),
            step == 13,
            "year {step}"
        );
    }
    assert_eq!(map.first_timestep_months(), months.to_vec());
    assert_eq!(map.first_timestep_years(), vec![13]);
}

#[test]
fn lab_units_step_in_hours() {
    let map = time_map("LAB\nSTART\n 1 JAN 2000 /\nTSTEP\n 2 /\n");
    assert_relative_eq!(map.get_time_step_length(0).unwrap(), 7_200.0);
}

#[test]
fn start_without_record_falls_back() {
    let map = time_map("START\nSCHEDULE\nTSTEP\n 1 /\n");
    assert_eq!(map.get_start_time(0).unwrap(), mkdate(1983, 1, 1).unwrap());
    assert_eq!(map.size(), 2);
}

#[test]
fn dates_going_back_are_rejected() {
    let deck = parse("START\n 1 JAN 2000 /\nDATES\n 1 FEB 2000 /\n 1 JAN 2000 /\n/\n");
    let err = TimeMap::from_deck(&deck).unwrap_err();
    assert_eq!(
        err,
        CalendarError::NonMonotonicTime {
            time: mkdate(2000, 1, 1).unwrap(),
            last: mkdate(2000, 2, 1).unwrap(),
        }
    );
}

#[test]
fn unknown_month_in_deck() {
    let deck = parse("START\n 1 XYZ 2000 /\n");
    assert!(matches!(
        TimeMap::from_deck(&deck),
        Err(CalendarError::UnknownMonth { .. })
    ));
}
