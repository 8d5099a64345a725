use approx::assert_relative_eq;
use petra_deck::{Deck, DeckError, DeckItem, DeckKeyword, DeckRecord, ValueType};
use petra_units::{Dimension, UnitSystem};

fn tstep_keyword(steps: &[f64]) -> DeckKeyword {
    let timestep = UnitSystem::metric().get("Timestep").unwrap().clone();
    let mut item = DeckItem::new("STEP_SIZE", ValueType::Double);
    for &s in steps {
        item.push_back(s).unwrap();
    }
    item.push_back_dimension(timestep.clone(), timestep).unwrap();
    let mut keyword = DeckKeyword::new("TSTEP");
    keyword.add_record(DeckRecord::from_items([item]).unwrap());
    keyword
}

#[test]
fn count_matches_keyword_list() {
    let deck: Deck = ["RUNSPEC", "TSTEP", "DATES", "TSTEP", "SCHEDULE"]
        .into_iter()
        .map(DeckKeyword::new)
        .collect();
    for name in ["RUNSPEC", "TSTEP", "DATES", "SCHEDULE", "GRID"] {
        assert_eq!(deck.count(name), deck.get_keyword_list(name).len(), "{name}");
    }
}

#[test]
fn four_item_record_with_two_values() {
    let mut items = Vec::new();
    for (i, name) in ["I1", "I2", "I3", "I4"].into_iter().enumerate() {
        let mut item = DeckItem::new(name, ValueType::Int);
        match i {
            0 | 1 => item.push_back(i as i32 + 10).unwrap(),
            2 => item.push_back_default(1).unwrap(),
            _ => item.push_back_dummy_default(),
        }
        items.push(item);
    }
    let record = DeckRecord::from_items(items).unwrap();
    assert_eq!(record.size(), 4);
    for i in 0..2 {
        assert!(!record.get_item(i).unwrap().default_applied(0).unwrap());
    }
    for i in 2..4 {
        assert!(record.get_item(i).unwrap().default_applied(0).unwrap());
    }
    assert!(!record.get_item(3).unwrap().has_value(0));
}

#[test]
fn tstep_values_in_seconds() {
    let keyword = tstep_keyword(&[1.0, 2.5]);
    let item = keyword.get_record(0).unwrap().get_item(0).unwrap();
    let si = item.get_si_double_data().unwrap();
    assert_relative_eq!(si[0], 86_400.0);
    assert_relative_eq!(si[1], 216_000.0);
}

#[test]
fn field_and_metric_defaults() {
    let field = UnitSystem::field();
    let metric = UnitSystem::metric();
    let mut item = DeckItem::new("DEPTH", ValueType::Double);
    item.push_back(100.0).unwrap();
    item.push_back_default(100.0).unwrap();
    item.push_back_dimension(
        field.get("Length").unwrap().clone(),
        metric.get("Length").unwrap().clone(),
    )
    .unwrap();
    assert_relative_eq!(item.get_si_double(0).unwrap(), 30.48, epsilon = 1e-12);
    assert_relative_eq!(item.get_si_double(1).unwrap(), 100.0);
}

#[test]
fn si_conversion_matches_scaling() {
    let mut item = DeckItem::new("X", ValueType::Double);
    let values = [0.5, 1.0, 3.25, -2.0];
    for v in values {
        item.push_back(v).unwrap();
    }
    let dim = Dimension::new("Pressure", 1.0e5).unwrap();
    item.push_back_dimension(dim.clone(), dim).unwrap();
    for (i, v) in values.into_iter().enumerate() {
        assert_relative_eq!(item.get_si_double(i).unwrap(), v * 1.0e5);
    }
}

#[test]
fn errors_are_contract_violations() {
    let deck = Deck::from_names(["TSTEP"]);
    let keyword = deck.get_keyword("TSTEP").unwrap();
    assert!(matches!(
        keyword.get_record(0),
        Err(DeckError::OutOfRange { .. })
    ));
    assert!(matches!(
        deck.get_keyword("DATES"),
        Err(DeckError::UnknownKeyword { .. })
    ));
}

#[test]
fn render_deck() {
    let mut deck = Deck::from_names(["SCHEDULE"]);
    deck.add_keyword(tstep_keyword(&[1.0, 2.0, 3.5]));
    assert_eq!(deck.to_string(), "SCHEDULE\n\nTSTEP\n 1 2 3.5 /\n");
}
