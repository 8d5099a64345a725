use approx::assert_relative_eq;
use petra_units::{Dimension, UnitError, UnitSystem, UnitSystemKind};

#[test]
fn field_rate_to_si() {
    let field = UnitSystem::field();
    let rate = field.parse_dimension("LiquidSurfaceVolume/Time").unwrap();
    assert_eq!(rate.name(), "LiquidSurfaceVolume/Time");
    assert_relative_eq!(
        rate.to_si(1_000.0),
        1_000.0 * 0.158_987_294_928 / 86_400.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(rate.from_si(rate.to_si(42.0)), 42.0, max_relative = 1e-12);
}

#[test]
fn same_expression_differs_between_systems() {
    let expr = "Pressure*Time/Length";
    let metric = UnitSystem::metric().parse_dimension(expr).unwrap();
    let lab = UnitSystem::lab().parse_dimension(expr).unwrap();
    assert_relative_eq!(metric.si_scaling(), 1.0e5 * 86_400.0);
    assert_relative_eq!(lab.si_scaling(), 101_325.0 * 3_600.0 / 0.01);
}

#[test]
fn keywords_select_systems() {
    for kind in [UnitSystemKind::Metric, UnitSystemKind::Field, UnitSystemKind::Lab] {
        let system = UnitSystem::new(kind);
        assert_eq!(UnitSystemKind::from_keyword(kind.keyword()), Some(kind));
        assert_eq!(system.kind(), kind);
        assert!(system.has_dimension("Timestep"));
    }
    assert_eq!(UnitSystemKind::from_keyword("PVT-M"), None);
}

#[test]
fn custom_dimension_extends_a_system() {
    let mut system = UnitSystem::metric();
    assert!(matches!(
        system.parse_dimension("Energy/Time"),
        Err(UnitError::UnknownDimension { .. })
    ));
    system.add_dimension(Dimension::new("Energy", 1.0e3).unwrap());
    let power = system.parse_dimension("Energy/Time").unwrap();
    assert_relative_eq!(power.si_scaling(), 1.0e3 / 86_400.0);
}

#[test]
fn malformed_expressions() {
    let metric = UnitSystem::metric();
    for expr in ["Length/", "*Time", "Length//Time"] {
        assert!(
            matches!(
                metric.parse_dimension(expr),
                Err(UnitError::MalformedExpression { .. })
            ),
            "{expr}"
        );
    }
}
