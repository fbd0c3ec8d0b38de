use chrono::{TimeZone, Utc};
use urania::aspects::{AspectKind, PatternKind};
use urania::chart::{synastry, LunarPhase};
use urania::config::{parse_config, UraniaConfig};
use urania::demo::ChartGenerator;
use urania::ephemeris::{EphemerisError, StaticPositions};
use urania::time::{to_julian_day, JulianDay, TimeError, J2000};
use urania::zodiac::Element;
use urania::{
    AspectCalculator, Body, Chart, ChartError, ChartSettings, GeoLocation, HouseSystem,
    OrbitalPositionCalculator, Sign,
};

fn greenwich() -> GeoLocation {
    GeoLocation::new(51.4769, -0.0005)
}

fn settings_for(bodies: &[Body]) -> ChartSettings {
    ChartSettings {
        bodies: bodies.to_vec(),
        ..ChartSettings::default()
    }
}

fn t_square_chart() -> Chart {
    let dt = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let provider = StaticPositions::new(to_julian_day(dt))
        .with(Body::Sun, 10.0, 0.9856)
        .with(Body::Moon, 100.0, 13.2)
        .with(Body::Mars, 190.0, -0.3);
    let settings = settings_for(&[Body::Sun, Body::Moon, Body::Mars]);
    Chart::compute(&provider, dt, greenwich(), &settings).unwrap()
}

#[test]
fn test_chart_from_orbital_calculator() {
    let calc = OrbitalPositionCalculator::new();
    let chart = Chart::compute_at(&calc, J2000, greenwich(), &ChartSettings::default()).unwrap();

    assert_eq!(chart.placements.len(), 10);
    assert_eq!(chart.houses.len(), 12);
    let total: f64 = chart.houses.iter().map(|h| h.span).sum();
    assert!((total - 360.0).abs() < 1e-6);

    let sun = chart.placement(Body::Sun).unwrap();
    assert_eq!(sun.sign(), Sign::Capricorn);
    assert!(!sun.retrograde);
    assert!((sun.daily_motion - 1.0).abs() < 0.05);

    for p in &chart.placements {
        assert!(p.house.is_some(), "{} has no house", p.body());
        assert!(chart.bodies_in_house(p.house.unwrap()).contains(&p.body()));
    }
    assert_eq!(chart.datetime, Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
}

#[test]
fn test_static_chart_placements() {
    let chart = t_square_chart();

    let moon = chart.placement(Body::Moon).unwrap();
    assert_eq!(moon.sign(), Sign::Cancer);
    assert_eq!(moon.ruler, Body::Moon);

    let mars = chart.placement(Body::Mars).unwrap();
    assert_eq!(mars.sign(), Sign::Libra);
    assert_eq!(mars.ruler, Body::Venus);
    assert!(mars.retrograde);
    assert!((mars.daily_motion + 0.3).abs() < 1e-9);

    assert!(chart.placement(Body::Jupiter).is_none());
}

#[test]
fn test_static_chart_aspects_and_patterns() {
    let chart = t_square_chart();

    assert_eq!(chart.aspects.len(), 3);
    assert_eq!(
        chart.aspects_between(Body::Sun, Body::Mars).unwrap().kind,
        AspectKind::Opposition
    );
    assert_eq!(
        chart.aspects_between(Body::Moon, Body::Mars).unwrap().kind,
        AspectKind::Square
    );
    assert_eq!(chart.aspects_for(Body::Moon).len(), 2);

    let t_square = chart
        .patterns
        .iter()
        .find(|p| p.kind == PatternKind::TSquare)
        .expect("T-square");
    assert_eq!(t_square.bodies.last(), Some(&Body::Moon));
    assert_eq!(t_square.aspects.len(), 3);
}

#[test]
fn test_balances_and_lunar_phase() {
    let chart = t_square_chart();

    let elements = chart.element_balance();
    assert_eq!(elements.get(Element::Fire), 1);
    assert_eq!(elements.get(Element::Water), 1);
    assert_eq!(elements.get(Element::Air), 1);
    assert_eq!(elements.get(Element::Earth), 0);

    let qualities = chart.quality_balance();
    assert_eq!(qualities.cardinal, 3);
    assert_eq!(qualities.fixed + qualities.mutable, 0);

    assert!((chart.lunar_elongation().unwrap() - 90.0).abs() < 1e-9);
    assert_eq!(chart.lunar_phase(), Some(LunarPhase::Waxing));
}

#[test]
fn test_missing_body_fails_chart() {
    let provider = StaticPositions::new(J2000).with(Body::Sun, 0.0, 1.0);
    let err = Chart::compute_at(&provider, J2000, greenwich(), &settings_for(&[Body::Sun, Body::Pluto]))
        .unwrap_err();
    assert_eq!(
        err,
        ChartError::Ephemeris(EphemerisError::BodyNotFound { body: Body::Pluto })
    );
}

#[test]
fn test_unrepresentable_instant_fails_chart() {
    let provider = StaticPositions::new(J2000).with(Body::Sun, 0.0, 1.0);
    let err = Chart::compute_at(
        &provider,
        JulianDay(f64::NAN),
        greenwich(),
        &settings_for(&[Body::Sun]),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::Time(TimeError::OutOfRange { .. })));
}

#[test]
fn test_synastry_between_charts() {
    let first = t_square_chart();
    let provider = StaticPositions::new(J2000)
        .with(Body::Sun, 12.0, 0.9856)
        .with(Body::Venus, 192.0, 1.2);
    let second = Chart::compute_at(
        &provider,
        J2000,
        greenwich(),
        &settings_for(&[Body::Sun, Body::Venus]),
    )
    .unwrap();

    let aspects = synastry(&first, &second, &AspectCalculator::new());
    let sun_sun = aspects
        .iter()
        .find(|a| a.body_a == Body::Sun && a.body_b == Body::Sun)
        .unwrap();
    assert_eq!(sun_sun.kind, AspectKind::Conjunction);
    assert!(aspects
        .iter()
        .any(|a| a.connects(Body::Mars, Body::Venus) && a.kind == AspectKind::Conjunction));
}

#[test]
fn test_chart_serializes_to_json() {
    let chart = t_square_chart();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["placements"].as_array().unwrap().len(), 3);
    assert_eq!(json["placements"][0]["position"]["body"], "sun");
    assert_eq!(json["houses"].as_array().unwrap().len(), 12);
}

#[test]
fn test_full_config() {
    let text = r#"
[location]
latitude = 40.7128
longitude = -74.006

[chart]
datetime = "2024-03-20T03:06:00+01:00"
house_system = "Whole Sign"
bodies = ["sun", "Moon", " venus "]
modern_rulers = false

[aspects]
only_major = true
orbs = { trine = 6.0, square = 7.5 }
"#;
    let config = parse_config(text).unwrap();
    assert_eq!(config.location, GeoLocation::new(40.7128, -74.006));
    assert_eq!(
        config.datetime,
        Some(Utc.with_ymd_and_hms(2024, 3, 20, 2, 6, 0).unwrap())
    );
    assert_eq!(config.chart.house_system, HouseSystem::WholeSign);
    assert_eq!(config.chart.bodies, vec![Body::Sun, Body::Moon, Body::Venus]);
    assert!(!config.chart.modern_rulers);
    assert!(config.chart.aspects.only_major);
    assert_eq!(config.chart.aspects.orb_for(AspectKind::Square), 7.5);
    assert_eq!(
        config.chart.aspects.orb_for(AspectKind::Opposition),
        AspectKind::Opposition.default_orb()
    );
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = parse_config("[chart]\nhouse_system = \"equal\"\n").unwrap();
    assert_eq!(config.location, UraniaConfig::default().location);
    assert_eq!(config.chart.house_system, HouseSystem::Equal);
    assert_eq!(config.chart.bodies, Body::ALL.to_vec());
    assert!(config.datetime.is_none());
}

#[test]
fn test_invalid_configs() {
    let cases = [
        ("[location]\nlatitude = 95.0\n", "latitude"),
        ("[location]\nlongitude = -200.0\n", "longitude"),
        ("[chart]\nhouse_system = \"porphyry\"\n", "house_system"),
        ("[chart]\nbodies = [\"sun\", \"vulcan\"]\n", "bodies"),
        ("[chart]\ndatetime = \"yesterday\"\n", "datetime"),
        ("[aspects]\norbs = { trine = -1.0 }\n", "trine"),
        ("[aspects]\norbs = { novile = 1.0 }\n", "novile"),
        ("[location\n", "parse"),
    ];
    for (text, needle) in cases {
        let err = parse_config(text).unwrap_err().to_string();
        assert!(err.contains(needle), "{text:?} -> {err}");
    }
}

#[test]
fn test_demo_is_deterministic() {
    let first = ChartGenerator::from_seed([9; 32]).generate().unwrap();
    let second = ChartGenerator::from_seed([9; 32]).generate().unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let other = ChartGenerator::from_seed([10; 32]).generate().unwrap();
    assert_ne!(first.julian_day, other.julian_day);
}

#[test]
fn test_demo_charts_are_well_formed() {
    let mut generator = ChartGenerator::from_seed([1; 32]);
    for _ in 0..25 {
        let chart = generator.generate().unwrap();
        assert_eq!(chart.placements.len(), Body::ALL.len());
        assert!(chart.location.latitude.abs() <= 66.0);
        for p in &chart.placements {
            if p.body().is_luminary() {
                assert!(!p.retrograde);
            }
            assert!((0.0..360.0).contains(&p.position.longitude));
            assert!(p.house.is_some());
        }
    }
}
