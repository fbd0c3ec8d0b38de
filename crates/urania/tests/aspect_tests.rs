use urania::aspects::{
    detect_patterns, AspectCalculator, AspectKind, AspectNature, AspectSet, PatternKind,
    ASPECT_CATALOGUE,
};
use urania::coordinates::separation;
use urania::ephemeris::{Body, Position};
use urania::time::J2000;
use urania::zodiac::Sign;

fn at(body: Body, longitude: f64) -> Position {
    Position {
        body,
        time: J2000,
        longitude,
        latitude: 0.0,
        distance: 1.0,
    }
}

#[test]
fn test_exact_square() {
    let calc = AspectCalculator::new();
    let aspect = calc
        .calculate_aspect(&at(Body::Sun, 0.0), &at(Body::Mars, 90.0))
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Square);
    assert_eq!(aspect.angle, 90.0);
    assert_eq!(aspect.orb, 0.0);
    assert_eq!(aspect.strength, 100.0);
    assert_eq!(
        aspect.description,
        "Sun Square Mars: Tension, conflict, catalyst for growth"
    );
}

#[test]
fn test_opposition_across_zero() {
    let calc = AspectCalculator::new();
    let aspect = calc
        .calculate_aspect(&at(Body::Moon, 5.0), &at(Body::Venus, 183.0))
        .unwrap();
    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert!((aspect.orb - 2.0).abs() < 1e-9);
    assert!((aspect.strength - 75.0).abs() < 1e-9);
}

#[test]
fn test_no_aspect_outside_orbs() {
    let calc = AspectCalculator::new();
    assert!(calc
        .calculate_aspect(&at(Body::Sun, 0.0), &at(Body::Mars, 105.0))
        .is_none());
}

#[test]
fn test_classification_is_minimal_deviation() {
    let calc = AspectCalculator::new();
    let mut sep = 0.0;
    while sep <= 180.0 {
        if let Some((kind, dev)) = calc.classify(sep) {
            for def in ASPECT_CATALOGUE.iter() {
                let other = (sep - def.angle).abs();
                if other <= def.orb {
                    assert!(dev <= other, "{} chose {} over {}", sep, kind, def.name);
                }
            }
        }
        sep += 0.25;
    }
}

#[test]
fn test_at_most_one_aspect_per_pair() {
    let calc = AspectCalculator::new();
    let positions: Vec<Position> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, &b)| at(b, i as f64 * 37.0))
        .collect();
    let aspects = calc.calculate_all(&positions);
    assert!(!aspects.is_empty());
    for (i, a) in aspects.iter().enumerate() {
        let pa = positions.iter().find(|p| p.body == a.body_a).unwrap();
        let pb = positions.iter().find(|p| p.body == a.body_b).unwrap();
        assert!((a.angle - separation(pa.longitude, pb.longitude)).abs() < 1e-12);
        for b in &aspects[i + 1..] {
            assert!(!a.connects(b.body_a, b.body_b));
        }
    }
}

#[test]
fn test_cross_aspects_include_same_body() {
    let calc = AspectCalculator::new();
    let natal = vec![at(Body::Sun, 10.0), at(Body::Moon, 200.0)];
    let partner = vec![at(Body::Sun, 12.0), at(Body::Venus, 105.0)];
    let set = AspectSet::new(calc.cross_aspects(&natal, &partner));
    let sun_sun = set.between(Body::Sun, Body::Sun).unwrap();
    assert_eq!(sun_sun.kind, AspectKind::Conjunction);
    assert!(set.between(Body::Sun, Body::Venus).is_some());
    assert_eq!(set.strongest(1)[0].kind, AspectKind::Conjunction);
}

#[test]
fn test_aspect_set_queries() {
    let calc = AspectCalculator::new();
    let positions = vec![
        at(Body::Sun, 0.0),
        at(Body::Moon, 120.0),
        at(Body::Mars, 90.0),
        at(Body::Saturn, 150.0),
    ];
    let set = AspectSet::new(calc.calculate_all(&positions));
    assert_eq!(set.of_kind(AspectKind::Trine).len(), 1);
    assert_eq!(set.of_nature(AspectNature::Challenging).len(), 1);
    assert!(set.for_body(Body::Saturn).iter().all(|a| a.involves(Body::Saturn)));
    assert_eq!(set.strongest(2).len(), 2);
}

#[test]
fn test_patterns_from_positions() {
    let calc = AspectCalculator::new();
    let positions = vec![
        at(Body::Sun, 5.0),
        at(Body::Mercury, 8.0),
        at(Body::Venus, 12.0),
        at(Body::Mars, 125.0),
        at(Body::Jupiter, 245.0),
    ];
    let aspects = calc.calculate_all(&positions);
    let patterns = detect_patterns(&aspects, &positions);

    let stellium = patterns
        .iter()
        .find(|p| p.kind == PatternKind::Stellium)
        .unwrap();
    assert_eq!(stellium.sign, Some(Sign::Aries));
    assert_eq!(stellium.bodies.len(), 3);
    assert_eq!(stellium.strength, 60.0);
    assert_eq!(stellium.description, "A concentration of 3 bodies in Aries");

    let grand_trine = patterns
        .iter()
        .find(|p| p.kind == PatternKind::GrandTrine)
        .unwrap();
    assert!(grand_trine.description.starts_with("A harmonious triangle"));
    assert_eq!(grand_trine.kind.name(), "Grand Trine");
}
