//! Multi-body aspect configurations.

use crate::aspects::types::{Aspect, AspectKind, AspectPattern, PatternKind};
use crate::ephemeris::{Body, Position};
use crate::zodiac::{Sign, ZodiacMapper};
use std::collections::BTreeMap;

/// Minimum number of bodies sharing a sign to form a stellium
pub const STELLIUM_MIN_BODIES: usize = 3;

/// Detect grand trines, T-squares, grand crosses and stelliums.
///
/// Aspect patterns are found from `aspects`; stelliums from the sign of
/// each position.
pub fn detect_patterns(aspects: &[Aspect], positions: &[Position]) -> Vec<AspectPattern> {
    let mut patterns = Vec::new();
    patterns.extend(grand_trines(aspects));
    patterns.extend(t_squares(aspects));
    patterns.extend(grand_crosses(aspects));
    patterns.extend(stelliums(aspects, positions));
    patterns
}

fn find(aspects: &[Aspect], a: Body, b: Body, kind: AspectKind) -> Option<&Aspect> {
    aspects.iter().find(|x| x.kind == kind && x.connects(a, b))
}

fn bodies_in(aspects: &[Aspect]) -> Vec<Body> {
    let mut bodies: Vec<Body> = aspects.iter().flat_map(|a| [a.body_a, a.body_b]).collect();
    bodies.sort();
    bodies.dedup();
    bodies
}

fn mean_strength(members: &[Aspect]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    members.iter().map(|a| a.strength).sum::<f64>() / members.len() as f64
}

fn pattern(kind: PatternKind, bodies: Vec<Body>, members: Vec<Aspect>) -> AspectPattern {
    let description = match kind {
        PatternKind::GrandTrine => "A harmonious triangle of energy flow between three bodies",
        PatternKind::TSquare => "A challenging configuration creating tension and drive",
        PatternKind::GrandCross => {
            "A powerful cross configuration creating maximum tension and potential"
        }
        PatternKind::Stellium => "A concentration of bodies in one sign",
    };
    AspectPattern {
        kind,
        strength: mean_strength(&members),
        bodies,
        aspects: members,
        sign: None,
        description: description.to_string(),
    }
}

/// Three bodies in mutual trine
pub fn grand_trines(aspects: &[Aspect]) -> Vec<AspectPattern> {
    let bodies = bodies_in(aspects);
    let mut found = Vec::new();
    for (i, &a) in bodies.iter().enumerate() {
        for (j, &b) in bodies.iter().enumerate().skip(i + 1) {
            let Some(ab) = find(aspects, a, b, AspectKind::Trine) else {
                continue;
            };
            for &c in &bodies[j + 1..] {
                if let (Some(bc), Some(ca)) = (
                    find(aspects, b, c, AspectKind::Trine),
                    find(aspects, c, a, AspectKind::Trine),
                ) {
                    let members = vec![ab.clone(), bc.clone(), ca.clone()];
                    found.push(pattern(PatternKind::GrandTrine, vec![a, b, c], members));
                }
            }
        }
    }
    found
}

/// An opposition with a third body square to both ends (the apex, listed last)
pub fn t_squares(aspects: &[Aspect]) -> Vec<AspectPattern> {
    let bodies = bodies_in(aspects);
    let mut found = Vec::new();
    for opp in aspects.iter().filter(|a| a.kind == AspectKind::Opposition) {
        for &apex in &bodies {
            if opp.involves(apex) {
                continue;
            }
            if let (Some(s1), Some(s2)) = (
                find(aspects, apex, opp.body_a, AspectKind::Square),
                find(aspects, apex, opp.body_b, AspectKind::Square),
            ) {
                let members = vec![opp.clone(), s1.clone(), s2.clone()];
                found.push(pattern(
                    PatternKind::TSquare,
                    vec![opp.body_a, opp.body_b, apex],
                    members,
                ));
            }
        }
    }
    found
}

/// Two oppositions whose four ends are linked by squares
pub fn grand_crosses(aspects: &[Aspect]) -> Vec<AspectPattern> {
    let oppositions: Vec<&Aspect> = aspects
        .iter()
        .filter(|a| a.kind == AspectKind::Opposition)
        .collect();
    let mut found = Vec::new();
    for (i, first) in oppositions.iter().enumerate() {
        for second in &oppositions[i + 1..] {
            if first.involves(second.body_a) || first.involves(second.body_b) {
                continue;
            }
            let squares: Vec<&Aspect> = [
                (first.body_a, second.body_a),
                (first.body_a, second.body_b),
                (first.body_b, second.body_a),
                (first.body_b, second.body_b),
            ]
            .iter()
            .filter_map(|&(x, y)| find(aspects, x, y, AspectKind::Square))
            .collect();
            if squares.len() < 4 {
                continue;
            }
            let mut members = vec![(*first).clone(), (*second).clone()];
            members.extend(squares.into_iter().cloned());
            found.push(pattern(
                PatternKind::GrandCross,
                vec![first.body_a, first.body_b, second.body_a, second.body_b],
                members,
            ));
        }
    }
    found
}

/// Three or more bodies sharing a sign
pub fn stelliums(aspects: &[Aspect], positions: &[Position]) -> Vec<AspectPattern> {
    let mapper = ZodiacMapper::new();
    let mut by_sign: BTreeMap<Sign, Vec<Body>> = BTreeMap::new();
    for p in positions {
        let members = by_sign.entry(mapper.sign_for(p.longitude).sign).or_default();
        if !members.contains(&p.body) {
            members.push(p.body);
        }
    }

    by_sign
        .into_iter()
        .filter(|(_, bodies)| bodies.len() >= STELLIUM_MIN_BODIES)
        .map(|(sign, bodies)| {
            let members: Vec<Aspect> = aspects
                .iter()
                .filter(|a| bodies.contains(&a.body_a) && bodies.contains(&a.body_b))
                .cloned()
                .collect();
            AspectPattern {
                kind: PatternKind::Stellium,
                strength: (20.0 * bodies.len() as f64).min(100.0),
                description: format!("A concentration of {} bodies in {}", bodies.len(), sign),
                bodies,
                aspects: members,
                sign: Some(sign),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::AspectCalculator;
    use crate::time::J2000;

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
    fn test_grand_trine() {
        let positions = vec![at(Body::Sun, 10.0), at(Body::Mars, 130.0), at(Body::Jupiter, 250.0)];
        let aspects = AspectCalculator::new().calculate_all(&positions);
        let trines = grand_trines(&aspects);
        assert_eq!(trines.len(), 1);
        assert!((trines[0].strength - 100.0).abs() < 1e-9);
        assert_eq!(trines[0].aspects.len(), 3);
    }

    #[test]
    fn test_t_square_apex_last() {
        let positions = vec![at(Body::Sun, 0.0), at(Body::Moon, 180.0), at(Body::Saturn, 90.0)];
        let aspects = AspectCalculator::new().calculate_all(&positions);
        let ts = t_squares(&aspects);
        assert_eq!(ts.len(), 1);
        assert_eq!(ts[0].bodies[2], Body::Saturn);
    }

    #[test]
    fn test_grand_cross() {
        let positions = vec![
            at(Body::Sun, 0.0),
            at(Body::Moon, 90.0),
            at(Body::Mars, 180.0),
            at(Body::Venus, 270.0),
        ];
        let aspects = AspectCalculator::new().calculate_all(&positions);
        let crosses = grand_crosses(&aspects);
        assert_eq!(crosses.len(), 1);
        assert_eq!(crosses[0].aspects.len(), 6);
        // Each body is the apex of one T-square.
        assert_eq!(t_squares(&aspects).len(), 4);
    }

    #[test]
    fn test_stellium_strength_caps() {
        let positions: Vec<Position> = [Body::Sun, Body::Moon, Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter]
            .iter()
            .enumerate()
            .map(|(i, &b)| at(b, 40.0 + i as f64))
            .collect();
        let found = stelliums(&[], &positions);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].sign, Some(Sign::Taurus));
        assert_eq!(found[0].strength, 100.0);

        let found = stelliums(&[], &positions[..3]);
        assert_eq!(found[0].strength, 60.0);
        assert!(stelliums(&[], &positions[..2]).is_empty());
    }
}
