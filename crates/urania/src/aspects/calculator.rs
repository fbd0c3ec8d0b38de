use crate::aspects::catalogue::ASPECT_CATALOGUE;
use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::coordinates::{angle_difference, separation};
use crate::ephemeris::{Body, Position};

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Create a new aspect calculator with catalogue orbs
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AspectSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Closest catalogue aspect for a separation, with its deviation.
    ///
    /// Only entries whose orb covers the deviation qualify; the smallest
    /// deviation wins and earlier catalogue entries win ties.
    pub fn classify(&self, separation: f64) -> Option<(AspectKind, f64)> {
        let mut best: Option<(AspectKind, f64)> = None;
        for def in ASPECT_CATALOGUE.iter() {
            if !self.settings.allows(def.kind) {
                continue;
            }
            let orb = self.settings.orb_for(def.kind);
            let deviation = (separation - def.angle).abs();
            if deviation > orb {
                continue;
            }
            match best {
                Some((_, d)) if d <= deviation => {}
                _ => best = Some((def.kind, deviation)),
            }
        }
        best
    }

    /// Calculate the aspect between two positions, if any
    pub fn calculate_aspect(&self, a: &Position, b: &Position) -> Option<Aspect> {
        let angle = separation(a.longitude, b.longitude);
        let (kind, deviation) = self.classify(angle)?;
        let orb = self.settings.orb_for(kind);
        let strength = if orb > 0.0 {
            (orb - deviation) / orb * 100.0
        } else {
            100.0
        };

        Some(Aspect {
            body_a: a.body,
            body_b: b.body,
            kind,
            angle,
            orb: deviation,
            applying: is_applying(a, b, kind.angle()),
            strength,
            description: format!(
                "{} {} {}: {}",
                a.body.name(),
                kind,
                b.body.name(),
                kind.description()
            ),
        })
    }

    /// Aspects between every unordered pair, strongest first
    pub fn calculate_all(&self, positions: &[Position]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for (i, a) in positions.iter().enumerate() {
            for b in &positions[i + 1..] {
                if a.body == b.body {
                    continue;
                }
                if let Some(aspect) = self.calculate_aspect(a, b) {
                    aspects.push(aspect);
                }
            }
        }
        sort_by_strength(&mut aspects);
        aspects
    }

    /// Aspects from every position in `first` to every position in
    /// `second` (synastry), strongest first
    pub fn cross_aspects(&self, first: &[Position], second: &[Position]) -> Vec<Aspect> {
        let mut aspects: Vec<Aspect> = first
            .iter()
            .flat_map(|a| second.iter().filter_map(move |b| self.calculate_aspect(a, b)))
            .collect();
        sort_by_strength(&mut aspects);
        aspects
    }
}

fn sort_by_strength(aspects: &mut [Aspect]) {
    aspects.sort_by(|a, b| b.strength.total_cmp(&a.strength));
}

/// Determine if an aspect is applying (approaching exact) or separating.
///
/// The faster body (lower speed rank) is assumed to move direct; the aspect
/// applies while it has yet to reach the exact angle from the slower one.
fn is_applying(a: &Position, b: &Position, exact: f64) -> bool {
    let (fast, slow) = if faster(a.body, b.body) { (a, b) } else { (b, a) };
    let ahead = angle_difference(slow.longitude, fast.longitude);
    if ahead >= 0.0 {
        ahead < exact
    } else {
        -ahead > exact
    }
}

fn faster(a: Body, b: Body) -> bool {
    a.speed_rank() <= b.speed_rank()
}
