use crate::aspects::{AspectCalculator, AspectSet};
use crate::chart::Chart;
use crate::ephemeris::Position;

/// Cross-aspects between two charts. `body_a` of every aspect belongs to
/// the first chart.
pub fn synastry(first: &Chart, second: &Chart, calculator: &AspectCalculator) -> AspectSet {
    let a: Vec<Position> = first.positions();
    let b: Vec<Position> = second.positions();
    AspectSet::new(calculator.cross_aspects(&a, &b))
}
