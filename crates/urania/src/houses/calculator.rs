use crate::coordinates::normalize_degrees;
use crate::ephemeris::Position;
use crate::houses::types::{House, HouseSystem, HOUSE_INFO};

/// Computes house cusps for one house system
#[derive(Debug, Clone, Copy, Default)]
pub struct HouseSystemCalculator {
    system: HouseSystem,
}

impl HouseSystemCalculator {
    pub fn new(system: HouseSystem) -> Self {
        Self { system }
    }

    pub fn system(&self) -> HouseSystem {
        self.system
    }

    pub fn set_system(&mut self, system: HouseSystem) {
        self.system = system;
    }

    /// Twelve cusp longitudes, house 1 first.
    pub fn cusps(&self, ascendant: f64, midheaven: f64, latitude: f64) -> [f64; 12] {
        match self.system {
            HouseSystem::Equal => equal_cusps(ascendant),
            HouseSystem::WholeSign => whole_sign_cusps(ascendant),
            HouseSystem::Placidus
            | HouseSystem::Koch
            | HouseSystem::Campanus
            | HouseSystem::Regiomontanus => quadrant_cusps(ascendant, midheaven, latitude),
        }
    }

    /// Houses with spans and descriptive metadata, no bodies assigned
    pub fn houses(&self, ascendant: f64, midheaven: f64, latitude: f64) -> Vec<House> {
        let cusps = self.cusps(ascendant, midheaven, latitude);
        cusps
            .iter()
            .enumerate()
            .map(|(i, &cusp)| {
                let info = &HOUSE_INFO[i];
                House {
                    number: i as u8 + 1,
                    cusp,
                    span: normalize_degrees(cusps[(i + 1) % 12] - cusp),
                    bodies: Vec::new(),
                    name: info.name,
                    theme: info.theme,
                    ruler: info.ruler,
                    description: info.description,
                }
            })
            .collect()
    }

    /// House number (1-12) containing `longitude`
    pub fn assign_body(&self, longitude: f64, houses: &[House]) -> Option<u8> {
        houses
            .iter()
            .find(|h| h.contains(longitude))
            .map(|h| h.number)
    }

    /// House number and fractional progress [0, 1) through that house
    pub fn position_in_house(&self, longitude: f64, houses: &[House]) -> Option<(u8, f64)> {
        let house = houses.iter().find(|h| h.contains(longitude))?;
        let into = normalize_degrees(longitude - house.cusp);
        Some((house.number, into / house.span))
    }

    /// Copy of `houses` with each position's body placed in its house
    pub fn assign_bodies(&self, houses: &[House], positions: &[Position]) -> Vec<House> {
        let mut result: Vec<House> = houses
            .iter()
            .cloned()
            .map(|mut h| {
                h.bodies.clear();
                h
            })
            .collect();
        for p in positions {
            if let Some(house) = result.iter_mut().find(|h| h.contains(p.longitude)) {
                house.bodies.push(p.body);
            }
        }
        result
    }
}

fn equal_cusps(ascendant: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_degrees(ascendant + 30.0 * i as f64))
}

fn whole_sign_cusps(ascendant: f64) -> [f64; 12] {
    let first = 30.0 * (normalize_degrees(ascendant) / 30.0).floor();
    std::array::from_fn(|i| normalize_degrees(first + 30.0 * i as f64))
}

/// Shared approximation for the quadrant systems.
///
/// The angles fix cusps 1, 4, 7 and 10. Each quadrant's two inner cusps sit
/// at fractions `w(1/3)` and `w(2/3)` of the quadrant arc, where
/// `w(t) = t + a t (1 - t)` and `a = ±0.5 sin(latitude)` alternates sign
/// from one quadrant to the next. At the equator this reduces to trisection.
fn quadrant_cusps(ascendant: f64, midheaven: f64, latitude: f64) -> [f64; 12] {
    let asc = normalize_degrees(ascendant);
    let mut mc = normalize_degrees(midheaven);

    let upper_arc = normalize_degrees(asc - mc);
    if !(upper_arc > 0.0 && upper_arc < 180.0) {
        log::warn!(
            "Midheaven {:.3} is not in the quadrant before ascendant {:.3}; using asc - 90",
            mc,
            asc
        );
        mc = normalize_degrees(asc - 90.0);
    }

    let ic = normalize_degrees(mc + 180.0);
    let dsc = normalize_degrees(asc + 180.0);
    let skew = 0.5 * latitude.to_radians().sin();

    // (start index, start angle, end angle)
    let quadrants = [(0, asc, ic), (3, ic, dsc), (6, dsc, mc), (9, mc, asc)];

    let mut cusps = [0.0; 12];
    for (q, &(start, from, to)) in quadrants.iter().enumerate() {
        let arc = normalize_degrees(to - from);
        let a = if q % 2 == 0 { skew } else { -skew };
        cusps[start] = from;
        for k in 1..=2 {
            let t = k as f64 / 3.0;
            let w = t + a * t * (1.0 - t);
            cusps[start + k] = normalize_degrees(from + arc * w);
        }
    }
    cusps
}
