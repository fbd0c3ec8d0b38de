use crate::ephemeris::Body;
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Angular relationship kinds, in catalogue order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
    Quincunx,
    Quintile,
    Biquintile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectNature {
    Neutral,
    Harmonious,
    Challenging,
    Minor,
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().name)
    }
}

/// A detected aspect between two bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Measured separation in degrees [0, 180]
    pub angle: f64,
    /// Deviation from the exact angle
    pub orb: f64,
    /// Whether the faster body is moving toward exactness
    pub applying: bool,
    /// 100 at exact, 0 at the edge of the orb
    pub strength: f64,
    /// "Sun Square Mars: ..." reading built from the catalogue
    pub description: String,
}

impl Aspect {
    pub fn involves(&self, body: Body) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Same unordered pair of bodies
    pub fn connects(&self, a: Body, b: Body) -> bool {
        (self.body_a == a && self.body_b == b) || (self.body_a == b && self.body_b == a)
    }

    pub fn nature(&self) -> AspectNature {
        self.kind.nature()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    GrandTrine,
    TSquare,
    GrandCross,
    Stellium,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::GrandTrine => "Grand Trine",
            PatternKind::TSquare => "T-Square",
            PatternKind::GrandCross => "Grand Cross",
            PatternKind::Stellium => "Stellium",
        }
    }
}

/// A multi-body configuration built from aspects (or shared sign)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectPattern {
    pub kind: PatternKind,
    pub bodies: Vec<Body>,
    pub aspects: Vec<Aspect>,
    pub strength: f64,
    /// Shared sign, set for stelliums
    pub sign: Option<Sign>,
    pub description: String,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Orb overrides per aspect kind; catalogue orbs apply otherwise
    pub orb_settings: HashMap<AspectKind, f64>,
    /// Whether to only include major aspects
    pub only_major: bool,
}

impl AspectSettings {
    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        self.orb_settings
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_orb())
    }

    pub fn allows(&self, kind: AspectKind) -> bool {
        !self.only_major || kind.is_major()
    }
}

/// A collection of aspects with the usual queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectSet {
    pub aspects: Vec<Aspect>,
}

impl AspectSet {
    pub fn new(aspects: Vec<Aspect>) -> Self {
        Self { aspects }
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Aspect> {
        self.aspects.iter()
    }

    pub fn for_body(&self, body: Body) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.involves(body)).collect()
    }

    pub fn between(&self, a: Body, b: Body) -> Option<&Aspect> {
        self.aspects.iter().find(|x| x.connects(a, b))
    }

    pub fn of_kind(&self, kind: AspectKind) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.kind == kind).collect()
    }

    pub fn of_nature(&self, nature: AspectNature) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.nature() == nature).collect()
    }

    /// Up to `n` aspects, strongest first
    pub fn strongest(&self, n: usize) -> Vec<&Aspect> {
        let mut sorted: Vec<&Aspect> = self.aspects.iter().collect();
        sorted.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        sorted.truncate(n);
        sorted
    }
}

impl IntoIterator for AspectSet {
    type Item = Aspect;
    type IntoIter = std::vec::IntoIter<Aspect>;

    fn into_iter(self) -> Self::IntoIter {
        self.aspects.into_iter()
    }
}
