use crate::ephemeris::Body;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from house configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HouseError {
    #[error("Unsupported house system: {name}. Valid systems: {valid:?}")]
    UnsupportedSystem { name: String, valid: Vec<&'static str> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    Equal,
    WholeSign,
    Placidus,
    Koch,
    Campanus,
    Regiomontanus,
}

/// House system names as accepted in configuration
const HOUSE_SYSTEMS: &[(&str, HouseSystem)] = &[
    ("equal", HouseSystem::Equal),
    ("whole_sign", HouseSystem::WholeSign),
    ("placidus", HouseSystem::Placidus),
    ("koch", HouseSystem::Koch),
    ("campanus", HouseSystem::Campanus),
    ("regiomontanus", HouseSystem::Regiomontanus),
];

impl HouseSystem {
    pub const ALL: [HouseSystem; 6] = [
        HouseSystem::Equal,
        HouseSystem::WholeSign,
        HouseSystem::Placidus,
        HouseSystem::Koch,
        HouseSystem::Campanus,
        HouseSystem::Regiomontanus,
    ];

    pub fn name(&self) -> &'static str {
        HOUSE_SYSTEMS
            .iter()
            .find(|(_, s)| s == self)
            .map(|(n, _)| *n)
            .unwrap_or("equal")
    }

    /// Systems whose cusps depend on the MC and latitude
    pub fn is_quadrant(&self) -> bool {
        !matches!(self, HouseSystem::Equal | HouseSystem::WholeSign)
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::Placidus
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HouseSystem {
    type Err = HouseError;

    /// Case-insensitive; `_`, `-` and spaces are ignored ("WholeSign",
    /// "whole_sign" and "whole sign" all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |v: &str| -> String {
            v.chars()
                .filter(|c| !matches!(c, '_' | '-' | ' '))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = squash(s);
        HOUSE_SYSTEMS
            .iter()
            .find(|(name, _)| squash(name) == wanted)
            .map(|(_, system)| *system)
            .ok_or_else(|| HouseError::UnsupportedSystem {
                name: s.to_string(),
                valid: HOUSE_SYSTEMS.iter().map(|(n, _)| *n).collect(),
            })
    }
}

/// Fixed descriptive data for a house
#[derive(Debug, Clone, Serialize)]
pub struct HouseInfo {
    pub name: &'static str,
    pub theme: &'static str,
    pub ruler: Body,
    pub description: &'static str,
}

lazy_static! {
    pub static ref HOUSE_INFO: Vec<HouseInfo> = vec![
        HouseInfo { name: "1st House", theme: "Self, Identity, Appearance", ruler: Body::Mars,
            description: "Personality and how one appears to others" },
        HouseInfo { name: "2nd House", theme: "Money, Possessions, Values", ruler: Body::Venus,
            description: "Personal resources and material possessions" },
        HouseInfo { name: "3rd House", theme: "Communication, Siblings, Short Trips", ruler: Body::Mercury,
            description: "Learning and the immediate environment" },
        HouseInfo { name: "4th House", theme: "Home, Family, Roots", ruler: Body::Moon,
            description: "Home, family and emotional foundation" },
        HouseInfo { name: "5th House", theme: "Creativity, Romance, Children", ruler: Body::Sun,
            description: "Creativity, romance and self-expression" },
        HouseInfo { name: "6th House", theme: "Work, Health, Daily Routine", ruler: Body::Mercury,
            description: "Work, health and daily responsibilities" },
        HouseInfo { name: "7th House", theme: "Partnerships, Marriage, Others", ruler: Body::Venus,
            description: "Partnerships, marriage and open enemies" },
        HouseInfo { name: "8th House", theme: "Transformation, Shared Resources, Death", ruler: Body::Mars,
            description: "Transformation, shared resources and hidden things" },
        HouseInfo { name: "9th House", theme: "Philosophy, Higher Learning, Travel", ruler: Body::Jupiter,
            description: "Higher learning, philosophy and long journeys" },
        HouseInfo { name: "10th House", theme: "Career, Reputation, Authority", ruler: Body::Saturn,
            description: "Career, reputation and public standing" },
        HouseInfo { name: "11th House", theme: "Friends, Groups, Hopes", ruler: Body::Uranus,
            description: "Friends, groups, hopes and wishes" },
        HouseInfo { name: "12th House", theme: "Spirituality, Subconscious, Hidden", ruler: Body::Neptune,
            description: "Spirituality, the subconscious and hidden enemies" },
    ];
}

/// One house of a chart
#[derive(Debug, Clone, Serialize)]
pub struct House {
    /// 1-12
    pub number: u8,
    /// Cusp longitude in degrees
    pub cusp: f64,
    /// Arc to the next cusp in degrees
    pub span: f64,
    pub bodies: Vec<Body>,
    pub name: &'static str,
    pub theme: &'static str,
    pub ruler: Body,
    pub description: &'static str,
}

impl House {
    /// Whether `longitude` (normalized) falls in [cusp, cusp + span)
    pub fn contains(&self, longitude: f64) -> bool {
        crate::coordinates::normalize_degrees(longitude - self.cusp) < self.span
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bodies: Vec<&str> = self.bodies.iter().map(|b| b.name()).collect();
        write!(
            f,
            "{} ({:.1}°): {} - Bodies: {:?}",
            self.name, self.cusp, self.theme, bodies
        )
    }
}
