//! Seeded synthetic chart generator.
//!
//! Draws body longitudes, retrograde states, an instant and a location from
//! an injected RNG, then runs them through the normal chart pipeline.

use crate::chart::{Chart, ChartError, ChartSettings};
use crate::ephemeris::{Body, GeoLocation, StaticPositions};
use crate::time::to_julian_day;
use crate::zodiac::ZodiacMapper;
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

// 1900-01-01 and 2100-01-01, seconds since the Unix epoch
const EARLIEST: i64 = -2_208_988_800;
const LATEST: i64 = 4_102_444_800;

/// Mean direct motion in degrees/day
fn mean_motion(body: Body) -> f64 {
    match body {
        Body::Sun => 0.9856,
        Body::Moon => 13.1764,
        Body::Mercury => 1.383,
        Body::Venus => 1.2,
        Body::Mars => 0.524,
        Body::Jupiter => 0.083,
        Body::Saturn => 0.033,
        Body::Uranus => 0.012,
        Body::Neptune => 0.006,
        Body::Pluto => 0.004,
    }
}

/// Chance that a generated body is retrograde
fn retrograde_chance(body: Body) -> f64 {
    match body {
        Body::Sun | Body::Moon => 0.0,
        Body::Mercury | Body::Venus | Body::Mars => 0.2,
        _ => 0.4,
    }
}

pub struct ChartGenerator<R: Rng> {
    rng: R,
    settings: ChartSettings,
}

impl ChartGenerator<ChaCha20Rng> {
    /// Deterministic generator from a 32-byte seed
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::new(ChaCha20Rng::from_seed(seed))
    }
}

impl<R: Rng> ChartGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            settings: ChartSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ChartSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn random_datetime(&mut self) -> DateTime<Utc> {
        let secs = self.rng.gen_range(EARLIEST..LATEST);
        DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs)
    }

    pub fn random_location(&mut self) -> GeoLocation {
        GeoLocation::new(self.rng.gen_range(-66.0..66.0), self.rng.gen_range(-180.0..180.0))
    }

    /// Synthetic chart at a random instant and location
    pub fn generate(&mut self) -> Result<Chart, ChartError> {
        let datetime = self.random_datetime();
        let location = self.random_location();
        self.generate_at(datetime, location)
    }

    /// Synthetic chart for a given instant and location
    pub fn generate_at(
        &mut self,
        datetime: DateTime<Utc>,
        location: GeoLocation,
    ) -> Result<Chart, ChartError> {
        let mapper = ZodiacMapper::new();
        let mut provider = StaticPositions::new(to_julian_day(datetime));
        for &body in &self.settings.bodies {
            let longitude = self.rng.gen_range(0.0..360.0);
            let retrograde = self.rng.gen_bool(retrograde_chance(body));
            // Twice the threshold keeps the sampled motion clearly retrograde.
            let motion = if retrograde {
                2.0 * mapper.retrograde_threshold(body)
            } else {
                mean_motion(body)
            };
            provider = provider.with(body, longitude, motion);
        }
        log::debug!("Generated synthetic chart for {} at {:?}", datetime, location);
        Chart::compute(&provider, datetime, location, &self.settings)
    }
}
