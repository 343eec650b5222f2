use crate::core::cycle::{day_index, default_correlation_epoch};
use crate::core::tables::{NAKSHATRAS, RASHIS};
use crate::domain::model::{BirthMoment, Tradition, TraditionResult};
use crate::domain::ports::SignResolver;
use crate::utils::error::{CosmicError, Result};
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Timelike};
use serde_json::json;
use std::collections::HashMap;

/// 預設歲差修正值（度），近似 Lahiri，可由設定替換
pub const DEFAULT_AYANAMSA_DEGREES: f64 = 24.0;

/// Mean lunar motion in degrees per day.
const MEAN_LUNAR_MOTION: f64 = 13.176396;

const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Simplified sidereal resolver: rashi from a date-proportional solar
/// longitude, nakshatra/pada from a mean-motion lunar longitude. NOT real
/// ephemeris astronomy; values are in-range stand-ins so the rest of the
/// pipeline can be exercised. A real astronomical implementation can replace
/// this behind the same `SignResolver` port. Requires birth time and
/// location, and fails the resolution when either is missing.
#[derive(Debug, Clone)]
pub struct VedicResolver {
    ayanamsa_degrees: f64,
}

impl VedicResolver {
    pub fn new(ayanamsa_degrees: f64) -> Self {
        Self { ayanamsa_degrees }
    }

    /// Tropical solar longitude anchored at 0° on the March equinox, moved
    /// forward by mean motion.
    fn approx_solar_longitude(&self, date: NaiveDate) -> f64 {
        let equinox = NaiveDate::from_ymd_opt(date.year(), 3, 21)
            .expect("March 21 exists in every year");
        let mut days = day_index(date, equinox) as f64;
        if days < 0.0 {
            days += TROPICAL_YEAR_DAYS;
        }
        (days / TROPICAL_YEAR_DAYS) * 360.0
    }

    fn approx_lunar_longitude(&self, date: NaiveDate, day_fraction: f64) -> f64 {
        let di = day_index(date, default_correlation_epoch()) as f64;
        ((di + day_fraction) * MEAN_LUNAR_MOTION - self.ayanamsa_degrees).rem_euclid(360.0)
    }
}

impl Default for VedicResolver {
    fn default() -> Self {
        Self::new(DEFAULT_AYANAMSA_DEGREES)
    }
}

#[async_trait]
impl SignResolver for VedicResolver {
    fn tradition(&self) -> Tradition {
        Tradition::Vedic
    }

    async fn resolve(&self, moment: &BirthMoment) -> Result<TraditionResult> {
        let missing = || CosmicError::Resolution {
            tradition: Tradition::Vedic,
            cause: "birth time and location are required for sidereal calculation".to_string(),
        };
        let time = moment.time().ok_or_else(missing)?;
        let location = moment.location().ok_or_else(missing)?;

        let date = moment.date();
        let day_fraction = f64::from(time.hour() * 60 + time.minute()) / 1440.0;

        let sidereal_solar =
            (self.approx_solar_longitude(date) - self.ayanamsa_degrees).rem_euclid(360.0);
        let rashi = &RASHIS[(sidereal_solar / 30.0).floor() as usize % 12];

        let lunar = self.approx_lunar_longitude(date, day_fraction);
        let nakshatra_index = (lunar / (360.0 / 27.0)).floor() as usize % 27;
        let nakshatra = NAKSHATRAS[nakshatra_index];
        let pada = (lunar / (360.0 / 108.0)).floor() as u64 % 4 + 1;

        tracing::debug!(
            "Vedic approximation for {} at {}: rashi {}, nakshatra {} pada {} (lat {:.2}, lon {:.2})",
            date,
            time,
            rashi.name,
            nakshatra,
            pada,
            location.latitude,
            location.longitude
        );

        let mut attributes = HashMap::new();
        attributes.insert("rashi".to_string(), json!(rashi.name));
        attributes.insert("element".to_string(), json!(rashi.element.name()));
        attributes.insert("nakshatra".to_string(), json!(nakshatra));
        attributes.insert("pada".to_string(), json!(pada));
        attributes.insert("precision".to_string(), json!("mean-motion approximation"));

        Ok(TraditionResult {
            tradition: Tradition::Vedic,
            sign: rashi.name.to_string(),
            element: Some(rashi.element),
            attributes,
            description: format!(
                "Rashi {}, {} nakshatra pada {} (mean-motion approximation)",
                rashi.name, nakshatra, pada
            ),
        })
    }
}
