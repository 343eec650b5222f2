use crate::core::cycle::{cyclic_index, day_index, default_correlation_epoch};
use crate::core::tables::MAYAN_DAY_SIGNS;
use crate::core::tone::tone_for;
use crate::domain::model::{BirthMoment, Tradition, TraditionResult};
use crate::domain::ports::SignResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashMap;

/// Tzolkin 260 日曆：20 日符 × 13 音調
#[derive(Debug, Clone)]
pub struct MayanResolver {
    epoch: NaiveDate,
}

impl MayanResolver {
    pub fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }
}

impl Default for MayanResolver {
    fn default() -> Self {
        Self::new(default_correlation_epoch())
    }
}

#[async_trait]
impl SignResolver for MayanResolver {
    fn tradition(&self) -> Tradition {
        Tradition::Mayan
    }

    async fn resolve(&self, moment: &BirthMoment) -> Result<TraditionResult> {
        let di = day_index(moment.date(), self.epoch);
        let sign = &MAYAN_DAY_SIGNS[cyclic_index(di, 20) as usize];
        let tone = tone_for(di);

        tracing::debug!(
            "Tzolkin position for {}: {} tone {}",
            moment.date(),
            sign.name,
            tone.number
        );

        let mut attributes = HashMap::new();
        attributes.insert("day_sign_index".to_string(), json!(sign.index));
        attributes.insert("tone".to_string(), json!(tone.number));
        attributes.insert("tone_name".to_string(), json!(tone.name));
        attributes.insert("tone_energy".to_string(), json!(tone.energy));
        attributes.insert("color".to_string(), json!(tone.color));
        attributes.insert("direction".to_string(), json!(tone.direction));
        attributes.insert("quality_group".to_string(), json!(sign.quality_group));

        Ok(TraditionResult {
            tradition: Tradition::Mayan,
            sign: sign.name.to_string(),
            element: Some(sign.element),
            attributes,
            description: format!(
                "Day-sign {} under Tone {} ({}): {}",
                sign.name, tone.number, tone.name, sign.traits
            ),
        })
    }
}
