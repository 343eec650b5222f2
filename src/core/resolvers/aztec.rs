use crate::core::cycle::{cyclic_index, day_index, default_correlation_epoch};
use crate::core::tables::AZTEC_DAY_SIGNS;
use crate::core::tone::tone_for;
use crate::domain::model::{BirthMoment, Tradition, TraditionResult};
use crate::domain::ports::SignResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashMap;

/// Tonalpohualli：與 Tzolkin 相同的 260 日結構，名表不同
#[derive(Debug, Clone)]
pub struct AztecResolver {
    epoch: NaiveDate,
}

impl AztecResolver {
    pub fn new(epoch: NaiveDate) -> Self {
        Self { epoch }
    }
}

impl Default for AztecResolver {
    fn default() -> Self {
        Self::new(default_correlation_epoch())
    }
}

#[async_trait]
impl SignResolver for AztecResolver {
    fn tradition(&self) -> Tradition {
        Tradition::Aztec
    }

    async fn resolve(&self, moment: &BirthMoment) -> Result<TraditionResult> {
        let di = day_index(moment.date(), self.epoch);
        let sign = &AZTEC_DAY_SIGNS[cyclic_index(di, 20) as usize];
        let tone = tone_for(di);

        tracing::debug!(
            "Tonalpohualli position for {}: {} tone {}",
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
            tradition: Tradition::Aztec,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolvers::mayan::MayanResolver;

    #[tokio::test]
    async fn test_epoch_day_is_cipactli_tone_1() {
        let moment = BirthMoment::from_ymd(1970, 1, 1).unwrap();
        let result = AztecResolver::default().resolve(&moment).await.unwrap();

        assert_eq!(result.sign, "Cipactli");
        assert_eq!(result.attributes.get("tone").unwrap().as_u64().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_tone_matches_mayan_for_same_date() {
        // 兩套曆法共用同一個音調實作，數值不可能漂移
        let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
        let aztec = AztecResolver::default().resolve(&moment).await.unwrap();
        let mayan = MayanResolver::default().resolve(&moment).await.unwrap();

        assert_eq!(aztec.attributes.get("tone"), mayan.attributes.get("tone"));
        assert_eq!(
            aztec.attributes.get("day_sign_index"),
            mayan.attributes.get("day_sign_index")
        );
    }

    #[tokio::test]
    async fn test_sign_and_tone_repeat_every_260_days() {
        let resolver = AztecResolver::default();
        let a = resolver
            .resolve(&BirthMoment::from_ymd(1990, 3, 21).unwrap())
            .await
            .unwrap();
        let b = resolver
            .resolve(&BirthMoment::from_ymd(1990, 12, 6).unwrap())
            .await
            .unwrap();

        assert_eq!(a.sign, b.sign);
        assert_eq!(a.attributes.get("tone"), b.attributes.get("tone"));
    }
}
