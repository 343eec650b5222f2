use crate::core::tables::WESTERN_SIGNS;
use crate::domain::model::{BirthMoment, Tradition, TraditionResult, WesternSignRecord};
use crate::domain::ports::SignResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Datelike;
use serde_json::json;
use std::collections::HashMap;

/// 西洋太陽星座：固定日期區間查表
#[derive(Debug, Clone, Default)]
pub struct WesternResolver;

impl WesternResolver {
    pub fn new() -> Self {
        Self
    }

    /// Sign for a month/day pair. Ranges are inclusive on each sign's start
    /// day, so cusp dates take the later sign. Dates before the first start
    /// of the year (Jan 20) belong to the late Capricorn range.
    pub fn sign_for(month: u32, day: u32) -> &'static WesternSignRecord {
        WESTERN_SIGNS
            .iter()
            .rev()
            .find(|s| (s.start_month, s.start_day) <= (month, day))
            .unwrap_or(&WESTERN_SIGNS[11])
    }
}

#[async_trait]
impl SignResolver for WesternResolver {
    fn tradition(&self) -> Tradition {
        Tradition::Western
    }

    async fn resolve(&self, moment: &BirthMoment) -> Result<TraditionResult> {
        let date = moment.date();
        let sign = Self::sign_for(date.month(), date.day());

        tracing::debug!("Western sun sign for {}: {}", date, sign.name);

        let mut attributes = HashMap::new();
        attributes.insert("element".to_string(), json!(sign.element.name()));
        attributes.insert("modality".to_string(), json!(sign.modality));
        attributes.insert("ruling_planet".to_string(), json!(sign.ruling_planet));

        Ok(TraditionResult {
            tradition: Tradition::Western,
            sign: sign.name.to_string(),
            element: Some(sign.element),
            attributes,
            description: format!(
                "{}: {} {} sign ruled by {}",
                sign.name, sign.modality, sign.element, sign.ruling_planet
            ),
        })
    }
}
