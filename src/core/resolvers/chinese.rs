use crate::core::tables::{CHINESE_ANIMALS, STEM_ELEMENTS};
use crate::domain::model::{BirthMoment, ChineseAnimalRecord, Element, Tradition, TraditionResult};
use crate::domain::ports::SignResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Datelike;
use serde_json::json;
use std::collections::HashMap;

/// 參考鼠年：1984（甲子年，以西曆年近似，不處理農曆新年邊界）
pub const DEFAULT_REFERENCE_YEAR: i32 = 1984;

/// 生肖與天干五行：12 年獸循環 + 10 年天干循環
#[derive(Debug, Clone)]
pub struct ChineseResolver {
    reference_year: i32,
}

impl ChineseResolver {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn animal_for(&self, year: i32) -> &'static ChineseAnimalRecord {
        let index = (year - self.reference_year).rem_euclid(12) as usize;
        &CHINESE_ANIMALS[index]
    }

    /// Stem element from the year's last digit; each element spans two
    /// consecutive years.
    pub fn element_for(year: i32) -> Element {
        STEM_ELEMENTS[year.rem_euclid(10) as usize]
    }

    fn polarity(year: i32) -> &'static str {
        if year.rem_euclid(2) == 0 {
            "Yang"
        } else {
            "Yin"
        }
    }
}

impl Default for ChineseResolver {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_YEAR)
    }
}

#[async_trait]
impl SignResolver for ChineseResolver {
    fn tradition(&self) -> Tradition {
        Tradition::Chinese
    }

    async fn resolve(&self, moment: &BirthMoment) -> Result<TraditionResult> {
        let year = moment.date().year();
        let animal = self.animal_for(year);
        let element = Self::element_for(year);
        let polarity = Self::polarity(year);

        tracing::debug!("Chinese year sign for {}: {} {}", year, element, animal.name);

        let mut attributes = HashMap::new();
        attributes.insert("animal".to_string(), json!(animal.name));
        attributes.insert("element".to_string(), json!(element.name()));
        attributes.insert("polarity".to_string(), json!(polarity));
        attributes.insert("traits".to_string(), json!(animal.traits));

        Ok(TraditionResult {
            tradition: Tradition::Chinese,
            sign: animal.name.to_string(),
            element: Some(element),
            attributes,
            description: format!("Year of the {} {} ({})", element, animal.name, polarity),
        })
    }
}
