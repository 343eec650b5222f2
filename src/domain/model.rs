use crate::utils::error::{CosmicError, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 出生地座標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub place: Option<String>,
}

/// 出生時刻，建構後不可變
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    date: NaiveDate,
    time: Option<NaiveTime>,
    location: Option<GeoLocation>,
}

impl BirthMoment {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            location: None,
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            CosmicError::InvalidDate {
                message: format!("{}-{:02}-{:02} is not a calendar date", year, month, day),
            }
        })?;
        Ok(Self {
            date,
            time: None,
            location: None,
        })
    }

    pub fn with_time(mut self, hour: u32, minute: u32) -> Result<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            CosmicError::InvalidDate {
                message: format!("{:02}:{:02} is not a 24-hour clock value", hour, minute),
            }
        })?;
        self.time = Some(time);
        Ok(self)
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64, place: Option<String>) -> Self {
        self.location = Some(GeoLocation {
            latitude,
            longitude,
            place,
        });
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn location(&self) -> Option<&GeoLocation> {
        self.location.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tradition {
    Western,
    Chinese,
    Vedic,
    Mayan,
    Aztec,
}

impl Tradition {
    pub const ALL: [Tradition; 5] = [
        Tradition::Western,
        Tradition::Chinese,
        Tradition::Vedic,
        Tradition::Mayan,
        Tradition::Aztec,
    ];

    /// 固定展示順序，供引擎整理結果時排序
    pub fn order(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for Tradition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tradition::Western => "western",
            Tradition::Chinese => "chinese",
            Tradition::Vedic => "vedic",
            Tradition::Mayan => "mayan",
            Tradition::Aztec => "aztec",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
    Wood,
    Metal,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
            Element::Wood => "Wood",
            Element::Metal => "Metal",
        }
    }

    /// 同票數時的優先序：fire > earth > air > water > wood > metal
    pub fn priority(&self) -> usize {
        match self {
            Element::Fire => 0,
            Element::Earth => 1,
            Element::Air => 2,
            Element::Water => 3,
            Element::Wood => 4,
            Element::Metal => 5,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 單一傳統的解析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraditionResult {
    pub tradition: Tradition,
    pub sign: String,
    pub element: Option<Element>,
    pub attributes: HashMap<String, serde_json::Value>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionFailure {
    pub tradition: Tradition,
    pub cause: String,
}

/// 跨傳統合成出的宇宙印記
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicSignature {
    pub primary_element: Element,
    pub secondary_element: Element,
    pub tone: u8,
    pub tone_name: String,
    pub harmony: u8,
    pub synthesis: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmicProfile {
    pub tradition_results: Vec<TraditionResult>,
    pub resolution_failures: Vec<ResolutionFailure>,
    pub cosmic_signature: Option<CosmicSignature>,
}

/// 13 個銀河音調之一，程式啟動時即固定
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneRecord {
    pub number: u8,
    pub name: &'static str,
    pub energy: &'static str,
    pub meaning: &'static str,
    pub qualities: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub color: &'static str,
    pub direction: &'static str,
}

/// 馬雅/阿茲特克 20 日符之一
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySignRecord {
    pub index: u8,
    pub name: &'static str,
    pub traits: &'static str,
    pub element: Element,
    pub quality_group: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WesternSignRecord {
    pub name: &'static str,
    pub start_month: u32,
    pub start_day: u32,
    pub element: Element,
    pub modality: &'static str,
    pub ruling_planet: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChineseAnimalRecord {
    pub name: &'static str,
    pub traits: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiRecord {
    pub name: &'static str,
    pub element: Element,
}
