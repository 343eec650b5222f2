pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, ProfileStore};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_clock, validate_latitude, validate_longitude, validate_path, validate_range, Validate,
};
#[cfg(feature = "cli")]
use chrono::NaiveDate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "star-cosmic")]
#[command(about = "Multi-tradition zodiac calculator with cosmic signature synthesis")]
pub struct CliConfig {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,

    /// Birth time, HH:MM (enables the vedic calculation together with --lat/--lon)
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    #[arg(long)]
    pub place: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// 將輪廓另存為 JSON 檔
    #[arg(long)]
    pub save: bool,

    /// Tzolkin/Tonalpohualli correlation epoch (documented placeholder, not a GMT constant)
    #[arg(long, default_value = "1970-01-01")]
    pub correlation_epoch: NaiveDate,

    #[arg(long, default_value = "1984")]
    pub chinese_reference_year: i32,

    #[arg(long, default_value = "24.0", allow_hyphen_values = true)]
    pub ayanamsa_degrees: f64,

    /// Optional TOML config file; its calendar/vedic constants override the flags above
    #[arg(long)]
    pub config_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process stats around the calculation")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn correlation_epoch(&self) -> NaiveDate {
        self.correlation_epoch
    }

    fn chinese_reference_year(&self) -> i32 {
        self.chinese_reference_year
    }

    fn ayanamsa_degrees(&self) -> f64 {
        self.ayanamsa_degrees
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(time) = &self.time {
            validate_clock("time", time)?;
        }
        if let Some(lat) = self.lat {
            validate_latitude("lat", lat)?;
        }
        if let Some(lon) = self.lon {
            validate_longitude("lon", lon)?;
        }
        validate_path("output_path", &self.output_path)?;
        validate_range("ayanamsa_degrees", self.ayanamsa_degrees, 0.0, 50.0)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

#[cfg(feature = "cli")]
impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

#[cfg(feature = "cli")]
impl ProfileStore for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = std::path::Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(full_path, data)?;
        Ok(())
    }
}
