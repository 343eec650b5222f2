use crate::core::cycle::default_correlation_epoch;
use crate::core::resolvers::{DEFAULT_AYANAMSA_DEGREES, DEFAULT_REFERENCE_YEAR};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CosmicError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculator: CalculatorConfig,
    pub calendar: Option<CalendarConfig>,
    pub vedic: Option<VedicConfig>,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Tzolkin/Tonalpohualli 關聯基準日（YYYY-MM-DD）
    pub correlation_epoch: Option<NaiveDate>,
    pub chinese_reference_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VedicConfig {
    pub ayanamsa_degrees: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CosmicError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PROFILE_OUTPUT})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("calculator.name", &self.calculator.name)?;
        validate_path("output.path", &self.output.path)?;

        if let Some(vedic) = &self.vedic {
            if let Some(ayanamsa) = vedic.ayanamsa_degrees {
                validate_range("vedic.ayanamsa_degrees", ayanamsa, 0.0, 50.0)?;
            }
        }

        if let Some(format) = &self.output.format {
            if format != "json" {
                return Err(CosmicError::InvalidConfigValueError {
                    field: "output.format".to_string(),
                    value: format.clone(),
                    reason: "Unsupported format. Valid formats: json".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn correlation_epoch(&self) -> NaiveDate {
        self.calendar
            .as_ref()
            .and_then(|c| c.correlation_epoch)
            .unwrap_or_else(default_correlation_epoch)
    }

    fn chinese_reference_year(&self) -> i32 {
        self.calendar
            .as_ref()
            .and_then(|c| c.chinese_reference_year)
            .unwrap_or(DEFAULT_REFERENCE_YEAR)
    }

    fn ayanamsa_degrees(&self) -> f64 {
        self.vedic
            .as_ref()
            .and_then(|v| v.ayanamsa_degrees)
            .unwrap_or(DEFAULT_AYANAMSA_DEGREES)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }
}
