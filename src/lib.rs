pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalStorage};

pub use config::TomlConfig;
pub use crate::core::engine::CosmicEngine;
pub use crate::core::synthesis::synthesize;
pub use domain::model::{
    BirthMoment, CosmicProfile, CosmicSignature, Element, GeoLocation, ResolutionFailure,
    Tradition, TraditionResult,
};
pub use utils::error::{CosmicError, Result};

/// 單一對外入口：以預設常數計算完整宇宙輪廓
pub async fn calculate_cosmic_profile(moment: &BirthMoment) -> Result<CosmicProfile> {
    CosmicEngine::new().calculate(moment).await
}
