use clap::Parser;
use star_cosmic::core::ProfileStore;
use star_cosmic::utils::logger;
use star_cosmic::utils::validation::{validate_clock, Validate};
use star_cosmic::{BirthMoment, CliConfig, CosmicEngine, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting star-cosmic CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 組出生時刻
    let moment = match build_moment(&config) {
        Ok(moment) => moment,
        Err(e) => {
            tracing::error!("❌ Invalid birth moment: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 有設定檔時以其常數建構引擎，否則用 CLI 旗標
    let engine = match &config.config_file {
        Some(path) => match load_toml_config(path) {
            Ok(toml_config) => CosmicEngine::from_config(&toml_config)
                .with_monitoring(config.monitor || toml_config.monitoring_enabled()),
            Err(e) => {
                tracing::error!("❌ Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 建議: {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => CosmicEngine::from_config(&config).with_monitoring(config.monitor),
    };

    match engine.calculate(&moment).await {
        Ok(profile) => {
            let json = serde_json::to_string_pretty(&profile)?;
            println!("{}", json);

            match &profile.cosmic_signature {
                Some(signature) => {
                    tracing::info!("✅ Cosmic profile completed: {}", signature.synthesis);
                }
                None => {
                    tracing::warn!(
                        "⚠️ Profile completed without a signature ({} traditions failed)",
                        profile.resolution_failures.len()
                    );
                }
            }

            if config.save {
                let storage = LocalStorage::new(config.output_path.clone());
                storage
                    .write_file("cosmic_profile.json", json.as_bytes())
                    .await?;
                tracing::info!("📁 Profile saved to: {}/cosmic_profile.json", config.output_path);
                println!("📁 Profile saved to: {}/cosmic_profile.json", config.output_path);
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Profile calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                star_cosmic::utils::error::ErrorSeverity::Low => 0,
                star_cosmic::utils::error::ErrorSeverity::Medium => 2,
                star_cosmic::utils::error::ErrorSeverity::High => 1,
                star_cosmic::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn load_toml_config(path: &str) -> star_cosmic::Result<TomlConfig> {
    let toml_config = TomlConfig::from_file(path)?;
    toml_config.validate()?;
    Ok(toml_config)
}

fn build_moment(config: &CliConfig) -> star_cosmic::Result<BirthMoment> {
    let mut moment = BirthMoment::from_date(config.date);

    if let Some(time) = &config.time {
        let (hour, minute) = validate_clock("time", time)?;
        moment = moment.with_time(hour, minute)?;
    }

    if let (Some(lat), Some(lon)) = (config.lat, config.lon) {
        moment = moment.with_location(lat, lon, config.place.clone());
    }

    Ok(moment)
}
