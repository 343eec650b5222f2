use crate::core::cycle::default_correlation_epoch;
use crate::core::resolvers::{
    AztecResolver, ChineseResolver, MayanResolver, VedicResolver, WesternResolver,
    DEFAULT_AYANAMSA_DEGREES, DEFAULT_REFERENCE_YEAR,
};
use crate::core::synthesis::synthesize;
use crate::domain::model::{BirthMoment, CosmicProfile, ResolutionFailure};
use crate::domain::ports::{ConfigProvider, SignResolver};
use crate::utils::error::{CosmicError, Result};
use crate::utils::monitor::SystemMonitor;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// 扇出/收攏引擎：五個解析器並行執行，彙整後合成印記
pub struct CosmicEngine {
    resolvers: Vec<Arc<dyn SignResolver>>,
    monitor_enabled: bool,
}

impl CosmicEngine {
    pub fn new() -> Self {
        let epoch = default_correlation_epoch();
        Self::with_resolvers(vec![
            Arc::new(WesternResolver::new()),
            Arc::new(ChineseResolver::new(DEFAULT_REFERENCE_YEAR)),
            Arc::new(VedicResolver::new(DEFAULT_AYANAMSA_DEGREES)),
            Arc::new(MayanResolver::new(epoch)),
            Arc::new(AztecResolver::new(epoch)),
        ])
    }

    /// 以設定檔常數建構（曆法基準日、參考年、歲差值可替換）
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let epoch = config.correlation_epoch();
        Self::with_resolvers(vec![
            Arc::new(WesternResolver::new()),
            Arc::new(ChineseResolver::new(config.chinese_reference_year())),
            Arc::new(VedicResolver::new(config.ayanamsa_degrees())),
            Arc::new(MayanResolver::new(epoch)),
            Arc::new(AztecResolver::new(epoch)),
        ])
    }

    pub fn with_resolvers(resolvers: Vec<Arc<dyn SignResolver>>) -> Self {
        Self {
            resolvers,
            monitor_enabled: false,
        }
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitor_enabled = enabled;
        self
    }

    /// Dispatch every resolver concurrently, join all, then synthesize.
    /// A failed tradition is recorded and never aborts its siblings; a
    /// failed synthesis only nulls the signature field.
    pub async fn calculate(&self, moment: &BirthMoment) -> Result<CosmicProfile> {
        let monitor = SystemMonitor::new(self.monitor_enabled);
        let start = Instant::now();

        tracing::info!("Calculating cosmic profile for {}", moment.date());

        let mut set = JoinSet::new();
        for resolver in &self.resolvers {
            let resolver = Arc::clone(resolver);
            let moment = moment.clone();
            set.spawn(async move {
                let tradition = resolver.tradition();
                (tradition, resolver.resolve(&moment).await)
            });
        }

        let mut tradition_results = Vec::new();
        let mut resolution_failures = Vec::new();

        while let Some(joined) = set.join_next().await {
            let (tradition, outcome) = joined?;
            match outcome {
                Ok(result) => {
                    tracing::info!("✅ {} resolved: {}", tradition, result.sign);
                    tradition_results.push(result);
                }
                Err(e) => {
                    tracing::warn!("⚠️ {} resolution failed: {}", tradition, e);
                    let cause = match e {
                        CosmicError::Resolution { cause, .. } => cause,
                        other => other.to_string(),
                    };
                    resolution_failures.push(ResolutionFailure { tradition, cause });
                }
            }
        }

        // 完成順序不定，輸出固定依傳統順序排列
        tradition_results.sort_by_key(|r| r.tradition.order());
        resolution_failures.sort_by_key(|f| f.tradition.order());

        monitor.log_stats("Resolution");

        let cosmic_signature = match synthesize(&tradition_results) {
            Ok(signature) => {
                tracing::info!("✨ Signature: {}", signature.synthesis);
                Some(signature)
            }
            Err(e) => {
                tracing::warn!("⚠️ Signature synthesis declined: {}", e);
                None
            }
        };

        monitor.log_final_stats();
        tracing::info!(
            "Profile completed in {:?} ({} traditions resolved, {} failed)",
            start.elapsed(),
            tradition_results.len(),
            resolution_failures.len()
        );

        Ok(CosmicProfile {
            tradition_results,
            resolution_failures,
            cosmic_signature,
        })
    }
}

impl Default for CosmicEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Tradition, TraditionResult};
    use async_trait::async_trait;

    struct FailingResolver(Tradition);

    #[async_trait]
    impl SignResolver for FailingResolver {
        fn tradition(&self) -> Tradition {
            self.0
        }

        async fn resolve(&self, _moment: &BirthMoment) -> Result<TraditionResult> {
            Err(CosmicError::Resolution {
                tradition: self.0,
                cause: "forced failure".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_date_only_profile_resolves_four_traditions() {
        let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
        let profile = CosmicEngine::new().calculate(&moment).await.unwrap();

        assert_eq!(profile.tradition_results.len(), 4);
        assert_eq!(profile.resolution_failures.len(), 1);
        assert_eq!(profile.resolution_failures[0].tradition, Tradition::Vedic);
        assert!(profile.cosmic_signature.is_some());
    }

    #[tokio::test]
    async fn test_results_come_back_in_fixed_tradition_order() {
        let moment = BirthMoment::from_ymd(2000, 2, 29).unwrap();
        let profile = CosmicEngine::new().calculate(&moment).await.unwrap();

        let order: Vec<Tradition> = profile
            .tradition_results
            .iter()
            .map(|r| r.tradition)
            .collect();
        assert_eq!(
            order,
            vec![
                Tradition::Western,
                Tradition::Chinese,
                Tradition::Mayan,
                Tradition::Aztec
            ]
        );
    }

    #[tokio::test]
    async fn test_all_failing_resolvers_yield_null_signature() {
        let engine = CosmicEngine::with_resolvers(vec![
            Arc::new(FailingResolver(Tradition::Mayan)),
            Arc::new(FailingResolver(Tradition::Aztec)),
        ]);
        let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
        let profile = engine.calculate(&moment).await.unwrap();

        assert!(profile.tradition_results.is_empty());
        assert_eq!(profile.resolution_failures.len(), 2);
        assert!(profile.cosmic_signature.is_none());
    }

    #[tokio::test]
    async fn test_failure_cause_carries_resolver_message() {
        let engine = CosmicEngine::with_resolvers(vec![Arc::new(FailingResolver(
            Tradition::Chinese,
        ))]);
        let moment = BirthMoment::from_ymd(1990, 3, 21).unwrap();
        let profile = engine.calculate(&moment).await.unwrap();

        assert_eq!(profile.resolution_failures[0].cause, "forced failure");
    }
}
