use crate::domain::model::{BirthMoment, Tradition, TraditionResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait ProfileStore: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn correlation_epoch(&self) -> NaiveDate;
    fn chinese_reference_year(&self) -> i32;
    fn ayanamsa_degrees(&self) -> f64;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait SignResolver: Send + Sync {
    fn tradition(&self) -> Tradition;
    async fn resolve(&self, moment: &BirthMoment) -> Result<TraditionResult>;
}
