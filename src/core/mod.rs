pub mod cycle;
pub mod engine;
pub mod resolvers;
pub mod synthesis;
pub mod tables;
pub mod tone;

pub use crate::domain::model::{
    BirthMoment, CosmicProfile, CosmicSignature, Element, ResolutionFailure, Tradition,
    TraditionResult,
};
pub use crate::domain::ports::{ConfigProvider, ProfileStore, SignResolver};
pub use crate::utils::error::Result;
