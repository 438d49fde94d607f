//! Query handlers for the application layer.

pub mod grid;

pub use grid::{
    GenerateDistributionHandler, GenerateDistributionQuery, GenerateDistributionResult,
    GetGridConfigHandler, GetGridConfigQuery, GetGridConfigResult, RecommendGridHandler,
    RecommendGridQuery, RecommendGridResult, ValidateDistributionHandler,
    ValidateDistributionQuery, DEFAULT_INSTRUCTIONS,
};
