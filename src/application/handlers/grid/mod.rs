//! Grid handlers - Synchronous queries over the grid engine.

mod generate_distribution;
mod get_grid_config;
mod recommend_grid;
mod validate_distribution;

pub use generate_distribution::{
    GenerateDistributionHandler, GenerateDistributionQuery, GenerateDistributionResult,
    DEFAULT_INSTRUCTIONS,
};
pub use get_grid_config::{GetGridConfigHandler, GetGridConfigQuery, GetGridConfigResult};
pub use recommend_grid::{RecommendGridHandler, RecommendGridQuery, RecommendGridResult};
pub use validate_distribution::{ValidateDistributionHandler, ValidateDistributionQuery};
