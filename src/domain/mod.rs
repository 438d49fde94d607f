//! Domain layer containing the grid engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (scale range, percentage, errors)
//! - `grid` - Catalog, corrector, generator, validator and grid configuration
//! - `recommendation` - Rule-driven grid selection from study parameters

pub mod foundation;
pub mod grid;
pub mod recommendation;
