//! Q-sort Grid - Configuration and distribution engine for Q-sort studies
//!
//! This crate generates, corrects, validates, and recommends the forced
//! quasi-normal distributions that shape a Q-sort grid.

pub mod application;
pub mod config;
pub mod domain;
