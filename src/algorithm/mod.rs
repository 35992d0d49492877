//! Algorithm implementations for the family graph engine
//!
//! This module contains the graph algorithms the crate is built around:
//! snapshot normalization, kinship label resolution, generational grouping,
//! and record filtering.

pub mod filtering;
pub mod generation;
pub mod kinship;
pub mod normalize;
