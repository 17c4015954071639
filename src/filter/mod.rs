//! Line filtering components.
//!
//! This module provides the boilerplate-line rule engine and the two
//! document filters built on it: [`noise::NoiseFilter`] for question-paper
//! lines and [`scheme::SchemeLineFilter`] for marking-scheme lines.

pub mod noise;
pub mod rules;
pub mod scheme;

pub use noise::NoiseFilter;
pub use rules::{LineRule, RuleSet};
pub use scheme::SchemeLineFilter;
