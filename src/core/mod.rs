/// Core module for capture conversion
///
/// This module contains the analyzer and converter operations and the payload
/// primitives they share.

pub mod analyzer;
pub mod converter;
pub mod payload;
