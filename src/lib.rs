//! prepcalc Library
//!
//! Measurement and proportional scaling engine for catering: unit
//! conversion, guest-count scaling, recipe re-proportioning and GST.

pub mod build_info;
pub mod conversion;
pub mod error;
pub mod mcp;
pub mod models;
pub mod scaling;
pub mod tools;

pub use error::{CalcError, CalcResult};
