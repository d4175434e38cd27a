//! Output generation for the trend snapshot.
//!
//! # Submodules
//!
//! - [`json`]: serializes a [`crate::models::TrendSnapshot`] and writes
//!   `humor_trends.json` into the working directory

pub mod json;
