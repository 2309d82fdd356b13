//! Numeric helpers for signal processing.
//!
//! # Modules
//!
//! - [`windows`] - Window coefficient generation and application
//! - [`decibel`] - Magnitude, power and decibel conversions
//! - [`volume`] - Stereo volume metering

pub mod decibel;
pub mod volume;
pub mod windows;

pub use decibel::*;
pub use volume::*;
pub use windows::*;
