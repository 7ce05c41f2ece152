//! Build-time configuration pipeline for the HomeMatic RF bridge component.
//!
//! A configuration tree (JSON) declares uart buses, binary outputs and one or
//! more `hm_rf_bridge` entries. [`build::validate`] checks it, books socket
//! resources and pins each bridge's uart to the link parameters the radio
//! module needs; [`build::build`] then instantiates everything in dependency
//! order and registers it with the scheduler.

pub mod build;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod hm_rf_bridge;

pub use error::{BuildError, Result};
