//! Sibling subsystems the bridge depends on.
//!
//! Each one only models what the bridge consumes: validating its own entries,
//! declaring ids, and producing the runtime object other components bind to.

pub mod binary_sensor;
pub mod entity;
pub mod output;
pub mod socket;
pub mod text_sensor;
pub mod uart;
