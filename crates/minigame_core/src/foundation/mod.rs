//! Foundation systems
//!
//! Math and time primitives shared by every unit and by the coordinator.

pub mod math;
pub mod time;
