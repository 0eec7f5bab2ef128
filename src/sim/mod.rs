//! String simulation — the per-string state machine and the rig that owns it.
//!
//! Everything here is tick-driven and single-threaded. The host supplies a
//! millisecond clock on every call; deadlines are polled against it rather
//! than firing on their own.

pub mod config;
pub mod fret;
pub mod params;
pub mod rig;
pub mod string;

pub use config::{Layout, RigConfig, Tuning};
pub use rig::InstrumentRig;
pub use string::{StringConfig, StringSimulation, StringState};
