//! Background search management.
//!
//! The search itself is single-threaded; this module only moves it off the
//! caller's thread so a command loop stays responsive while it runs.

mod controller;

pub use controller::{EngineController, SearchJob};
