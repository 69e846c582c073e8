//! tapcalc — a four-function calculator
//!
//! The engine and intent table carry all of the behavior and have no GUI
//! dependency; `app` wires them to egui.

pub mod app;
pub mod engine;
pub mod intent;
pub mod settings;

pub use engine::{CalculatorEngine, EngineError, Operator, ERROR_MARKER};
pub use intent::Intent;
pub use settings::Settings;
