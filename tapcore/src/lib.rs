//! tapcore — shared look, feel and storage for tapcalc

pub mod config;
pub mod dither;
pub mod theme;
pub mod widgets;

pub use theme::TapTheme;
