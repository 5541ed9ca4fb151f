//! Utility modules: Arrow helpers, number formatting, integer rounding and
//! logging/console output.

pub mod arrow;
pub mod format;
pub mod logging;
pub mod math;

pub use format::{format_number, format_population};
pub use math::{div_round_half_even, percentage};
