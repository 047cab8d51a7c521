//! CLI library components for the portfolio gallery tool.

pub mod logging;
pub mod step;
pub mod summary;
