//! CLI library components for the QTI converter.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;
