//! Display-side data shaping: response aggregation, analytics insights
//! parsing, draft validation, and local question ordering.

pub mod aggregate;
pub mod forms;
pub mod insights;
pub mod questions;
