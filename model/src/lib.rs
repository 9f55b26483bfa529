pub mod document;
pub mod error;
pub mod issue;
pub mod project;
pub mod threshold;

pub use error::{DashboardError, Result};
