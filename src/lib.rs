pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod stats;

pub use error::{A11yGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_BELOW_THRESHOLD: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
