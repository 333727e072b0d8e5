//! Core business logic abstractions

pub mod catalog;
pub mod config;
pub mod fund;
pub mod log;
pub mod profile;
pub mod recommend;

// Re-export main types for cleaner imports
pub use catalog::{Catalog, load_catalog};
pub use fund::{FundRecord, RiskLevel};
pub use profile::UserProfile;
pub use recommend::{DEFAULT_TOP_N, RecommendError, recommend};
