//! Terminal front end: argument handling lives in `main`, rendering here.

pub mod catalog;
pub mod recommend;
pub mod setup;
pub mod ui;

pub use recommend::OutputFormat;
