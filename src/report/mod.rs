//! Report module - stdout tables and the run summary

pub mod summary;
pub mod tables;

pub use summary::*;
pub use tables::*;
