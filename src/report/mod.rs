// src/report/mod.rs
//! CTRF document model and codec.

pub mod codec;
pub mod model;

pub use model::{Report, Results, Summary, TestRecord, TestStatus, Tool};
