//! CLI session persistence.

pub mod storage;
