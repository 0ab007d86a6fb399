//! Core domain types and utilities for the ReturnoScope platform.
//!
//! This crate provides the storage port shared by the rest of the
//! ReturnoScope financial analytics demo. Domain-specific error types
//! live in the crates that produce them.

pub mod storage;

pub use storage::{MemoryStore, StorageError, StoragePort};
