//! Tollgate - an in-process vehicle toll record store.
//!
//! This crate provides a generic repository contract with CRUD and
//! free-text search, an ordered in-memory backend, and a thin CLI.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod domain;
pub mod error;
pub mod lifecycle;
pub mod storage;

// Public CLI module (needed by binary)
pub mod cli;

// Output formatting for CLI commands
pub mod output;
