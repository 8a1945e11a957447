//! Database layer - connection pool, migrations, query builders, repositories
//!
//! # Design Principles
//!
//! - The pool is an explicit dependency handed to each repository - no
//!   module-level connection state
//! - Every accessor issues exactly one statement per call - no retries, no
//!   multi-statement transactions
//! - Every bound value goes through a positional placeholder - never string
//!   concatenation

pub mod migrations;
pub mod pool;
pub mod query;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use query::{InsertBuilder, QueryBuilder, SqlValue};
pub use repos::*;
