//! Database library providing the PostgreSQL connector and shared utilities
//!
//! # Features
//!
//! - `config` - Loading `PostgresConfig` through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_parts("localhost", 5432, "app", "secret", "users");
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
