//! lightbnb-db: data-access layer for the LightBnB property rental app
//!
//! A thin layer over a PostgreSQL connection pool: repositories build
//! parameterized statements, execute them, and map rows to plain records.
//! The property search assembles its WHERE/HAVING clauses dynamically from
//! the supplied filters; everything else is fixed SQL.
//!
//! The pool is an explicit dependency. Callers open it once at startup and
//! hand it to each repository:
//!
//! ```ignore
//! let config = DbConfig::from_env();
//! let pool = create_pool(&config.connection_url()).await?;
//! db::migrations::run(&pool).await?;
//!
//! let properties = PropertyRepo::new(&pool)
//!     .search(&PropertySearch::default(), DEFAULT_RESULT_LIMIT)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::DbConfig;
pub use db::pool::{create_pool, create_pool_with_options};
pub use db::repos::{GuestReservation, PropertyRepo, PropertyWithRating, ReservationRepo, UserRepo};
pub use error::{DbError, DbResult};
pub use models::{NewProperty, NewUser, Property, PropertySearch, User, DEFAULT_RESULT_LIMIT};
