//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage and lookups
//! - [`PgClickStatisticRepository`] - Raw click log and summaries
//! - [`PgUniqueClickStatisticRepository`] - Atomic per-(user, text) counters

pub mod pg_click_statistic_repository;
pub mod pg_unique_click_statistic_repository;
pub mod pg_user_repository;

pub use pg_click_statistic_repository::PgClickStatisticRepository;
pub use pg_unique_click_statistic_repository::PgUniqueClickStatisticRepository;
pub use pg_user_repository::PgUserRepository;
