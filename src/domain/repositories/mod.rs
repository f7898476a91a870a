//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User account CRUD plus e-mail and personal token lookups
//! - [`ClickStatisticRepository`] - Raw click log and text summaries
//! - [`UniqueClickStatisticRepository`] - Atomic per-(user, text) counters
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod click_statistic_repository;
pub mod unique_click_statistic_repository;
pub mod user_repository;

pub use click_statistic_repository::{ClickStatisticRepository, ClickSummary};
pub use unique_click_statistic_repository::UniqueClickStatisticRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use click_statistic_repository::MockClickStatisticRepository;
#[cfg(test)]
pub use unique_click_statistic_repository::MockUniqueClickStatisticRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
