//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential validation, registration, sessions
//! - [`services::token_service::TokenService`] - JWT signing and verification
//! - [`services::user_service::UserService`] - User CRUD and personal token validation
//! - [`services::click_statistic_service::ClickStatisticService`] - Raw click log and summaries
//! - [`services::unique_click_statistic_service::UniqueClickStatisticService`] - Per-(user, text) counters

pub mod services;
