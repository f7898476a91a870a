//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the click-tracking service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account with credentials and a personal token
//! - [`ClickStatistic`] - A raw click event on a text label
//! - [`UniqueClickStatistic`] - The aggregated counter for one (user, text) pair
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewClickStatistic` - For creating new records
//! - `UserPatch`, `UniqueClickPatch` - For partial updates

pub mod click_statistic;
pub mod unique_click_statistic;
pub mod user;

pub use click_statistic::{ClickStatistic, NewClickStatistic};
pub use unique_click_statistic::{UniqueClickPatch, UniqueClickStatistic};
pub use user::{NewUser, Role, User, UserPatch};
