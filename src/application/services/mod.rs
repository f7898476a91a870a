//! Business logic services for the application layer.

pub mod auth_service;
pub mod click_statistic_service;
pub mod token_service;
pub mod unique_click_statistic_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use click_statistic_service::ClickStatisticService;
pub use token_service::{SessionClaims, TokenService};
pub use unique_click_statistic_service::UniqueClickStatisticService;
pub use user_service::{UserService, UserUpdate};
