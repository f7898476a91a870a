//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod click_statistics;
pub mod health;
pub mod unique_click_statistics;
pub mod users;

pub use auth::{login_handler, profile_handler, register_handler};
pub use click_statistics::{
    click_summary_handler, create_click_statistic_handler, delete_click_statistic_handler,
    get_click_statistic_handler, list_click_statistics_handler, my_click_summary_handler,
    my_clicks_by_text_handler, my_clicks_handler, simple_click_statistic_handler,
};
pub use health::health_handler;
pub use unique_click_statistics::{
    create_unique_click_statistic_handler, delete_unique_click_statistic_handler,
    get_unique_click_statistic_handler, list_unique_click_statistics_handler,
    my_unique_clicks_handler, my_unique_summary_handler, my_unique_summary_with_token_handler,
    simple_unique_click_statistic_handler, update_unique_click_statistic_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
