//! Raw click event entity.

use chrono::{DateTime, Utc};

/// A single recorded click against a text label.
///
/// The raw click log is append-only: rows are created once per click event,
/// never mutated, and only removed by an admin delete. Multiple rows per
/// (user, text) pair are expected.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClickStatistic {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for recording a new click.
#[derive(Debug, Clone)]
pub struct NewClickStatistic {
    pub text: String,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_click_statistic() {
        let new_click = NewClickStatistic {
            text: "btn_submit_form".to_string(),
            user_id: 7,
        };

        assert_eq!(new_click.text, "btn_submit_form");
        assert_eq!(new_click.user_id, 7);
    }
}
