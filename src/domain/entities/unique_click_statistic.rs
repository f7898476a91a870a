//! Aggregated per-(user, text) click counter entity.

use chrono::{DateTime, Utc};

/// Deduplicated click counter for one (user, text) pair.
///
/// At most one row exists per pair; `count` starts at 1 and is incremented
/// atomically on each subsequent click of the same pair, so it always equals
/// the number of clicks recorded for that pair.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UniqueClickStatistic {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for an existing counter row.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UniqueClickPatch {
    pub text: Option<String>,
    pub count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_construction() {
        let now = Utc::now();
        let stat = UniqueClickStatistic {
            id: 1,
            text: "btn_login".to_string(),
            user_id: 3,
            count: 5,
            created_at: now,
            updated_at: now,
        };

        assert_eq!(stat.text, "btn_login");
        assert_eq!(stat.count, 5);
    }

    #[test]
    fn test_patch_default_changes_nothing() {
        let patch = UniqueClickPatch::default();
        assert!(patch.text.is_none());
        assert!(patch.count.is_none());
    }
}
