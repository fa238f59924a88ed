//! Local usage analytics
//!
//! Monotonic counters persisted in the analytics table. Counters are
//! local-only and never sent to the server. Callers treat bump failures as
//! non-fatal (log and continue) so analytics can never break a user-facing
//! operation.

use jurify_common::Result;
use sqlx::{Pool, Sqlite};

/// Counter names, in display order
pub const COUNTERS: [&str; 6] = [
    "queries_submitted",
    "cache_hits",
    "fresh_responses",
    "voice_dictations",
    "pdf_exports",
    "logins",
];

/// Increment a counter by one, creating it at 1 if absent
pub async fn bump(db: &Pool<Sqlite>, counter: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO analytics (counter, value)
        VALUES (?, 1)
        ON CONFLICT(counter) DO UPDATE SET value = value + 1
        "#,
    )
    .bind(counter)
    .execute(db)
    .await?;

    Ok(())
}

/// Increment a counter, logging instead of failing
pub async fn bump_quietly(db: &Pool<Sqlite>, counter: &str) {
    if let Err(e) = bump(db, counter).await {
        tracing::warn!(counter, error = %e, "Failed to record analytics counter");
    }
}

/// Read one counter (0 if never bumped)
pub async fn get(db: &Pool<Sqlite>, counter: &str) -> Result<i64> {
    let value: Option<i64> = sqlx::query_scalar("SELECT value FROM analytics WHERE counter = ?")
        .bind(counter)
        .fetch_optional(db)
        .await?;

    Ok(value.unwrap_or(0))
}

/// Read all known counters in display order
pub async fn all(db: &Pool<Sqlite>) -> Result<Vec<(&'static str, i64)>> {
    let mut result = Vec::with_capacity(COUNTERS.len());
    for counter in COUNTERS {
        result.push((counter, get(db, counter).await?));
    }
    Ok(result)
}

/// Zero every counter
pub async fn reset(db: &Pool<Sqlite>) -> Result<()> {
    sqlx::query("DELETE FROM analytics").execute(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::open_in_memory;

    #[tokio::test]
    async fn test_bump_and_get() {
        let db = open_in_memory().await.unwrap();

        assert_eq!(get(&db, "queries_submitted").await.unwrap(), 0);

        bump(&db, "queries_submitted").await.unwrap();
        bump(&db, "queries_submitted").await.unwrap();
        bump(&db, "cache_hits").await.unwrap();

        assert_eq!(get(&db, "queries_submitted").await.unwrap(), 2);
        assert_eq!(get(&db, "cache_hits").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_all_lists_every_counter() {
        let db = open_in_memory().await.unwrap();
        bump(&db, "pdf_exports").await.unwrap();

        let counters = all(&db).await.unwrap();
        assert_eq!(counters.len(), COUNTERS.len());

        let pdf = counters.iter().find(|(name, _)| *name == "pdf_exports");
        assert_eq!(pdf, Some(&("pdf_exports", 1)));
    }

    #[tokio::test]
    async fn test_reset_zeroes_counters() {
        let db = open_in_memory().await.unwrap();

        bump(&db, "logins").await.unwrap();
        reset(&db).await.unwrap();

        assert_eq!(get(&db, "logins").await.unwrap(), 0);
    }
}
