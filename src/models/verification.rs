use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row appended to `email_tracking` for every decoded notification.
/// `verification_expiration` is a `yyyyMMddHHmmss` string; nothing in this
/// system reads it back or enforces it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub id: String,
    pub verification_expiration: String,
    pub user_name: String,
}
