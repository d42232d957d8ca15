/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// All monetary amounts are integer rupees. No fractional currency is used
/// anywhere in the pricing model.
pub type Money = i64;
