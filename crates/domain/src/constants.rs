//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Timestamp representation: i64 nanoseconds since the Unix epoch, converted
// through a millisecond intermediate for all calendar math.
pub const NANOS_PER_MILLISECOND: i64 = 1_000_000;
pub const NANOS_PER_HOUR: i64 = 3_600_000_000_000;
pub const NANOS_PER_DAY: i64 = 86_400_000_000_000;

// Legacy category prefixes embedded in a shift's department field. Exact,
// case-sensitive prefix match including the trailing space.
pub const PAID_LEAVE_PREFIX: &str = "[PAID-LEAVE] ";
pub const UNPAID_LEAVE_PREFIX: &str = "[UNPAID-LEAVE] ";
pub const SICKNESS_PREFIX: &str = "[SICKNESS] ";

// Appraisal cycle configuration
pub const APPRAISAL_CYCLE_MONTHS: u32 = 3;
pub const APPRAISAL_DUE_SOON_DAYS: i64 = 14;

// Expiry warnings (training certificates, documents)
pub const EXPIRY_WARNING_DAYS: i64 = 30;

// Stock requests are archived by the data service this many days after
// delivery; the client never performs the transition itself.
pub const STOCK_ARCHIVE_AFTER_DAYS: i64 = 7;

// Request cache configuration
pub const DEFAULT_CACHE_TTL_MS: u64 = 30_000;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;
