/// Docket system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Strict external date format. Every date that crosses an external
/// boundary is rendered with this format, no time, no timezone.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sort key for records with no valid date. Keeps the final ordering
/// comparison total: undated records sort after every dated one.
pub const FAR_FUTURE_SENTINEL: &str = "9999-12-31";

/// Well-known seed anchor bound to the current date.
pub const TODAY_ANCHOR: &str = "today";

/// Self-evident anchor phrase. A trigger event containing this phrase
/// (case-insensitive) is bound to the current date during resolution.
pub const SERVICE_ANCHOR_PHRASE: &str = "service of this order";

/// Maximum absolute deadline offset in days (~10 years). Larger offsets
/// are rejected to bound the day-stepping loop.
pub const DEFAULT_MAX_OFFSET_DAYS: i64 = 3650;

/// Window after "today" within which a due date classifies as High.
pub const DEFAULT_DUE_SOON_WINDOW_DAYS: i64 = 7;
