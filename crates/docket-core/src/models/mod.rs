pub mod docket;
pub mod event_record;

pub use docket::{Docket, DocketEntry};
pub use event_record::{is_iso_date, value_is_truthy, EventRecord, Priority, RecordStatus};
