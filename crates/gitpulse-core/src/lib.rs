pub mod client;
pub mod error;
pub mod event;
pub mod format;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use event::{Event, EventKind};
pub use format::{format_event, summary_lines, DISPLAY_LIMIT};
