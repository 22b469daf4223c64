pub mod config;
pub mod error;
pub mod event;
pub mod session;
pub mod sink;
pub mod time;
pub mod tracker;

pub use config::Config;
pub use error::TrackerError;
pub use event::{AppEvent, AuthAction, EventPayload};
pub use session::{PageSession, ScrollDepthWatcher};
pub use sink::{EventSink, HttpSink, PrintSink};
pub use time::{SystemTime, TimeSource};
pub use tracker::Tracker;
