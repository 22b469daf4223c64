/// Clock stamping outgoing events with their `sent_at` timestamp.
/// Swappable so tests can pin the clock.
pub trait TimeSource {
    /// An ISO 8601 timestamp for "now".
    fn current_time(&self) -> String;
}

#[derive(Clone)]
pub struct SystemTime {}

impl TimeSource for SystemTime {
    fn current_time(&self) -> String {
        time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .expect("iso8601 formatting of the current time cannot fail")
    }
}
