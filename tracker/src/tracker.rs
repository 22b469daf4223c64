use std::sync::Arc;

use crate::config::Config;
use crate::event::{AppEvent, AuthAction, EventPayload};
use crate::session::{PageSession, ScrollDepthWatcher};
use crate::sink::{EventSink, HttpSink, PrintSink};
use crate::time::{SystemTime, TimeSource};

/// The page's reporting surface: one method per tracked interaction.
///
/// A tracker without a sink swallows every call. That mirrors a page
/// where the collector never became available, which is an expected
/// state and not worth logging.
#[derive(Clone)]
pub struct Tracker {
    sink: Option<Arc<dyn EventSink + Send + Sync>>,
    timesource: Arc<dyn TimeSource + Send + Sync>,
}

impl Tracker {
    pub fn new<S: EventSink + Send + Sync + 'static>(sink: S) -> Tracker {
        Tracker {
            sink: Some(Arc::new(sink)),
            timesource: Arc::new(SystemTime {}),
        }
    }

    /// A tracker with no sink attached. Every reporting call is a
    /// silent no-op.
    pub fn disconnected() -> Tracker {
        Tracker {
            sink: None,
            timesource: Arc::new(SystemTime {}),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Tracker> {
        if config.print_sink {
            Ok(Tracker::new(PrintSink {}))
        } else {
            Ok(Tracker::new(HttpSink::new(
                config.collect_endpoint.clone(),
                config.request_timeout.0,
            )?))
        }
    }

    pub fn with_timesource<TZ: TimeSource + Send + Sync + 'static>(
        mut self,
        timesource: TZ,
    ) -> Tracker {
        self.timesource = Arc::new(timesource);
        self
    }

    /// Forward one event to the sink, if one is attached. Delivery
    /// failures are logged and swallowed: reporting must never break
    /// the interaction being reported.
    pub async fn track(&self, event: AppEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let payload = match EventPayload::from_event(&event, self.timesource.current_time()) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!("failed to build event payload: {}", err);
                return;
            }
        };

        if let Err(err) = sink.send(payload).await {
            tracing::warn!("failed to report {}: {}", event.name(), err);
        }
    }

    pub async fn pdf_upload(&self, language: &str, has_template: bool) {
        self.track(AppEvent::PdfUpload {
            language: language.to_owned(),
            has_template,
        })
        .await;
    }

    pub async fn manual_questions(&self, question_count: u32, language: &str) {
        self.track(AppEvent::ManualQuestions {
            question_count,
            language: language.to_owned(),
        })
        .await;
    }

    pub async fn authentication(&self, action: AuthAction, method: &str) {
        self.track(AppEvent::Authentication {
            action,
            method: method.to_owned(),
        })
        .await;
    }

    pub async fn checkout_started(&self, plan_id: &str, amount: f64) {
        self.track(AppEvent::CheckoutStarted {
            plan_id: plan_id.to_owned(),
            amount,
        })
        .await;
    }

    pub async fn purchase(&self, plan_id: &str, amount: f64, order_id: &str) {
        self.track(AppEvent::Purchase {
            plan_id: plan_id.to_owned(),
            amount,
            order_id: order_id.to_owned(),
        })
        .await;
    }

    pub async fn payment_failed(&self, plan_id: &str, amount: f64, reason: &str) {
        self.track(AppEvent::PaymentFailed {
            plan_id: plan_id.to_owned(),
            amount,
            reason: reason.to_owned(),
        })
        .await;
    }

    pub async fn file_download(&self, file_type: &str, processing_time: f64) {
        self.track(AppEvent::FileDownload {
            file_type: file_type.to_owned(),
            processing_time,
        })
        .await;
    }

    pub async fn template_usage(&self, template_type: &str) {
        self.track(AppEvent::TemplateUsage {
            template_type: template_type.to_owned(),
        })
        .await;
    }

    pub async fn customization_used(&self) {
        self.track(AppEvent::CustomizationUsed).await;
    }

    pub async fn form_interaction(&self, form_type: &str, action: &str) {
        self.track(AppEvent::FormInteraction {
            form_type: form_type.to_owned(),
            action: action.to_owned(),
        })
        .await;
    }

    pub async fn error_report(&self, error_type: &str, message: &str) {
        self.track(AppEvent::ErrorReport {
            error_type: error_type.to_owned(),
            message: message.to_owned(),
        })
        .await;
    }

    pub async fn button_click(&self, button_name: &str, location: &str) {
        self.track(AppEvent::ButtonClick {
            button_name: button_name.to_owned(),
            location: location.to_owned(),
        })
        .await;
    }

    pub async fn modal_interaction(&self, modal_name: &str, action: &str) {
        self.track(AppEvent::ModalInteraction {
            modal_name: modal_name.to_owned(),
            action: action.to_owned(),
        })
        .await;
    }

    /// Feed one scroll sample through the watcher and report every
    /// milestone it crossed.
    pub async fn observe_scroll(
        &self,
        watcher: &mut ScrollDepthWatcher,
        scroll_top: f64,
        doc_height: f64,
        win_height: f64,
    ) {
        for milestone in watcher.observe(scroll_top, doc_height, win_height) {
            self.track(AppEvent::ScrollDepth { milestone }).await;
        }
    }

    /// Report the time-on-page measurement, once, at unload.
    pub async fn end_session(&self, session: &mut PageSession) {
        if let Some(seconds) = session.end() {
            self.track(AppEvent::TimeOnPage { seconds }).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::Tracker;
    use crate::error::TrackerError;
    use crate::event::{AppEvent, EventPayload};
    use crate::session::{PageSession, ScrollDepthWatcher};
    use crate::sink::EventSink;
    use crate::time::TimeSource;

    #[derive(Clone, Default)]
    struct MemorySink {
        events: Arc<Mutex<Vec<EventPayload>>>,
    }

    #[async_trait]
    impl EventSink for MemorySink {
        async fn send(&self, event: EventPayload) -> Result<(), TrackerError> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    #[derive(Clone)]
    struct FixedTime;

    impl TimeSource for FixedTime {
        fn current_time(&self) -> String {
            String::from("2024-01-01T00:00:00Z")
        }
    }

    #[tokio::test]
    async fn a_disconnected_tracker_swallows_everything() {
        let tracker = Tracker::disconnected();

        tracker.pdf_upload("python", false).await;
        tracker.customization_used().await;
        tracker
            .end_session(&mut PageSession::begin())
            .await;
        // Nothing to assert beyond "did not panic": there is no sink to
        // observe and no other side effect to look for.
    }

    #[tokio::test]
    async fn scroll_milestones_reach_the_sink_in_order() {
        let sink = MemorySink::default();
        let events = sink.events.clone();
        let tracker = Tracker::new(sink).with_timesource(FixedTime);
        let mut watcher = ScrollDepthWatcher::new();

        tracker.observe_scroll(&mut watcher, 100.0, 2000.0, 1000.0).await;
        tracker.observe_scroll(&mut watcher, 800.0, 2000.0, 1000.0).await;
        tracker.observe_scroll(&mut watcher, 800.0, 2000.0, 1000.0).await;

        let events = events.lock().unwrap();
        let reported: Vec<_> = events.iter().map(|e| (e.name.as_str(), e.value)).collect();
        assert_eq!(
            reported,
            vec![
                ("scroll_depth", Some(25.0)),
                ("scroll_depth", Some(50.0)),
                ("scroll_depth", Some(75.0)),
            ]
        );
        assert_eq!(events[0].label, Some(String::from("25%")));
        assert_eq!(events[0].sent_at, "2024-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn a_session_reports_time_on_page_once() {
        let sink = MemorySink::default();
        let events = sink.events.clone();
        let tracker = Tracker::new(sink);
        let mut session = PageSession::begin();

        tracker.end_session(&mut session).await;
        tracker.end_session(&mut session).await;

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "time_on_page");
        assert_eq!(events[0].category, "engagement");
        assert!(events[0].parameters.contains_key("seconds_on_page"));
    }

    #[tokio::test]
    async fn named_helpers_build_the_matching_event() {
        let sink = MemorySink::default();
        let events = sink.events.clone();
        let tracker = Tracker::new(sink);

        tracker.button_click("pay_now", "pricing").await;
        tracker.payment_failed("monthly", 299.0, "declined").await;

        let events = events.lock().unwrap();
        assert_eq!(events[0].name, "button_click");
        assert_eq!(events[0].label, Some(String::from("pay_now")));
        assert_eq!(events[1].name, "payment_failed");
        assert_eq!(events[1].value, Some(299.0));
    }

    #[tokio::test]
    async fn track_accepts_raw_events_too() {
        let sink = MemorySink::default();
        let events = sink.events.clone();
        let tracker = Tracker::new(sink);

        tracker
            .track(AppEvent::TemplateUsage {
                template_type: String::from("college"),
            })
            .await;

        assert_eq!(events.lock().unwrap()[0].category, "features");
    }
}
