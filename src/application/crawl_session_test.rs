#[cfg(test)]
mod tests {
    use crate::application::crawl_session::{CrawlSession, SessionState};
    use crate::application::crawler::Crawler;
    use crate::config::settings::Settings;
    use crate::domain::models::signal::{CrawlFailure, CrawlSignal, SignalEvent, SpiderInfo};
    use crate::domain::models::stats::{
        response_status_key, StatValue, ELAPSED_TIME_SECONDS, FINISH_REASON, ITEM_SCRAPED_COUNT,
        REQUEST_COUNT, RESPONSE_COUNT, SPIDER_EXCEPTION_COUNT, START_TIME,
    };
    use crate::domain::services::signal_manager::SignalHandler;
    use crate::utils::errors::SessionError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct SignalLog {
        seen: Mutex<Vec<CrawlSignal>>,
    }

    #[async_trait]
    impl SignalHandler for SignalLog {
        fn name(&self) -> &str {
            "signal_log"
        }

        async fn handle(&self, event: &SignalEvent) -> anyhow::Result<()> {
            self.seen.lock().push(event.signal());
            Ok(())
        }
    }

    fn session() -> (CrawlSession, Crawler, Arc<SignalLog>) {
        let settings = Settings::load_from("does-not-exist").unwrap();
        let crawler = Crawler::with_settings(settings);
        let log = Arc::new(SignalLog::default());
        for signal in CrawlSignal::ALL {
            crawler.signals.connect(signal, log.clone());
        }
        let session = CrawlSession::new(crawler.clone(), SpiderInfo::new("quotes"));
        (session, crawler, log)
    }

    #[tokio::test]
    async fn test_full_lifecycle_records_stats_and_signals() {
        let (session, crawler, log) = session();

        session.open().await.unwrap();
        session.record_request().unwrap();
        session.record_request().unwrap();
        session.record_response(200).unwrap();
        session.record_response(404).unwrap();
        session.record_item().unwrap();
        session
            .report_error(CrawlFailure::new("boom"), Some("https://example.com".to_string()))
            .await
            .unwrap();
        session.close("finished").await.unwrap();

        let stats = &crawler.stats;
        assert_eq!(stats.get_value(REQUEST_COUNT), Some(StatValue::Int(2)));
        assert_eq!(stats.get_value(RESPONSE_COUNT), Some(StatValue::Int(2)));
        assert_eq!(stats.get_value(&response_status_key(200)), Some(StatValue::Int(1)));
        assert_eq!(stats.get_value(&response_status_key(404)), Some(StatValue::Int(1)));
        assert_eq!(stats.get_value(ITEM_SCRAPED_COUNT), Some(StatValue::Int(1)));
        assert_eq!(stats.get_value(SPIDER_EXCEPTION_COUNT), Some(StatValue::Int(1)));
        assert_eq!(stats.get_value(FINISH_REASON), Some(StatValue::from("finished")));
        assert!(stats.get_value(START_TIME).and_then(|v| v.as_timestamp()).is_some());
        assert!(stats.get_value(ELAPSED_TIME_SECONDS).is_some());

        assert_eq!(
            *log.seen.lock(),
            vec![
                CrawlSignal::SpiderOpened,
                CrawlSignal::SpiderError,
                CrawlSignal::SpiderClosed,
            ]
        );
        assert_eq!(session.state(), SessionState::Closed);
    }

    #[tokio::test]
    async fn test_open_is_emitted_once() {
        let (session, _crawler, log) = session();

        session.open().await.unwrap();
        assert_eq!(session.open().await, Err(SessionError::AlreadyOpened));

        assert_eq!(*log.seen.lock(), vec![CrawlSignal::SpiderOpened]);
    }

    #[tokio::test]
    async fn test_nothing_fires_before_open() {
        let (session, _crawler, log) = session();

        assert_eq!(session.close("finished").await, Err(SessionError::NotOpened));
        assert_eq!(
            session.report_error(CrawlFailure::new("boom"), None).await,
            Err(SessionError::NotOpened)
        );
        assert_eq!(session.record_item(), Err(SessionError::NotOpened));

        assert!(log.seen.lock().is_empty());
        assert_eq!(session.state(), SessionState::Created);
    }

    #[tokio::test]
    async fn test_nothing_fires_after_close() {
        let (session, _crawler, log) = session();
        session.open().await.unwrap();
        session.close("finished").await.unwrap();

        assert_eq!(session.open().await, Err(SessionError::AlreadyClosed));
        assert_eq!(session.close("again").await, Err(SessionError::AlreadyClosed));
        assert_eq!(session.record_request(), Err(SessionError::AlreadyClosed));

        assert_eq!(
            *log.seen.lock(),
            vec![CrawlSignal::SpiderOpened, CrawlSignal::SpiderClosed]
        );
    }
}
