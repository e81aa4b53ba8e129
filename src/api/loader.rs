//! Executes feed page requests off the event loop.

use super::NewsSource;
use crate::state::{Action, FetchRequest};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs page fetches and reports completions as actions.
#[derive(Clone)]
pub struct NewsLoader {
    source: Arc<dyn NewsSource>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl NewsLoader {
    /// Create a loader reporting to `action_tx`.
    pub fn new(source: Arc<dyn NewsSource>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { source, action_tx }
    }

    /// Fetch the requested page in the background.
    ///
    /// Nothing is reported when the request's token is cancelled first.
    pub fn spawn(&self, fetch: FetchRequest) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let action_tx = self.action_tx.clone();

        tokio::spawn(async move {
            let FetchRequest {
                session,
                request,
                cancel,
            } = fetch;
            tracing::debug!(%session, page = request.page, refresh = request.refresh, "Fetching news page");

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(%session, page = request.page, "News fetch cancelled");
                    return;
                }
                outcome = source.fetch_page(request.page) => outcome,
            };

            let action = match outcome {
                Ok(items) => {
                    tracing::debug!(page = request.page, count = items.len(), "News page loaded");
                    Action::NewsPageLoaded {
                        session,
                        request: request.id,
                        items,
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, page = request.page, "Error while fetching news data");
                    Action::NewsPageFailed {
                        session,
                        request: request.id,
                    }
                }
            };

            if action_tx.send(action).is_err() {
                tracing::debug!("Action channel closed; dropping news result");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockNewsSource;
    use crate::error::{Error, Result};
    use crate::state::{FeedEvent, NewsItem, NewsScreen};
    use async_trait::async_trait;
    use mockall::predicate::eq;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn first_fetch(screen: &mut NewsScreen) -> FetchRequest {
        screen
            .apply(FeedEvent::LoadPage {
                page: 1,
                refresh: false,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn test_reports_loaded_page() {
        let mut source = MockNewsSource::new();
        source
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(vec![NewsItem::titled("Bitcoin hits new high")]));

        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = NewsLoader::new(Arc::new(source), tx);
        let mut screen = NewsScreen::mount();
        let fetch = first_fetch(&mut screen);

        tokio_test::assert_ok!(loader.spawn(fetch).await);

        match rx.recv().await {
            Some(Action::NewsPageLoaded {
                session,
                request,
                items,
            }) => {
                assert_eq!(session, screen.session);
                assert_eq!(request, 1);
                assert_eq!(items[0].title, "Bitcoin hits new high");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reports_failure() {
        let mut source = MockNewsSource::new();
        source
            .expect_fetch_page()
            .times(1)
            .returning(|_| Err(Error::network("connection reset")));

        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = NewsLoader::new(Arc::new(source), tx);
        let mut screen = NewsScreen::mount();

        loader.spawn(first_fetch(&mut screen)).await.unwrap();

        assert!(matches!(
            rx.recv().await,
            Some(Action::NewsPageFailed { request: 1, .. })
        ));
    }

    /// Source that blocks until released.
    struct GatedSource {
        gate: Arc<Notify>,
    }

    #[async_trait]
    impl NewsSource for GatedSource {
        async fn fetch_page(&self, _page: u32) -> Result<Vec<NewsItem>> {
            self.gate.notified().await;
            Ok(vec![NewsItem::titled("late")])
        }
    }

    #[tokio::test]
    async fn test_unmount_cancels_in_flight_fetch() {
        let gate = Arc::new(Notify::new());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let loader = NewsLoader::new(Arc::new(GatedSource { gate: gate.clone() }), tx);

        let mut screen = NewsScreen::mount();
        let handle = loader.spawn(first_fetch(&mut screen));
        screen.unmount();
        gate.notify_one();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("fetch task should stop after cancellation")
            .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_panic() {
        let mut source = MockNewsSource::new();
        source.expect_fetch_page().returning(|_| Ok(Vec::new()));

        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let loader = NewsLoader::new(Arc::new(source), tx);
        let mut screen = NewsScreen::mount();

        assert!(loader.spawn(first_fetch(&mut screen)).await.is_ok());
    }
}
