//! Test utilities and helper functions for the gallery search test suite

use kodegen_tools_gallery_search::gallery_search::{
    ProviderError, ProviderResult, ResultRecord, SearchBatch, SearchCursor, SearchProvider,
    SearchRequest,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use tokio::sync::oneshot;

/// Creates `count` records whose titles are `{tag}-{i}`
#[allow(dead_code)]
pub fn records(tag: &str, count: usize) -> Vec<ResultRecord> {
    (1..=count)
        .map(|i| ResultRecord {
            title: format!("{tag}-{i}"),
            author: "tester".to_string(),
            date: "25.01.01".to_string(),
            view_count: (i * 10).to_string(),
            recommend_count: i.to_string(),
            link: format!("https://example.com/{tag}/{i}"),
        })
        .collect()
}

/// Creates a batch of `count` tagged records with an optional next cursor
#[allow(dead_code)]
pub fn batch(tag: &str, count: usize, next_cursor: Option<&str>) -> SearchBatch {
    SearchBatch::new(records(tag, count), next_cursor.map(SearchCursor::from))
}

/// Titles of a record list, for compact assertions
#[allow(dead_code)]
pub fn titles(records: &[ResultRecord]) -> Vec<String> {
    records.iter().map(|r| r.title.clone()).collect()
}

struct Scripted {
    gate: Option<oneshot::Receiver<()>>,
    response: ProviderResult<SearchBatch>,
}

/// In-memory provider answering requests from a script, in call order
///
/// Every request is recorded. Gated responses hold the fetch open until the
/// returned sender fires (or is dropped).
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<SearchRequest>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, batch: SearchBatch) {
        self.script.lock().push_back(Scripted {
            gate: None,
            response: Ok(batch),
        });
    }

    pub fn push_err(&self, message: &str) {
        self.script.lock().push_back(Scripted {
            gate: None,
            response: Err(ProviderError::Other(message.to_string())),
        });
    }

    /// Queue a response that is only delivered once the sender fires
    pub fn push_gated(&self, response: ProviderResult<SearchBatch>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Scripted {
            gate: Some(rx),
            response,
        });
        tx
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<SearchRequest> {
        self.requests.lock().last().cloned()
    }
}

impl SearchProvider for ScriptedProvider {
    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = ProviderResult<SearchBatch>> + Send {
        self.requests.lock().push(request);
        let next = self.script.lock().pop_front();
        async move {
            let Some(next) = next else {
                return Err(ProviderError::Other("script exhausted".to_string()));
            };
            if let Some(gate) = next.gate {
                let _ = gate.await;
            }
            next.response
        }
    }
}

/// Yield until the provider has seen at least `count` requests
#[allow(dead_code)]
pub async fn wait_for_requests(provider: &ScriptedProvider, count: usize) {
    for _ in 0..10_000 {
        if provider.request_count() >= count {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!(
        "provider saw {} requests, expected {count}",
        provider.request_count()
    );
}
