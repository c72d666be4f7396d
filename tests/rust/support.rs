use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use comment_search::core::errors::{CoreError, CoreResult};
use comment_search::core::search_service::SearchConfigPayload;
use comment_search::index::engine::IndexEngine;
use comment_search::{CommentCatalog, CommentSearch, SearchRequest};

/// 요청을 기록하고 미리 정한 응답을 돌려주는 메모리 엔진.
#[derive(Clone, Default)]
pub struct FakeEngine {
    pub response: Arc<Mutex<Option<Vec<u8>>>>,
    pub searches: Arc<Mutex<Vec<SearchRequest>>>,
    pub multi_searches: Arc<Mutex<Vec<Vec<SearchRequest>>>>,
    pub delay: Option<Duration>,
    pub started: Arc<AtomicBool>,
    pub completed: Arc<AtomicBool>,
    pub dropped: Arc<AtomicBool>,
}

/// 호출 future가 끝나거나 버려질 때 플래그를 세운다.
struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl FakeEngine {
    pub fn responding(body: &str) -> Self {
        let engine = Self::default();
        *engine.response.lock().unwrap() = Some(body.as_bytes().to_vec());
        engine
    }

    /// 응답 전에 주어진 시간만큼 지연한다.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn reply(&self) -> CoreResult<Vec<u8>> {
        self.response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| CoreError::Http("engine unavailable".to_string()))
    }
}

impl IndexEngine for FakeEngine {
    async fn search(&self, request: &SearchRequest) -> CoreResult<Vec<u8>> {
        self.searches.lock().unwrap().push(request.clone());
        let _flag = DropFlag(self.dropped.clone());
        self.started.store(true, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.completed.store(true, Ordering::SeqCst);
        self.reply()
    }

    async fn multi_search(&self, requests: &[SearchRequest]) -> CoreResult<Vec<u8>> {
        self.multi_searches.lock().unwrap().push(requests.to_vec());
        self.reply()
    }
}

pub fn catalog() -> Arc<CommentCatalog> {
    Arc::new(CommentCatalog::new().unwrap())
}

pub fn service(engine: FakeEngine) -> CommentSearch<FakeEngine> {
    CommentSearch::new(catalog(), engine, SearchConfigPayload::default()).unwrap()
}
