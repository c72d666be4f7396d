// 목적:
// - Meilisearch HTTP API로 검색 요청을 전달한다.
//
// 설명:
// - 고정된 SearchRequest를 camelCase JSON 본문으로 직렬화해 POST한다.
// - 호출마다 타임아웃을 적용하고, 2xx가 아니면 Http 오류로 실패한다.
// - 오류 메시지에는 상태 코드만 담는다. 응답 본문은 잘라서 debug 로그로만 남긴다.
// - 응답 본문은 해석하지 않고 바이트 그대로 반환한다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/index/engine.rs
// - src_rs/core/search_service.rs

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::request::SearchRequest;
use crate::index::engine::IndexEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeiliConfigPayload {
    pub host: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default = "default_index")]
    pub index: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_index() -> String {
    "courses-comments".to_string()
}

fn default_timeout_ms() -> u64 {
    5_000
}

const LOGGED_BODY_CHARS: usize = 200;

fn truncate_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut truncated = text.chars().take(LOGGED_BODY_CHARS).collect::<String>();
    if text.chars().count() > LOGGED_BODY_CHARS {
        truncated.push_str("...");
    }
    truncated
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index_uid: Option<&'a str>,
    q: &'a str,
    #[serde(skip_serializing_if = "String::is_empty")]
    filter: String,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    sort: &'a [String],
    attributes_to_retrieve: &'a [String],
    facets: &'a [String],
    limit: usize,
    offset: usize,
}

impl<'a> SearchBody<'a> {
    fn new(request: &'a SearchRequest, index_uid: Option<&'a str>) -> Self {
        Self {
            index_uid,
            q: request.query(),
            filter: request.filter(),
            sort: request.sort(),
            attributes_to_retrieve: request.attributes(),
            facets: request.facets(),
            limit: request.limit(),
            offset: request.offset(),
        }
    }
}

#[derive(Serialize)]
struct MultiSearchBody<'a> {
    queries: Vec<SearchBody<'a>>,
}

#[derive(Clone)]
pub struct MeiliHttpEngine {
    client: Client,
    config: MeiliConfigPayload,
}

impl MeiliHttpEngine {
    pub fn new(config: MeiliConfigPayload) -> CoreResult<Self> {
        if config.host.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "meilisearch.host는 비어 있을 수 없습니다".to_string(),
            ));
        }

        if config.timeout_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "meilisearch.timeout_ms는 1 이상이어야 합니다".to_string(),
            ));
        }

        let valid_index = !config.index.is_empty()
            && config
                .index
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid_index {
            return Err(CoreError::InvalidConfig(format!(
                "meilisearch.index에는 영문/숫자/하이픈/밑줄만 사용할 수 있습니다: {}",
                config.index
            )));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|error| CoreError::Http(format!("HTTP 클라이언트 생성 실패: {}", error)))?;

        Ok(Self { client, config })
    }

    pub fn index(&self) -> &str {
        &self.config.index
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.host.trim_end_matches('/'), path)
    }

    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> CoreResult<Vec<u8>> {
        let mut request_builder = self.client.post(url).json(body);
        if let Some(key) = self.config.key.as_ref() {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|error| CoreError::Http(format!("검색 HTTP 요청 실패: {}", error)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| CoreError::Http(format!("검색 HTTP 본문 읽기 실패: {}", error)))?;

        if !status.is_success() {
            debug!(
                status = %status,
                body = %truncate_body(&body),
                "meilisearch error response"
            );
            return Err(CoreError::Http(format!(
                "검색 HTTP 상태 오류: status={}",
                status
            )));
        }

        Ok(body.to_vec())
    }
}

impl IndexEngine for MeiliHttpEngine {
    async fn search(&self, request: &SearchRequest) -> CoreResult<Vec<u8>> {
        let url = self.endpoint(&format!("/indexes/{}/search", self.config.index));
        let body = SearchBody::new(request, None);
        debug!(
            index = %self.config.index,
            filter = %body.filter,
            sort = ?body.sort,
            limit = body.limit,
            offset = body.offset,
            "meilisearch search"
        );
        self.post_json(&url, &body).await
    }

    async fn multi_search(&self, requests: &[SearchRequest]) -> CoreResult<Vec<u8>> {
        let url = self.endpoint("/multi-search");
        let index = self.config.index.as_str();
        let body = MultiSearchBody {
            queries: requests
                .iter()
                .map(|request| SearchBody::new(request, Some(index)))
                .collect(),
        };
        debug!(index = %index, queries = body.queries.len(), "meilisearch multi-search");
        self.post_json(&url, &body).await
    }
}
