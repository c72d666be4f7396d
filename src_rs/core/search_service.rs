// 목적:
// - 코멘트 검색 요청 생성부터 엔진 호출, 응답 디코딩까지의 흐름을 제공한다.
//
// 설명:
// - 카탈로그와 URL 파서는 시작 시 한 번 만들고 Arc로 요청 사이에 공유한다(읽기 전용).
// - 요청마다 새 빌더를 만들므로 요청 간 공유 가변 상태가 없다.
// - 엔진 호출 실패는 그대로 호출자에게 전달한다. 재시도 정책은 호출자 몫이다.
// - 디코딩 실패는 요청 맥락과 함께 기록하되 원시 응답은 남기지 않는다.
//
// 디자인 패턴:
// - 파이프라인(Pipeline) + 파사드(Facade).
//
// 참조:
// - src_rs/core/request.rs
// - src_rs/core/decoder.rs
// - src_rs/index/engine.rs

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout_at;
use tracing::{debug, warn};

use crate::core::comment_params::CommentCatalog;
use crate::core::decoder::{decode, decode_multi, SearchResult};
use crate::core::errors::{CoreError, CoreResult};
use crate::core::language::Language;
use crate::core::registry::SortDirection;
use crate::core::request::{SearchRequest, SearchRequestBuilder};
use crate::core::url_parser::{query_params_from_str, QueryParams, UrlQueryParser};
use crate::index::engine::IndexEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfigPayload {
    #[serde(default = "default_param_prefix")]
    pub param_prefix: String,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_query_key")]
    pub query_key: String,
    #[serde(default = "default_offset_key")]
    pub offset_key: String,
}

impl Default for SearchConfigPayload {
    fn default() -> Self {
        Self {
            param_prefix: default_param_prefix(),
            default_limit: default_limit(),
            query_key: default_query_key(),
            offset_key: default_offset_key(),
        }
    }
}

fn default_param_prefix() -> String {
    "par".to_string()
}

fn default_limit() -> usize {
    20
}

fn default_query_key() -> String {
    "q".to_string()
}

fn default_offset_key() -> String {
    "offset".to_string()
}

pub struct CommentSearch<E> {
    catalog: Arc<CommentCatalog>,
    parser: Arc<UrlQueryParser>,
    engine: E,
    config: SearchConfigPayload,
}

impl<E: IndexEngine> CommentSearch<E> {
    pub fn new(catalog: Arc<CommentCatalog>, engine: E, config: SearchConfigPayload) -> CoreResult<Self> {
        if config.default_limit == 0 {
            return Err(CoreError::InvalidConfig(
                "search.default_limit는 1 이상이어야 합니다".to_string(),
            ));
        }

        let parser = UrlQueryParser::new(&config.param_prefix, catalog.registry().clone())?;
        Ok(Self {
            catalog,
            parser: Arc::new(parser),
            engine,
            config,
        })
    }

    pub fn catalog(&self) -> &CommentCatalog {
        &self.catalog
    }

    pub fn parser(&self) -> &UrlQueryParser {
        &self.parser
    }

    /// 기본 페이지 크기와 최신 학년도 우선 정렬을 가진 새 빌더를 반환한다.
    pub fn build_request(&self, lang: Language) -> SearchRequestBuilder {
        SearchRequestBuilder::new(self.catalog.clone(), self.parser.clone(), lang)
            .set_limit(self.config.default_limit)
            .add_sort(&self.catalog.academic_year, SortDirection::Desc)
    }

    /// 언어 태그로 빌더를 만든다. 미지원 태그는 UnsupportedLanguage.
    pub fn build_request_for_tag(&self, tag: &str) -> CoreResult<SearchRequestBuilder> {
        let lang = tag.parse::<Language>()?;
        Ok(self.build_request(lang))
    }

    /// 원시 HTTP 쿼리 문자열에서 검색어, 오프셋, 필터를 읽어 빌더를 만든다.
    pub fn parse_http_query(&self, raw: &str, lang: Language) -> CoreResult<SearchRequestBuilder> {
        let params = query_params_from_str(raw);
        self.parse_query_params(&params, lang)
    }

    pub fn parse_query_params(
        &self,
        params: &QueryParams,
        lang: Language,
    ) -> CoreResult<SearchRequestBuilder> {
        let query = first_value(params, &self.config.query_key).unwrap_or_default();
        let offset = match first_value(params, &self.config.offset_key) {
            Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<usize>().map_err(|_| {
                CoreError::InvalidInput(format!(
                    "{}는 0 이상의 정수여야 합니다: {}",
                    self.config.offset_key, raw
                ))
            })?,
            _ => 0,
        };

        self.build_request(lang)
            .set_query(query)
            .set_offset(offset)
            .parse_url_query(params)
    }

    /// 검색을 실행하고 결과를 디코딩한다.
    pub async fn comments(&self, request: &SearchRequest) -> CoreResult<SearchResult> {
        let started = Instant::now();
        let raw = self.engine.search(request).await?;
        let result = decode(&raw).map_err(|error| {
            warn!(
                filter = %request.filter(),
                query = request.query(),
                bytes = raw.len(),
                error = %error,
                "comment search response decode failed"
            );
            error
        })?;

        debug!(
            hits = result.hits.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "comment search finished"
        );
        Ok(result)
    }

    /// 필터된 패싯마다 자기 조건을 뺀 분포를 함께 가져온다.
    pub async fn comments_with_facets(&self, request: &SearchRequest) -> CoreResult<SearchResult> {
        let facet_requests = request.facet_requests();
        if facet_requests.is_empty() {
            return self.comments(request).await;
        }

        let mut requests = Vec::with_capacity(facet_requests.len() + 1);
        requests.push(request.clone());
        requests.extend(facet_requests);

        let raw = self.engine.multi_search(&requests).await?;
        decode_multi(&raw).map_err(|error| {
            warn!(
                filter = %request.filter(),
                query = request.query(),
                queries = requests.len(),
                error = %error,
                "comment multi-search response decode failed"
            );
            error
        })
    }

    /// 마감 시각까지만 검색을 기다린다. 시간이 지나면 호출을 중단한다.
    pub async fn comments_until(
        &self,
        request: &SearchRequest,
        deadline: tokio::time::Instant,
    ) -> CoreResult<SearchResult> {
        timeout_at(deadline, self.comments(request))
            .await
            .map_err(|_| CoreError::Http("검색 엔진 호출 시간이 초과되었습니다".to_string()))?
    }
}

fn first_value(params: &QueryParams, key: &str) -> Option<String> {
    params.get(key).and_then(|values| values.first()).cloned()
}
