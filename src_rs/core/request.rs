// 목적:
// - 코멘트 검색 요청을 조립하는 불변 빌더와 고정된 요청 스냅샷을 제공한다.
//
// 설명:
// - 빌더의 모든 메서드는 &self를 받아 새 빌더를 반환한다. 한 기본 빌더에서 나온
//   분기들은 서로의 변경을 보지 않는다.
// - 호출 순서 제약이 없다. URL 파싱 결과는 기존 필터 뒤에 이어 붙는다.
// - build는 필수 필드를 검사하지 않는다. 빈 쿼리/빈 필터는 전체 일치를 뜻한다.
// - 가져올 속성/패싯은 요청 언어로 분기해 계산한다.
//
// 디자인 패턴:
// - 함수형 빌더(Functional Builder) + 스냅샷(Snapshot).
//
// 참조:
// - src_rs/core/comment_params.rs
// - src_rs/core/url_parser.rs
// - src_rs/core/search_service.rs

use std::sync::Arc;

use crate::core::comment_params::CommentCatalog;
use crate::core::errors::CoreResult;
use crate::core::expression::Expression;
use crate::core::language::Language;
use crate::core::registry::{SortDirection, Sortable};
use crate::core::url_parser::{QueryParams, UrlQueryParser};

#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    catalog: Arc<CommentCatalog>,
    parser: Arc<UrlQueryParser>,
    lang: Language,
    query: String,
    filter: Expression,
    sort: Vec<String>,
    limit: usize,
    offset: usize,
}

impl SearchRequestBuilder {
    pub fn new(catalog: Arc<CommentCatalog>, parser: Arc<UrlQueryParser>, lang: Language) -> Self {
        Self {
            catalog,
            parser,
            lang,
            query: String::new(),
            filter: Expression::new(),
            sort: Vec::new(),
            limit: 0,
            offset: 0,
        }
    }

    pub fn lang(&self) -> Language {
        self.lang
    }

    pub fn filter(&self) -> &Expression {
        &self.filter
    }

    /// URL 쿼리의 필터 파라미터를 현재 필터 뒤에 덧붙인다.
    pub fn parse_url_query(&self, query: &QueryParams) -> CoreResult<Self> {
        let parsed = self.parser.parse(query)?;
        let mut next = self.clone();
        next.filter = self.filter.concat(&parsed);
        Ok(next)
    }

    pub fn set_query(&self, query: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.query = query.into();
        next
    }

    pub fn add_course(&self, code: impl Into<String>) -> Self {
        let code: String = code.into();
        let mut next = self.clone();
        next.filter = self.filter.add(&self.catalog.course_code, [code]);
        next
    }

    pub fn add_teacher(&self, code: impl Into<String>) -> Self {
        let code: String = code.into();
        let mut next = self.clone();
        next.filter = self.filter.add(&self.catalog.teacher_code, [code]);
        next
    }

    pub fn add_sort(&self, parameter: &Sortable, direction: SortDirection) -> Self {
        let mut next = self.clone();
        next.sort.push(format!("{}:{}", parameter, direction));
        next
    }

    /// 이름으로 정렬 키를 추가한다. 정렬 불가 이름은 NotSortable.
    pub fn add_sort_by_name(&self, name: &str, direction: SortDirection) -> CoreResult<Self> {
        let parameter = self.catalog.registry().sortable_by_name(name)?;
        Ok(self.add_sort(&parameter, direction))
    }

    pub fn set_offset(&self, offset: usize) -> Self {
        let mut next = self.clone();
        next.offset = offset;
        next
    }

    pub fn set_limit(&self, limit: usize) -> Self {
        let mut next = self.clone();
        next.limit = limit;
        next
    }

    pub fn build(&self) -> CoreResult<SearchRequest> {
        Ok(SearchRequest {
            query: self.query.clone(),
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            attributes: self.catalog.attributes(self.lang),
            facets: self.catalog.facets(self.lang),
            limit: self.limit,
            offset: self.offset,
        })
    }
}

/// build 이후 바뀌지 않는 검색 요청이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
    filter: Expression,
    sort: Vec<String>,
    attributes: Vec<String>,
    facets: Vec<String>,
    limit: usize,
    offset: usize,
}

impl SearchRequest {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// 엔진 필터 문법으로 렌더링한 필터. 조건이 없으면 빈 문자열.
    pub fn filter(&self) -> String {
        self.filter.to_string()
    }

    pub fn filter_expression(&self) -> &Expression {
        &self.filter
    }

    pub fn sort(&self) -> &[String] {
        &self.sort
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn facets(&self) -> &[String] {
        &self.facets
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 필터에 걸린 패싯 파라미터마다 자기 조건을 뺀 패싯 전용 요청을 만든다.
    pub fn facet_requests(&self) -> Vec<SearchRequest> {
        self.filter
            .parameters()
            .into_iter()
            .filter(|parameter| self.facets.iter().any(|facet| facet == parameter.name()))
            .map(|parameter| SearchRequest {
                query: self.query.clone(),
                filter: self.filter.except(&parameter),
                sort: Vec::new(),
                attributes: Vec::new(),
                facets: vec![parameter.name().to_string()],
                limit: 0,
                offset: 0,
            })
            .collect()
    }
}
