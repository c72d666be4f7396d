// 목적:
// - 강의 코멘트 검색 코어 라이브러리의 진입점을 제공한다.
//
// 설명:
// - HTTP 쿼리 -> 필터 Expression -> 검색 요청 -> Meilisearch -> 디코딩된 결과 순서로 흐른다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/index).
//
// 참조:
// - src_rs/core/search_service.rs
// - src_rs/api/config.rs

pub mod api;
pub mod core;
pub mod index;

pub use crate::core::comment_params::CommentCatalog;
pub use crate::core::decoder::{Comment, SearchResult};
pub use crate::core::errors::{CoreError, CoreResult};
pub use crate::core::expression::Expression;
pub use crate::core::language::Language;
pub use crate::core::registry::{Capability, Filterable, Parameter, ParameterRegistry, SortDirection, Sortable};
pub use crate::core::request::{SearchRequest, SearchRequestBuilder};
pub use crate::core::search_service::CommentSearch;
pub use crate::core::url_parser::{QueryParams, UrlQueryParser};
