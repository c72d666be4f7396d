// 목적:
// - 핵심 런타임 계층 모듈을 선언한다.
//
// 설명:
// - 파라미터 레지스트리, 필터 Expression, URL 파서, 요청 빌더, 응답 디코더를
//   리프부터 분리해 각각 독립적으로 검증할 수 있게 한다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/search_service.rs

pub mod comment_params;
pub mod decoder;
pub mod errors;
pub mod expression;
pub mod filter_literal;
pub mod language;
pub mod registry;
pub mod request;
pub mod search_service;
pub mod url_parser;
