// 목적:
// - 검색 엔진 연동 계층 모듈을 선언한다.
//
// 설명:
// - 엔진 경계 트레이트와 Meilisearch HTTP 구현을 분리한다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/index/engine.rs
// - src_rs/index/meili_client.rs

pub mod engine;
pub mod meili_client;
