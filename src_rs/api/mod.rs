// 목적:
// - 실행 파일이 사용하는 설정/로깅 경계 모듈을 선언한다.
//
// 설명:
// - 설정 파일 로딩과 tracing 초기화를 코어 로직과 분리한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/config.rs
// - src_rs/api/logging.rs

pub mod config;
pub mod logging;
