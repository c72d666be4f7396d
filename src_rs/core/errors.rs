// 목적:
// - Rust 코어 계층의 표준 오류 타입을 정의한다.
//
// 설명:
// - 잘못된 URL 파라미터, 미지원 언어, 엔진 응답 디코딩 실패 등을 명시적으로 구분한다.
// - 클라이언트 입력 오류(4xx)와 상위 시스템 오류(5xx)를 호출자가 판별할 수 있게 한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/core/url_parser.rs
// - src_rs/core/decoder.rs

use thiserror::Error;

/// 코어 계층에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("입력값이 유효하지 않습니다: {0}")]
    InvalidInput(String),
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("등록되지 않은 파라미터를 참조했습니다: key={key}")]
    BadParameterReference { key: String },
    #[error("이미 등록된 파라미터 이름입니다: {name}")]
    DuplicateParameter { name: String },
    #[error("정렬할 수 없는 파라미터입니다: {name}")]
    NotSortable { name: String },
    #[error("지원하지 않는 언어입니다: {0}")]
    UnsupportedLanguage(String),
    #[error("검색 응답 디코딩에 실패했습니다: {0}")]
    Decode(String),
    #[error("검색 엔진 HTTP 호출에 실패했습니다: {0}")]
    Http(String),
    #[error("직렬화/역직렬화에 실패했습니다: {0}")]
    Serialization(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

impl CoreError {
    /// 요청자의 입력이 원인인 오류인지 판별한다.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidInput(_)
                | CoreError::BadParameterReference { .. }
                | CoreError::NotSortable { .. }
                | CoreError::UnsupportedLanguage(_)
        )
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
