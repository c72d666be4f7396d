// 목적:
// - Meilisearch 필터 문법에 들어가는 식별자/값 리터럴 유틸리티를 제공한다.
//
// 설명:
// - 속성 이름은 등록 시점에 허용 문자만 통과시킨다.
// - 사용자 값은 안전한 토큰이면 그대로, 아니면(예약어 포함) 큰따옴표로 감싸고 이스케이프한다.
//   값이 필터 문법(쉼표, 대괄호, AND 등)을 벗어나지 못하게 막는다.
//
// 디자인 패턴:
// - 가드 함수(Guard Function).
//
// 참조:
// - src_rs/core/registry.rs
// - src_rs/core/expression.rs

use crate::core::errors::{CoreError, CoreResult};

/// 속성 이름의 허용 문자를 검증한다.
pub fn validate_attribute_name(value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(
            "파라미터 이름은 비어 있을 수 없습니다".to_string(),
        ));
    }

    let valid = value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '.');

    if !valid {
        return Err(CoreError::InvalidInput(format!(
            "파라미터 이름에는 영문/숫자/밑줄/점만 사용할 수 있습니다: {}",
            value
        )));
    }

    Ok(())
}

/// 사용자 값을 필터 리터럴로 변환한다.
pub fn render_value(value: &str) -> String {
    if is_bare_token(value) {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

const RESERVED_WORDS: [&str; 10] = [
    "and", "or", "not", "in", "to", "exists", "is", "null", "empty", "contains",
];

fn is_bare_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.' | ':'))
        && !value.starts_with("_geo")
        && !RESERVED_WORDS
            .iter()
            .any(|word| value.eq_ignore_ascii_case(word))
}
