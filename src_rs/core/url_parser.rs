// 목적:
// - HTTP 쿼리 파라미터를 필터 Expression으로 변환한다.
//
// 설명:
// - `<prefix><10진 id>` 형태의 키만 필터로 취급하고 나머지 키는 무시한다.
// - 한 키의 여러 값은 조건 하나(OR)로 모으고, 같은 파라미터를 가리키는 다른 키는
//   별도 조건(AND)으로 남긴다. 두 조건을 합치지 않는다.
// - 키 순회 순서는 (id, 키) 기준으로 고정한다.
// - 미등록 id나 필터 불가 파라미터를 가리키면 부분 결과 없이 BadParameterReference로 실패한다.
//
// 디자인 패턴:
// - 파서(Parser) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/registry.rs
// - src_rs/core/expression.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::expression::{Condition, Expression};
use crate::core::registry::ParameterRegistry;

/// 키별 값 목록. 값 순서는 입력 순서를 유지한다.
pub type QueryParams = BTreeMap<String, Vec<String>>;

/// `a=1&a=2&b=3` 형태의 원시 쿼리 문자열을 키별 값 목록으로 모은다.
pub fn query_params_from_str(raw: &str) -> QueryParams {
    let trimmed = raw.strip_prefix('?').unwrap_or(raw);
    let mut params = QueryParams::new();
    for (key, value) in url::form_urlencoded::parse(trimmed.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

#[derive(Debug, Clone)]
pub struct UrlQueryParser {
    prefix: String,
    registry: Arc<ParameterRegistry>,
}

impl UrlQueryParser {
    pub fn new(prefix: &str, registry: Arc<ParameterRegistry>) -> CoreResult<Self> {
        if prefix.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "param_prefix는 비어 있을 수 없습니다".to_string(),
            ));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            registry,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 쿼리 파라미터에서 필터 Expression을 만든다.
    pub fn parse(&self, query: &QueryParams) -> CoreResult<Expression> {
        let mut keyed = query
            .iter()
            .filter_map(|(key, values)| self.param_digits(key).map(|digits| (key, digits, values)))
            .map(|(key, digits, values)| (digits.parse::<u32>().ok(), key, values))
            .collect::<Vec<_>>();
        keyed.sort_by(|left, right| left.0.cmp(&right.0).then_with(|| left.1.cmp(right.1)));

        let mut conditions = Vec::with_capacity(keyed.len());
        for (id, key, values) in keyed {
            let parameter = id
                .and_then(|id| self.registry.filterable_by_id(id))
                .ok_or_else(|| CoreError::BadParameterReference { key: key.clone() })?;
            conditions.push(Condition::new(parameter, values.clone()));
        }

        Ok(Expression::from_conditions(conditions))
    }

    /// 원시 쿼리 문자열을 바로 파싱한다.
    pub fn parse_str(&self, raw: &str) -> CoreResult<Expression> {
        self.parse(&query_params_from_str(raw))
    }

    /// 파라미터 id를 URL 키로 만든다.
    pub fn key_for(&self, id: u32) -> String {
        format!("{}{}", self.prefix, id)
    }

    fn param_digits<'k>(&self, key: &'k str) -> Option<&'k str> {
        let digits = key.strip_prefix(self.prefix.as_str())?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        Some(digits)
    }
}
