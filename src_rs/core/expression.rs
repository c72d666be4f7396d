// 목적:
// - 필터 조건을 누적하고 Meilisearch 필터 문자열로 렌더링한다.
//
// 설명:
// - 조건 하나는 `name IN [v1,v2]`(값 사이 OR)이며, 조건끼리는 ` AND `로 결합한다.
// - add는 기존 값을 바꾸지 않고 새 Expression을 반환하므로 호출자가 분기할 수 있다.
// - 값이 없는 조건도 `name IN []`로 남긴다. 아무 문서와도 일치하지 않는다.
//
// 디자인 패턴:
// - 불변 값 객체(Immutable Value Object).
//
// 참조:
// - src_rs/core/url_parser.rs
// - src_rs/core/filter_literal.rs

use std::fmt;

use crate::core::filter_literal::render_value;
use crate::core::registry::Filterable;

/// 한 파라미터에 허용된 값 집합이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    parameter: Filterable,
    values: Vec<String>,
}

impl Condition {
    pub fn new(parameter: Filterable, values: Vec<String>) -> Self {
        Self { parameter, values }
    }

    pub fn parameter(&self) -> &Filterable {
        &self.parameter
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .values
            .iter()
            .map(|value| render_value(value))
            .collect::<Vec<_>>();
        write!(f, "{} IN [{}]", self.parameter, rendered.join(","))
    }
}

/// AND로 결합되는 조건의 순서 있는 목록이다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    conditions: Vec<Condition>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_conditions(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// 조건 하나를 덧붙인 새 Expression을 반환한다.
    pub fn add<I, S>(&self, parameter: &Filterable, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut conditions = self.conditions.clone();
        conditions.push(Condition::new(
            parameter.clone(),
            values.into_iter().map(Into::into).collect(),
        ));
        Self { conditions }
    }

    /// 다른 Expression의 조건을 순서대로 이어 붙인다.
    pub fn concat(&self, other: &Expression) -> Self {
        let mut conditions = self.conditions.clone();
        conditions.extend(other.conditions.iter().cloned());
        Self { conditions }
    }

    /// 주어진 파라미터의 조건을 모두 뺀 Expression을 반환한다.
    pub fn except(&self, parameter: &Filterable) -> Self {
        let conditions = self
            .conditions
            .iter()
            .filter(|condition| condition.parameter != *parameter)
            .cloned()
            .collect();
        Self { conditions }
    }

    /// 조건에 등장하는 파라미터를 처음 등장한 순서대로 중복 없이 반환한다.
    pub fn parameters(&self) -> Vec<Filterable> {
        let mut seen = Vec::<Filterable>::new();
        for condition in &self.conditions {
            if !seen.contains(&condition.parameter) {
                seen.push(condition.parameter.clone());
            }
        }
        seen
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn conditions_count(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, condition) in self.conditions.iter().enumerate() {
            if index > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", condition)?;
        }
        Ok(())
    }
}
