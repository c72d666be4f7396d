// 목적:
// - 검색 가능한 속성(파라미터)의 닫힌 집합과 id/이름 양방향 조회를 제공한다.
//
// 설명:
// - 레지스트리는 프로세스 시작 시 한 번 구성되고 이후 읽기 전용으로 공유된다.
// - id는 레지스트리마다 독립적인 단조 증가 카운터로 부여되며 URL 압축 표현에 쓰인다.
// - 같은 이름을 두 번 등록하면 두 조회 테이블이 어긋나지 않도록 즉시 거부한다.
// - 필터/정렬 가능 여부는 런타임 태그 비교가 아니라 별도 타입(Filterable, Sortable)으로 좁힌다.
//
// 디자인 패턴:
// - 레지스트리(Registry) + 능력 타입(Capability Type).
//
// 참조:
// - src_rs/core/comment_params.rs
// - src_rs/core/url_parser.rs

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::core::errors::{CoreError, CoreResult};
use crate::core::filter_literal::validate_attribute_name;

/// 파라미터가 허용하는 사용 범위다. Sortable은 필터링도 허용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Filterable,
    Sortable,
    RetrieveOnly,
}

impl Capability {
    pub fn can_filter(self) -> bool {
        matches!(self, Capability::Filterable | Capability::Sortable)
    }

    pub fn can_sort(self) -> bool {
        matches!(self, Capability::Sortable)
    }
}

/// 이름과 id로 식별되는 문서 속성이다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    id: u32,
    name: Arc<str>,
    capability: Capability,
}

impl Parameter {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn as_filterable(&self) -> Option<Filterable> {
        self.capability
            .can_filter()
            .then(|| Filterable(self.clone()))
    }

    pub fn as_sortable(&self) -> Option<Sortable> {
        self.capability.can_sort().then(|| Sortable(self.clone()))
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 필터 조건에 사용할 수 있음이 확인된 파라미터다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filterable(Parameter);

impl Filterable {
    pub fn parameter(&self) -> &Parameter {
        &self.0
    }

    pub fn id(&self) -> u32 {
        self.0.id
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl fmt::Display for Filterable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 정렬 키로 사용할 수 있음이 확인된 파라미터다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sortable(Parameter);

impl Sortable {
    pub fn parameter(&self) -> &Parameter {
        &self.0
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn to_filterable(&self) -> Filterable {
        Filterable(self.0.clone())
    }
}

impl fmt::Display for Sortable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 정렬 방향. 속성 id와 독립된 id 공간(1부터)을 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn id(self) -> u32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => 2,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(SortDirection::Asc),
            2 => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(CoreError::InvalidInput(format!(
                "정렬 방향은 asc 또는 desc여야 합니다: {}",
                value
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// id/이름 양방향 조회 테이블을 가진 파라미터 레지스트리다.
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    last_id: u32,
    by_id: HashMap<u32, Parameter>,
    by_name: HashMap<Arc<str>, Parameter>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다음 id를 부여해 파라미터를 등록한다.
    pub fn register(&mut self, name: &str, capability: Capability) -> CoreResult<Parameter> {
        validate_attribute_name(name)?;
        if self.by_name.contains_key(name) {
            return Err(CoreError::DuplicateParameter {
                name: name.to_string(),
            });
        }

        let id = self.last_id.checked_add(1).ok_or_else(|| {
            CoreError::Runtime("파라미터 id 카운터가 넘쳤습니다".to_string())
        })?;
        self.last_id = id;

        let parameter = Parameter {
            id,
            name: Arc::from(name),
            capability,
        };
        self.by_id.insert(id, parameter.clone());
        self.by_name.insert(parameter.name.clone(), parameter.clone());
        Ok(parameter)
    }

    pub fn register_filterable(&mut self, name: &str) -> CoreResult<Filterable> {
        let parameter = self.register(name, Capability::Filterable)?;
        Ok(Filterable(parameter))
    }

    pub fn register_sortable(&mut self, name: &str) -> CoreResult<Sortable> {
        let parameter = self.register(name, Capability::Sortable)?;
        Ok(Sortable(parameter))
    }

    pub fn register_retrievable(&mut self, name: &str) -> CoreResult<Parameter> {
        self.register(name, Capability::RetrieveOnly)
    }

    pub fn by_id(&self, id: u32) -> Option<&Parameter> {
        self.by_id.get(&id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Parameter> {
        self.by_name.get(name)
    }

    pub fn filterable_by_id(&self, id: u32) -> Option<Filterable> {
        self.by_id(id).and_then(Parameter::as_filterable)
    }

    /// 이름으로 정렬 키를 찾는다. 미등록이거나 정렬 불가면 NotSortable.
    pub fn sortable_by_name(&self, name: &str) -> CoreResult<Sortable> {
        self.by_name(name)
            .and_then(Parameter::as_sortable)
            .ok_or_else(|| CoreError::NotSortable {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// 등록된 파라미터를 id 오름차순으로 반환한다.
    pub fn parameters(&self) -> Vec<&Parameter> {
        let mut parameters = self.by_id.values().collect::<Vec<_>>();
        parameters.sort_by_key(|parameter| parameter.id);
        parameters
    }
}
