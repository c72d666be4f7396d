// 목적:
// - 검색 엔진의 원시 응답 바이트를 코멘트 레코드와 패싯 분포로 디코딩한다.
//
// 설명:
// - 학위 유형 이름은 체코어 필드가 비어 있으면 영어 필드로 대체한다.
//   요청 언어와 무관하게 비어 있지 않은 값을 우선한다.
// - 패싯 분포는 구조를 바꾸지 않고 그대로 전달한다.
// - 선택 필드가 `null`이면 누락된 필드와 같이 기본값으로 채운다.
// - 형식이 잘못된 응답은 일부만 채우지 않고 전체를 Decode 오류로 반환한다.
//
// 디자인 패턴:
// - 와이어 DTO -> 도메인 변환(Wire-to-Domain Mapping).
//
// 참조:
// - src_rs/core/search_service.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::errors::{CoreError, CoreResult};

/// 값이 `null`이어도 누락과 같게 기본값으로 읽는다.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 파라미터 이름 -> (값 -> 개수).
pub type FacetDistribution = BTreeMap<String, BTreeMap<String, u64>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(flatten)]
    pub student: Student,
    #[serde(flatten)]
    pub target: CommentTarget,
    #[serde(default, deserialize_with = "null_as_default")]
    pub academic_year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semester: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_field: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_type: StudyType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StudyTypeWire")]
pub struct StudyType {
    pub code: String,
    pub abbr: String,
    pub name: String,
}

#[derive(Deserialize)]
struct StudyTypeWire {
    #[serde(default, deserialize_with = "null_as_default")]
    code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    abbr: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name_cs: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name_en: String,
}

impl From<StudyTypeWire> for StudyType {
    fn from(wire: StudyTypeWire) -> Self {
        let name = if wire.name_cs.is_empty() {
            wire.name_en
        } else {
            wire.name_cs
        };
        Self {
            code: wire.code,
            abbr: wire.abbr,
            name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentTarget {
    /// lecture 또는 seminar.
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_code: String,
    #[serde(default)]
    pub teacher: Option<Teacher>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "KOD", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "PRIJMENI", default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(rename = "JMENO", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "TITULPRED", default, deserialize_with = "null_as_default")]
    pub title_before: String,
    #[serde(rename = "TITULZA", default, deserialize_with = "null_as_default")]
    pub title_after: String,
}

impl Teacher {
    /// `J. Novak` 형태의 짧은 표시 이름.
    pub fn short_name(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{}. {}", initial, self.last_name),
            None => self.last_name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub hits: Vec<Comment>,
    pub facets: FacetDistribution,
    pub estimated_total_hits: Option<u64>,
}

impl SearchResult {
    /// 현재 페이지 뒤에 더 가져올 결과가 없는지 판정한다.
    pub fn is_end(&self, offset: usize, limit: usize) -> bool {
        match self.estimated_total_hits {
            Some(total) => total <= offset.saturating_add(limit) as u64,
            None => self.hits.len() < limit,
        }
    }

    /// 다른 결과의 패싯 분포로 같은 이름의 패싯을 교체한다.
    pub fn merge_facets(&mut self, other: FacetDistribution) {
        for (name, distribution) in other {
            self.facets.insert(name, distribution);
        }
    }
}

#[derive(Deserialize)]
struct SearchResponseWire {
    hits: Vec<Comment>,
    #[serde(rename = "facetDistribution", default, deserialize_with = "null_as_default")]
    facet_distribution: FacetDistribution,
    #[serde(rename = "estimatedTotalHits", default)]
    estimated_total_hits: Option<u64>,
}

impl From<SearchResponseWire> for SearchResult {
    fn from(wire: SearchResponseWire) -> Self {
        Self {
            hits: wire.hits,
            facets: wire.facet_distribution,
            estimated_total_hits: wire.estimated_total_hits,
        }
    }
}

#[derive(Deserialize)]
struct MultiSearchResponseWire {
    results: Vec<SearchResponseWire>,
}

/// 단일 검색 응답을 디코딩한다.
pub fn decode(raw: &[u8]) -> CoreResult<SearchResult> {
    let wire: SearchResponseWire = serde_json::from_slice(raw)
        .map_err(|error| CoreError::Decode(format!("검색 응답 파싱 실패: {}", error)))?;
    Ok(wire.into())
}

/// 다중 검색 응답을 디코딩한다.
///
/// 첫 결과가 본 검색이고, 나머지 결과의 패싯 분포가 같은 이름의 패싯을 교체한다.
pub fn decode_multi(raw: &[u8]) -> CoreResult<SearchResult> {
    let wire: MultiSearchResponseWire = serde_json::from_slice(raw)
        .map_err(|error| CoreError::Decode(format!("다중 검색 응답 파싱 실패: {}", error)))?;

    let mut results = wire.results.into_iter();
    let mut merged: SearchResult = results
        .next()
        .ok_or_else(|| CoreError::Decode("다중 검색 응답에 결과가 없습니다".to_string()))?
        .into();
    for result in results {
        merged.merge_facets(result.facet_distribution);
    }
    Ok(merged)
}
