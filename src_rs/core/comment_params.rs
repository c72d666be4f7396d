// 목적:
// - 강의 코멘트 인덱스의 속성 카탈로그를 구성한다.
//
// 설명:
// - 등록 순서가 곧 URL id다. 기존 링크가 깨지지 않도록 순서를 바꾸지 않는다.
// - 가져올 속성/패싯 목록은 고정 목록에 언어별 학위 유형 이름 하나를 더해 만든다.
//
// 디자인 패턴:
// - 명시적 구성 객체(Explicit Construction) + 공유 읽기 전용 상태.
//
// 참조:
// - src_rs/core/registry.rs
// - src_rs/core/request.rs

use std::sync::Arc;

use crate::core::errors::CoreResult;
use crate::core::language::Language;
use crate::core::registry::{Filterable, Parameter, ParameterRegistry, Sortable};

#[derive(Debug)]
pub struct CommentCatalog {
    registry: Arc<ParameterRegistry>,
    pub academic_year: Sortable,
    pub course_code: Filterable,
    pub study_year: Filterable,
    pub semester: Filterable,
    pub study_field: Filterable,
    pub teacher_code: Filterable,
    pub study_type_code: Filterable,
    pub target_type: Filterable,
    pub teacher: Parameter,
    pub study_type_name_cs: Parameter,
    pub study_type_name_en: Parameter,
    pub content: Parameter,
    pub study_type_abbr: Parameter,
}

impl CommentCatalog {
    pub fn new() -> CoreResult<Self> {
        let mut registry = ParameterRegistry::new();

        let academic_year = registry.register_sortable("academic_year")?;
        let course_code = registry.register_filterable("course_code")?;
        let study_year = registry.register_filterable("study_year")?;
        let semester = registry.register_filterable("semester")?;
        let study_field = registry.register_filterable("study_field")?;
        let teacher_code = registry.register_filterable("teacher.KOD")?;
        let study_type_code = registry.register_filterable("study_type.code")?;
        let target_type = registry.register_filterable("target_type")?;

        let teacher = registry.register_retrievable("teacher")?;
        let study_type_name_cs = registry.register_retrievable("study_type.name_cs")?;
        let study_type_name_en = registry.register_retrievable("study_type.name_en")?;
        let content = registry.register_retrievable("content")?;
        let study_type_abbr = registry.register_retrievable("study_type.abbr")?;

        Ok(Self {
            registry: Arc::new(registry),
            academic_year,
            course_code,
            study_year,
            semester,
            study_field,
            teacher_code,
            study_type_code,
            target_type,
            teacher,
            study_type_name_cs,
            study_type_name_en,
            content,
            study_type_abbr,
        })
    }

    pub fn registry(&self) -> &Arc<ParameterRegistry> {
        &self.registry
    }

    pub fn study_type_name(&self, lang: Language) -> &Parameter {
        match lang {
            Language::Cs => &self.study_type_name_cs,
            Language::En => &self.study_type_name_en,
        }
    }

    /// 검색 결과로 가져올 속성 목록.
    pub fn attributes(&self, lang: Language) -> Vec<String> {
        vec![
            self.content.name().to_string(),
            self.course_code.name().to_string(),
            self.study_year.name().to_string(),
            self.academic_year.name().to_string(),
            self.study_field.name().to_string(),
            self.teacher.name().to_string(),
            self.target_type.name().to_string(),
            self.study_type_code.name().to_string(),
            self.study_type_name(lang).name().to_string(),
        ]
    }

    /// 값별 개수를 요청할 패싯 목록.
    pub fn facets(&self, lang: Language) -> Vec<String> {
        vec![
            self.study_year.name().to_string(),
            self.academic_year.name().to_string(),
            self.study_field.name().to_string(),
            self.teacher_code.name().to_string(),
            self.target_type.name().to_string(),
            self.study_type_code.name().to_string(),
            self.study_type_name(lang).name().to_string(),
        ]
    }
}
