// 목적:
// - 검색 요청이 사용하는 UI 언어를 정의한다.
//
// 설명:
// - 지원 언어는 닫힌 열거형으로만 표현한다.
// - 알 수 없는 언어 태그는 요청 생성 전에 UnsupportedLanguage로 실패한다.
//
// 참조:
// - src_rs/core/comment_params.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cs,
    En,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Cs => "cs",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "cs" => Ok(Language::Cs),
            "en" => Ok(Language::En),
            _ => Err(CoreError::UnsupportedLanguage(tag.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
