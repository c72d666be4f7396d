// 목적:
// - TOML 설정 파일을 읽어 애플리케이션 설정과 검색 서비스를 만든다.
//
// 설명:
// - [meilisearch] 섹션은 엔진 접속 정보, [search] 섹션은 URL 키와 페이지 크기를 담는다.
// - MEILI_MASTER_KEY 환경 변수가 있으면 meilisearch.key를 덮어쓴다.
// - 값 검증은 MeiliHttpEngine::new, CommentSearch::new, UrlQueryParser::new에만 둔다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/index/meili_client.rs
// - src_rs/core/search_service.rs

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::core::comment_params::CommentCatalog;
use crate::core::errors::{CoreError, CoreResult};
use crate::core::search_service::{CommentSearch, SearchConfigPayload};
use crate::index::meili_client::{MeiliConfigPayload, MeiliHttpEngine};

pub const MEILI_KEY_ENV: &str = "MEILI_MASTER_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub meilisearch: MeiliConfigPayload,
    #[serde(default)]
    pub search: SearchConfigPayload,
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> CoreResult<Self> {
        toml::from_str(raw)
            .map_err(|error| CoreError::InvalidConfig(format!("설정 TOML 파싱 실패: {}", error)))
    }

    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|error| {
            CoreError::InvalidConfig(format!(
                "설정 파일을 읽을 수 없습니다: path={}, error={}",
                path.display(),
                error
            ))
        })?;

        let mut config = Self::from_toml_str(&raw)?;
        if let Ok(key) = std::env::var(MEILI_KEY_ENV) {
            if !key.trim().is_empty() {
                config.meilisearch.key = Some(key);
            }
        }
        Ok(config)
    }

    /// 설정으로 엔진과 검색 서비스를 만든다. 값 검증은 각 생성자가 맡는다.
    pub fn build_search(
        &self,
        catalog: Arc<CommentCatalog>,
    ) -> CoreResult<CommentSearch<MeiliHttpEngine>> {
        let engine = MeiliHttpEngine::new(self.meilisearch.clone())?;
        CommentSearch::new(catalog, engine, self.search.clone())
    }
}
