// 목적:
// - 외부 검색 엔진(Index Engine) 경계를 정의한다.
//
// 설명:
// - 엔진은 고정된 요청을 받아 원시 응답 바이트를 돌려준다. 디코딩은 코어 계층이 맡는다.
// - 반환 Future를 drop하면 진행 중인 호출도 함께 중단된다. 재시도는 하지 않는다.
//
// 디자인 패턴:
// - 어댑터(Adapter) 경계 트레이트.
//
// 참조:
// - src_rs/index/meili_client.rs
// - src_rs/core/search_service.rs

use std::future::Future;

use crate::core::errors::CoreResult;
use crate::core::request::SearchRequest;

pub trait IndexEngine: Send + Sync {
    /// 단일 검색을 실행하고 응답 본문을 반환한다.
    fn search(&self, request: &SearchRequest) -> impl Future<Output = CoreResult<Vec<u8>>> + Send;

    /// 여러 검색을 한 번에 실행하고 `{"results": [...]}` 응답 본문을 반환한다.
    fn multi_search(
        &self,
        requests: &[SearchRequest],
    ) -> impl Future<Output = CoreResult<Vec<u8>>> + Send;
}
