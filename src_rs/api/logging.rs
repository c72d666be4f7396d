// 목적:
// - tracing 구독자를 초기화한다.
//
// 설명:
// - RUST_LOG가 있으면 따르고, 없으면 info 레벨을 쓴다.
// - 라이브러리는 구독자를 설치하지 않는다. 실행 파일에서만 호출한다.
//
// 참조:
// - src_rs/bin/comment_search.rs

use tracing_subscriber::{fmt, EnvFilter};

use crate::core::errors::{CoreError, CoreResult};

pub fn init_tracing() -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CoreError::Runtime(format!("tracing 초기화 실패: {}", error)))
}
