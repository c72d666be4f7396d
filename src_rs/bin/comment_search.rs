// 목적:
// - 설정 파일과 HTTP 쿼리 문자열로 코멘트 검색을 한 번 실행하는 CLI를 제공한다.
//
// 설명:
// - 결과는 JSON으로 표준 출력에 쓰고, 로그는 표준 오류로 보낸다.
// - 클라이언트 입력 오류는 종료 코드 2, 그 밖의 오류는 1을 쓴다.
//
// 참조:
// - src_rs/core/search_service.rs
// - src_rs/api/config.rs

use clap::Parser;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::error;

use comment_search::api::config::AppConfig;
use comment_search::api::logging::init_tracing;
use comment_search::{CommentCatalog, CoreError, CoreResult};

#[derive(Debug, Parser)]
#[command(name = "comment-search", about = "Search course comments in Meilisearch")]
struct Args {
    /// TOML 설정 파일 경로
    #[arg(long, env = "COMMENT_SEARCH_CONFIG")]
    config: PathBuf,

    /// 언어 태그 (cs, en)
    #[arg(long, default_value = "cs")]
    lang: String,

    /// `q=...&par1=2023&par2=PV001` 형태의 쿼리 문자열
    #[arg(long, default_value = "")]
    query_string: String,

    /// 강의 코드 조건 추가
    #[arg(long)]
    course: Option<String>,

    /// 교원 코드 조건 추가
    #[arg(long)]
    teacher: Option<String>,

    /// 필터된 패싯의 분포를 자기 조건 없이 함께 계산
    #[arg(long)]
    facets: bool,

    /// 전체 호출 제한 시간(ms)
    #[arg(long, default_value_t = 10_000)]
    deadline_ms: u64,
}

fn main() {
    let args = Args::parse();
    if let Err(error) = init_tracing() {
        eprintln!("{}", error);
    }

    if let Err(error) = run(args) {
        error!(error = %error, "comment search failed");
        let code = if error.is_client_error() { 2 } else { 1 };
        process::exit(code);
    }
}

fn run(args: Args) -> CoreResult<()> {
    let config = AppConfig::load(&args.config)?;
    let catalog = Arc::new(CommentCatalog::new()?);
    let search = config.build_search(catalog)?;

    let lang = args.lang.parse()?;
    let mut builder = search.parse_http_query(&args.query_string, lang)?;
    if let Some(course) = args.course.as_deref() {
        builder = builder.add_course(course);
    }
    if let Some(teacher) = args.teacher.as_deref() {
        builder = builder.add_teacher(teacher);
    }
    let request = builder.build()?;

    let runtime = create_runtime()?;
    let result = runtime.block_on(async {
        let call = async {
            if args.facets {
                search.comments_with_facets(&request).await
            } else {
                search.comments(&request).await
            }
        };
        tokio::time::timeout(Duration::from_millis(args.deadline_ms.max(1)), call)
            .await
            .map_err(|_| CoreError::Http("검색 엔진 호출 시간이 초과되었습니다".to_string()))?
    })?;

    let output = serde_json::to_string_pretty(&result)
        .map_err(|error| CoreError::Serialization(format!("검색 결과 직렬화 실패: {}", error)))?;
    println!("{}", output);
    Ok(())
}

fn create_runtime() -> CoreResult<Runtime> {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|error| CoreError::Runtime(format!("Tokio 런타임 생성 실패: {}", error)))
}
