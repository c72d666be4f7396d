use std::sync::atomic::Ordering;
use std::time::Duration;

use comment_search::core::search_service::SearchConfigPayload;
use comment_search::{CommentSearch, CoreError, Language};

use crate::support::{catalog, service, FakeEngine};

const EMPTY: &str = r#"{"hits": [], "facetDistribution": {}, "estimatedTotalHits": 0}"#;

#[tokio::test]
async fn search_passes_the_compiled_request_to_the_engine() {
    let engine = FakeEngine::responding(
        r#"{"hits": [{"course_code": "PV001", "content": "ok"}], "estimatedTotalHits": 1}"#,
    );
    let search = service(engine.clone());
    let request = search
        .parse_http_query("q=ucitel&offset=20&par1=2023&par1=2024&foo=bar", Language::Cs)
        .unwrap()
        .add_course("PV001")
        .build()
        .unwrap();

    let result = search.comments(&request).await.unwrap();
    assert_eq!(result.hits.len(), 1);
    assert_eq!(result.hits[0].content, "ok");

    let sent = engine.searches.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].query(), "ucitel");
    assert_eq!(sent[0].offset(), 20);
    assert_eq!(sent[0].limit(), 20);
    assert_eq!(
        sent[0].filter(),
        "academic_year IN [2023,2024] AND course_code IN [PV001]"
    );
    assert_eq!(sent[0].sort(), ["academic_year:desc"]);
}

#[tokio::test]
async fn engine_failures_surface_unchanged() {
    let engine = FakeEngine::default();
    let search = service(engine.clone());
    let request = search.build_request(Language::En).build().unwrap();

    let error = search.comments(&request).await.unwrap_err();
    assert!(matches!(error, CoreError::Http(ref message) if message == "engine unavailable"));
    assert_eq!(engine.searches.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_engine_response_is_a_decode_error() {
    let search = service(FakeEngine::responding(r#"{"hits": "nope"}"#));
    let request = search.build_request(Language::En).build().unwrap();

    assert!(matches!(
        search.comments(&request).await,
        Err(CoreError::Decode(_))
    ));
}

#[tokio::test]
async fn facets_use_multi_search_only_when_filtered() {
    let engine = FakeEngine::responding(EMPTY);
    let search = service(engine.clone());

    let unfiltered = search.build_request(Language::En).build().unwrap();
    search.comments_with_facets(&unfiltered).await.unwrap();
    assert_eq!(engine.searches.lock().unwrap().len(), 1);
    assert!(engine.multi_searches.lock().unwrap().is_empty());

    *engine.response.lock().unwrap() = Some(
        br#"{"results": [
            {"hits": [], "facetDistribution": {"study_year": {"2": 3}}},
            {"hits": [], "facetDistribution": {"study_year": {"1": 8, "2": 3}}}
        ]}"#
        .to_vec(),
    );
    let filtered = search
        .parse_http_query("par3=2", Language::En)
        .unwrap()
        .build()
        .unwrap();
    let result = search.comments_with_facets(&filtered).await.unwrap();

    let batches = engine.multi_searches.lock().unwrap();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 2);
    assert_eq!(batches[0][0], filtered);
    assert_eq!(batches[0][1].filter(), "");
    assert_eq!(result.facets["study_year"]["1"], 8);
}

#[tokio::test]
async fn invalid_offset_is_a_client_error() {
    let search = service(FakeEngine::responding(EMPTY));
    let error = search
        .parse_http_query("offset=-3", Language::En)
        .unwrap_err();
    assert!(matches!(error, CoreError::InvalidInput(_)));
    assert!(error.is_client_error());
}

#[tokio::test]
async fn unknown_filter_key_never_reaches_the_engine() {
    let engine = FakeEngine::responding(EMPTY);
    let search = service(engine.clone());

    let error = search
        .parse_http_query("par99=x", Language::En)
        .unwrap_err();
    assert!(matches!(error, CoreError::BadParameterReference { .. }));
    assert!(engine.searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn search_within_deadline_succeeds() {
    let search = service(FakeEngine::responding(EMPTY));
    let request = search.build_request(Language::En).build().unwrap();

    let generous = tokio::time::Instant::now() + Duration::from_secs(5);
    assert!(search.comments_until(&request, generous).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn search_past_deadline_times_out_and_drops_the_engine_call() {
    let engine = FakeEngine::responding(EMPTY).delayed(Duration::from_secs(5));
    let search = service(engine.clone());
    let request = search.build_request(Language::En).build().unwrap();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    let error = search.comments_until(&request, deadline).await.unwrap_err();

    assert!(matches!(error, CoreError::Http(_)));
    assert!(!error.is_client_error());
    assert!(engine.started.load(Ordering::SeqCst));
    assert!(engine.dropped.load(Ordering::SeqCst));
    assert!(!engine.completed.load(Ordering::SeqCst));
}

#[test]
fn zero_default_limit_is_rejected() {
    let config = SearchConfigPayload {
        default_limit: 0,
        ..SearchConfigPayload::default()
    };
    assert!(matches!(
        CommentSearch::new(catalog(), FakeEngine::default(), config),
        Err(CoreError::InvalidConfig(_))
    ));
}
