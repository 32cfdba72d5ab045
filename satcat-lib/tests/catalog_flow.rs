//! End-to-end catalog browsing against a local stand-in for the remote
//! search service.

use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;
use std::sync::Mutex;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper::Response;
use hyper::StatusCode;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use url::Url;

use satcat_lib::browse::CatalogBrowser;
use satcat_lib::handoff::HandoffStore;
use satcat_lib::handoff::InMemoryHandoffStore;
use satcat_lib::handoff::SELECTED_RECORDS_KEY;
use satcat_lib::model::ObjectType;
use satcat_lib::model::SatelliteRecord;
use satcat_lib::nav::Navigator;
use satcat_lib::query::FilterCriteria;
use satcat_lib::query::SearchCriteria;
use satcat_lib::SatcatClient;
use satcat_lib::SearchResponse;

/// Serves the given body for every request on an ephemeral local port.
async fn serve(status: StatusCode, body: String) -> SocketAddr {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let body = body.clone();
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                let service = service_fn(move |_req: Request<Incoming>| {
                    let body = body.clone();
                    async move {
                        let response = Response::builder()
                            .status(status)
                            .header("content-type", "application/json")
                            .body(Full::new(Bytes::from(body)))
                            .unwrap();
                        Ok::<_, Infallible>(response)
                    }
                });
                let _ = http1::Builder::new().serve_connection(io, service).await;
            });
        }
    });

    addr
}

async fn client_for(status: StatusCode, body: String) -> SatcatClient {
    let addr = serve(status, body).await;
    SatcatClient::builder().url(format!("http://{addr}")).build()
}

fn two_record_payload() -> String {
    r#"{"message":"OK","data":[
        {"id":1,"name":"Alpha","noradCatId":"100","objectType":"PAYLOAD","orbitalCode":"LEO"},
        {"id":2,"name":"Beta","noradCatId":"200","objectType":"DEBRIS","orbitalCode":"GEO"}
    ]}"#
    .to_string()
}

fn names(records: &[SatelliteRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

/// Navigator that records opened URLs instead of spawning a browser.
#[derive(Default)]
struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_fetch_filter_search_flow() {
    let client = client_for(StatusCode::OK, two_record_payload()).await;

    let mut browser = CatalogBrowser::new();
    browser.initialize(&client).await;

    assert!(browser.state().is_ready());
    assert_eq!(names(browser.displayed()), ["Alpha", "Beta"]);

    browser.apply_filters(FilterCriteria::new().with_object_types([ObjectType::Debris]));
    assert_eq!(names(browser.displayed()), ["Beta"]);

    browser.apply_search(SearchCriteria::new().with_name("al"));
    assert_eq!(names(browser.displayed()), ["Alpha"]);
}

#[tokio::test]
async fn test_in_band_failure_enters_error_state() {
    let client = client_for(
        StatusCode::OK,
        r#"{"message":"ERR","status":500}"#.to_string(),
    )
    .await;

    let mut browser = CatalogBrowser::new();
    browser.initialize(&client).await;

    let failure = browser.fetch_failure().expect("fetch should have failed");
    assert_eq!(failure.status, Some(500));
    assert_eq!(failure.message, "ERR");
    assert!(browser.displayed().is_empty());
    assert!(!browser.is_loading());
}

#[tokio::test]
async fn test_transport_failure_is_normalized() {
    let client = client_for(
        StatusCode::SERVICE_UNAVAILABLE,
        "upstream exploded".to_string(),
    )
    .await;

    let mut browser = CatalogBrowser::new();
    browser.initialize(&client).await;

    let failure = browser.fetch_failure().expect("fetch should have failed");
    assert_eq!(failure.status, Some(503));
    assert!(browser.records().is_empty());
}

#[tokio::test]
async fn test_selection_limit_end_to_end() {
    let records: Vec<_> = (0..12)
        .map(|i| {
            SatelliteRecord::new(
                i.to_string(),
                format!("Sat {i:02}"),
                (100 + i).to_string(),
                ObjectType::Payload,
                "LEO",
            )
        })
        .collect();
    let body = serde_json::to_string(&SearchResponse::ok(records)).unwrap();
    let client = client_for(StatusCode::OK, body).await;

    let mut browser = CatalogBrowser::new();
    browser.initialize(&client).await;
    assert_eq!(browser.shown_count(), 12);

    for position in 0..10 {
        let record = browser.displayed()[position].clone();
        browser.toggle_selection(&record, position).unwrap();
    }

    let eleventh = browser.displayed()[10].clone();
    let err = browser.toggle_selection(&eleventh, 10).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Selection limit exceeded. Max allowed is 10."
    );
    assert_eq!(browser.selection().len(), 10);
}

#[tokio::test]
async fn test_proceed_hands_selection_off_and_opens_view() {
    let client = client_for(StatusCode::OK, two_record_payload()).await;

    let mut browser = CatalogBrowser::new();
    browser.initialize(&client).await;

    let alpha = browser.displayed()[0].clone();
    browser.toggle_selection(&alpha, 0).unwrap();

    let store = InMemoryHandoffStore::new();
    let navigator = RecordingNavigator::default();
    let origin = Url::parse("https://viewer.example").unwrap();

    browser.proceed(&store, &navigator, &origin).await.unwrap();

    let entry = store
        .get(SELECTED_RECORDS_KEY)
        .await
        .unwrap()
        .expect("selection should have been persisted");
    let handed_off = entry.records().unwrap();
    assert_eq!(names(&handed_off), ["Alpha"]);

    assert_eq!(navigator.opened(), ["https://viewer.example/selectedData"]);
}

#[tokio::test]
async fn test_proceed_with_empty_selection_still_opens_view() {
    let client = client_for(StatusCode::OK, two_record_payload()).await;

    let mut browser = CatalogBrowser::new();
    browser.initialize(&client).await;

    let store = InMemoryHandoffStore::new();
    let navigator = RecordingNavigator::default();
    let origin = Url::parse("https://viewer.example").unwrap();

    browser.proceed(&store, &navigator, &origin).await.unwrap();

    assert!(store.get(SELECTED_RECORDS_KEY).await.unwrap().is_none());
    assert_eq!(navigator.opened(), ["https://viewer.example/selectedData"]);
}
