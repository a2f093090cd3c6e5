//! End-to-end tests of the reqwest transport against a local fake PubChem.
//!
//! The fake server records every request it receives and answers from a
//! scripted list of statuses, repeating the last one once the script runs out.

#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use pretty_assertions::assert_eq;
use pubchem_application::{PubChemHttpError, SearchError};
use pubchem_domain::{
    CompoundNamespace, CompoundQuery, OutputFormat, SubstanceNamespace, SubstanceQuery, XrefKind,
};
use pubchem_infrastructure::{ClientConfig, connect};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    content_type: Option<String>,
    user_agent: Option<String>,
    form: BTreeMap<String, String>,
}

#[derive(Clone)]
struct FakePubChem {
    script: Arc<Mutex<VecDeque<u16>>>,
    received: Arc<Mutex<Vec<Recorded>>>,
}

impl FakePubChem {
    fn scripted(statuses: &[u16]) -> Self {
        Self {
            script: Arc::new(Mutex::new(statuses.iter().copied().collect())),
            received: Arc::default(),
        }
    }

    fn next_status(&self) -> u16 {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().copied().unwrap_or(200)
        }
    }

    fn received(&self) -> Vec<Recorded> {
        self.received.lock().unwrap().clone()
    }

    async fn start(&self) -> SocketAddr {
        let app = Router::new().fallback(answer).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }
}

async fn answer(
    State(fake): State<FakePubChem>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };
    fake.received.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        content_type: header_value(header::CONTENT_TYPE),
        user_agent: header_value(header::USER_AGENT),
        form: serde_urlencoded::from_str(&body).unwrap(),
    });

    let status = fake.next_status();
    let body = match status {
        200 => r#"{"PC_Compounds":[]}"#.to_string(),
        404 => "Status: 404\nCode: PUGREST.NotFound\nMessage: No CID found".to_string(),
        _ => String::new(),
    };
    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        prolog: format!("http://{addr}/rest/pug"),
        user_agent: "pubchem-tests/1.0".to_string(),
        timeout_ms: 5_000,
        retry_delay_ms: 20,
        ..ClientConfig::default()
    }
}

#[tokio::test]
async fn test_substance_record_posts_form_body() {
    init_tracing();
    let fake = FakePubChem::scripted(&[200]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    let response = search
        .search_substance(SubstanceQuery::new(
            SubstanceNamespace::Sid,
            [1234],
            OutputFormat::Json,
        ))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.text(), Some(r#"{"PC_Compounds":[]}"#));
    assert_eq!(response.content_type.as_deref(), Some("application/json"));

    let received = fake.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].path, "/rest/pug/substance/sid/record/JSON");
    assert_eq!(
        received[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(received[0].user_agent.as_deref(), Some("pubchem-tests/1.0"));
    assert_eq!(
        received[0].form,
        BTreeMap::from([("sid".to_string(), "1234".to_string())])
    );
}

#[tokio::test]
async fn test_compound_xref_is_path_embedded() {
    init_tracing();
    let fake = FakePubChem::scripted(&[200]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    search
        .search_compound(
            CompoundQuery::new(CompoundNamespace::Xref, ["abc"], OutputFormat::Json)
                .with_xref(XrefKind::RegistryId),
        )
        .await
        .unwrap();

    let received = fake.received();
    assert_eq!(received[0].path, "/rest/pug/compound/xref/RegistryID/abc/record/JSON");
    assert!(received[0].form.is_empty());
}

#[tokio::test]
async fn test_inchi_body_survives_form_encoding() {
    let fake = FakePubChem::scripted(&[200]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    search
        .search_compound(CompoundQuery::new(
            CompoundNamespace::Inchi,
            ["1S/C2H6O/c1-2-3/h3H,2H2,1H3"],
            OutputFormat::Sdf,
        ))
        .await
        .unwrap();

    let received = fake.received();
    assert_eq!(received[0].path, "/rest/pug/compound/inchi/record/SDF");
    assert_eq!(
        received[0].form.get("inchi").map(String::as_str),
        Some("InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3")
    );
}

#[tokio::test]
async fn test_server_busy_retried_until_exhausted() {
    init_tracing();
    let fake = FakePubChem::scripted(&[503]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    let err = search
        .search_substance(SubstanceQuery::new(
            SubstanceNamespace::Sid,
            [1],
            OutputFormat::Json,
        ))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SearchError::Http(PubChemHttpError::ServerBusy(
            "Too many requests or server is busy".to_string()
        ))
    );
    let received = fake.received();
    assert_eq!(received.len(), 3);
    assert!(received.iter().all(|r| r.form == received[0].form));
}

#[tokio::test]
async fn test_server_busy_then_success() {
    let fake = FakePubChem::scripted(&[503, 200]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    let response = search
        .search_substance(SubstanceQuery::new(
            SubstanceNamespace::Sid,
            [1],
            OutputFormat::Json,
        ))
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(fake.received().len(), 2);
}

#[tokio::test]
async fn test_not_found_fails_without_retry() {
    let fake = FakePubChem::scripted(&[404, 200]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    let err = search
        .search_compound(CompoundQuery::new(
            CompoundNamespace::Cid,
            [999_999_999],
            OutputFormat::Json,
        ))
        .await
        .unwrap_err();

    let http = err.as_http().unwrap();
    assert_eq!(http.status(), 404);
    assert!(http.message().contains("No CID found"));
    assert_eq!(fake.received().len(), 1);
}

#[tokio::test]
async fn test_invalid_query_never_reaches_server() {
    let fake = FakePubChem::scripted(&[200]);
    let addr = fake.start().await;
    let search = connect(&config_for(addr)).unwrap();

    let err = search
        .search_substance(SubstanceQuery::new(
            SubstanceNamespace::SourceId,
            ["747285"],
            OutputFormat::Json,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Validation(_)));
    assert!(fake.received().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let search = connect(&config_for(addr)).unwrap();

    let err = search
        .search_substance(SubstanceQuery::new(
            SubstanceNamespace::Sid,
            [1],
            OutputFormat::Json,
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::Transport(_)));
}

#[test]
fn test_connect_rejects_bad_prolog() {
    let config = ClientConfig {
        prolog: "not a url".to_string(),
        ..ClientConfig::default()
    };
    assert!(connect(&config).is_err());
}
