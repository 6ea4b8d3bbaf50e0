//! Live tests against the real e-Boekhouden API.
//!
//! These tests are ignored by default. They only read data and end the
//! session they create.
//!
//! Environment variables required:
//! - EBOEKHOUDEN_ACCESS_TOKEN: API token from the e-Boekhouden settings
//! - EBOEKHOUDEN_SOURCE: Source identifier (max 10 characters)
//!
//! Run with: cargo test --test live_api -- --ignored --test-threads=1

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use eboekhouden::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Create a client from the environment
fn create_client() -> EBoekhoudenClient {
    init_logging();
    EBoekhoudenClient::from_env().expect("EBOEKHOUDEN_ACCESS_TOKEN and EBOEKHOUDEN_SOURCE must be set")
}

#[tokio::test]
#[ignore]
async fn test_session_lifecycle() {
    let client = create_client();

    let info = client.create_session().await.expect("Should create session");
    assert!(info.expires_in() > 0);
    tracing::info!("Session valid for {} seconds", info.expires_in());

    client.end_session().await.expect("Should end session");
    assert!(!client.session().is_active().await);
}

#[tokio::test]
#[ignore]
async fn test_list_administrations() {
    let client = create_client();

    let administrations = client.administrations().list(None).await;
    assert!(administrations.is_ok(), "Should list administrations: {:?}", administrations);
    tracing::info!("Administrations: {}", administrations.unwrap().len());

    client.end_session().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_list_relations_with_filter() {
    let client = create_client();

    let query = ListQuery::new().limit(5).param("id", filter::gte(1));
    let relations = client.relations().list(Some(query)).await;
    assert!(relations.is_ok(), "Should list relations: {:?}", relations);

    let relations = relations.unwrap();
    assert!(relations.len() <= 5);
    for relation in &relations.items {
        tracing::info!("Relation: {:?} {:?}", relation.get("code"), relation.get("name"));
    }

    client.end_session().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_outstanding_invoices() {
    let client = create_client();

    for side in [CredDeb::Creditor, CredDeb::Debtor] {
        let invoices = client.mutations().outstanding_invoices(side, None).await;
        assert!(invoices.is_ok(), "Should list outstanding {} invoices: {:?}", side, invoices);
    }

    client.end_session().await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_get_missing_invoice() {
    let client = create_client();

    let result = client.invoices().get(u64::MAX).await;
    let err = result.expect_err("Should fail for missing invoice");
    assert!(err.is_client_error(), "Unexpected error: {:?}", err);
    tracing::info!("Error: {} (code {:?})", err, err.code());

    client.end_session().await.unwrap();
}
