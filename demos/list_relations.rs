//! Basic usage example.
//!
//! This example demonstrates how to authenticate with the e-Boekhouden API,
//! list relations and outstanding invoices, and end the session.
//!
//! Run with: cargo run --example list_relations

use eboekhouden::{filter, CredDeb, EBoekhoudenClient, ListQuery};

#[tokio::main]
async fn main() -> eboekhouden::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Reads EBOEKHOUDEN_ACCESS_TOKEN and EBOEKHOUDEN_SOURCE
    let client = EBoekhoudenClient::from_env()?;

    let info = client.create_session().await?;
    println!("Session created, valid for {} seconds", info.expires_in());

    // Companies only, first page
    let query = ListQuery::new().limit(20).param("type", filter::eq("B"));
    let relations = client.relations().list(Some(query)).await?;
    println!("\nFound {} relation(s):", relations.len());

    for relation in &relations.items {
        println!(
            "  - {} {}",
            relation.get("code").and_then(|v| v.as_str()).unwrap_or("?"),
            relation.get("name").and_then(|v| v.as_str()).unwrap_or("No name")
        );
    }

    let unpaid = client
        .mutations()
        .outstanding_invoices(CredDeb::Debtor, None)
        .await?;
    println!("\nOutstanding debtor invoices: {}", unpaid.len());

    client.end_session().await?;
    println!("\nDone!");
    Ok(())
}
