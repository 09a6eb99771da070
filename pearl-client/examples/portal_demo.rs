// pearl-client/examples/portal_demo.rs
// Fetch reference data and a member list from a running portal backend

use std::sync::Arc;

use serde_json::Value;

use pearl_client::{ApiResult, ClientConfig, JsonFileStore, PortalClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url =
        std::env::var("PEARL_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let store_path =
        std::env::var("PEARL_STORE_PATH").unwrap_or_else(|_| "./pearl-store.json".to_string());

    let store = Arc::new(JsonFileStore::load(&store_path)?);
    let client = PortalClient::builder()
        .config(ClientConfig::new(&base_url))
        .store(store)
        .build()?;

    let member_types = client.code_list("MEMBER_TYPE").await;
    tracing::info!(count = member_types.len(), "Fetched member type codes");
    for item in &member_types {
        tracing::info!(value = %item.value, text = %item.text, "code");
    }

    if let Some(title) = client.variable("title").await {
        tracing::info!(title = %title, "Portal title");
    }

    let members: ApiResult<Vec<Value>> = client.get_list("members").await;
    tracing::info!(
        code = %members.code,
        total = ?members.pagination_total_length,
        "Member list fetched"
    );

    Ok(())
}
