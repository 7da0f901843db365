//! Paperdesk demo binary
//!
//! Fetches the project list from the API and prints it, with the open
//! project slice exercised for the first project found.

use anyhow::Result;
use paperdesk_app::Paperdesk;
use paperdesk_client::ApiClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paperdesk_app=info,paperdesk_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ApiClient::from_env();
    println!("Paperdesk API: {}\n", client.base_url());

    let app = Paperdesk::new(client);

    app.project_list().get().await?;
    let projects = app.store().state(|s| s.project_list.items.clone()).await;
    tracing::info!(count = projects.len(), "project list loaded");

    println!("Projects ({}):", projects.len());
    for project in &projects {
        println!("  {} - {} papers", project.name, project.papers.len());
    }

    if let Some(first) = projects.first() {
        app.project().get(&first.name).await?;

        let open = app.store().state(|s| s.project_model.clone()).await;
        if let Some(project) = open.model {
            println!("\nOpen project: {}", project.name);
            for paper in &project.papers {
                println!("  [{}] {}", paper.clean_id, paper.title);
            }
        }
    }

    Ok(())
}
