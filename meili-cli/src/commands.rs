//! Command execution.
//!
//! Every command resolves to a JSON value that the binary prints.

use std::path::Path;
use std::time::Duration;

use meili_client::Client;
use meili_client_shared::{
    CreateIndexRequest, ListDocumentsRequest, SearchRequest, UpdateIdResponse,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::cli::{Command, DocumentsCommand, IndexesCommand, UpdatesCommand};
use crate::CliError;

/// Run a command against the service.
pub async fn run(client: &Client, command: Command) -> Result<Value, CliError> {
    match command {
        Command::Health => {
            client.health().get().await?;
            Ok(json!({ "status": "available" }))
        }
        Command::Version => to_json(client.version().get().await?),
        Command::Indexes(command) => run_indexes(client, command).await,
        Command::Documents(command) => run_documents(client, command).await,
        Command::Search {
            index,
            query,
            offset,
            limit,
            filters,
        } => {
            let mut request = SearchRequest::new(query);
            if let Some(offset) = offset {
                request = request.with_offset(offset);
            }
            if let Some(limit) = limit {
                request = request.with_limit(limit);
            }
            if let Some(filters) = filters {
                request = request.with_filters(filters);
            }
            to_json(client.search(index).search::<Value>(&request).await?)
        }
        Command::Updates(command) => run_updates(client, command).await,
        Command::Stats { index: Some(index) } => to_json(client.stats().get(&index).await?),
        Command::Stats { index: None } => to_json(client.stats().list().await?),
    }
}

async fn run_indexes(client: &Client, command: IndexesCommand) -> Result<Value, CliError> {
    match command {
        IndexesCommand::List => to_json(client.indexes().list().await?),
        IndexesCommand::Get { uid } => to_json(client.indexes().get(&uid).await?),
        IndexesCommand::Create { uid, name } => {
            let mut request = CreateIndexRequest::new();
            if let Some(uid) = uid {
                request = request.with_uid(uid);
            }
            if let Some(name) = name {
                request = request.with_name(name);
            }
            to_json(client.indexes().create(&request).await?)
        }
        IndexesCommand::Delete { uid } => {
            client.indexes().delete(&uid).await?;
            Ok(json!({ "deleted": uid }))
        }
    }
}

async fn run_documents(client: &Client, command: DocumentsCommand) -> Result<Value, CliError> {
    match command {
        DocumentsCommand::Get { index, id } => {
            to_json(client.documents(index).get::<Value>(&id).await?)
        }
        DocumentsCommand::Add { index, file, wait } => {
            let documents = read_documents(&file)?;
            info!(index = %index, count = documents.len(), "Adding documents");
            let handle = client.documents(index.as_str()).add_or_update(&documents).await?;
            if wait {
                let update = client
                    .updates(index)
                    .wait_for(handle, Duration::from_millis(50), Duration::from_secs(30))
                    .await?;
                to_json(update)
            } else {
                to_json(handle)
            }
        }
        DocumentsCommand::List {
            index,
            offset,
            limit,
        } => {
            let mut request = ListDocumentsRequest::new();
            if let Some(offset) = offset {
                request = request.with_offset(offset);
            }
            if let Some(limit) = limit {
                request = request.with_limit(limit);
            }
            to_json(client.documents(index).list::<Value>(&request).await?)
        }
    }
}

async fn run_updates(client: &Client, command: UpdatesCommand) -> Result<Value, CliError> {
    match command {
        UpdatesCommand::Get { index, id } => to_json(client.updates(index).get(id).await?),
        UpdatesCommand::Wait {
            index,
            id,
            interval_ms,
            timeout_ms,
        } => {
            let update = client
                .updates(index)
                .wait_for(
                    UpdateIdResponse::new(id),
                    Duration::from_millis(interval_ms),
                    Duration::from_millis(timeout_ms),
                )
                .await?;
            to_json(update)
        }
    }
}

/// Read a JSON array of documents from a file.
fn read_documents(path: &Path) -> Result<Vec<Value>, CliError> {
    let content = std::fs::read_to_string(path)?;
    let documents: Value = serde_json::from_str(&content)?;
    match documents {
        Value::Array(documents) if !documents.is_empty() => Ok(documents),
        Value::Array(_) => Err(CliError::input(format!(
            "{} holds no documents",
            path.display()
        ))),
        _ => Err(CliError::input(format!(
            "{} must hold a JSON array of documents",
            path.display()
        ))),
    }
}

fn to_json(value: impl Serialize) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}
