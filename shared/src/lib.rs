pub mod types;
pub mod config;
pub mod errors;
pub mod validators;
pub mod store;
pub mod users;
pub mod response;
pub mod handlers;

use config::{Config, StoreBackend, WriteMode};
use store::dynamo::DynamoTable;
use store::memory::MemoryTable;
use store::UserTable;
use std::sync::Arc;

/// Shared application state, built once per cold start
pub struct AppState {
    pub table: Box<dyn UserTable>,
    pub write_mode: WriteMode,
}

impl AppState {
    pub fn new(table: Box<dyn UserTable>, write_mode: WriteMode) -> Arc<Self> {
        Arc::new(Self { table, write_mode })
    }

    /// Picks the table backend named by the config
    pub async fn from_config(config: &Config) -> Arc<Self> {
        let table: Box<dyn UserTable> = match config.backend {
            StoreBackend::DynamoDb => {
                let aws_config = aws_config::load_from_env().await;
                let client = aws_sdk_dynamodb::Client::new(&aws_config);
                Box::new(DynamoTable::new(client, config.table_name.clone()))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory user table; data is lost when the process exits");
                Box::new(MemoryTable::new())
            }
        };
        Self::new(table, config.write_mode)
    }

    pub fn table(&self) -> &dyn UserTable {
        self.table.as_ref()
    }

    pub fn write_mode(&self) -> WriteMode {
        self.write_mode
    }
}
