//! Single-table storage seam.
//!
//! The user operations in [`crate::users`] talk to a [`UserTable`], which
//! moves raw DynamoDB attribute maps. [`dynamo::DynamoTable`] is the real
//! table; [`memory::MemoryTable`] keeps the same maps in process.

pub mod conversions;
pub mod dynamo;
pub mod memory;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use thiserror::Error;

/// One stored record, keyed by its `email` attribute
pub type Item = HashMap<String, AttributeValue>;

/// Guard attached to a put
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutCondition {
    None,
    /// `attribute_not_exists(email)`
    IfAbsent,
    /// `attribute_exists(email)`
    IfExists,
}

/// Guard attached to a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCondition {
    None,
    /// `attribute_exists(email)`
    IfExists,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("conditional check failed")]
    ConditionFailed,
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
}

#[async_trait]
pub trait UserTable: Send + Sync {
    async fn get_item(&self, email: &str) -> Result<Option<Item>, StoreError>;

    /// Every item in the table; follows pagination until exhausted
    async fn scan(&self) -> Result<Vec<Item>, StoreError>;

    async fn put_item(&self, item: Item, condition: PutCondition) -> Result<(), StoreError>;

    async fn delete_item(&self, email: &str, condition: DeleteCondition) -> Result<(), StoreError>;
}
