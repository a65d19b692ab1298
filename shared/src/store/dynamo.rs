use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::fmt::Debug;

use super::conversions::EMAIL_KEY;
use super::{DeleteCondition, Item, PutCondition, StoreError, UserTable};

/// Users table in DynamoDB, partition key `email` (S)
pub struct DynamoTable {
    client: DynamoClient,
    table_name: String,
}

impl DynamoTable {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

fn request_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> StoreError
where
    E: std::error::Error + 'static,
    R: Debug,
{
    StoreError::Request {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

fn put_condition_expression(condition: PutCondition) -> Option<String> {
    match condition {
        PutCondition::None => None,
        PutCondition::IfAbsent => Some(format!("attribute_not_exists({})", EMAIL_KEY)),
        PutCondition::IfExists => Some(format!("attribute_exists({})", EMAIL_KEY)),
    }
}

fn delete_condition_expression(condition: DeleteCondition) -> Option<String> {
    match condition {
        DeleteCondition::None => None,
        DeleteCondition::IfExists => Some(format!("attribute_exists({})", EMAIL_KEY)),
    }
}

#[async_trait]
impl UserTable for DynamoTable {
    async fn get_item(&self, email: &str) -> Result<Option<Item>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(EMAIL_KEY, AttributeValue::S(email.to_string()))
            .send()
            .await
            .map_err(|e| request_error("GetItem", e))?;

        Ok(result.item)
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| request_error("Scan", e))?;

            items.extend(page.items.unwrap_or_default());

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::info!("Scanned {} items from {}", items.len(), self.table_name);
        Ok(items)
    }

    async fn put_item(&self, item: Item, condition: PutCondition) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .set_condition_expression(put_condition_expression(condition))
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                PutItemError::ConditionalCheckFailedException(_) => StoreError::ConditionFailed,
                other => StoreError::Request {
                    operation: "PutItem",
                    message: DisplayErrorContext(&other).to_string(),
                },
            })?;

        Ok(())
    }

    async fn delete_item(&self, email: &str, condition: DeleteCondition) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(EMAIL_KEY, AttributeValue::S(email.to_string()))
            .set_condition_expression(delete_condition_expression(condition))
            .send()
            .await
            .map_err(|err| match err.into_service_error() {
                DeleteItemError::ConditionalCheckFailedException(_) => StoreError::ConditionFailed,
                other => StoreError::Request {
                    operation: "DeleteItem",
                    message: DisplayErrorContext(&other).to_string(),
                },
            })?;

        Ok(())
    }
}
