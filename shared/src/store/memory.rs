use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::conversions::item_email;
use super::{DeleteCondition, Item, PutCondition, StoreError, UserTable};

/// In-process table holding the same attribute maps DynamoDB would.
/// Used by tests and by local runs with `USERS_STORE=memory`; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    items: Arc<RwLock<HashMap<String, Item>>>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserTable for MemoryTable {
    async fn get_item(&self, email: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(email).cloned())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().await;
        let mut all: Vec<Item> = items.values().cloned().collect();
        // Stable order so listings are deterministic
        all.sort_by(|a, b| item_email(a).cmp(&item_email(b)));
        Ok(all)
    }

    async fn put_item(&self, item: Item, condition: PutCondition) -> Result<(), StoreError> {
        let email = item_email(&item)
            .ok_or_else(|| StoreError::Request {
                operation: "PutItem",
                message: "item is missing the email key".to_string(),
            })?
            .to_string();

        let mut items = self.items.write().await;
        let exists = items.contains_key(&email);
        match condition {
            PutCondition::IfAbsent if exists => return Err(StoreError::ConditionFailed),
            PutCondition::IfExists if !exists => return Err(StoreError::ConditionFailed),
            _ => {}
        }
        items.insert(email, item);
        Ok(())
    }

    async fn delete_item(&self, email: &str, condition: DeleteCondition) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        if condition == DeleteCondition::IfExists && !items.contains_key(email) {
            return Err(StoreError::ConditionFailed);
        }
        items.remove(email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::conversions::user_to_item;
    use crate::types::User;

    fn item(email: &str) -> Item {
        user_to_item(&User {
            email: email.into(),
            first_name: "A".into(),
            last_name: "B".into(),
        })
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let table = MemoryTable::new();
        table.put_item(item("a@example.com"), PutCondition::None).await.unwrap();

        assert!(table.get_item("a@example.com").await.unwrap().is_some());
        assert!(table.get_item("b@example.com").await.unwrap().is_none());

        table.delete_item("a@example.com", DeleteCondition::None).await.unwrap();
        assert!(table.scan().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_conditional_put() {
        let table = MemoryTable::new();
        table.put_item(item("a@example.com"), PutCondition::IfAbsent).await.unwrap();

        let again = table.put_item(item("a@example.com"), PutCondition::IfAbsent).await;
        assert!(matches!(again, Err(StoreError::ConditionFailed)));

        let missing = table.put_item(item("b@example.com"), PutCondition::IfExists).await;
        assert!(matches!(missing, Err(StoreError::ConditionFailed)));
        assert_eq!(table.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_conditional_delete_of_missing_key() {
        let table = MemoryTable::new();
        let result = table.delete_item("a@example.com", DeleteCondition::IfExists).await;
        assert!(matches!(result, Err(StoreError::ConditionFailed)));

        // Unconditional delete of a missing key is a no-op, as in DynamoDB
        table.delete_item("a@example.com", DeleteCondition::None).await.unwrap();
    }

    #[tokio::test]
    async fn test_scan_is_sorted_by_email() {
        let table = MemoryTable::new();
        for email in ["c@example.com", "a@example.com", "b@example.com"] {
            table.put_item(item(email), PutCondition::None).await.unwrap();
        }

        let emails: Vec<String> = table
            .scan()
            .await
            .unwrap()
            .iter()
            .filter_map(|i| item_email(i).map(str::to_string))
            .collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);
    }
}
