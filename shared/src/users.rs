use crate::config::WriteMode;
use crate::errors::UserError;
use crate::store::conversions::{item_to_user, user_to_item};
use crate::store::{DeleteCondition, PutCondition, StoreError, UserTable};
use crate::types::User;
use crate::validators::is_email_valid;

pub const DELETE_CONFIRMATION: &str = "User successfully deleted";

/// Point lookup by email
pub async fn fetch_user(table: &dyn UserTable, email: &str) -> Result<User, UserError> {
    let item = table.get_item(email).await.map_err(|e| {
        tracing::error!("GetItem for {} failed: {}", email, e);
        UserError::Fetch
    })?;

    match item {
        Some(item) => item_to_user(&item),
        None => Err(UserError::NotFound),
    }
}

/// Every user in the table
pub async fn fetch_all_users(table: &dyn UserTable) -> Result<Vec<User>, UserError> {
    let items = table.scan().await.map_err(|e| {
        tracing::error!("Scan failed: {}", e);
        UserError::Fetch
    })?;

    items.iter().map(item_to_user).collect()
}

/// Create a user from a JSON body. The existence check and the put are
/// separate calls; in `CheckThenWrite` mode a concurrent create can slip between them.
pub async fn create_user(
    table: &dyn UserTable,
    mode: WriteMode,
    body: &[u8],
) -> Result<User, UserError> {
    let user = parse_user(body)?;

    if fetch_user(table, &user.email).await.is_ok() {
        return Err(UserError::AlreadyExists);
    }

    let condition = match mode {
        WriteMode::CheckThenWrite => PutCondition::None,
        WriteMode::Conditional => PutCondition::IfAbsent,
    };

    table
        .put_item(user_to_item(&user), condition)
        .await
        .map_err(|e| match e {
            StoreError::ConditionFailed => UserError::AlreadyExists,
            e => {
                tracing::error!("PutItem for {} failed: {}", user.email, e);
                UserError::Insert
            }
        })?;

    tracing::info!("Created user {}", user.email);
    Ok(user)
}

/// Replace an existing user's record with the JSON body (full replace, not a patch)
pub async fn update_user(
    table: &dyn UserTable,
    mode: WriteMode,
    body: &[u8],
) -> Result<User, UserError> {
    let user = parse_user(body)?;

    if fetch_user(table, &user.email).await.is_err() {
        return Err(UserError::NotFound);
    }

    let condition = match mode {
        WriteMode::CheckThenWrite => PutCondition::None,
        WriteMode::Conditional => PutCondition::IfExists,
    };

    table
        .put_item(user_to_item(&user), condition)
        .await
        .map_err(|e| match e {
            StoreError::ConditionFailed => UserError::NotFound,
            e => {
                tracing::error!("PutItem for {} failed: {}", user.email, e);
                UserError::Insert
            }
        })?;

    tracing::info!("Updated user {}", user.email);
    Ok(user)
}

pub async fn delete_user(
    table: &dyn UserTable,
    mode: WriteMode,
    email: &str,
) -> Result<&'static str, UserError> {
    if fetch_user(table, email).await.is_err() {
        return Err(UserError::NotFound);
    }

    let condition = match mode {
        WriteMode::CheckThenWrite => DeleteCondition::None,
        WriteMode::Conditional => DeleteCondition::IfExists,
    };

    table.delete_item(email, condition).await.map_err(|e| match e {
        StoreError::ConditionFailed => UserError::NotFound,
        e => {
            tracing::error!("DeleteItem for {} failed: {}", email, e);
            UserError::Delete
        }
    })?;

    tracing::info!("Deleted user {}", email);
    Ok(DELETE_CONFIRMATION)
}

fn parse_user(body: &[u8]) -> Result<User, UserError> {
    let user: User = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected user body: {}", e);
        UserError::InvalidBody
    })?;

    if !is_email_valid(&user.email) {
        return Err(UserError::InvalidEmail);
    }
    Ok(user)
}
