//! Conversions between [`User`] and DynamoDB attribute maps.

use aws_sdk_dynamodb::types::AttributeValue;

use super::Item;
use crate::errors::UserError;
use crate::types::User;

/// Partition key attribute
pub const EMAIL_KEY: &str = "email";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";

pub fn user_to_item(user: &User) -> Item {
    let mut item = Item::new();
    item.insert(EMAIL_KEY.to_string(), AttributeValue::S(user.email.clone()));
    item.insert(FIRST_NAME.to_string(), AttributeValue::S(user.first_name.clone()));
    item.insert(LAST_NAME.to_string(), AttributeValue::S(user.last_name.clone()));
    item
}

/// Any missing or non-string attribute is reported as a generic unmarshal failure
pub fn item_to_user(item: &Item) -> Result<User, UserError> {
    Ok(User {
        email: get_string(item, EMAIL_KEY)?,
        first_name: get_string(item, FIRST_NAME)?,
        last_name: get_string(item, LAST_NAME)?,
    })
}

/// Email attribute of a stored item, if it has one
pub fn item_email(item: &Item) -> Option<&str> {
    item.get(EMAIL_KEY).and_then(|v| v.as_s().ok()).map(String::as_str)
}

fn get_string(item: &Item, key: &str) -> Result<String, UserError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            tracing::error!("Stored user is missing string attribute '{}'", key);
            UserError::Unmarshal
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }
    }

    #[test]
    fn test_item_uses_wire_field_names() {
        let item = user_to_item(&ada());

        assert_eq!(item.len(), 3);
        assert_eq!(item_email(&item), Some("ada@example.com"));
        assert_eq!(item.get("firstName"), Some(&AttributeValue::S("Ada".into())));
        assert_eq!(item.get("lastName"), Some(&AttributeValue::S("Lovelace".into())));
    }

    #[test]
    fn test_item_back_to_user() {
        assert_eq!(item_to_user(&user_to_item(&ada())).unwrap(), ada());
    }

    #[test]
    fn test_missing_attribute_is_unmarshal_error() {
        let mut item = user_to_item(&ada());
        item.remove("lastName");
        assert_eq!(item_to_user(&item), Err(UserError::Unmarshal));
    }

    #[test]
    fn test_wrong_attribute_type_is_unmarshal_error() {
        let mut item = user_to_item(&ada());
        item.insert("firstName".into(), AttributeValue::N("42".into()));
        assert_eq!(item_to_user(&item), Err(UserError::Unmarshal));
    }
}
