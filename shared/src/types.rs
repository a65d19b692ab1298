use serde::{Deserialize, Serialize};

// ========== USER ==========
// Field names double as DynamoDB attribute names (PK = email)
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub email: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
}

// ========== RESPONSES ==========
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_uses_camel_case_wire_names() {
        let user = User {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "email": "ada@example.com",
                "firstName": "Ada",
                "lastName": "Lovelace"
            })
        );
    }

    #[test]
    fn test_user_names_default_to_empty() {
        let user: User = serde_json::from_str(r#"{"email":"ada@example.com"}"#).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_user_requires_email() {
        assert!(serde_json::from_str::<User>(r#"{"firstName":"Ada"}"#).is_err());
    }
}
