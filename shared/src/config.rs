use std::env;

const DEFAULT_TABLE_NAME: &str = "users";

/// How mutations guard against the existence check racing a concurrent writer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Existence check, then an unconditional put/delete (check-then-act race)
    #[default]
    CheckThenWrite,
    /// Existence check, then a put/delete carrying a condition expression
    Conditional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    DynamoDb,
    Memory,
}

/// Lambda configuration, read once at cold start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub write_mode: WriteMode,
    pub backend: StoreBackend,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            write_mode: WriteMode::default(),
            backend: StoreBackend::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let table_name = lookup("TABLE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let write_mode = match lookup("USERS_CONDITIONAL_WRITES").as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("TRUE") | Some("True") => WriteMode::Conditional,
            _ => WriteMode::CheckThenWrite,
        };

        let backend = match lookup("USERS_STORE").as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
            Some(s) if !s.is_empty() && !s.eq_ignore_ascii_case("dynamodb") => {
                tracing::warn!("Unknown USERS_STORE '{}', falling back to dynamodb", s);
                StoreBackend::DynamoDb
            }
            _ => StoreBackend::DynamoDb,
        };

        Self {
            table_name,
            write_mode,
            backend,
        }
    }
}
