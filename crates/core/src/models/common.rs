use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend identifier.
///
/// The backend hands out numeric ids, but the client treats them as opaque:
/// whatever JSON kind arrives is sent back unchanged. Two ids are the same
/// when they print the same, so `1` and `"1"` match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// A blank textual id counts as "nothing selected".
    pub fn is_empty(&self) -> bool {
        matches!(self, EntityId::Text(text) if text.trim().is_empty())
    }
}

impl PartialEq for EntityId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EntityId::Number(a), EntityId::Number(b)) => a == b,
            (EntityId::Text(a), EntityId::Text(b)) => a == b,
            (EntityId::Number(number), EntityId::Text(text))
            | (EntityId::Text(text), EntityId::Number(number)) => *text == number.to_string(),
        }
    }
}

impl Eq for EntityId {}

impl Hash for EntityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            EntityId::Number(number) => number.to_string().hash(state),
            EntityId::Text(text) => text.hash(state),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(number) => write!(f, "{number}"),
            EntityId::Text(text) => f.write_str(text),
        }
    }
}

impl FromStr for EntityId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i64>() {
            Ok(number) => EntityId::Number(number),
            Err(_) => EntityId::Text(s.to_string()),
        })
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

/// Paginated listing envelope. A missing `content` reads as an empty page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

impl<T> Page<T> {
    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}

/// Postal address (`endereco`) as exchanged with the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub logradouro: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub numero: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub complemento: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bairro: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cidade: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uf: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cep: String,
}

/// Reads `null` string fields as empty strings.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
