use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level body returned by a Solr-style request handler.
/// Only `response` is interpreted; `responseHeader` and friends ride along.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchEnvelope {
    pub response: SearchResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(rename = "numFound", default)]
    pub num_found: u64,
    #[serde(default)]
    pub docs: Vec<Doc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Doc {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Doc {
    pub fn with_title(title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.to_string()));
        Self { fields }
    }

    /// Display title. Multi-valued fields arrive as arrays; the first string wins.
    pub fn title(&self) -> Option<&str> {
        match self.fields.get("title")? {
            Value::String(s) => Some(s.as_str()),
            Value::Array(items) => items.iter().find_map(Value::as_str),
            _ => None,
        }
    }
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|d| d.title().unwrap_or(""))
    }
}
