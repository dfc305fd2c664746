use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_AUTHOR: &str = "Sample Author";
pub const DEFAULT_TAGS: [&str; 2] = ["example", "go"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub author: String,
    /// RFC-3339 timestamp taken when the owning document was created.
    pub created: String,
    pub tags: Vec<String>,
}

impl Metadata {
    pub fn stamped(created: DateTime<Utc>) -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
            created: created.to_rfc3339_opts(SecondsFormat::Secs, true),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub price: f64,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Item {
    pub fn new(id: i64, name: &str, active: bool, price: f64, categories: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            active,
            price,
            categories: categories.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub version: String,
    pub description: String,
    pub metadata: Metadata,
    pub items: Vec<Item>,
}

impl Document {
    pub fn new(name: &str, version: &str, description: &str) -> Self {
        Self::created_at(name, version, description, Utc::now())
    }

    pub fn created_at(name: &str, version: &str, description: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            description: description.to_string(),
            metadata: Metadata::stamped(now),
            items: Vec::new(),
        }
    }

    /// Appends at the tail. Nothing about the item is checked.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn active_items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|item| item.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of active prices in insertion order.
    pub fn total_price(&self) -> f64 {
        // `Sum` for f64 starts at -0.0, which would print as "-0.00".
        self.active_items().fold(0.0, |total, item| total + item.price)
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document{{Name: {}, Version: {}, Items: {}}}",
            self.name,
            self.version,
            self.item_count()
        )
    }
}
