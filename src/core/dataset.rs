//! Rules dataset model
//!
//! The dataset is a pre-generated JSON document with three sections:
//!
//! - `RULE_TARGET_APP_LISTS`: category name → list of app names
//! - `RULES_PACKAGE_LIST`: `<app>_Rules_PackageName` → package name
//! - `RULES_PACKAGE_DESCRIPTION`: `<app>_Rules_PackageDescription` → description
//!
//! Metadata values appear either as a single string or as a list of strings
//! whose first element is effective. The document is treated as opaque beyond
//! these sections: missing or wrong-shaped sections and entries degrade to
//! empty maps, never to errors. Only JSON syntax problems fail a parse.

use serde_json::Value;
use std::collections::{BTreeSet, HashMap};

/// Key suffix for package-name lookups.
pub const PACKAGE_NAME_SUFFIX: &str = "_Rules_PackageName";

/// Key suffix for package-description lookups.
pub const PACKAGE_DESCRIPTION_SUFFIX: &str = "_Rules_PackageDescription";

/// Rendered stand-in for an absent display field.
pub const EMPTY_FIELD: &str = "—";

/// A metadata value stored either as a single string or as a list of strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    One(String),
    Many(Vec<String>),
}

impl MetaValue {
    /// The effective display value: the string itself, or the first element
    /// of a list. Empty lists have no effective value.
    pub fn effective(&self) -> Option<&str> {
        match self {
            Self::One(s) => Some(s.as_str()),
            Self::Many(items) => items.first().map(String::as_str),
        }
    }

    /// Converts a raw JSON value. Non-string, non-array shapes are rejected;
    /// non-string list elements are skipped.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::One(s.clone())),
            Value::Array(items) => Some(Self::Many(
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect(),
            )),
            _ => None,
        }
    }
}

/// Derived display fields for one app. Fields are `None` when the lookup key
/// is missing or its effective value is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDetails {
    pub package_name: Option<String>,
    pub description: Option<String>,
}

/// In-memory form of the rules dataset.
#[derive(Debug, Clone, Default)]
pub struct RuleDataset {
    target_app_lists: HashMap<String, Vec<String>>,
    package_names: HashMap<String, MetaValue>,
    package_descriptions: HashMap<String, MetaValue>,
}

impl RuleDataset {
    /// Parses a JSON document. Fails only on JSON syntax errors; shape
    /// problems inside the document degrade per [`Self::from_value`].
    pub fn parse(text: &str) -> serde_json::Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&root))
    }

    /// Extracts the known sections from an arbitrary JSON value, skipping
    /// anything of the wrong shape.
    pub fn from_value(root: &Value) -> Self {
        Self {
            target_app_lists: string_lists(root.get("RULE_TARGET_APP_LISTS")),
            package_names: meta_values(root.get("RULES_PACKAGE_LIST")),
            package_descriptions: meta_values(root.get("RULES_PACKAGE_DESCRIPTION")),
        }
    }

    /// The selectable app list: the unique union of every category list,
    /// sorted case-insensitively with a byte-order tie-break.
    pub fn app_names(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .target_app_lists
            .values()
            .flatten()
            .map(String::as_str)
            .collect();

        let mut names: Vec<String> = unique.into_iter().map(str::to_string).collect();
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names
    }

    /// Whether `name` appears in any category list.
    pub fn contains_app(&self, name: &str) -> bool {
        self.target_app_lists
            .values()
            .flatten()
            .any(|app| app == name)
    }

    /// Looks up the package name for `app` via the key naming convention.
    pub fn package_name(&self, app: &str) -> Option<&str> {
        self.package_names
            .get(&format!("{app}{PACKAGE_NAME_SUFFIX}"))
            .and_then(MetaValue::effective)
    }

    /// Looks up the package description for `app`.
    pub fn package_description(&self, app: &str) -> Option<&str> {
        self.package_descriptions
            .get(&format!("{app}{PACKAGE_DESCRIPTION_SUFFIX}"))
            .and_then(MetaValue::effective)
    }

    /// Both display fields for `app`, with empty effective values treated as
    /// absent so they render as [`EMPTY_FIELD`].
    pub fn details(&self, app: &str) -> AppDetails {
        AppDetails {
            package_name: self
                .package_name(app)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            description: self
                .package_description(app)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }

    /// Filters a persisted selection: kept only when non-empty and still
    /// present in the current app lists.
    pub fn restorable_selection<'a>(&self, saved: Option<&'a str>) -> Option<&'a str> {
        saved.filter(|name| !name.is_empty() && self.contains_app(name))
    }
}

fn string_lists(section: Option<&Value>) -> HashMap<String, Vec<String>> {
    let mut out = HashMap::new();
    if let Some(Value::Object(entries)) = section {
        for (key, value) in entries {
            if let Value::Array(items) = value {
                let apps = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                out.insert(key.clone(), apps);
            }
        }
    }
    out
}

fn meta_values(section: Option<&Value>) -> HashMap<String, MetaValue> {
    let mut out = HashMap::new();
    if let Some(Value::Object(entries)) = section {
        for (key, value) in entries {
            if let Some(meta) = MetaValue::from_value(value) {
                out.insert(key.clone(), meta);
            }
        }
    }
    out
}
