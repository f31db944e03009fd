use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// FeatureRecord – one extracted feature vector
// ---------------------------------------------------------------------------

/// A single feature vector as produced by the upstream extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Declared attribute count; must equal `data.len()`.
    pub cols: usize,
    pub data: Vec<f64>,
}

impl FeatureRecord {
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            cols: data.len(),
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// LabelRecord – the class token for one sample
// ---------------------------------------------------------------------------

/// Class label of one sample, kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelRecord(String);

impl LabelRecord {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Strings are taken verbatim, numbers in their JSON text form.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for LabelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Datasets – keyed collections of records
// ---------------------------------------------------------------------------

/// Feature records keyed by their templated name (e.g. `image_feature_3`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureDataset {
    records: HashMap<String, FeatureRecord>,
}

impl FeatureDataset {
    pub fn new(records: HashMap<String, FeatureRecord>) -> Self {
        Self { records }
    }

    pub fn insert(&mut self, key: impl Into<String>, record: FeatureRecord) {
        self.records.insert(key.into(), record);
    }

    pub fn get(&self, key: &str) -> Option<&FeatureRecord> {
        self.records.get(key)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut FeatureRecord)> {
        self.records.iter_mut()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Label records keyed by their templated name (e.g. `image_label_3`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelDataset {
    records: HashMap<String, LabelRecord>,
}

impl LabelDataset {
    pub fn new(records: HashMap<String, LabelRecord>) -> Self {
        Self { records }
    }

    pub fn insert(&mut self, key: impl Into<String>, label: LabelRecord) {
        self.records.insert(key.into(), label);
    }

    pub fn get(&self, key: &str) -> Option<&LabelRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
