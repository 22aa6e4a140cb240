use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One pronunciation of a headword.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PronunciationRecord {
    /// Comma-joined phonetic variants, e.g. "ru2, ie2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    /// Single-reading field still present in older dataset rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PronunciationRecord {
    /// The phonetic field, with blank strings treated as absent.
    pub fn phonetic_text(&self) -> Option<&str> {
        self.phonetic.as_deref().filter(|s| !s.is_empty())
    }

    /// The fallback reading, with blank strings treated as absent.
    pub fn pronunciation_text(&self) -> Option<&str> {
        self.pronunciation.as_deref().filter(|s| !s.is_empty())
    }

    /// The notes field, with blank strings treated as absent.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|s| !s.is_empty())
    }
}

/// A headword's pronunciations, keeping whether the source authored a
/// single object or an array of them.
///
/// Variant order matters: serde tries untagged variants in declaration
/// order, and with every record field defaulted an empty array would
/// parse as a record if `One` came first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordSet {
    Many(Vec<PronunciationRecord>),
    One(PronunciationRecord),
}

impl RecordSet {
    /// Uniform view; a single record reads as a one-element run.
    pub fn records(&self) -> &[PronunciationRecord] {
        match self {
            RecordSet::One(record) => std::slice::from_ref(record),
            RecordSet::Many(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

/// One dataset row: a headword and its pronunciations.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub headword: String,
    pub records: RecordSet,
}

/// The full headword to pronunciations mapping.
///
/// Rows keep the order they were authored in; the index serves exact
/// lookups without a scan.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dataset document, preserving key order.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert a row. A repeated headword keeps its original position and
    /// takes the newer records, matching how JSON parsers treat duplicate
    /// keys.
    pub fn insert(&mut self, headword: impl Into<String>, records: RecordSet) {
        let headword = headword.into();
        match self.index.get(&headword) {
            Some(&position) => {
                self.entries[position].records = records;
            }
            None => {
                self.index.insert(headword.clone(), self.entries.len());
                self.entries.push(Entry { headword, records });
            }
        }
    }

    /// Exact headword lookup.
    pub fn get(&self, headword: &str) -> Option<&Entry> {
        self.index.get(headword).map(|&position| &self.entries[position])
    }

    /// All rows in authored order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = Dataset;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of headwords to pronunciation records")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Dataset, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut dataset = Dataset::new();
                while let Some((headword, records)) =
                    access.next_entry::<String, RecordSet>()?
                {
                    dataset.insert(headword, records);
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}

/// Rows matched by one query, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    hits: Vec<Entry>,
}

impl SearchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.hits.push(entry);
    }

    /// Matched rows in the order they were found.
    pub fn hits(&self) -> &[Entry] {
        &self.hits
    }

    /// Number of matched headwords.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

impl Serialize for SearchResult {
    /// Serializes as a headword-keyed map in hit order, each value in the
    /// shape the dataset authored it.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.hits.len()))?;
        for entry in &self.hits {
            map.serialize_entry(&entry.headword, &entry.records)?;
        }
        map.end()
    }
}
