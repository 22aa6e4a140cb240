use fayin_dictionary::{PronunciationRecord, SearchResult};

/// How a phonetic cell renders.
#[derive(Debug, Clone, PartialEq)]
pub enum PhoneticCell {
    /// Comma-separated variants, each one its own clickable unit.
    Variants(Vec<String>),
    /// Single reading from the older pronunciation field.
    Reading(String),
    /// Neither field carries text.
    Missing,
}

/// The spanning headword cell carried by a group's first row.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadwordCell {
    pub text: String,
    pub rowspan: usize,
}

/// One table row: an optional headword cell plus the two data cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub headword: Option<HeadwordCell>,
    pub phonetic: PhoneticCell,
    pub notes: Option<String>,
}

/// Flatten a search result into table rows.
///
/// Every record of a headword becomes one row; the first row of a group
/// carries the headword cell spanning the whole group, the rest carry
/// none.
pub fn build_rows(result: &SearchResult) -> Vec<ResultRow> {
    let mut rows = Vec::new();
    for entry in result.hits() {
        let records = entry.records.records();
        for (index, record) in records.iter().enumerate() {
            rows.push(ResultRow {
                headword: (index == 0).then(|| HeadwordCell {
                    text: entry.headword.clone(),
                    rowspan: records.len(),
                }),
                phonetic: phonetic_cell(record),
                notes: record.notes_text().map(str::to_string),
            });
        }
    }
    rows
}

/// Variants win over the single reading; blank strings count as absent.
/// Splitting keeps segments that trim to nothing, so a stray comma still
/// produces its own (empty) unit.
fn phonetic_cell(record: &PronunciationRecord) -> PhoneticCell {
    if let Some(phonetic) = record.phonetic_text() {
        PhoneticCell::Variants(
            phonetic
                .split(',')
                .map(|variant| variant.trim().to_string())
                .collect(),
        )
    } else if let Some(reading) = record.pronunciation_text() {
        PhoneticCell::Reading(reading.trim().to_string())
    } else {
        PhoneticCell::Missing
    }
}
