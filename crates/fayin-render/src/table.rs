use fayin_dictionary::SearchResult;

use crate::escape::escape_html;
use crate::rows::{PhoneticCell, ResultRow, build_rows};

/// Render the results region: either the no-results notice or the
/// summary line plus the pronunciation table.
pub fn render_results(query: &str, result: &SearchResult) -> String {
    if result.is_empty() {
        return render_no_results(query);
    }

    let mut body = String::new();
    for row in build_rows(result) {
        body.push_str(&render_row(&row));
    }

    format!(
        r#"<div id="searchInfo" class="d-flex justify-content-between align-items-center mb-3">
  <div>搜索字符：<span id="searchCharacter" class="fw-bold">{query}</span></div>
  <div>找到 <span id="resultCount">{count} 个</span>结果</div>
</div>
<div id="resultsTable" class="table-responsive">
  <table class="table table-striped table-hover align-middle">
    <thead>
      <tr>
        <th scope="col" class="text-center">汉字</th>
        <th scope="col" class="text-center">发音</th>
        <th scope="col" class="text-center">备注</th>
      </tr>
    </thead>
    <tbody id="resultsBody">
{body}    </tbody>
  </table>
</div>
"#,
        query = escape_html(query),
        count = result.len(),
        body = body,
    )
}

fn render_no_results(query: &str) -> String {
    format!(
        r#"<div id="noResults" class="alert alert-warning text-center">
  <span id="noResultsText">未找到"{query}"的发音数据</span>
</div>
"#,
        query = escape_html(query),
    )
}

fn render_row(row: &ResultRow) -> String {
    let mut cells = String::new();

    if let Some(headword) = &row.headword {
        cells.push_str(&format!(
            r#"<td class="align-middle" rowspan="{rowspan}"><div class="fs-3 fw-bold text-dark text-center">{text}</div></td>"#,
            rowspan = headword.rowspan,
            text = escape_html(&headword.text),
        ));
    }

    cells.push_str(&render_phonetic_cell(&row.phonetic));

    let notes = match &row.notes {
        Some(notes) => escape_html(notes),
        None => "-".to_string(),
    };
    cells.push_str(&format!(
        r#"<td class="align-middle text-muted text-center">{notes}</td>"#
    ));

    format!("      <tr>{cells}</tr>\n")
}

fn render_phonetic_cell(cell: &PhoneticCell) -> String {
    let inner = match cell {
        PhoneticCell::Variants(variants) => variants
            .iter()
            .map(|variant| phonetic_span(variant))
            .collect::<Vec<_>>()
            .join("<br>"),
        PhoneticCell::Reading(reading) => phonetic_span(reading),
        PhoneticCell::Missing => r#"<span class="text-muted">-</span>"#.to_string(),
    };
    format!(r#"<td class="align-middle text-center">{inner}</td>"#)
}

/// One clickable variant. The label is escaped once and reused for the
/// data attribute, the playback call, and the visible text.
fn phonetic_span(variant: &str) -> String {
    let label = escape_html(variant);
    format!(
        r#"<span class="phonetic-clickable" data-phonetic="{label}" onclick="playAudio('{label}')">[{label}] <small class="audio-icon">🔊</small></span>"#
    )
}

#[cfg(test)]
mod tests {
    use fayin_dictionary::{Dataset, search};

    use super::*;

    fn rendered(json: &str, query: &str) -> String {
        let dataset = Dataset::from_json(json).unwrap();
        render_results(query, &search(&dataset, query))
    }

    #[test]
    fn renders_one_tr_per_record_and_one_spanning_cell_per_headword() {
        let html = rendered(
            r#"{
                "汝": [{"phonetic": "ru2", "notes": "surname"}],
                "汝城": [{"phonetic": "ru2,cheng2"}]
            }"#,
            "汝",
        );

        assert_eq!(html.matches("<tr>").count(), 3, "header row plus two data rows");
        assert_eq!(html.matches("rowspan=").count(), 2);
        assert!(html.find(">汝</div>").unwrap() < html.find(">汝城</div>").unwrap());
        assert!(html.contains(r#"<span id="resultCount">2 个</span>"#));
    }

    #[test]
    fn spans_all_records_of_a_headword_from_the_first_row() {
        let html = rendered(
            r#"{"汝": [{"phonetic": "ru2"}, {"phonetic": "ie2"}, {}]}"#,
            "汝",
        );

        assert_eq!(html.matches("<tr>").count(), 4);
        assert!(html.contains(r#"rowspan="3""#));
        assert_eq!(html.matches("rowspan=").count(), 1);
    }

    #[test]
    fn comma_variants_become_separate_clickable_spans() {
        let html = rendered(r#"{"汝城": {"phonetic": "ru2, cheng2"}}"#, "城");

        assert_eq!(html.matches("phonetic-clickable").count(), 2);
        assert_eq!(html.matches("<br>").count(), 1);
        assert!(html.contains(r#"onclick="playAudio('ru2')""#));
        assert!(html.contains(r#"onclick="playAudio('cheng2')""#));
        assert!(html.contains(r#"data-phonetic="cheng2""#));
        assert!(html.contains("[cheng2]"));
    }

    #[test]
    fn legacy_reading_renders_as_a_single_clickable_span() {
        let html = rendered(r#"{"汝": {"pronunciation": "ru2"}}"#, "汝");

        assert_eq!(html.matches("phonetic-clickable").count(), 1);
        assert!(html.contains(r#"onclick="playAudio('ru2')""#));
    }

    #[test]
    fn missing_readings_and_notes_render_placeholder_dashes() {
        let html = rendered(r#"{"汝": {}}"#, "汝");

        assert!(html.contains(r#"<span class="text-muted">-</span>"#));
        assert!(html.contains(r#"<td class="align-middle text-muted text-center">-</td>"#));
    }

    #[test]
    fn dataset_markup_is_escaped_inert() {
        let html = rendered(
            r#"{"<script>alert(1)</script>": {"notes": "<b>bold</b>"}}"#,
            "<",
        );

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn quotes_in_variants_are_entity_escaped() {
        let html = rendered(r#"{"汝": {"phonetic": "ru'2"}}"#, "汝");

        assert!(html.contains(r#"onclick="playAudio('ru&#039;2')""#));
        assert!(!html.contains("playAudio('ru'2')"));
    }

    #[test]
    fn no_results_notice_names_the_query() {
        let html = rendered(r#"{"汝": {"phonetic": "ru2"}}"#, "水");

        assert!(html.contains(r#"未找到"水"的发音数据"#));
        assert!(html.contains(r#"id="noResults""#));
        assert!(!html.contains("<table"));
        assert!(!html.contains(r#"id="searchInfo""#));
    }

    #[test]
    fn stray_comma_segments_still_render_their_own_spans() {
        let html = rendered(r#"{"汝": {"phonetic": "ru2,,"}}"#, "汝");

        assert_eq!(html.matches("phonetic-clickable").count(), 3);
        assert_eq!(html.matches("<br>").count(), 2);
    }
}
