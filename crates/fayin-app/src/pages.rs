use fayin_render::escape_html;

const BOOTSTRAP_CSS: &str = r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/css/bootstrap.min.css" rel="stylesheet" integrity="sha384-sRIl4kxILFvY47J16cr9ZwB07vP4J8+LH7qKQnuqkuIAvNWLzeN8tE5YBujZqJLB" crossorigin="anonymous">"#;

const BOOTSTRAP_JS: &str = r#"<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.8/dist/js/bootstrap.bundle.min.js" integrity="sha384-FKyoEForCGlyvwx9Hj09JcYn3nv7wiPVlz7YYwJrWVcXK/BmnVDxM+D2scQbITxI" crossorigin="anonymous"></script>"#;

const PAGE_STYLE: &str = r#"<style>
      .phonetic-clickable { cursor: pointer; color: #0d6efd; white-space: nowrap; }
      .phonetic-clickable:hover { text-decoration: underline; }
      .audio-icon { font-size: 0.75em; }
      .hot-search { text-decoration: none; }
    </style>"#;

const PLAY_AUDIO_SCRIPT: &str = r#"<script>
      const audioPlayer = new Audio();
      audioPlayer.preload = "none";

      async function playAudio(phonetic) {
          if (!phonetic) {
              return;
          }
          try {
              const response = await fetch(`/api/audio/${encodeURIComponent(phonetic)}`);
              const hit = await response.json();
              if (!hit.exists) {
                  console.warn("音频文件不存在:", phonetic);
                  return;
              }
              audioPlayer.src = `/static/audio/${encodeURIComponent(hit.filename)}`;
              await audioPlayer.play();
          } catch (error) {
              console.warn("音频播放失败:", error);
          }
      }
    </script>"#;

const LOAD_ERROR_BANNER: &str = r#"<div id="dataLoadError" class="alert alert-danger alert-dismissible fade show" role="alert">
  <strong>数据加载失败!</strong> 无法加载方言数据，请刷新页面重试。
  <button type="button" class="btn-close" data-bs-dismiss="alert"></button>
</div>
"#;

/// Everything the results page varies on.
pub struct ResultsView<'a> {
    /// Raw query text echoed back into the search box.
    pub input_value: &'a str,
    /// Inline error notice, when validation or the data wait failed.
    pub notice: Option<&'a str>,
    /// Rendered results region; absent when no search ran.
    pub fragment: Option<&'a str>,
    pub load_failed: bool,
}

pub fn landing_page(title: &str, total_chars: usize, load_failed: bool) -> String {
    let body = format!(
        r#"      <div class="text-center my-5">
        <h1 class="display-5 fw-bold">{title}</h1>
        <p class="lead text-muted">输入汉字，查询它的汝城话发音</p>
      </div>
{load_error}      <form id="searchForm" action="/results" method="get" class="row justify-content-center g-2 mb-4">
        <div class="col-md-6">
          <input id="characterInput" name="character" type="text" class="form-control form-control-lg" placeholder="请输入要查询的汉字" autocomplete="off" autofocus>
        </div>
        <div class="col-auto">
          <button type="submit" class="btn btn-primary btn-lg">查询</button>
        </div>
      </form>
      <div class="text-center text-muted mb-3">
        热门搜索：
        <a class="hot-search mx-1" href="/results?character=汝">汝</a>
        <a class="hot-search mx-1" href="/results?character=城">城</a>
        <a class="hot-search mx-1" href="/results?character=话">话</a>
      </div>
      <p class="text-center text-muted">已收录 <span id="totalChars" class="fw-bold">{total_chars}</span> 个字词的发音数据</p>
"#,
        title = escape_html(title),
        load_error = if load_failed { LOAD_ERROR_BANNER } else { "" },
        total_chars = total_chars,
    );
    page_shell(title, &body)
}

pub fn results_page(title: &str, view: &ResultsView<'_>) -> String {
    let notice = match view.notice {
        Some(notice) => format!(
            r#"      <div id="errorAlert" class="alert alert-danger text-center">{}</div>
"#,
            escape_html(notice)
        ),
        None => String::new(),
    };

    let body = format!(
        r#"      <div class="d-flex justify-content-between align-items-center mb-4">
        <h1 class="fs-3 fw-bold mb-0"><a href="/" class="text-decoration-none text-dark">{title}</a></h1>
        <a href="/" class="text-decoration-none">返回首页</a>
      </div>
{load_error}      <form id="searchForm" action="/results" method="get" class="row g-2 mb-4">
        <div class="col">
          <input id="characterInput" name="character" type="text" class="form-control" value="{input_value}" placeholder="请输入要查询的汉字" autocomplete="off">
        </div>
        <div class="col-auto">
          <button type="submit" class="btn btn-primary">查询</button>
        </div>
      </form>
{notice}      <div id="resultsContainer">
{fragment}      </div>
"#,
        title = escape_html(title),
        load_error = if view.load_failed { LOAD_ERROR_BANNER } else { "" },
        input_value = escape_html(view.input_value),
        notice = notice,
        fragment = view.fragment.unwrap_or(""),
    );
    page_shell(title, &body)
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    {bootstrap_css}
    {bootstrap_js}
    {style}
  </head>
  <body class="bg-light">
    <main class="container py-4">
{body}    </main>
    {script}
  </body>
</html>
"#,
        title = escape_html(title),
        bootstrap_css = BOOTSTRAP_CSS,
        bootstrap_js = BOOTSTRAP_JS,
        style = PAGE_STYLE,
        body = body,
        script = PLAY_AUDIO_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_carries_the_search_form_and_stats() {
        let html = landing_page("汝城话发音字典", 42, false);
        assert!(html.contains(r#"id="searchForm""#));
        assert!(html.contains(r#"name="character""#));
        assert!(html.contains(r#"<span id="totalChars" class="fw-bold">42</span>"#));
        assert!(!html.contains(r#"id="dataLoadError""#));
    }

    #[test]
    fn load_failure_banner_appears_on_both_pages() {
        assert!(landing_page("t", 0, true).contains(r#"id="dataLoadError""#));
        let view = ResultsView {
            input_value: "",
            notice: None,
            fragment: None,
            load_failed: true,
        };
        assert!(results_page("t", &view).contains("数据加载失败"));
    }

    #[test]
    fn query_text_is_escaped_into_the_input_value() {
        let view = ResultsView {
            input_value: r#""><script>alert(1)</script>"#,
            notice: None,
            fragment: None,
            load_failed: false,
        };
        let html = results_page("t", &view);
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
    }
}
