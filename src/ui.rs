use crate::aggregate::CategoryAggregate;
use crate::models::Entry;

pub fn render_index(
    user: &str,
    date: &str,
    entries: &[Entry],
    categories: &[CategoryAggregate],
) -> String {
    let total = entries
        .iter()
        .fold(0i64, |total, entry| total.saturating_add(entry.score));
    INDEX_HTML
        .replace("{{USER}}", &escape(user))
        .replace("{{DATE}}", date)
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{ENTRIES}}", &entry_rows(entries))
        .replace("{{CATEGORIES}}", &category_rows(categories))
}

fn entry_rows(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return r#"<li class="empty">Nothing logged yet today.</li>"#.to_string();
    }
    entries
        .iter()
        .map(|entry| {
            format!(
                r#"<li><span class="name">{}</span><span class="meta">x{} &middot; {} pts</span></li>"#,
                escape(&entry.name),
                entry.count,
                entry.score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn category_rows(categories: &[CategoryAggregate]) -> String {
    categories
        .iter()
        .map(|category| {
            format!(
                r#"<li><span class="swatch" style="background:{}"></span><span class="name">{}</span><span class="meta">{} pts</span></li>"#,
                category.color,
                escape(category.category),
                category.total_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Positive Log</title>
  <style>
    :root {
      --bg: #f6f4ee;
      --ink: #2b2a28;
      --muted: #77736b;
      --card: #ffffff;
      --accent: #2f8f6f;
    }
    body {
      margin: 0;
      font-family: system-ui, sans-serif;
      background: var(--bg);
      color: var(--ink);
    }
    main {
      max-width: 720px;
      margin: 40px auto;
      padding: 0 20px;
    }
    section {
      background: var(--card);
      border-radius: 14px;
      padding: 20px 24px;
      margin-bottom: 20px;
      box-shadow: 0 12px 30px rgba(0, 0, 0, 0.06);
    }
    h1 { margin-bottom: 4px; }
    .subtitle { color: var(--muted); margin-top: 0; }
    ul { list-style: none; padding: 0; margin: 0; }
    li {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 8px 0;
      border-bottom: 1px solid #eee;
    }
    li:last-child { border-bottom: none; }
    .name { flex: 1; }
    .meta { color: var(--muted); font-size: 0.9em; }
    .swatch { width: 12px; height: 12px; border-radius: 3px; }
    .empty { color: var(--muted); }
    .total { font-size: 2em; color: var(--accent); }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Positive Log</h1>
      <p class="subtitle">{{USER}} &middot; {{DATE}}</p>
    </header>

    <section>
      <span class="total">{{TOTAL}}</span> points today
    </section>

    <section>
      <h2>Today</h2>
      <ul>
{{ENTRIES}}
      </ul>
    </section>

    <section>
      <h2>Life areas</h2>
      <ul>
{{CATEGORIES}}
      </ul>
    </section>
  </main>
</body>
</html>
"#;
