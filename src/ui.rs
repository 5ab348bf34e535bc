use crate::models::Task;
use chrono::NaiveDate;

pub const EMPTY_DAY_MESSAGE: &str = "אין הדרכה יומית היום";

pub fn render_index(date: NaiveDate, tasks: &[Task]) -> String {
    let list = if tasks.is_empty() {
        format!(r#"<p class="empty-state">{EMPTY_DAY_MESSAGE}</p>"#)
    } else {
        tasks
            .iter()
            .map(|task| render_task(date, task))
            .collect::<Vec<_>>()
            .join("\n")
    };

    INDEX_HTML
        .replace("{{DATE}}", &date.to_string())
        .replace("{{TASKS}}", &list)
}

fn render_task(date: NaiveDate, task: &Task) -> String {
    let image = task
        .image_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}" class="task-image" />"#,
                escape_html(url),
                escape_html(&task.title)
            )
        })
        .unwrap_or_default();
    let checked = if task.read { " checked" } else { "" };

    format!(
        r#"<article class="task-item" data-task-id="{id}">
        {image}
        <div class="task-content">
          <h3>{title}</h3>
          <h4>{subtitle}</h4>
          <p>{description}</p>
          <form method="post" action="/tasks/{date}/{id}/toggle">
            <label>
              <input type="checkbox" name="read"{checked} onchange="this.form.submit()" />
              קראתי את ההדרכה
            </label>
            <noscript><button type="submit">שמור</button></noscript>
          </form>
        </div>
      </article>"#,
        id = task.id,
        title = escape_html(&task.title),
        subtitle = escape_html(&task.subtitle),
        description = escape_html(&task.description),
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
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
<html lang="he" dir="rtl">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>הדרכות יומיות</title>
  <style>
    :root {
      --bg: #f3f5f8;
      --ink: #1f2a37;
      --muted: #5b6675;
      --accent: #2f6fde;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(31, 42, 55, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Arial Hebrew", Arial, sans-serif;
      display: flex;
      justify-content: center;
      padding: 32px 16px 48px;
    }

    .app-container {
      width: min(760px, 100%);
      display: grid;
      gap: 24px;
    }

    .title {
      margin: 0;
      text-align: center;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .navigation-container {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 16px;
    }

    .navigation-container form {
      margin: 0;
    }

    .nav-button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .date-display {
      font-size: 1.2rem;
      font-weight: 600;
      min-width: 8ch;
      text-align: center;
    }

    .task-list-container {
      display: grid;
      gap: 16px;
    }

    .task-item {
      background: var(--card);
      border-radius: 16px;
      box-shadow: var(--shadow);
      padding: 20px;
      display: grid;
      gap: 12px;
    }

    .task-image {
      width: 100%;
      max-height: 240px;
      object-fit: cover;
      border-radius: 12px;
    }

    .task-content h3,
    .task-content h4 {
      margin: 0 0 6px;
    }

    .task-content h4 {
      color: var(--muted);
      font-weight: 500;
    }

    .task-content p {
      line-height: 1.6;
    }

    .task-content label {
      display: inline-flex;
      align-items: center;
      gap: 8px;
      cursor: pointer;
    }

    .empty-state {
      text-align: center;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app-container">
    <h1 class="title">הדרכות יומיות</h1>
    <nav class="navigation-container">
      <form method="post" action="/day/previous">
        <input type="hidden" name="date" value="{{DATE}}" />
        <button class="nav-button" type="submit">לפני</button>
      </form>
      <div class="date-display" id="date">{{DATE}}</div>
      <form method="post" action="/day/next">
        <input type="hidden" name="date" value="{{DATE}}" />
        <button class="nav-button" type="submit">הבא</button>
      </form>
    </nav>
    <section class="task-list-container">
      {{TASKS}}
    </section>
  </main>
</body>
</html>
"#;
