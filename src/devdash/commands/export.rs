//! `devdash export`: write the whole store to a file.
//!
//! The canonical format is a single JSON bundle that `import` can read
//! back. The extension picks the format: `.tar.gz`/`.tgz` produces an
//! archive of plain-text files (with the bundle tucked inside so the
//! archive is also a full backup), `.md` and `.txt` produce one merged
//! document for pasting somewhere else.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use pulldown_cmark_to_cmark::cmark;
use serde::{Deserialize, Serialize};

use crate::commands::{CmdMessage, CmdResult};
use crate::config::DashConfig;
use crate::error::Result;
use crate::journal::LogNavigator;
use crate::model::{Bookmark, LogMap, Note, Snippet, Theme, Todo};
use crate::store::Store;
use crate::view::PanelId;

/// Everything the dashboard persists, as one serializable document.
/// Every field defaults, so partial bundles import cleanly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    #[serde(default)]
    pub snippets: Vec<Snippet>,
    #[serde(default)]
    pub daily_logs: LogMap,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub export_date: Option<DateTime<Utc>>,
}

pub fn collect<S: Store>(store: &S) -> Backup {
    Backup {
        notes: store.load(),
        todos: store.load(),
        bookmarks: store.load(),
        snippets: store.load(),
        daily_logs: store.load_logs(),
        theme: store.load_theme(),
        export_date: Some(Utc::now()),
    }
}

/// Output format, chosen by the target file's extension. Anything
/// unrecognized falls back to the JSON bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Bundle,
    Archive,
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_lowercase();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            ExportFormat::Archive
        } else if name.ends_with(".md") {
            ExportFormat::Markdown
        } else if name.ends_with(".txt") {
            ExportFormat::Text
        } else {
            ExportFormat::Bundle
        }
    }
}

pub fn default_bundle_name(date: NaiveDate) -> String {
    format!("devdash-backup-{}.json", date.format("%Y-%m-%d"))
}

pub fn run<S: Store>(store: &S, path: Option<PathBuf>, config: &DashConfig) -> Result<CmdResult> {
    let backup = collect(store);
    let target = match path {
        Some(p) if p.is_dir() => p.join(default_bundle_name(LogNavigator::today())),
        Some(p) => p,
        None => {
            let dir = config
                .export_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            dir.join(default_bundle_name(LogNavigator::today()))
        }
    };

    let mut file = File::create(&target)?;
    match ExportFormat::from_path(&target) {
        ExportFormat::Bundle => write_bundle(&backup, &mut file)?,
        ExportFormat::Archive => write_archive(&backup, &mut file)?,
        ExportFormat::Markdown => file.write_all(merge_as_markdown(&backup).as_bytes())?,
        ExportFormat::Text => file.write_all(merge_as_text(&backup).as_bytes())?,
    }

    let mut result = CmdResult::new();
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        target.display()
    )));
    Ok(result)
}

pub fn write_bundle<W: Write>(backup: &Backup, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, backup)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes a gzipped tar of plain-text files, one per record where that
/// makes sense, plus the JSON bundle so the archive doubles as a
/// restorable backup.
pub fn write_archive<W: Write>(backup: &Backup, writer: W) -> Result<()> {
    let encoder = GzEncoder::new(writer, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (i, note) in backup.notes.iter().enumerate() {
        append_text(&mut builder, &format!("notes/{:03}.txt", i + 1), &note.text)?;
    }
    if !backup.todos.is_empty() {
        let mut body = String::new();
        for todo in &backup.todos {
            body.push_str(&format!("[{}] {}\n", if todo.completed { "x" } else { " " }, todo.text));
        }
        append_text(&mut builder, "todos.txt", &body)?;
    }
    if !backup.bookmarks.is_empty() {
        let mut body = String::new();
        for bm in &backup.bookmarks {
            body.push_str(&format!("- {}: {}\n", bm.title, bm.url));
        }
        append_text(&mut builder, "bookmarks.txt", &body)?;
    }
    for (i, snippet) in backup.snippets.iter().enumerate() {
        let name = format!("snippets/{:03}-{}.txt", i + 1, sanitize_filename(&snippet.title));
        append_text(&mut builder, &name, &snippet.code)?;
    }
    for (date, content) in &backup.daily_logs {
        append_text(&mut builder, &format!("logs/{}.txt", date.format("%Y-%m-%d")), content)?;
    }
    append_text(&mut builder, "bundle.json", &bundle_string(backup)?)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

fn bundle_string(backup: &Backup) -> Result<String> {
    Ok(serde_json::to_string_pretty(backup)?)
}

fn append_text<W: Write>(builder: &mut tar::Builder<W>, path: &str, contents: &str) -> Result<()> {
    let bytes = contents.as_bytes();
    let mut header = tar::Header::new_gnu();
    header.set_size(bytes.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, path, bytes)?;
    Ok(())
}

/// One markdown document with a section per collection. Headings inside
/// note text are pushed down so they sit under the section headers.
pub fn merge_as_markdown(backup: &Backup) -> String {
    let mut out = String::new();
    out.push_str("# Dashboard Export\n\n");
    if let Some(date) = backup.export_date {
        out.push_str(&format!("Exported {}\n\n", date.format("%Y-%m-%d")));
    }

    if !backup.notes.is_empty() {
        out.push_str(&format!("## {}\n\n", PanelId::Notes.title()));
        for note in &backup.notes {
            out.push_str(&bump_markdown_headers(&note.text, 2));
            out.push_str("\n\n");
        }
    }
    if !backup.todos.is_empty() {
        out.push_str(&format!("## {}\n\n", PanelId::Todos.title()));
        for todo in &backup.todos {
            let mark = if todo.completed { "x" } else { " " };
            out.push_str(&format!("- [{}] {}\n", mark, todo.text));
        }
        out.push('\n');
    }
    if !backup.bookmarks.is_empty() {
        out.push_str(&format!("## {}\n\n", PanelId::Bookmarks.title()));
        for bm in &backup.bookmarks {
            out.push_str(&format!("- [{}]({})\n", bm.title, bm.url));
        }
        out.push('\n');
    }
    if !backup.snippets.is_empty() {
        out.push_str(&format!("## {}\n\n", PanelId::Snippets.title()));
        for snippet in &backup.snippets {
            out.push_str(&format!("### {}\n\n```\n{}\n```\n\n", snippet.title, snippet.code));
        }
    }
    if !backup.daily_logs.is_empty() {
        out.push_str(&format!("## {}\n\n", PanelId::DailyLog.title()));
        for (date, content) in &backup.daily_logs {
            out.push_str(&format!("### {}\n\n{}\n\n", date.format("%Y-%m-%d"), content));
        }
    }
    out
}

/// The same document without any markup, for mailing or pasting into
/// places that choke on markdown.
pub fn merge_as_text(backup: &Backup) -> String {
    let mut out = String::new();
    out.push_str("DASHBOARD EXPORT\n");
    if let Some(date) = backup.export_date {
        out.push_str(&format!("Exported {}\n", date.format("%Y-%m-%d")));
    }
    out.push('\n');

    if !backup.notes.is_empty() {
        push_banner(&mut out, PanelId::Notes.title());
        for note in &backup.notes {
            out.push_str(&note.text);
            out.push_str("\n\n");
        }
    }
    if !backup.todos.is_empty() {
        push_banner(&mut out, PanelId::Todos.title());
        for todo in &backup.todos {
            out.push_str(&format!("[{}] {}\n", if todo.completed { "x" } else { " " }, todo.text));
        }
        out.push('\n');
    }
    if !backup.bookmarks.is_empty() {
        push_banner(&mut out, PanelId::Bookmarks.title());
        for bm in &backup.bookmarks {
            out.push_str(&format!("- {}: {}\n", bm.title, bm.url));
        }
        out.push('\n');
    }
    if !backup.snippets.is_empty() {
        push_banner(&mut out, PanelId::Snippets.title());
        for snippet in &backup.snippets {
            out.push_str(&format!("--- {} ---\n{}\n\n", snippet.title, snippet.code));
        }
    }
    if !backup.daily_logs.is_empty() {
        push_banner(&mut out, PanelId::DailyLog.title());
        for (date, content) in &backup.daily_logs {
            out.push_str(&format!("[{}]\n{}\n\n", date.format("%Y-%m-%d"), content));
        }
    }
    out
}

fn push_banner(out: &mut String, title: &str) {
    out.push_str(&format!("===== {} =====\n\n", title));
}

/// Pushes every heading in `text` down `by` levels, capped at H6, so
/// an embedded document cannot outrank the export's own headers. On a
/// render failure the text passes through untouched.
fn bump_markdown_headers(text: &str, by: usize) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let events = Parser::new_ext(text, options).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => Event::Start(Tag::Heading {
            level: bumped(level, by),
            id,
            classes,
            attrs,
        }),
        Event::End(TagEnd::Heading(level)) => Event::End(TagEnd::Heading(bumped(level, by))),
        other => other,
    });

    let mut out = String::new();
    match cmark(events, &mut out) {
        Ok(_) => out,
        Err(_) => text.to_string(),
    }
}

fn bumped(level: HeadingLevel, by: usize) -> HeadingLevel {
    match (level as usize).saturating_add(by) {
        1 => HeadingLevel::H1,
        2 => HeadingLevel::H2,
        3 => HeadingLevel::H3,
        4 => HeadingLevel::H4,
        5 => HeadingLevel::H5,
        _ => HeadingLevel::H6,
    }
}

/// Filesystem-safe slug of a snippet title for archive entry names.
fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let joined = cleaned
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let short: String = joined.chars().take(40).collect();
    if short.is_empty() {
        "untitled".to_string()
    } else {
        short
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use flate2::read::GzDecoder;

    use super::*;
    use crate::store::memory::fixtures::StoreBuilder;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_backup() -> Backup {
        let store = StoreBuilder::new()
            .with_note("# Heading\n\nbody text")
            .with_todo("done thing", true)
            .with_todo("open thing", false)
            .with_bookmark("Example", "example.com")
            .with_snippet("hello", "fn main() {}")
            .with_log(day(2025, 1, 15), "a quiet day")
            .build();
        collect(&store)
    }

    #[test]
    fn format_follows_the_extension() {
        assert_eq!(ExportFormat::from_path(Path::new("backup.json")), ExportFormat::Bundle);
        assert_eq!(ExportFormat::from_path(Path::new("backup.tar.gz")), ExportFormat::Archive);
        assert_eq!(ExportFormat::from_path(Path::new("backup.TGZ")), ExportFormat::Archive);
        assert_eq!(ExportFormat::from_path(Path::new("notes.md")), ExportFormat::Markdown);
        assert_eq!(ExportFormat::from_path(Path::new("notes.txt")), ExportFormat::Text);
        assert_eq!(ExportFormat::from_path(Path::new("whatever")), ExportFormat::Bundle);
    }

    #[test]
    fn bundle_name_carries_the_date() {
        assert_eq!(
            default_bundle_name(day(2025, 1, 15)),
            "devdash-backup-2025-01-15.json"
        );
    }

    #[test]
    fn bundle_round_trips_through_json() {
        let backup = sample_backup();
        let mut buf = Vec::new();
        write_bundle(&backup, &mut buf).unwrap();

        let parsed: Backup = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.notes, backup.notes);
        assert_eq!(parsed.todos, backup.todos);
        assert_eq!(parsed.bookmarks, backup.bookmarks);
        assert_eq!(parsed.snippets, backup.snippets);
        assert_eq!(parsed.daily_logs, backup.daily_logs);
        assert_eq!(parsed.theme, backup.theme);
    }

    #[test]
    fn bundle_uses_camel_case_keys() {
        let backup = sample_backup();
        let mut buf = Vec::new();
        write_bundle(&backup, &mut buf).unwrap();
        let raw = String::from_utf8(buf).unwrap();

        assert!(raw.contains("\"dailyLogs\""));
        assert!(raw.contains("\"exportDate\""));
        assert!(!raw.contains("\"daily_logs\""));
    }

    #[test]
    fn archive_is_gzipped_and_lists_every_section() {
        let backup = sample_backup();
        let mut buf = Vec::new();
        write_archive(&backup, &mut buf).unwrap();

        assert_eq!(buf[0], 0x1f);
        assert_eq!(buf[1], 0x8b);

        let mut archive = tar::Archive::new(GzDecoder::new(&buf[..]));
        let paths: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().to_string_lossy().into_owned())
            .collect();

        assert!(paths.contains(&"notes/001.txt".to_string()));
        assert!(paths.contains(&"todos.txt".to_string()));
        assert!(paths.contains(&"bookmarks.txt".to_string()));
        assert!(paths.contains(&"snippets/001-hello.txt".to_string()));
        assert!(paths.contains(&"logs/2025-01-15.txt".to_string()));
        assert!(paths.contains(&"bundle.json".to_string()));
    }

    #[test]
    fn markdown_merge_bumps_embedded_headings() {
        let backup = sample_backup();
        let md = merge_as_markdown(&backup);

        assert!(md.contains("## Notes"));
        assert!(md.contains("### Heading"));
        assert!(!md.contains("\n# Heading"));
        assert!(md.contains("- [x] done thing"));
        assert!(md.contains("- [ ] open thing"));
        assert!(md.contains("[Example](https://example.com)"));
        assert!(md.contains("### 2025-01-15"));
    }

    #[test]
    fn heading_bump_caps_at_h6() {
        let bumped_text = bump_markdown_headers("##### deep\n\n###### deeper", 2);
        assert!(bumped_text.contains("###### deep"));
        assert!(!bumped_text.contains("####### "));
    }

    #[test]
    fn text_merge_has_no_markup() {
        let backup = sample_backup();
        let txt = merge_as_text(&backup);

        assert!(txt.contains("===== Todos ====="));
        assert!(txt.contains("[x] done thing"));
        assert!(txt.contains("- Example: https://example.com"));
        assert!(txt.contains("[2025-01-15]\na quiet day"));
    }

    #[test]
    fn snippet_titles_become_safe_file_names() {
        assert_eq!(sanitize_filename("Hello, World!"), "hello-world");
        assert_eq!(sanitize_filename("   "), "untitled");
        assert_eq!(sanitize_filename("a b/c\\d"), "a-b-c-d");
    }
}
