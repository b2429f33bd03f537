//! Terminal rendering for command results.
//!
//! Everything here takes data out of a [`CmdResult`] and prints it;
//! nothing below the binary writes to stdout.

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use once_cell::sync::Lazy;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use devdash::commands::{CmdMessage, CmdResult, MessageLevel};
use devdash::config::DashConfig;
use devdash::journal::{LogNavigator, LogView};
use devdash::model::Theme;
use devdash::search::{MatchSegment, SearchResults};
use devdash::view::{PanelData, PanelId, Surface};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const SNIPPET_PREVIEW_WIDTH: usize = 50;

static TIME_FORMATTER: Lazy<timeago::Formatter> = Lazy::new(timeago::Formatter::new);

pub fn print_result(result: &CmdResult, config: &DashConfig, verbose: bool) {
    print_messages(&result.messages, verbose);
    if let Some(text) = &result.text {
        println!("{}", text);
    }
    if let Some(data) = &result.listed {
        print_panel(data, config);
    }
    if let Some(view) = &result.log {
        print_log(view);
    }
    if let Some(theme) = &result.theme {
        print_theme(*theme);
    }
    if let Some(loaded) = &result.config {
        print_config(loaded);
    }
}

pub fn print_messages(messages: &[CmdMessage], verbose: bool) {
    for message in messages {
        match message.level {
            MessageLevel::Info => {
                if verbose {
                    println!("{}", message.text.dimmed());
                }
            }
            MessageLevel::Success => println!("{}", message.text.green()),
            MessageLevel::Warning => println!("{}", message.text.yellow()),
            MessageLevel::Error => eprintln!("{}", message.text.red()),
        }
    }
}

pub fn print_panel(data: &PanelData, config: &DashConfig) {
    println!();
    println!("{}", data.panel().title().bold());
    match data {
        PanelData::Notes(notes) => {
            if notes.is_empty() {
                print_empty_hint("note add <text>");
                return;
            }
            for (i, note) in notes.iter().enumerate() {
                print_line(i + 1, None, &note.text, note.created_at, config);
            }
        }
        PanelData::Todos(todos) => {
            if todos.is_empty() {
                print_empty_hint("todo add <text>");
                return;
            }
            for (i, todo) in todos.iter().enumerate() {
                let marker = if todo.completed { "[✓]" } else { "[ ]" };
                print_line(i + 1, Some(marker), &todo.text, todo.created_at, config);
            }
            let done = todos.iter().filter(|t| t.completed).count();
            println!("  {}", format!("{} of {} done", done, todos.len()).dimmed());
        }
        PanelData::Bookmarks(bookmarks) => {
            if bookmarks.is_empty() {
                print_empty_hint("bookmark add <title> <url>");
                return;
            }
            for (i, bm) in bookmarks.iter().enumerate() {
                print_line(i + 1, None, &bm.title, bm.created_at, config);
                println!("      {}", bm.url.dimmed());
            }
        }
        PanelData::Snippets(snippets) => {
            if snippets.is_empty() {
                print_empty_hint("snippet add <title> <code>");
                return;
            }
            for (i, snippet) in snippets.iter().enumerate() {
                print_line(i + 1, None, &snippet.title, snippet.created_at, config);
                let preview = truncate_to_width(&snippet.code, SNIPPET_PREVIEW_WIDTH);
                println!("      {}", preview.dimmed());
            }
        }
        PanelData::Journal { date, content } => {
            println!("  {}", date.format("%A, %Y-%m-%d").to_string().cyan());
            if content.is_empty() {
                println!("  {}", "(no entry)".dimmed());
            } else {
                for line in content.lines() {
                    println!("  {}", line);
                }
            }
        }
    }
}

fn print_empty_hint(command: &str) {
    println!("  {}", format!("(empty; try: devdash {})", command).dimmed());
}

fn print_line(
    n: usize,
    marker: Option<&str>,
    text: &str,
    created: DateTime<Utc>,
    config: &DashConfig,
) {
    let marker = match marker {
        Some(m) => format!("{} ", m),
        None => String::new(),
    };
    let body_width = LINE_WIDTH.saturating_sub(TIME_WIDTH + 6 + marker.chars().count());
    let body = truncate_to_width(text, body_width);
    let pad = " ".repeat(body_width.saturating_sub(display_width(&body)));
    let time = format!(
        "{:>width$}",
        format_time(created, config.relative_times),
        width = TIME_WIDTH
    );
    println!("  {:>2}. {}{}{} {}", n, marker, body, pad, time.dimmed());
}

/// Like [`print_result`], but the listing shows complete record text
/// instead of one-line previews.
pub fn print_result_full(result: &CmdResult, config: &DashConfig, verbose: bool) {
    print_messages(&result.messages, verbose);
    if let Some(data) = &result.listed {
        print_panel_full(data, config);
    }
}

/// Notes print every line of their text and snippets their whole code
/// block; the other panels have no longer form than the compact one.
fn print_panel_full(data: &PanelData, config: &DashConfig) {
    match data {
        PanelData::Notes(notes) if !notes.is_empty() => {
            println!();
            println!("{}", data.panel().title().bold());
            for (i, note) in notes.iter().enumerate() {
                print_block(i + 1, &note.text, note.created_at, config);
            }
        }
        PanelData::Snippets(snippets) if !snippets.is_empty() => {
            println!();
            println!("{}", data.panel().title().bold());
            for (i, snippet) in snippets.iter().enumerate() {
                print_block(i + 1, &snippet.title, snippet.created_at, config);
                for line in snippet.code.lines() {
                    println!("      {}", line.dimmed());
                }
            }
        }
        other => print_panel(other, config),
    }
}

fn print_block(n: usize, text: &str, created: DateTime<Utc>, config: &DashConfig) {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    println!(
        "  {:>2}. {}  {}",
        n,
        first,
        format_time(created, config.relative_times).dimmed()
    );
    for line in lines {
        println!("      {}", line);
    }
}

pub fn print_search(results: &SearchResults, query: &str) {
    if results.is_empty() {
        println!("No matches for '{}'", query);
        return;
    }
    for section in &results.sections {
        println!();
        println!("{}", section.panel.title().bold());
        for hit in &section.hits {
            if let Some(heading) = &hit.heading {
                println!("  {}", heading.cyan());
            }
            let marker = match hit.completed {
                Some(true) => "[✓] ",
                Some(false) => "[ ] ",
                None => "",
            };
            println!("  {}{}", marker, render_segments(&hit.segments));
            if let Some(detail) = &hit.detail {
                for line in render_segments(detail).lines() {
                    println!("      {}", line);
                }
            }
        }
    }
}

fn render_segments(segments: &[MatchSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            MatchSegment::Plain(text) => out.push_str(text),
            MatchSegment::Match(text) => out.push_str(&text.yellow().bold().to_string()),
        }
    }
    out
}

pub fn print_log(view: &LogView) {
    println!();
    let mut header = view.date.format("%A, %Y-%m-%d").to_string();
    if view.date == LogNavigator::today() {
        header.push_str(" (today)");
    }
    println!("{}", header.bold());
    if view.content.is_empty() {
        println!("{}", "(no entry)".dimmed());
    } else {
        println!("{}", view.content);
    }
}

pub fn print_theme(theme: Theme) {
    println!("Theme: {}", theme);
}

pub fn print_config(config: &DashConfig) {
    let export_dir = config
        .export_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(current directory)".to_string());
    println!("export-dir      {}", export_dir);
    println!("relative-times  {}", config.relative_times);
}

/// Relative time when the config asks for it, an absolute local
/// timestamp otherwise.
pub fn format_time(timestamp: DateTime<Utc>, relative: bool) -> String {
    if relative {
        let elapsed = Utc::now()
            .signed_duration_since(timestamp)
            .to_std()
            .unwrap_or_default();
        TIME_FORMATTER.convert(elapsed)
    } else {
        timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Flattens newlines and cuts the text to the given display width,
/// with an ellipsis when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let flat = text.replace('\n', " ");
    if display_width(&flat) <= max_width {
        return flat;
    }
    let mut out = String::new();
    let mut width = 0;
    let budget = max_width.saturating_sub(1);
    for ch in flat.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// Stdout rendering surface for one dashboard panel. The full
/// dashboard is a [`ViewSync`](devdash::view::ViewSync) with one of
/// these per panel.
pub struct StdoutPanel {
    panel: PanelId,
    config: DashConfig,
}

impl StdoutPanel {
    pub fn new(panel: PanelId, config: DashConfig) -> Self {
        Self { panel, config }
    }
}

impl Surface for StdoutPanel {
    fn panel(&self) -> PanelId {
        self.panel
    }

    fn render(&mut self, data: &PanelData) {
        print_panel(data, &self.config);
    }
}
