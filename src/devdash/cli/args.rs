//! Command-line surface. Multi-word text arguments are plain
//! positionals collected into a `Vec`, so quoting is optional:
//! `devdash note add remember the milk` works as written.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "devdash",
    about = "Personal dashboard: notes, todos, bookmarks, snippets, and a daily journal",
    version = crate::version_string()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show informational messages
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage notes
    #[command(alias = "n")]
    Note {
        #[command(subcommand)]
        action: Option<NoteAction>,
    },
    /// Manage todos
    #[command(alias = "t")]
    Todo {
        #[command(subcommand)]
        action: Option<TodoAction>,
    },
    /// Manage bookmarks
    #[command(alias = "bm")]
    Bookmark {
        #[command(subcommand)]
        action: Option<BookmarkAction>,
    },
    /// Manage code snippets
    #[command(alias = "snip")]
    Snippet {
        #[command(subcommand)]
        action: Option<SnippetAction>,
    },
    /// Daily journal; with no subcommand, opens the interactive editor
    #[command(alias = "l")]
    Log {
        #[command(subcommand)]
        action: Option<LogAction>,
    },
    /// Search every collection
    #[command(alias = "s")]
    Search {
        /// The query; omit it with --live for an interactive prompt
        query: Option<String>,
        /// Re-run the search as you type, after a short quiet period
        #[arg(long)]
        live: bool,
    },
    /// Write a backup (.json bundle; .tar.gz, .md, or .txt by extension)
    Export {
        /// Target file or directory; defaults to devdash-backup-<date>.json
        path: Option<PathBuf>,
    },
    /// Replace all data with a backup bundle
    Import {
        path: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or change the color theme ("light", "dark", or "toggle")
    Theme { value: Option<String> },
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note
    #[command(alias = "a")]
    Add { text: Vec<String> },
    /// Remove a note by number or id
    #[command(alias = "rm")]
    Remove { selector: String },
    /// List notes, newest first
    #[command(alias = "ls")]
    List {
        /// Show the whole text of every note, not one-line previews
        #[arg(long)]
        full: bool,
    },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo
    #[command(alias = "a")]
    Add { text: Vec<String> },
    /// Toggle a todo between done and open
    #[command(alias = "x")]
    Done { selector: String },
    /// Remove a todo by number or id
    #[command(alias = "rm")]
    Remove { selector: String },
    /// List todos, newest first
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Add a bookmark; a bare domain gets https:// prefixed
    #[command(alias = "a")]
    Add { title: String, url: String },
    /// Remove a bookmark by number or id
    #[command(alias = "rm")]
    Remove { selector: String },
    /// List bookmarks, newest first
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand)]
pub enum SnippetAction {
    /// Add a snippet; with no code arguments, reads --file or piped stdin
    #[command(alias = "a")]
    Add {
        title: String,
        code: Vec<String>,
        /// Read the code from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Copy a snippet's code to the clipboard (and print it)
    #[command(alias = "cp")]
    Copy { selector: String },
    /// Remove a snippet by number or id
    #[command(alias = "rm")]
    Remove { selector: String },
    /// List snippets, newest first
    #[command(alias = "ls")]
    List {
        /// Show whole code blocks, not one-line previews
        #[arg(long)]
        full: bool,
    },
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Print the entry for a date (today by default)
    Show { date: Option<String> },
    /// Write an entry; empty content deletes the day's entry
    Write {
        /// Date of the entry, YYYY-MM-DD; today by default
        #[arg(long)]
        date: Option<String>,
        content: Vec<String>,
    },
    /// Open the interactive editor, at a date or at today
    #[command(alias = "e")]
    Edit { date: Option<String> },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show every setting
    Show,
    /// Print one setting
    Get { key: String },
    /// Change a setting
    Set { key: String, value: String },
}
