mod cli;

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;

use devdash::commands::{config as config_cmd, import};
use devdash::error::{DashError, Result};
use devdash::init::{self, DashContext};
use devdash::model::Theme;
use devdash::view::{PanelId, ViewSync};

use cli::args::{
    BookmarkAction, Cli, Commands, ConfigAction, LogAction, NoteAction, SnippetAction, TodoAction,
};
use cli::print;
use cli::session;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init::initialize()?;
    let verbose = cli.verbose;
    match cli.command {
        None => dashboard(&ctx),
        Some(Commands::Note { action }) => {
            let action = action.unwrap_or(NoteAction::List { full: false });
            handle_note(&mut ctx, action, verbose)
        }
        Some(Commands::Todo { action }) => {
            handle_todo(&mut ctx, action.unwrap_or(TodoAction::List), verbose)
        }
        Some(Commands::Bookmark { action }) => {
            handle_bookmark(&mut ctx, action.unwrap_or(BookmarkAction::List), verbose)
        }
        Some(Commands::Snippet { action }) => {
            let action = action.unwrap_or(SnippetAction::List { full: false });
            handle_snippet(&mut ctx, action, verbose)
        }
        Some(Commands::Log { action }) => handle_log(&mut ctx, action, verbose),
        Some(Commands::Search { query, live }) => handle_search(&ctx, query, live),
        Some(Commands::Export { path }) => {
            let result = ctx.api.export(path, &ctx.config)?;
            print::print_result(&result, &ctx.config, verbose);
            Ok(())
        }
        Some(Commands::Import { path, yes }) => handle_import(&mut ctx, path, yes, verbose),
        Some(Commands::Theme { value }) => handle_theme(&mut ctx, value, verbose),
        Some(Commands::Config { action }) => {
            handle_config(&mut ctx, action.unwrap_or(ConfigAction::Show), verbose)
        }
    }
}

/// The no-argument view: every panel, rendered through the same
/// [`ViewSync`] path an embedded UI would use.
fn dashboard(ctx: &DashContext) -> Result<()> {
    let mut views = ViewSync::new();
    for panel in PanelId::ALL {
        views.attach(Box::new(print::StdoutPanel::new(panel, ctx.config.clone())));
    }
    for panel in PanelId::ALL {
        ctx.api.render_all(&mut views, panel);
    }
    Ok(())
}

fn handle_note(ctx: &mut DashContext, action: NoteAction, verbose: bool) -> Result<()> {
    let result = match action {
        NoteAction::Add { text } => ctx.api.add_note(&text.join(" "))?,
        NoteAction::Remove { selector } => ctx.api.remove_note(&selector.parse()?)?,
        NoteAction::List { full } => {
            let result = ctx.api.list_notes()?;
            if full {
                print::print_result_full(&result, &ctx.config, verbose);
                return Ok(());
            }
            result
        }
    };
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

fn handle_todo(ctx: &mut DashContext, action: TodoAction, verbose: bool) -> Result<()> {
    let result = match action {
        TodoAction::Add { text } => ctx.api.add_todo(&text.join(" "))?,
        TodoAction::Done { selector } => ctx.api.toggle_todo(&selector.parse()?)?,
        TodoAction::Remove { selector } => ctx.api.remove_todo(&selector.parse()?)?,
        TodoAction::List => ctx.api.list_todos()?,
    };
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

fn handle_bookmark(ctx: &mut DashContext, action: BookmarkAction, verbose: bool) -> Result<()> {
    let result = match action {
        BookmarkAction::Add { title, url } => ctx.api.add_bookmark(&title, &url)?,
        BookmarkAction::Remove { selector } => ctx.api.remove_bookmark(&selector.parse()?)?,
        BookmarkAction::List => ctx.api.list_bookmarks()?,
    };
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

fn handle_snippet(ctx: &mut DashContext, action: SnippetAction, verbose: bool) -> Result<()> {
    let result = match action {
        SnippetAction::Add { title, code, file } => {
            let code = snippet_code(code, file)?;
            ctx.api.add_snippet(&title, &code)?
        }
        SnippetAction::Copy { selector } => ctx.api.copy_snippet(&selector.parse()?)?,
        SnippetAction::Remove { selector } => ctx.api.remove_snippet(&selector.parse()?)?,
        SnippetAction::List { full } => {
            let result = ctx.api.list_snippets()?;
            if full {
                print::print_result_full(&result, &ctx.config, verbose);
                return Ok(());
            }
            result
        }
    };
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

/// Snippet code comes from the arguments when given, then from
/// `--file`, then from piped stdin. An interactive terminal with
/// neither yields an empty string, which the add path skips as blank.
fn snippet_code(words: Vec<String>, file: Option<PathBuf>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    if io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut piped = String::new();
    io::stdin().read_to_string(&mut piped)?;
    Ok(piped)
}

fn handle_log(ctx: &mut DashContext, action: Option<LogAction>, verbose: bool) -> Result<()> {
    match action {
        None => session::journal_session(ctx, None),
        Some(LogAction::Show { date }) => {
            let date = parse_date_arg(date.as_deref())?;
            let result = ctx.api.show_log(date)?;
            print::print_result(&result, &ctx.config, verbose);
            Ok(())
        }
        Some(LogAction::Write { date, content }) => {
            let date = parse_date_arg(date.as_deref())?;
            let result = ctx.api.write_log(date, &content.join(" "), false)?;
            print::print_result(&result, &ctx.config, verbose);
            Ok(())
        }
        Some(LogAction::Edit { date }) => {
            let date = parse_date_arg(date.as_deref())?;
            session::journal_session(ctx, date)
        }
    }
}

fn handle_search(ctx: &DashContext, query: Option<String>, live: bool) -> Result<()> {
    if live {
        return session::live_search(ctx);
    }
    let query =
        query.ok_or_else(|| DashError::Api("Search needs a query (or --live)".to_string()))?;
    match ctx.api.search(&query) {
        None => println!("{}", "(empty query; nothing searched)".dimmed()),
        Some(results) => print::print_search(&results, &query),
    }
    Ok(())
}

fn handle_import(ctx: &mut DashContext, path: PathBuf, yes: bool, verbose: bool) -> Result<()> {
    let backup = import::load(&path)?;
    if !yes {
        println!(
            "This replaces everything in the dashboard with: {}",
            import::summary(&backup)
        );
        print!("Continue? [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted; nothing changed.");
            return Ok(());
        }
    }
    let result = ctx.api.apply_backup(&backup)?;
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

fn handle_theme(ctx: &mut DashContext, value: Option<String>, verbose: bool) -> Result<()> {
    let result = match value.as_deref() {
        None => ctx.api.show_theme()?,
        Some("toggle") => ctx.api.toggle_theme()?,
        Some(raw) => ctx.api.set_theme(raw.parse::<Theme>()?)?,
    };
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

fn handle_config(ctx: &mut DashContext, action: ConfigAction, verbose: bool) -> Result<()> {
    let result = match action {
        ConfigAction::Show => config_cmd::show(&ctx.config)?,
        ConfigAction::Get { key } => config_cmd::get(&ctx.config, &key)?,
        ConfigAction::Set { key, value } => {
            config_cmd::set(&mut ctx.config, &ctx.data_dir, &key, &value)?
        }
    };
    print::print_result(&result, &ctx.config, verbose);
    Ok(())
}

fn parse_date_arg(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DashError::Api(format!("'{}' is not a date (expected YYYY-MM-DD)", s))),
    }
}

fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let hash = env!("GIT_HASH");
    if env!("IS_RELEASE") == "true" || hash.is_empty() {
        version.to_string()
    } else {
        format!("{} ({} {})", version, hash, env!("GIT_COMMIT_DATE"))
    }
}
