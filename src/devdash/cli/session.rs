//! Interactive sessions: the journal editor and live search.
//!
//! Both run the same shape of loop. A reader thread forwards stdin
//! lines over a channel, and the main loop wakes on a short timeout so
//! time-driven work keeps happening between keystrokes: the search
//! debouncer firing, the 30-second journal autosave, and the save
//! notice expiring. All store access stays on the main thread.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use colored::Colorize;
use console::Term;

use devdash::debounce::Debouncer;
use devdash::error::Result;
use devdash::init::DashContext;
use devdash::journal::{
    Direction, LogNavigator, LogView, AUTOSAVE_INTERVAL, SAVED_NOTICE_TTL,
};

use crate::cli::print;

const JOURNAL_TICK: Duration = Duration::from_millis(250);
const SEARCH_TICK: Duration = Duration::from_millis(50);

enum InputEvent {
    Line(String),
    Eof,
}

fn spawn_reader() -> Receiver<InputEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(InputEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(InputEvent::Eof);
    });
    rx
}

/// Interactive journal editor. Lines append to the day's entry;
/// `:commands` do everything else. The buffer autosaves every
/// [`AUTOSAVE_INTERVAL`] while dirty, and always saves on navigation
/// and on exit.
pub fn journal_session(ctx: &mut DashContext, start: Option<NaiveDate>) -> Result<()> {
    let term = Term::stdout();
    let mut navigator = match start {
        Some(date) => LogNavigator::new(date),
        None => LogNavigator::at_today(),
    };
    let mut view = ctx.api.load_log(&navigator);
    let mut buffer = view.content.clone();
    let mut dirty = false;
    let mut last_autosave = Instant::now();
    let mut notice: Option<(String, Instant)> = None;
    let events = spawn_reader();

    draw(&term, &view, &buffer, &notice)?;

    loop {
        let mut needs_draw = false;
        match events.recv_timeout(JOURNAL_TICK) {
            Ok(InputEvent::Line(line)) => {
                needs_draw = true;
                match line.trim() {
                    ":q" | ":quit" => {
                        ctx.api.save_log(&navigator, &buffer)?;
                        break;
                    }
                    ":w" | ":save" => {
                        ctx.api.save_log(&navigator, &buffer)?;
                        dirty = false;
                        last_autosave = Instant::now();
                        notice = Some(("Saved ✓".to_string(), Instant::now()));
                    }
                    ":p" | ":prev" => {
                        view = ctx.api.navigate_log(&mut navigator, Direction::Back, &buffer)?;
                        buffer = view.content.clone();
                        dirty = false;
                        last_autosave = Instant::now();
                    }
                    ":n" | ":next" => {
                        view = ctx
                            .api
                            .navigate_log(&mut navigator, Direction::Forward, &buffer)?;
                        buffer = view.content.clone();
                        dirty = false;
                        last_autosave = Instant::now();
                    }
                    ":clear" => {
                        buffer.clear();
                        dirty = true;
                    }
                    _ => {
                        if !buffer.is_empty() {
                            buffer.push('\n');
                        }
                        buffer.push_str(&line);
                        dirty = true;
                    }
                }
            }
            Ok(InputEvent::Eof) => {
                ctx.api.save_log(&navigator, &buffer)?;
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if dirty && last_autosave.elapsed() >= AUTOSAVE_INTERVAL {
            ctx.api.save_log(&navigator, &buffer)?;
            dirty = false;
            last_autosave = Instant::now();
        }

        if let Some((_, shown_at)) = &notice {
            if shown_at.elapsed() >= SAVED_NOTICE_TTL {
                notice = None;
                needs_draw = true;
            }
        }

        if needs_draw {
            draw(&term, &view, &buffer, &notice)?;
        }
    }
    Ok(())
}

fn draw(
    term: &Term,
    view: &LogView,
    buffer: &str,
    notice: &Option<(String, Instant)>,
) -> Result<()> {
    term.clear_screen()?;

    let mut header = view.date.format("%A, %Y-%m-%d").to_string();
    if view.date == LogNavigator::today() {
        header.push_str(" (today)");
    }
    println!("{}", header.bold());

    if buffer.is_empty() {
        println!("{}", "(no entry yet; type to add lines)".dimmed());
    } else {
        println!("{}", buffer);
    }

    println!();
    let mut status = String::from(":w save   :p/:n move   :clear wipe   :q quit");
    if !view.can_go_forward {
        status.push_str("   (:n disabled at today)");
    }
    println!("{}", status.dimmed());
    if let Some((text, _)) = notice {
        println!("{}", text.green());
    }
    Ok(())
}

/// Live search prompt. Every entered line becomes the current query;
/// the scan only runs once the debouncer's quiet window has elapsed,
/// so retyping quickly costs a single scan.
pub fn live_search(ctx: &DashContext) -> Result<()> {
    let events = spawn_reader();
    let mut debouncer = Debouncer::default();
    println!("Type a query and press Enter; an empty line clears; Ctrl-D quits.");

    loop {
        match events.recv_timeout(SEARCH_TICK) {
            Ok(InputEvent::Line(line)) => debouncer.submit(line, Instant::now()),
            Ok(InputEvent::Eof) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(query) = debouncer.poll(Instant::now()) {
            match ctx.api.search(&query) {
                None => println!("{}", "(search cleared)".dimmed()),
                Some(results) => print::print_search(&results, &query),
            }
        }
    }
    Ok(())
}
