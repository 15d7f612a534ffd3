use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use grantscope_core::{page_base, update, AppState, Msg};
use grantscope_engine::{FileRecordSource, LoaderEvent, LoaderHandle};
use guide_logging::{guide_info, guide_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::ui::commands::{parse_command, Command, HELP_TEXT};
use super::ui::render;

/// Published page the deep links point at. Override with
/// `GRANTSCOPE_PAGE_URL` when the guide is hosted elsewhere.
const DEFAULT_PAGE_URL: &str = "https://example.com/grants/index.html";

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    let page_url = std::env::var("GRANTSCOPE_PAGE_URL")
        .unwrap_or_else(|_| DEFAULT_PAGE_URL.to_string());

    let mut state = AppState::new(page_base(&page_url));
    if let Some(filter) = persistence::load_filter_state(state_dir()) {
        let (next, _) = update(state, Msg::FilterRestored(filter), Utc::now());
        state = next;
    }

    // One-shot load; the first render waits for the complete collection.
    guide_info!("Loading records from {:?}", data_dir);
    let loader = LoaderHandle::spawn(Arc::new(FileRecordSource::standard_parts(&data_dir)));
    let loaded = match loader.recv() {
        Some(LoaderEvent::Loaded(records)) => {
            guide_info!("Loaded {} records", records.len());
            Msg::RecordsLoaded(records)
        }
        Some(LoaderEvent::Failed(err)) => {
            guide_warn!("Record load failed: {}", err);
            Msg::LoadFailed(err.to_string())
        }
        None => Msg::LoadFailed("record source terminated without a result".to_string()),
    };
    let (next, _) = update(state, loaded, Utc::now());
    state = next;

    let runner = EffectRunner::new();
    let mut render_pass: u64 = 0;
    let _ = state.consume_dirty();
    draw(&state, &mut render_pass)?;

    // Serialized input loop: one update, then one full redraw when dirty.
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => println!("{HELP_TEXT}"),
            Command::Unknown(input) => println!("Unknown command '{input}'; try 'help'."),
            Command::Update(msg) => {
                let (next, effects) = update(state, msg, Utc::now());
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    draw(&state, &mut render_pass)?;
                }
            }
        }
        prompt()?;
    }

    persistence::save_filter_state(state_dir(), state.filter());
    Ok(())
}

/// Full replace of the prior output on every invocation.
fn draw(state: &AppState, render_pass: &mut u64) -> io::Result<()> {
    *render_pass += 1;
    guide_logging::set_render_pass(*render_pass);

    let view = state.view(Utc::now());
    let mut stdout = io::stdout().lock();
    for line in render::render(&view) {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "> ")?;
    stdout.flush()
}

fn state_dir() -> &'static Path {
    Path::new(".")
}
