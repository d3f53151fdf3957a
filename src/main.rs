//! pragma-outline - print the `#pragma region` outline of a source file

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pragma_outline::cli::{CliArgs, OutputFormat, StartupConfig};
use pragma_outline::config::OutlineConfig;
use pragma_outline::fs_watcher::FileWatcher;
use pragma_outline::host::TextDocument;
use pragma_outline::messages::HostEvent;
use pragma_outline::model::DocumentSession;
use pragma_outline::render::{RenderOptions, TerminalView};
use pragma_outline::runtime::OutlineRuntime;

/// How often watch mode wakes up when nothing changes
const WATCH_POLL: Duration = Duration::from_millis(500);

type Runtime = OutlineRuntime<TextDocument, TerminalView>;

fn main() -> Result<()> {
    let _log_guard = pragma_outline::tracing::init();

    let args = CliArgs::parse();
    let startup = args
        .into_config(OutlineConfig::load())
        .map_err(anyhow::Error::msg)?;

    run(startup)
}

fn run(startup: StartupConfig) -> Result<()> {
    let mut document = TextDocument::from_file(&startup.file)
        .with_context(|| format!("Failed to read {}", startup.file.display()))?;
    if let Some(line) = startup.caret_line {
        document.set_caret_line(line);
    }

    let mut options = RenderOptions::from_config(&startup.outline);
    if startup.caret_line.is_some() {
        options.visible_rows = Some(startup.outline.visible_rows);
    }

    let session = DocumentSession::new(startup.outline.clone());
    let mut runtime = OutlineRuntime::new(session, document, TerminalView::new(options));

    runtime.handle_event(HostEvent::DocumentOpened);
    runtime.run_until_idle();
    print_outline(&runtime, startup.format)?;

    if startup.watch {
        watch(&mut runtime, &startup)?;
    }

    runtime.handle_event(HostEvent::DocumentClosing);
    runtime.shutdown();
    Ok(())
}

fn watch(runtime: &mut Runtime, startup: &StartupConfig) -> Result<()> {
    let debounce = Duration::from_millis(startup.outline.debounce_ms);
    let watcher = FileWatcher::new(&startup.file, debounce)
        .with_context(|| format!("Failed to watch {}", startup.file.display()))?;

    let mut shown = runtime.view().generation();
    loop {
        if watcher.wait_for_change(WATCH_POLL) {
            if let Err(e) = runtime.host_mut().reload() {
                tracing::warn!("Failed to reload {}: {}", startup.file.display(), e);
                continue;
            }
            runtime.handle_event(HostEvent::TextChanged);
        }
        runtime.run_until_idle();

        let generation = runtime.view().generation();
        if generation != shown {
            shown = generation;
            print_outline(runtime, startup.format)?;
        }
    }
}

fn print_outline(runtime: &Runtime, format: OutputFormat) -> Result<()> {
    let view = runtime.view();
    let rendered = match format {
        OutputFormat::Text => view.render_text(),
        OutputFormat::Json => {
            let mut json = view.render_json().context("Failed to serialize outline")?;
            json.push('\n');
            json
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
