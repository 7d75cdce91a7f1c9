use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use engine_logging::{engine_info, engine_warn};
use sortvis_core::{update, AppState, Msg, RunReport, RunStatus};
use sortvis_engine::{EngineHandle, SortSession};

use super::effects::EffectRunner;
use super::settings::{load_settings, Settings};
use super::ui::render::TextRenderer;
use super::{logging, Cli};

const FRAME_INTERVAL: Duration = Duration::from_millis(40);
const STATS_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log, cli.verbose);

    let mut settings = load_settings(cli.config.as_deref())?;
    settings.apply_cli(&cli);
    engine_info!(
        "sortvis starting: algorithm={} size={} speed={}",
        settings.algorithm,
        settings.size(),
        settings.speed
    );

    let engine = build_engine(&settings);
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(engine.clone(), msg_tx.clone());
    spawn_stats_poll(engine, msg_tx.clone());
    spawn_interrupt_listener(msg_tx.clone());

    let renderer = TextRenderer::new(settings.bar_rows, settings.engine.generation.max_value);
    let mut state = AppState::with_pacing(settings.engine.pacing);
    for msg in [
        Msg::AlgorithmSelected(settings.algorithm),
        Msg::SpeedChanged(settings.speed),
        Msg::SizeChanged(settings.size()),
    ] {
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
    }

    let mut started = false;
    let mut last_frame = Instant::now();
    while let Ok(msg) = msg_rx.recv() {
        let generated = matches!(msg, Msg::SequenceGenerated(_));
        let finished = matches!(msg, Msg::RunFinished { .. });

        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);

        let frame_due = last_frame.elapsed() >= FRAME_INTERVAL;
        if !cli.quiet && (frame_due || finished) && state.consume_dirty() {
            renderer
                .draw(&state.view())
                .context("failed to draw frame")?;
            last_frame = Instant::now();
        }

        if generated && !started {
            started = true;
            let _ = msg_tx.send(Msg::StartClicked);
        }
        if finished {
            break;
        }
    }

    let report = runner.last_report().unwrap_or_else(|| report_from_view(&state));
    print_summary(&report, cli.json)
}

fn build_engine(settings: &Settings) -> EngineHandle {
    let config = settings.engine;
    let seed = settings.seed;
    EngineHandle::with_session(move |sink| {
        let session = SortSession::new(config, sink);
        match seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        }
    })
}

/// Keeps elapsed time moving on screen between counter changes.
fn spawn_stats_poll(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        let msg = if engine.is_running() {
            Msg::StatsChanged(engine.stats())
        } else {
            Msg::Tick
        };
        if msg_tx.send(msg).is_err() {
            break;
        }
        thread::sleep(STATS_POLL_INTERVAL);
    });
}

/// Ctrl-C stops the run instead of killing the process, so the summary
/// still prints.
fn spawn_interrupt_listener(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                engine_warn!("Ctrl-C handling unavailable: {}", err);
                return;
            }
        };
        runtime.block_on(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                engine_info!("Ctrl-C received, stopping run");
                if msg_tx.send(Msg::StopClicked).is_err() {
                    break;
                }
            }
        });
    });
}

fn report_from_view(state: &AppState) -> RunReport {
    let view = state.view();
    RunReport {
        algorithm: view.algorithm,
        outcome: match view.status {
            RunStatus::Completed => sortvis_core::RunOutcome::Completed,
            _ => sortvis_core::RunOutcome::Aborted,
        },
        stats: sortvis_core::RunStats {
            comparisons: view.comparisons,
            swaps: view.swaps,
            elapsed_ms: view.elapsed_ms,
        },
        sequence: state.values(),
    }
}

fn print_summary(report: &RunReport, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("failed to encode report")?;
        println!("{text}");
        return Ok(());
    }
    println!(
        "[{}] {} {:?} on {} values: {} comparisons, {} swaps, {} ms",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        report.algorithm,
        report.outcome,
        report.sequence.len(),
        report.stats.comparisons,
        report.stats.swaps,
        report.stats.elapsed_ms
    );
    Ok(())
}
