use std::sync::Once;

use pretty_assertions::assert_eq;
use sortvis_core::{
    update, Algorithm, AppState, Effect, Msg, RunOutcome, RunStats, RunStatus,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn loaded(values: &[u32]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::SequenceGenerated(values.to_vec()));
    state
}

fn running(values: &[u32]) -> AppState {
    let (state, _) = update(loaded(values), Msg::StartClicked);
    state
}

#[test]
fn generate_clicked_requests_sequence_of_current_size() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SizeChanged(12));
    assert_eq!(effects, vec![Effect::GenerateSequence { size: 12 }]);

    let (_state, effects) = update(state, Msg::GenerateClicked);
    assert_eq!(effects, vec![Effect::GenerateSequence { size: 12 }]);
}

#[test]
fn generated_sequence_replaces_bars_and_resets_stats() {
    init_logging();
    let mut state = loaded(&[30, 10, 20]);
    let view = state.view();

    assert_eq!(view.status, RunStatus::Idle);
    assert_eq!(view.size, 3);
    assert_eq!(
        view.bars.iter().map(|bar| bar.value).collect::<Vec<_>>(),
        vec![30, 10, 20]
    );
    assert_eq!(view.comparisons, 0);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn start_clicked_emits_run_with_selected_settings() {
    init_logging();
    let state = loaded(&[3, 1, 2]);
    let (state, _) = update(state, Msg::AlgorithmSelected(Algorithm::Merge));
    let (state, _) = update(state, Msg::SpeedChanged(150));
    let (state, effects) = update(state, Msg::StartClicked);

    assert_eq!(state.view().status, RunStatus::Running);
    assert_eq!(
        effects,
        vec![Effect::StartRun {
            algorithm: Algorithm::Merge,
            sequence: vec![3, 1, 2],
            speed: 150,
        }]
    );
}

#[test]
fn controls_are_locked_while_running() {
    init_logging();
    let state = running(&[3, 1, 2]);
    let before = state.view();
    assert!(!before.controls_enabled);
    assert!(before.stop_enabled);

    let (state, effects) = update(state, Msg::GenerateClicked);
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SizeChanged(99));
    assert!(effects.is_empty());
    let (state, _) = update(state, Msg::AlgorithmSelected(Algorithm::Quick));
    let (state, _) = update(state, Msg::SpeedChanged(1));
    let (state, effects) = update(state, Msg::StartClicked);
    assert!(effects.is_empty());

    let after = state.view();
    assert_eq!(after.algorithm, before.algorithm);
    assert_eq!(after.speed, before.speed);
    assert_eq!(after.size, before.size);
}

#[test]
fn stop_clicked_moves_running_to_stopping() {
    init_logging();
    let state = running(&[3, 1, 2]);
    let (state, effects) = update(state, Msg::StopClicked);

    assert_eq!(effects, vec![Effect::RequestStop]);
    assert_eq!(state.view().status, RunStatus::Stopping);
}

#[test]
fn stop_clicked_again_while_stopping_repeats_request() {
    init_logging();
    let (state, _) = update(running(&[3, 1, 2]), Msg::StopClicked);
    let (state, effects) = update(state, Msg::StopClicked);

    assert_eq!(effects, vec![Effect::RequestStop]);
    assert_eq!(state.view().status, RunStatus::Stopping);
    assert!(state.view().stop_enabled);
}

#[test]
fn stop_clicked_while_idle_is_ignored() {
    init_logging();
    let (state, effects) = update(loaded(&[1, 2]), Msg::StopClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().status, RunStatus::Idle);
}

#[test]
fn run_finished_unlocks_controls() {
    init_logging();
    let stats = RunStats {
        comparisons: 3,
        swaps: 3,
        elapsed_ms: 12,
    };
    let (state, _) = update(
        running(&[5, 3, 1]),
        Msg::RunFinished {
            outcome: RunOutcome::Completed,
            stats,
        },
    );
    let view = state.view();

    assert_eq!(view.status, RunStatus::Completed);
    assert!(view.controls_enabled);
    assert!(!view.stop_enabled);
    assert_eq!((view.comparisons, view.swaps, view.elapsed_ms), (3, 3, 12));
}

#[test]
fn speed_change_updates_mapped_delay() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SpeedChanged(200));
    assert_eq!(state.view().delay_ms, 2);

    let (state, _) = update(state, Msg::SpeedChanged(0));
    assert_eq!(state.view().speed, 1);
    assert_eq!(state.view().delay_ms, 199);
}
