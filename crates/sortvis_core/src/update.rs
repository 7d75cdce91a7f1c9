use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let active = state.status().is_active();
    let effects = match msg {
        Msg::SizeChanged(size) => {
            if active {
                return (state, Vec::new());
            }
            state.set_size(size);
            vec![Effect::GenerateSequence { size }]
        }
        Msg::GenerateClicked => {
            if active {
                return (state, Vec::new());
            }
            vec![Effect::GenerateSequence { size: state.size() }]
        }
        Msg::SequenceGenerated(values) => {
            // A late generation result must not replace bars under a running engine.
            if !active {
                state.load_sequence(values);
            }
            Vec::new()
        }
        Msg::AlgorithmSelected(algorithm) => {
            if !active {
                state.set_algorithm(algorithm);
            }
            Vec::new()
        }
        Msg::SpeedChanged(speed) => {
            if !active {
                state.set_speed(speed);
            }
            Vec::new()
        }
        Msg::StartClicked => {
            if active {
                Vec::new()
            } else {
                state.begin_run();
                vec![Effect::StartRun {
                    algorithm: state.algorithm(),
                    sequence: state.values(),
                    speed: state.speed(),
                }]
            }
        }
        // Repeated while stopping: the engine treats extra requests as no-ops,
        // and a request that raced a queued start gets another chance.
        Msg::StopClicked => {
            if active {
                state.begin_stopping();
                vec![Effect::RequestStop]
            } else {
                Vec::new()
            }
        }
        Msg::Step(event) => {
            if active {
                state.apply_step(event);
            }
            Vec::new()
        }
        Msg::StatsChanged(stats) => {
            if active {
                state.apply_stats(stats);
            }
            Vec::new()
        }
        Msg::RunFinished { outcome, stats } => {
            if active {
                state.finish_run(outcome, stats);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
