#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User moved the size control; regenerates a preview right away.
    SizeChanged(usize),
    /// User clicked Generate.
    GenerateClicked,
    /// Engine produced a fresh random sequence.
    SequenceGenerated(Vec<crate::Value>),
    /// User picked an algorithm.
    AlgorithmSelected(crate::Algorithm),
    /// User moved the speed control.
    SpeedChanged(u32),
    /// User clicked Sort.
    StartClicked,
    /// User clicked Stop.
    StopClicked,
    /// Engine emitted one step of the active run.
    Step(crate::StepEvent),
    /// Engine counters changed (or the periodic poll refreshed elapsed time).
    StatsChanged(crate::RunStats),
    /// Engine finished the active run.
    RunFinished {
        outcome: crate::RunOutcome,
        stats: crate::RunStats,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
