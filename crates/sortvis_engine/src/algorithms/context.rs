use std::cmp::Ordering;

use sortvis_core::{StepEvent, Value};

use crate::error::Interrupt;
use crate::run_state::SharedRunState;
use crate::{CancelToken, Pacer, SequenceStore, StepSink};

pub(crate) type Step<T = ()> = Result<T, Interrupt>;

/// Everything an engine touches during one run.
///
/// All store mutation goes through here so every change is counted, emitted
/// and paced the same way.
pub(crate) struct StepContext<'a> {
    store: &'a mut SequenceStore,
    pacer: &'a Pacer,
    token: &'a CancelToken,
    sink: &'a dyn StepSink,
    run: &'a SharedRunState,
}

impl<'a> StepContext<'a> {
    pub(crate) fn new(
        store: &'a mut SequenceStore,
        pacer: &'a Pacer,
        token: &'a CancelToken,
        sink: &'a dyn StepSink,
        run: &'a SharedRunState,
    ) -> Self {
        Self {
            store,
            pacer,
            token,
            sink,
            run,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.store.len()
    }

    pub(crate) fn snapshot(&self, from: usize, to: usize) -> Vec<Value> {
        self.store.snapshot(from, to)
    }

    pub(crate) fn checkpoint(&self) -> Step {
        if self.token.is_stop_requested() {
            Err(Interrupt::Stopped)
        } else {
            Ok(())
        }
    }

    /// The single suspension point, guarded by a checkpoint on both sides.
    pub(crate) async fn pause(&self) -> Step {
        self.checkpoint()?;
        self.pacer.suspend(self.token).await?;
        self.checkpoint()
    }

    /// Emits `Compare(i, j)`, waits, then orders the two stored values.
    pub(crate) async fn compare(&mut self, i: usize, j: usize) -> Step<Ordering> {
        self.announce_compare(i, j).await?;
        Ok(self.store.compare(i, j))
    }

    /// Emits and paces a comparison whose operands live outside the store.
    pub(crate) async fn announce_compare(&mut self, i: usize, j: usize) -> Step {
        self.checkpoint()?;
        self.sink.on_step_event(StepEvent::Compare(i, j));
        self.sink.on_stats_changed(self.run.record_comparison());
        self.pause().await
    }

    pub(crate) async fn swap(&mut self, i: usize, j: usize) -> Step {
        self.checkpoint()?;
        self.store.swap(i, j);
        self.sink.on_step_event(StepEvent::Swap(i, j));
        self.sink.on_stats_changed(self.run.record_swap());
        self.pause().await
    }

    /// Unpaced overwrite; merge pairs it with `pause` itself so its cursor
    /// never disagrees with the store.
    pub(crate) fn write(&mut self, index: usize, value: Value) {
        self.store.set_value(index, value);
        self.sink.on_step_event(StepEvent::SetValue { index, value });
        self.sink.on_stats_changed(self.run.record_swap());
    }

    /// Uncounted overwrite used only to put values back after an interrupt.
    pub(crate) fn restore(&mut self, index: usize, value: Value) {
        self.store.set_value(index, value);
        self.sink.on_step_event(StepEvent::SetValue { index, value });
    }

    pub(crate) fn settle(&self, index: usize) {
        self.sink.on_step_event(StepEvent::MarkSettled(index));
    }

    pub(crate) fn settle_all(&self) {
        for index in 0..self.len() {
            self.settle(index);
        }
    }
}
