//! Step-emitting sorting engines.
//!
//! Every engine checks the stop flag at the top of each loop iteration and
//! around every suspension, and returns `Interrupt::Stopped` through `?` as
//! soon as it sees it. Settle-all and `Done` are only reached by runs that
//! were not interrupted.
mod bubble;
mod context;
mod insertion;
mod merge;
mod quick;
mod selection;

use sortvis_core::Algorithm;

pub(crate) use context::{Step, StepContext};

pub(crate) async fn run(algorithm: Algorithm, ctx: &mut StepContext<'_>) -> Step {
    match algorithm {
        Algorithm::Bubble => bubble::sort(ctx).await,
        Algorithm::Selection => selection::sort(ctx).await,
        Algorithm::Insertion => insertion::sort(ctx).await,
        Algorithm::Merge => merge::sort(ctx).await,
        Algorithm::Quick => quick::sort(ctx).await,
    }
}
