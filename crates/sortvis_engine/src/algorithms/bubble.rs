use std::cmp::Ordering;

use super::{Step, StepContext};

pub(crate) async fn sort(ctx: &mut StepContext<'_>) -> Step {
    let n = ctx.len();
    for i in 0..n {
        ctx.checkpoint()?;
        for j in 0..n - i - 1 {
            ctx.checkpoint()?;
            if ctx.compare(j, j + 1).await? == Ordering::Greater {
                ctx.swap(j, j + 1).await?;
            }
        }
        // The largest remaining value has bubbled to the end of this pass.
        ctx.settle(n - 1 - i);
    }
    ctx.settle_all();
    Ok(())
}
