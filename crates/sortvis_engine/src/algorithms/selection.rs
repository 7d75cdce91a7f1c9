use std::cmp::Ordering;

use super::{Step, StepContext};

pub(crate) async fn sort(ctx: &mut StepContext<'_>) -> Step {
    let n = ctx.len();
    for i in 0..n.saturating_sub(1) {
        ctx.checkpoint()?;
        let mut min_idx = i;
        for j in i + 1..n {
            ctx.checkpoint()?;
            // Strictly smaller only, so equal values keep the earlier minimum.
            if ctx.compare(min_idx, j).await? == Ordering::Greater {
                min_idx = j;
            }
        }
        if min_idx != i {
            ctx.swap(i, min_idx).await?;
        }
        ctx.settle(i);
    }
    if let Some(last) = n.checked_sub(1) {
        ctx.settle(last);
    }
    Ok(())
}
