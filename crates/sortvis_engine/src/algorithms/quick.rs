use std::cmp::Ordering;

use futures_util::future::{BoxFuture, FutureExt};

use super::{Step, StepContext};

pub(crate) async fn sort(ctx: &mut StepContext<'_>) -> Step {
    if let Some(last) = ctx.len().checked_sub(1) {
        sort_range(ctx, 0, last).await?;
    }
    ctx.settle_all();
    Ok(())
}

fn sort_range<'c, 'a: 'c>(
    ctx: &'c mut StepContext<'a>,
    low: usize,
    high: usize,
) -> BoxFuture<'c, Step> {
    async move {
        ctx.checkpoint()?;
        if low >= high {
            return Ok(());
        }
        let pivot = partition(ctx, low, high).await?;
        if let Some(upper) = pivot.checked_sub(1) {
            sort_range(ctx, low, upper).await?;
        }
        sort_range(ctx, pivot + 1, high).await
    }
    .boxed()
}

/// Lomuto partition around `high`; returns the pivot's final index.
async fn partition(ctx: &mut StepContext<'_>, low: usize, high: usize) -> Step<usize> {
    let mut i = low;
    for j in low..high {
        ctx.checkpoint()?;
        if ctx.compare(j, high).await? == Ordering::Less {
            ctx.swap(i, j).await?;
            i += 1;
        }
    }
    ctx.swap(i, high).await?;
    Ok(i)
}
