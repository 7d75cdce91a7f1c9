use std::cmp::Ordering;

use super::{Step, StepContext};

pub(crate) async fn sort(ctx: &mut StepContext<'_>) -> Step {
    let n = ctx.len();
    for i in 1..n {
        ctx.checkpoint()?;
        let mut j = i;
        while j > 0 {
            ctx.checkpoint()?;
            if ctx.compare(j - 1, j).await? != Ordering::Greater {
                break;
            }
            ctx.swap(j - 1, j).await?;
            j -= 1;
        }
    }
    ctx.settle_all();
    Ok(())
}
