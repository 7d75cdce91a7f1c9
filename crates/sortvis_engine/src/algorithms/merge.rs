use futures_util::future::{BoxFuture, FutureExt};
use sortvis_core::Value;

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
    l: usize,
    r: usize,
) -> BoxFuture<'c, Step> {
    async move {
        ctx.checkpoint()?;
        if l >= r {
            return Ok(());
        }
        let mid = l + (r - l) / 2;
        sort_range(ctx, l, mid).await?;
        sort_range(ctx, mid + 1, r).await?;
        merge(ctx, l, mid, r).await
    }
    .boxed()
}

/// Read positions in both snapshots and the next output slot.
struct Cursor {
    left: usize,
    right: usize,
    out: usize,
}

async fn merge(ctx: &mut StepContext<'_>, l: usize, mid: usize, r: usize) -> Step {
    let left = ctx.snapshot(l, mid);
    let right = ctx.snapshot(mid + 1, r);
    let mut cursor = Cursor {
        left: 0,
        right: 0,
        out: l,
    };

    let result = merge_from(ctx, &left, &right, mid + 1, &mut cursor).await;
    if result.is_err() {
        // Slots `out..=r` may hold values already copied lower down; refill
        // them with whatever was not placed yet so nothing is lost or doubled.
        for &value in left[cursor.left..].iter().chain(&right[cursor.right..]) {
            ctx.restore(cursor.out, value);
            cursor.out += 1;
        }
    }
    result
}

async fn merge_from(
    ctx: &mut StepContext<'_>,
    left: &[Value],
    right: &[Value],
    right_start: usize,
    cursor: &mut Cursor,
) -> Step {
    while cursor.left < left.len() && cursor.right < right.len() {
        ctx.checkpoint()?;
        ctx.announce_compare(cursor.out, right_start + cursor.right)
            .await?;
        let value = if left[cursor.left] <= right[cursor.right] {
            cursor.left += 1;
            left[cursor.left - 1]
        } else {
            cursor.right += 1;
            right[cursor.right - 1]
        };
        place(ctx, cursor, value).await?;
    }

    while cursor.left < left.len() {
        ctx.checkpoint()?;
        cursor.left += 1;
        place(ctx, cursor, left[cursor.left - 1]).await?;
    }
    while cursor.right < right.len() {
        ctx.checkpoint()?;
        cursor.right += 1;
        place(ctx, cursor, right[cursor.right - 1]).await?;
    }
    Ok(())
}

async fn place(ctx: &mut StepContext<'_>, cursor: &mut Cursor, value: Value) -> Step {
    ctx.write(cursor.out, value);
    cursor.out += 1;
    ctx.pause().await
}
