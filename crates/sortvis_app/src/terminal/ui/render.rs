use std::io::{self, Write};

use sortvis_core::{AppViewModel, BarMark, RunStatus};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the view model as columns of characters, tallest bar `rows` high.
pub struct TextRenderer {
    rows: usize,
    max_value: u32,
}

impl TextRenderer {
    pub fn new(rows: usize, max_value: u32) -> Self {
        Self {
            rows: rows.max(1),
            max_value: max_value.max(1),
        }
    }

    pub fn draw(&self, view: &AppViewModel) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.write_all(self.frame(view).as_bytes())?;
        out.flush()
    }

    pub fn frame(&self, view: &AppViewModel) -> String {
        let mut frame = status_line(view);
        frame.push('\n');

        let heights: Vec<usize> = view
            .bars
            .iter()
            .map(|bar| self.scaled_height(bar.value))
            .collect();
        for row in (1..=self.rows).rev() {
            let line: String = view
                .bars
                .iter()
                .zip(&heights)
                .map(|(bar, &height)| if height >= row { mark_char(bar.mark) } else { ' ' })
                .collect();
            frame.push_str(line.trim_end());
            frame.push('\n');
        }
        frame.push_str(&"-".repeat(view.bars.len()));
        frame.push('\n');
        frame
    }

    /// Every non-zero value gets at least one row so no bar disappears.
    fn scaled_height(&self, value: u32) -> usize {
        let value = value.min(self.max_value) as u64;
        let scaled = (value * self.rows as u64).div_ceil(self.max_value as u64);
        scaled as usize
    }
}

pub fn status_line(view: &AppViewModel) -> String {
    format!(
        "{} | {} | comparisons {} | swaps {} | {} ms | delay {} ms",
        view.algorithm,
        status_label(view.status),
        format_with_commas(view.comparisons),
        format_with_commas(view.swaps),
        format_with_commas(view.elapsed_ms),
        view.delay_ms
    )
}

fn status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::Idle => "Idle",
        RunStatus::Running => "Running",
        RunStatus::Stopping => "Stopping",
        RunStatus::Completed => "Completed",
        RunStatus::Aborted => "Stopped",
    }
}

fn mark_char(mark: BarMark) -> char {
    match mark {
        BarMark::Plain => '#',
        BarMark::Compare => '?',
        BarMark::Swap => '*',
        BarMark::Sorted => '=',
    }
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
