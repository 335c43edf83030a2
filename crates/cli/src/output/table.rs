//! Grid-table rendering of lookup outcomes.
//!
//! Color is decided by the caller (terminal detection happens there), so
//! plain output is deterministic for tests and pipes.

use console::{measure_text_width, style};
use dnsprobe_application::LookupOutcome;

const HEADERS: [&str; 4] = ["Host", "Record Type", "Result", "Time (s)"];

/// One row per returned value; a failed lookup renders as a single row
/// carrying the error message.
pub fn render_table(outcomes: &[LookupOutcome], colored: bool) -> String {
    let mut rows: Vec<[String; 4]> = Vec::new();

    for outcome in outcomes {
        let time = format!("{:.4}", outcome.elapsed.as_secs_f64());
        match &outcome.result {
            Ok(answer) => {
                for value in &answer.values {
                    rows.push(make_row(outcome, value, &time, colored, false));
                }
            }
            Err(err) => rows.push(make_row(outcome, &err.to_string(), &time, colored, true)),
        }
    }

    render_grid(&rows)
}

fn make_row(
    outcome: &LookupOutcome,
    value: &str,
    time: &str,
    colored: bool,
    failed: bool,
) -> [String; 4] {
    if !colored {
        return [
            outcome.domain.clone(),
            outcome.record_type.to_string(),
            value.to_string(),
            time.to_string(),
        ];
    }

    let value_cell = if failed {
        style(value).red()
    } else {
        style(value).green()
    };

    [
        style(&outcome.domain).yellow().to_string(),
        style(outcome.record_type).cyan().to_string(),
        value_cell.to_string(),
        style(time).magenta().to_string(),
    ]
}

fn render_grid(rows: &[[String; 4]]) -> String {
    // widths are measured ANSI-aware so colored cells still line up
    let mut widths: Vec<usize> = HEADERS.iter().map(|header| header.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let headers = HEADERS.map(str::to_string);
    let mut out = String::new();
    push_separator(&mut out, &widths);
    push_row(&mut out, &headers, &widths);
    push_separator(&mut out, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    push_separator(&mut out, &widths);
    out
}

fn push_separator(out: &mut String, widths: &[usize]) {
    for width in widths {
        out.push('+');
        out.push_str(&"-".repeat(width + 2));
    }
    out.push_str("+\n");
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize]) {
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - measure_text_width(cell);
        out.push_str("| ");
        out.push_str(cell);
        out.push_str(&" ".repeat(pad));
        out.push(' ');
    }
    out.push_str("|\n");
}
