//! Plain-text trace table.
//!
//! One row per capture: its index, the locals observed at the breakpoint and
//! a label frame. The label frame is counted from the outermost end because
//! test harness frames sit at a fixed distance from `main`, which makes that
//! frame a good per-capture test name.

use crate::capture::Trace;

/// Table rendering options
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Depth from the outermost frame of the label column; innermost when unset
    pub label_depth: Option<usize>,

    /// Maximum number of rows printed
    pub max_rows: Option<usize>,
}

impl TableConfig {
    pub fn with_label_depth(mut self, depth: usize) -> Self {
        self.label_depth = Some(depth);
        self
    }

    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.max_rows = Some(rows);
        self
    }
}

/// Render captured traces as an aligned text table
///
/// Local columns come from the first trace's locals; later traces are
/// matched by name and show `-` for anything missing.
pub fn render_trace_table(traces: &[Trace], config: &TableConfig) -> String {
    let local_names: Vec<&str> = traces
        .first()
        .map(|t| t.locals().iter().map(|l| l.name.as_str()).collect())
        .unwrap_or_default();

    let mut header = vec!["#".to_string()];
    header.extend(local_names.iter().map(|n| n.to_string()));
    header.push("frame".to_string());

    let limit = config.max_rows.unwrap_or(traces.len());
    let mut rows: Vec<Vec<String>> = Vec::new();

    for (index, trace) in traces.iter().enumerate().take(limit) {
        let mut row = vec![if trace.is_truncated() {
            format!("{}*", index)
        } else {
            index.to_string()
        }];

        for name in &local_names {
            let value = trace
                .locals()
                .iter()
                .find(|l| l.name == *name)
                .map(|l| l.value.clone())
                .unwrap_or_else(|| "-".to_string());
            row.push(value);
        }

        let label = match config.label_depth {
            Some(depth) => trace.from_outermost(depth),
            None => trace.innermost(),
        };
        row.push(label.map(|f| f.to_string()).unwrap_or_else(|| "-".to_string()));

        rows.push(row);
    }

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|r| r[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(&header)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.iter().map(|r| format_row(r)));

    if traces.len() > limit {
        lines.push(format!("(Showing {} of {} captures)", limit, traces.len()));
    }
    if traces.iter().any(Trace::is_truncated) {
        lines.push("* truncated capture".to_string());
    }

    lines.join("\n")
}
