//! Console rendering of the per-cycle fleet table.
//!
//! The table is meant for a human watching the terminal; its layout is not
//! a stable machine-readable format.

use std::fmt::Write;

use colored::Colorize;

use crate::monitor::StatusRow;
use crate::probe::HealthState;

const LABEL_WIDTH: usize = 20;
const ADDRESS_WIDTH: usize = 15;
const STATE_WIDTH: usize = 10;

/// Line printed after every table.
pub const SEPARATOR: &str = "===================================";

/// Renders the header, one line per row, and the trailing separator.
///
/// Online targets get a green marker, offline targets a red one. An empty
/// slice still produces the header and separator.
#[must_use]
pub fn render(rows: &[StatusRow]) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "| {:<LABEL_WIDTH$} | {:<ADDRESS_WIDTH$} | {:<STATE_WIDTH$}   |",
        "Description", "Device IP", "Status"
    );
    let _ = writeln!(
        out,
        "|-{}-|-{}-|-{}---|",
        "-".repeat(LABEL_WIDTH),
        "-".repeat(ADDRESS_WIDTH),
        "-".repeat(STATE_WIDTH)
    );

    for row in rows {
        let _ = writeln!(
            out,
            "| {:<LABEL_WIDTH$} | {:<ADDRESS_WIDTH$} | {} {} |",
            row.label,
            row.address,
            marker(row.state),
            status_text(row.state),
        );
    }

    out.push_str(SEPARATOR);
    out
}

/// Colored circle distinguishing online from offline.
fn marker(state: HealthState) -> colored::ColoredString {
    paint("●", state)
}

/// Padded, colored state name.
fn status_text(state: HealthState) -> colored::ColoredString {
    let padded = format!("{:<STATE_WIDTH$}", state.to_string().to_lowercase());
    paint(&padded, state)
}

fn paint(text: &str, state: HealthState) -> colored::ColoredString {
    if state.is_online() {
        text.green()
    } else {
        text.red()
    }
}
