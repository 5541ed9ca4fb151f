//! Console output utilities
//!
//! Plain-text rendering of a dashboard view for terminals.

use std::fmt::Write;

use itertools::Itertools;

use crate::dashboard::{DashboardView, DonutGauge, MetricCard};
use crate::utils::format::format_population;

const BAR_WIDTH: usize = 20;

/// Render a dashboard view as a text report
#[must_use]
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "US Population Dashboard - {} ({})", view.year, view.theme);
    let _ = writeln!(out);

    let _ = writeln!(out, "Gains/Losses");
    write_metric(&mut out, &view.gains_losses.largest_gain);
    write_metric(&mut out, &view.gains_losses.largest_loss);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "States Migration (annual change beyond {})",
        view.migration.threshold
    );
    write_donut(&mut out, "Inbound", &view.migration.inbound);
    write_donut(&mut out, "Outbound", &view.migration.outbound);
    let _ = writeln!(out);

    let _ = writeln!(out, "Top States");
    let name_width = view
        .top_states
        .rows
        .iter()
        .map(|row| row.state_name.len())
        .max()
        .unwrap_or(0);
    for row in &view.top_states.rows {
        let _ = writeln!(
            out,
            "{:>3}. {:<name_width$}  {}  {}",
            row.rank,
            row.state_name,
            progress_bar(row.population, view.top_states.progress_max),
            format_population(row.population),
        );
    }

    let _ = write!(
        out,
        "\nMap: {} states, color range 0-{}",
        view.choropleth.entries.len(),
        format_population(view.choropleth.color_range.1)
    );
    let years = view.heatmap.cells.iter().map(|c| c.year).unique().count();
    let _ = writeln!(out, "; heatmap: {} cells over {years} years", view.heatmap.cells.len());

    out
}

fn write_metric(out: &mut String, card: &MetricCard) {
    if card.delta.is_empty() {
        let _ = writeln!(out, "  {:<20} {}", card.label, card.value);
    } else {
        let _ = writeln!(out, "  {:<20} {} ({})", card.label, card.value, card.delta);
    }
}

fn write_donut(out: &mut String, heading: &str, donut: &DonutGauge) {
    let _ = writeln!(
        out,
        "  {heading:<9} {:>3} %  {}",
        donut.percent,
        progress_bar(u64::from(donut.percent), 100)
    );
}

/// Fixed-width bar filled in proportion to `value / max`
fn progress_bar(value: u64, max: u64) -> String {
    let filled = if max == 0 {
        0
    } else {
        let ratio = u128::from(value.min(max)) * BAR_WIDTH as u128 / u128::from(max);
        usize::try_from(ratio).unwrap_or(BAR_WIDTH)
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
