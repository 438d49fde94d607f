//! Human-readable explanation of a grid configuration.

use super::{GridColumn, StandardGridConfig};

/// Explains a configuration from its own fields; the citation is always last.
pub fn configuration_rationale(config: &StandardGridConfig) -> Vec<String> {
    let columns = config.columns();
    let mut lines = Vec::with_capacity(6);

    let fit = match columns {
        0..=7 => "keeps the sort quick and approachable",
        8..=9 => "balances discrimination against sorting effort",
        _ => "allows fine-grained discrimination between statements",
    };
    lines.push(format!(
        "A {}-point scale ({}) {}.",
        columns, config.range, fit
    ));

    let average = if columns == 0 {
        0.0
    } else {
        f64::from(config.total_items) / columns as f64
    };
    lines.push(format!(
        "{} items across {} columns averages {:.1} items per column.",
        config.total_items, columns, average
    ));

    let distribution = &config.distribution;
    if let Some(peak) = distribution.peak_index() {
        let cells = distribution.as_slice()[peak];
        let share = if distribution.total() == 0 {
            0
        } else {
            (u64::from(cells) * 100 + distribution.total() / 2) / distribution.total()
        };
        let value = config.range.min() + peak as i32;
        lines.push(format!(
            "The peak column ({}) holds {} items, about {}% of the sort.",
            GridColumn::label_for(value),
            cells,
            share
        ));
    }

    if distribution.is_symmetric() {
        lines.push(
            "The distribution is symmetric, so agreement and disagreement carry equal weight."
                .to_string(),
        );
    } else {
        lines.push(
            "The distribution is not symmetric; one pole offers more placements than the other."
                .to_string(),
        );
    }

    lines.push(format!(
        "Suited to {} researchers; expect {} per participant.",
        config.expertise_level.label(),
        config.time_estimate
    ));

    lines.push(config.citation.clone());
    lines
}
