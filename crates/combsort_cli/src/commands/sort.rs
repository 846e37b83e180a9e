//! Sort command implementation.

use crate::input::{parse_values, read_values};
use combsort_core::{sort_with_metadata, SortOrder};
use combsort_server::wire::SortResponse;
use std::path::Path;
use tracing::debug;

/// Runs the sort command.
pub fn run(
    values: &[String],
    file: Option<&Path>,
    descending: bool,
    gap: Option<usize>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = render(values, file, descending, gap, format)?;
    println!("{output}");
    Ok(())
}

fn render(
    values: &[String],
    file: Option<&Path>,
    descending: bool,
    gap: Option<usize>,
    format: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let input = match file {
        Some(path) => read_values(path)?,
        None => parse_values(&values.join(" "))?,
    };

    let order = SortOrder::from_ascending(!descending);
    let result = sort_with_metadata(&input, order, gap);
    debug!(
        len = input.len(),
        gap = result.initial_gap,
        micros = result.execution_time_micros,
        "sorted locally"
    );
    let response = SortResponse::new(input, order, result);

    match format {
        "json" => Ok(serde_json::to_string_pretty(&response)?),
        "text" => Ok(format_text(&response)),
        other => Err(format!("Unknown format: {other} (expected text or json)").into()),
    }
}

fn format_text(response: &SortResponse) -> String {
    let direction = if response.ascending {
        "ascending"
    } else {
        "descending"
    };
    format!(
        "Original:  {:?}\nSorted:    {:?}\nOrder:     {}\nGap:       {}\nTime:      {:.3} ms\nCompleted: {}",
        response.original_array,
        response.sorted_array,
        direction,
        response.gap,
        response.execution_time_ms,
        response.completion_time.to_rfc3339(),
    )
}
