//! Rendering helpers for listings

use chrono::{DateTime, Utc};

use crate::location::PlaygroundInfo;

/// Placeholder for values a playground has no manifest for
pub const UNKNOWN: &str = "-";

/// Human readable age of `then` relative to `now`
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Render rows as a left-aligned table with a header separator
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(table_line(headers, &widths));
    out.push(widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(table_line(&cells, &widths));
    }
    out.join("\n")
}

fn table_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Table rows for a playground listing, sorted by name
pub fn playground_rows(playgrounds: &[PlaygroundInfo], now: DateTime<Utc>) -> Vec<Vec<String>> {
    let mut sorted: Vec<&PlaygroundInfo> = playgrounds.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    sorted
        .into_iter()
        .map(|pg| {
            vec![
                pg.name.clone(),
                pg.template.clone().unwrap_or_else(|| UNKNOWN.to_string()),
                pg.created.map(|c| time_ago(c, now)).unwrap_or_else(|| UNKNOWN.to_string()),
            ]
        })
        .collect()
}
