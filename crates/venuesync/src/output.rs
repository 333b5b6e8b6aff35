//! Terminal rendering for command output.
//!
//! Every command funnels its result through here with two projections:
//! a human view (a table row type, or preformatted detail text) and
//! the domain value itself. The machine formats (`json`,
//! `json-compact`, `yaml`) always serialize the domain value, never
//! the display projection, so scripted consumers see full-precision
//! fields (`"pricePerHour": 350.0`) instead of money strings
//! (`"$350.00/hr"`). `plain` emits bare identifiers for piping into
//! the next command.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::{ColorMode, OutputFormat};

/// Resolve the effective color decision from the `--color` flag, the
/// `NO_COLOR` convention, and whether stdout is a terminal.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}

/// Render a collection. `to_row` projects each item into its table
/// row; `id_fn` names an item for `plain` output.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
{
    if let Some(machine) = serialize_for(format, data) {
        return machine;
    }
    match format {
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
        _ => rounded_table(data.iter().map(to_row)),
    }
}

/// Render one item. Detail views are free-form text, so the human
/// branch takes a preformatted `detail_fn` instead of a `Tabled` row.
pub fn render_single<T: Serialize>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String {
    if let Some(machine) = serialize_for(format, data) {
        return machine;
    }
    match format {
        OutputFormat::Plain => id_fn(data),
        _ => detail_fn(data),
    }
}

/// Write rendered output to stdout unless `--quiet` suppressed it.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Serialize for the machine formats; `None` for the two human ones.
/// The domain types are plain data, so serialization cannot fail.
fn serialize_for<T: Serialize + ?Sized>(format: &OutputFormat, data: &T) -> Option<String> {
    match format {
        OutputFormat::Json => {
            Some(serde_json::to_string_pretty(data).expect("plain data serializes"))
        }
        OutputFormat::JsonCompact => Some(serde_json::to_string(data).expect("plain data serializes")),
        OutputFormat::Yaml => Some(serde_yaml::to_string(data).expect("plain data serializes")),
        OutputFormat::Table | OutputFormat::Plain => None,
    }
}

fn rounded_table<R: Tabled>(rows: impl Iterator<Item = R>) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Listing {
        id: String,
        price_per_hour: f64,
    }

    #[derive(Tabled)]
    struct ListingRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Price/hr")]
        price: String,
    }

    fn listings() -> Vec<Listing> {
        vec![
            Listing { id: "venue-1".into(), price_per_hour: 350.0 },
            Listing { id: "venue-2".into(), price_per_hour: 450.0 },
        ]
    }

    fn row(l: &Listing) -> ListingRow {
        ListingRow {
            id: l.id.clone(),
            price: format!("${:.2}", l.price_per_hour),
        }
    }

    #[test]
    fn json_carries_domain_values_not_display_strings() {
        let out = render_list(&OutputFormat::Json, &listings(), row, |l| l.id.clone());
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(parsed[0]["pricePerHour"], 350.0);
        assert!(!out.contains("$350.00"));
    }

    #[test]
    fn table_shows_the_display_projection() {
        let out = render_list(&OutputFormat::Table, &listings(), row, |l| l.id.clone());
        assert!(out.contains("Price/hr"));
        assert!(out.contains("$350.00"));
    }

    #[test]
    fn plain_emits_one_identifier_per_line() {
        let out = render_list(&OutputFormat::Plain, &listings(), row, |l| l.id.clone());
        assert_eq!(out, "venue-1\nvenue-2");
    }

    #[test]
    fn single_item_dispatch_matches_list_dispatch() {
        let item = Listing { id: "venue-1".into(), price_per_hour: 350.0 };
        let detail = render_single(&OutputFormat::Table, &item, |l| format!("## {}", l.id), |l| {
            l.id.clone()
        });
        assert_eq!(detail, "## venue-1");

        let yaml = render_single(&OutputFormat::Yaml, &item, |_| String::new(), |l| l.id.clone());
        assert!(yaml.contains("pricePerHour: 350.0"));
    }

    #[test]
    fn explicit_color_modes_ignore_the_terminal() {
        assert!(should_color(&ColorMode::Always));
        assert!(!should_color(&ColorMode::Never));
    }
}
