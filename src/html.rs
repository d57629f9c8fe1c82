//! Standalone HTML rendering of the current view, used by export.
//!
//! Every dataset string passes through [`escape_html`]; names and notes are
//! never interpreted as markup.

use crate::constants::APP_NAME;
use crate::types::{LiquidClass, LiquidRecord};
use crate::ui::components::format_quantity;
use std::fmt::Write as _;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;color:#18181b}\
table{border-collapse:collapse;width:100%}\
th,td{padding:.5rem;text-align:left;border-bottom:1px solid #e4e4e7}\
tr:nth-child(even){background:#fafafa}\
.class{background:#f0fdfa;padding:1rem;border-radius:8px;margin-bottom:1.5rem}\
.params{display:grid;grid-template-columns:repeat(3,1fr);gap:.75rem}\
pre{background:#f4f4f5;padding:.5rem;white-space:pre-wrap}\
footer{margin-top:1rem;color:#71717a;font-size:.8rem}";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<tr>` rows for the liquid table
pub fn liquid_rows(liquids: &[LiquidRecord]) -> String {
    let mut out = String::new();
    for liquid in liquids {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&liquid.name),
            format_quantity(liquid.density),
            format_quantity(liquid.viscosity),
            escape_html(&liquid.molar_weight.to_string()),
            escape_html(&liquid.liquid_class_name),
            escape_html(&liquid.notes),
        );
    }
    out
}

/// Class card with all six parameter blocks expanded
pub fn class_section(class: &LiquidClass) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section class=\"class\">");
    let _ = writeln!(out, "<h2>{} Settings</h2>", escape_html(&class.name));
    let _ = writeln!(out, "<p>{}</p>", escape_html(&class.description));
    let _ = writeln!(out, "<div class=\"params\">");
    for (kind, setting) in class.parameters() {
        let _ = writeln!(
            out,
            "<div id=\"{}\"><strong>{}:</strong> {}<pre>{}</pre></div>",
            kind.wire_key(),
            escape_html(kind.display_name()),
            escape_html(&setting.summary()),
            escape_html(&setting.instrument_settings),
        );
    }
    let _ = writeln!(out, "</div>\n</section>");
    out
}

pub fn render_document(class: Option<&LiquidClass>, liquids: &[LiquidRecord], generated: &str) -> String {
    let title = match class {
        Some(class) => format!("{} - {}", APP_NAME, class.name),
        None => APP_NAME.to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>");
    let _ = writeln!(out, "<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&title));
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLE);
    let _ = writeln!(out, "<h1>Laboratory Liquid Properties for Hamilton STAR</h1>");
    if let Some(class) = class {
        out.push_str(&class_section(class));
    }
    let _ = writeln!(
        out,
        "<table>\n<thead><tr><th>Liquid</th><th>Density (g/mL)</th><th>Viscosity (cP)</th>\
         <th>Molar Weight (g/mol)</th><th>Liquid Class</th><th>Notes</th></tr></thead>\n<tbody>"
    );
    out.push_str(&liquid_rows(liquids));
    let _ = writeln!(out, "</tbody>\n</table>");
    let _ = writeln!(
        out,
        "<footer>{} liquids. Generated {}.</footer>\n</body>\n</html>",
        liquids.len(),
        escape_html(generated)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::types::MolarWeight;

    fn hostile_liquid() -> LiquidRecord {
        LiquidRecord {
            name: "<script>alert(1)</script>".into(),
            density: 1.0,
            viscosity: 1.0,
            molar_weight: MolarWeight::Unknown,
            liquid_class_name: "A&B".into(),
            notes: "Use \"low\" & <slow> tips".into(),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("a < b & c > \"d\" 'e'"), "a &lt; b &amp; c &gt; &quot;d&quot; &#39;e&#39;");
        assert_eq!(escape_html("50-100 µL/s"), "50-100 µL/s");
    }

    #[test]
    fn rows_render_names_and_notes_as_text() {
        let rows = liquid_rows(&[hostile_liquid()]);
        assert!(!rows.contains("<script>"));
        assert!(rows.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(rows.contains("<td>A&amp;B</td>"));
        assert!(rows.contains("Use &quot;low&quot; &amp; &lt;slow&gt; tips"));
        assert!(rows.contains("<td>—</td>"));
    }

    #[test]
    fn document_contains_class_blocks_and_rows() {
        let dataset = Dataset::builtin();
        let class = dataset.find_class("Viscous");
        let liquids = dataset.liquids_in_class(Some("Viscous"));
        let doc = render_document(class, &liquids, "2026-01-01 12:00");

        assert!(doc.contains("<h2>Viscous Settings</h2>"));
        assert!(doc.contains("<strong>Air Gap:</strong> Small (5-10 µL)"));
        assert!(doc.contains("Pre-Aspirate Air Gap: 0-5 µL"));
        assert_eq!(doc.matches("<tr><td>").count(), 2);
        assert!(doc.contains("2 liquids. Generated 2026-01-01 12:00."));
    }

    #[test]
    fn document_without_class_has_no_card() {
        let dataset = Dataset::builtin();
        let doc = render_document(None, dataset.liquids(), "now");
        assert!(!doc.contains("class=\"class\""));
        assert_eq!(doc.matches("<tr><td>").count(), 20);
    }
}
