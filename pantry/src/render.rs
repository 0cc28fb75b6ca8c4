//! HTML shopping list page
//!
//! Consumes only the display strings of a [`ShoppingList`]; all markup lives here.

use crate::error::{PantryError, Result};
use crate::shopping::ShoppingList;
use std::path::Path;

/// Escape text for use inside HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_section(output: &mut String, heading: &str, lines: &[String]) {
    output.push_str("        <div class=\"shopping-list\">\n");
    output.push_str(&format!("            <h2>{heading}</h2>\n"));
    output.push_str("            <ul>\n");
    for line in lines {
        output.push_str(&format!("                <li>{}</li>\n", escape_html(line)));
    }
    output.push_str("            </ul>\n        </div>\n");
}

/// Render the full shopping list page
pub fn render_html(list: &ShoppingList) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("    <title>Smart Refrigerator - Shopping List</title>\n");
    output.push_str("    <link rel=\"stylesheet\" href=\"refrigerator.css\">\n");
    output.push_str("</head>\n<body>\n");
    output.push_str("    <header>\n        <h1>Shopping List</h1>\n    </header>\n");
    output.push_str("    <div class=\"container\">\n");
    output.push_str("        <section class=\"btn\">\n");
    output.push_str(
        "            <a href=\"home.html\" style=\"text-decoration: none;\">Go to Home</a>\n",
    );
    output.push_str("        </section>\n\n");

    push_section(
        &mut output,
        "Items to Restock (low quantity/expiring soon):",
        &list.restock_lines(),
    );
    output.push('\n');
    push_section(
        &mut output,
        "Standard Shopping Items:",
        &list.missing_standard_lines(),
    );

    output.push_str("    </div>\n</body>\n</html>\n");
    output
}

/// Render `list` and write it to `path`
pub fn write_html(list: &ShoppingList, path: &Path) -> Result<()> {
    std::fs::write(path, render_html(list)).map_err(|e| PantryError::io(path, e))?;
    log::info!("Wrote shopping list to {}", path.display());
    Ok(())
}
