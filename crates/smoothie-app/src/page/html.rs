//! HTML rendering for [`Page`].
//!
//! The whole page is one `<form method="post">`, so every button press sends
//! the complete widget state back for the next render pass.

use super::{Block, Page, REMOVE_FIELD};
use crate::fruit_info::DataTable;
use std::fmt::Write;

const STYLE: &str = "\
body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#262730}\
label{display:block;margin:1rem 0 .25rem}\
input[type=text],select{padding:.4rem;font-size:1rem}\
fieldset{border:1px solid #ddd;border-radius:.4rem;margin:1rem 0}\
ul.chosen{list-style:none;padding:0;margin:.25rem 0}\
ul.chosen li{display:inline-block;background:#ff4b4b;color:#fff;border-radius:.3rem;padding:.15rem .5rem;margin:0 .3rem .3rem 0}\
ul.chosen button{background:none;border:none;color:#fff;cursor:pointer}\
table{border-collapse:collapse;margin:1rem 0}\
td,th{border:1px solid #ddd;padding:.3rem .6rem;text-align:left}\
pre.json{background:#f6f6f9;padding:.75rem;overflow:auto}\
.alert{padding:.75rem 1rem;border-radius:.4rem;margin:1rem 0}\
.alert.error{background:#ffe3e3}\
.alert.warning{background:#fff6d6}\
.alert.success{background:#dff5e3}\
.default-action{position:absolute;left:-9999px}";

/// Emoji shortcodes the page text may contain.
const SHORTCODES: &[(&str, &str)] = &[
    (":cup_with_straw:", "\u{1F964}"),
    (":white_check_mark:", "\u{2705}"),
];

pub(super) fn render_document(page: &Page) -> String {
    let title = page
        .blocks()
        .iter()
        .find_map(|b| match b {
            Block::Title(t) => Some(strip_shortcodes(t)),
            _ => None,
        })
        .unwrap_or_default();

    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{}</title><style>{STYLE}</style></head><body><main>\
         <form method=\"post\" action=\"/\">\
         <button type=\"submit\" class=\"default-action\" tabindex=\"-1\" aria-hidden=\"true\">Update</button>",
        escape(&title)
    );
    for block in page.blocks() {
        render_block(&mut out, block);
    }
    out.push_str("</form></main></body></html>");
    out
}

pub(super) fn render_failure() -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>Error</title><style>{STYLE}</style></head><body><main>\
         <div class=\"alert error\" role=\"alert\">Something went wrong while rendering this page. \
         Please try again.</div></main></body></html>"
    )
}

fn render_block(out: &mut String, block: &Block) {
    // Writing to a String cannot fail.
    let _ = match block {
        Block::Title(text) => write!(out, "<h1>{}</h1>", text_html(text)),
        Block::Text(text) => write!(out, "<p>{}</p>", text_html(text)),
        Block::LabeledText { label, value } => {
            write!(out, "<p>{} {}</p>", text_html(label), escape(value))
        }
        Block::TextInput {
            label,
            field,
            value,
        } => write!(
            out,
            "<label>{}<br><input type=\"text\" name=\"{field}\" value=\"{}\"></label>",
            text_html(label),
            escape(value)
        ),
        Block::MultiSelect {
            label,
            field,
            options,
            selected,
            max_selections,
        } => render_multiselect(out, label, field, options, selected, *max_selections),
        Block::DataTable(table) => render_table(out, table),
        Block::Json(value) => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            write!(out, "<pre class=\"json\">{}</pre>", escape(&pretty))
        }
        Block::Button { label, field } => write!(
            out,
            "<p><button type=\"submit\" name=\"{field}\" value=\"1\">{}</button></p>",
            escape(label)
        ),
        Block::Error(msg) => write!(
            out,
            "<div class=\"alert error\" role=\"alert\">{}</div>",
            escape(msg)
        ),
        Block::Warning(msg) => write!(
            out,
            "<div class=\"alert warning\" role=\"alert\">{}</div>",
            escape(msg)
        ),
        Block::Success { message, icon } => write!(
            out,
            "<div class=\"alert success\" role=\"status\">{} {}</div>",
            icon,
            escape(message)
        ),
    };
}

fn render_multiselect(
    out: &mut String,
    label: &str,
    field: &str,
    options: &[String],
    selected: &[String],
    max_selections: usize,
) -> std::fmt::Result {
    write!(out, "<fieldset><legend>{}</legend><ul class=\"chosen\">", text_html(label))?;
    for name in selected {
        let name = escape(name);
        write!(
            out,
            "<li><input type=\"hidden\" name=\"{field}\" value=\"{name}\">{name}\
             <button type=\"submit\" name=\"{REMOVE_FIELD}\" value=\"{name}\" \
             aria-label=\"Remove {name}\">&times;</button></li>"
        )?;
    }
    out.push_str("</ul>");

    if selected.len() >= max_selections {
        write!(
            out,
            "<p>You can only select up to {max_selections} options. Remove an option first.</p>"
        )?;
    } else {
        write!(
            out,
            "<select name=\"{field}\"><option value=\"\" selected>Choose an option</option>"
        )?;
        for option in options.iter().filter(|o| !selected.contains(o)) {
            let option = escape(option);
            write!(out, "<option value=\"{option}\">{option}</option>")?;
        }
        out.push_str("</select> <button type=\"submit\">Add</button>");
    }
    out.push_str("</fieldset>");
    Ok(())
}

fn render_table(out: &mut String, table: &DataTable) -> std::fmt::Result {
    out.push_str("<table><thead><tr>");
    for column in &table.columns {
        write!(out, "<th>{}</th>", escape(column))?;
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            write!(out, "<td>{}</td>", escape(cell))?;
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    Ok(())
}

/// Escapes text for HTML element content and double-quoted attributes.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Escapes application text and expands emoji shortcodes.
fn text_html(raw: &str) -> String {
    SHORTCODES
        .iter()
        .fold(escape(raw), |text, (code, emoji)| text.replace(code, emoji))
}

fn strip_shortcodes(raw: &str) -> String {
    SHORTCODES
        .iter()
        .fold(raw.to_string(), |text, (code, _)| text.replace(code, ""))
        .trim()
        .to_string()
}
