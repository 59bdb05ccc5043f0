//! Self-contained HTML document embedding an interactive figure.
//!
//! The figure itself is the same SVG the static renderers produce, plus
//! tooltips; the HTML shell adds hover styling so markers respond to the
//! pointer without any script dependency.

use std::fmt::Write;

use crate::error::MitoplotError;
use crate::render::xml_escape;

pub fn wrap_html(title: &str, svg_markup: &str) -> Result<String, MitoplotError> {
    let mut html = String::with_capacity(svg_markup.len() + 2048);
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(
        html,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>"
    )?;
    writeln!(html, "<title>{}</title>", xml_escape(title))?;
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    )?;
    writeln!(html, "h1{{margin:0 0 12px 0;font-size:22px;}}")?;
    writeln!(html, "svg{{background:#fafafa;border:1px solid #e5e5e5;max-width:100%;height:auto;}}")?;
    writeln!(html, ".variant circle{{cursor:pointer;}}")?;
    writeln!(
        html,
        ".variant circle:hover{{stroke:#e17f0f;stroke-width:3;}}"
    )?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{}</h1>", xml_escape(title))?;
    writeln!(html, "{svg_markup}")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}
