//! Render target selection and figure output.

use std::fs;
use std::path::Path;

use crate::error::MitoplotError;
use crate::genome::LocusType;
use crate::plot::PlotOptions;
use crate::render_html::wrap_html;
use crate::render_linear::linear_figure;
use crate::render_polar::polar_figure;
use crate::variant::Variant;

/// The four figure flavors. Selected once from the (linear, interactive)
/// flag pair; everything downstream dispatches on this instead of
/// re-checking booleans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    PolarStatic,
    LinearStatic,
    PolarInteractive,
    LinearInteractive,
}

impl RenderTarget {
    pub fn from_flags(linear: bool, interactive: bool) -> Self {
        match (linear, interactive) {
            (false, false) => RenderTarget::PolarStatic,
            (true, false) => RenderTarget::LinearStatic,
            (false, true) => RenderTarget::PolarInteractive,
            (true, true) => RenderTarget::LinearInteractive,
        }
    }

    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            RenderTarget::PolarInteractive | RenderTarget::LinearInteractive
        )
    }

    /// Extension used when the output path does not provide one.
    pub fn default_extension(self) -> &'static str {
        if self.is_interactive() {
            ".html"
        } else {
            ".png"
        }
    }

    /// Render one sample into a figure.
    pub fn render(
        self,
        sample: &str,
        variants: &[Variant],
        options: &PlotOptions,
    ) -> Result<Figure, MitoplotError> {
        match self {
            RenderTarget::PolarStatic => {
                Ok(Figure::Svg(polar_figure(sample, variants, options, false).to_string()))
            }
            RenderTarget::LinearStatic => {
                Ok(Figure::Svg(linear_figure(sample, variants, options, false).to_string()))
            }
            RenderTarget::PolarInteractive => {
                let svg = polar_figure(sample, variants, options, true).to_string();
                Ok(Figure::Html(wrap_html(sample, &svg)?))
            }
            RenderTarget::LinearInteractive => {
                let svg = linear_figure(sample, variants, options, true).to_string();
                Ok(Figure::Html(wrap_html(sample, &svg)?))
            }
        }
    }
}

/// A finished figure, ready to be written out.
#[derive(Clone, Debug)]
pub enum Figure {
    Svg(String),
    Html(String),
}

impl Figure {
    pub fn content(&self) -> &str {
        match self {
            Figure::Svg(text) | Figure::Html(text) => text,
        }
    }

    /// Write the figure to `path`. SVG figures are written as markup for
    /// a `.svg` path and rasterized for anything else; HTML figures are
    /// always written as text.
    pub fn save(&self, path: &Path) -> Result<(), MitoplotError> {
        match self {
            Figure::Html(text) => {
                fs::write(path, text)?;
                Ok(())
            }
            Figure::Svg(text) => {
                let wants_svg = path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("svg"))
                    .unwrap_or(false);
                if wants_svg {
                    fs::write(path, text)?;
                    Ok(())
                } else {
                    rasterize_png(text, path)
                }
            }
        }
    }
}

fn rasterize_png(svg_markup: &str, path: &Path) -> Result<(), MitoplotError> {
    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = resvg::usvg::Tree::from_str(svg_markup, &options)
        .map_err(|e| MitoplotError::Render(format!("Invalid SVG markup: {e}")))?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| MitoplotError::Render("Could not allocate output pixmap".to_string()))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );
    pixmap
        .save_png(path)
        .map_err(|e| MitoplotError::Render(format!("Could not write PNG: {e}")))
}

/// A `<title>` child element: the tooltip of its parent shape.
pub(crate) fn tooltip(content: &str) -> svg::node::element::Element {
    use svg::node::Node;
    let mut title = svg::node::element::Element::new("title");
    title.append(svg::node::Text::new(xml_escape(content)));
    title
}

/// Escape text destined for SVG or HTML markup.
pub(crate) fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Rough monospace text width, good enough to size annotation boxes.
pub(crate) fn estimate_text_width(label: &str) -> f64 {
    (label.chars().count().max(1) as f64) * 6.5
}

/// Legend entries for the locus type palette, in display order.
pub(crate) fn legend_entries() -> [(&'static str, &'static str); 5] {
    [
        LocusType::Coding,
        LocusType::Regulatory,
        LocusType::RRna,
        LocusType::TRna,
        LocusType::NonCoding,
    ]
    .map(|loc_type| (loc_type.color(), loc_type.legend_label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_from_flags() {
        assert_eq!(
            RenderTarget::from_flags(false, false),
            RenderTarget::PolarStatic
        );
        assert_eq!(
            RenderTarget::from_flags(true, false),
            RenderTarget::LinearStatic
        );
        assert_eq!(
            RenderTarget::from_flags(false, true),
            RenderTarget::PolarInteractive
        );
        assert_eq!(
            RenderTarget::from_flags(true, true),
            RenderTarget::LinearInteractive
        );
    }

    #[test]
    fn default_extensions() {
        assert_eq!(RenderTarget::PolarStatic.default_extension(), ".png");
        assert_eq!(RenderTarget::LinearInteractive.default_extension(), ".html");
    }

    #[test]
    fn render_produces_the_right_document_kind() {
        let options = PlotOptions::default();
        let fig = RenderTarget::PolarStatic.render("S", &[], &options).unwrap();
        assert!(matches!(fig, Figure::Svg(_)));
        assert!(fig.content().starts_with("<svg"));
        let fig = RenderTarget::PolarInteractive
            .render("S", &[], &options)
            .unwrap();
        assert!(matches!(fig, Figure::Html(_)));
        assert!(fig.content().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("3308C>A & <x>"), "3308C&gt;A &amp; &lt;x&gt;");
    }
}
