//! Polar (circular) genome figure, built as an SVG document.
//!
//! Angles are measured from twelve o'clock, increasing counter-clockwise,
//! matching the origin-at-north convention of the reference plots. Radial
//! units are the abstract 0..27 band of the locus tables, scaled to
//! pixels here and nowhere else.

use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path, Rectangle, Text};
use svg::Document;

use crate::coords::polar_to_degrees;
use crate::genome::{HAlign, LocusType, VAlign, LOCI};
use crate::locus::{PolarLocus, PolarSplitLocus};
use crate::plot::PlotOptions;
use crate::render::{estimate_text_width, legend_entries, tooltip, xml_escape};
use crate::variant::Variant;

const W: f64 = 900.0;
const H: f64 = 900.0;
const CX: f64 = W * 0.5;
const CY: f64 = H * 0.5;
const PX_PER_UNIT: f64 = 15.0;
const ARC_STEPS: usize = 100;
const MARKER_RADIUS: f64 = 3.5;

fn polar_xy(theta: f64, r_units: f64) -> (f64, f64) {
    let r = r_units * PX_PER_UNIT;
    (CX - r * theta.sin(), CY - r * theta.cos())
}

/// Closed annular sector: outer arc forward, inner arc back. Arcs are
/// sampled as polylines, which keeps the path independent of SVG arc
/// flag subtleties for sectors wider than half a turn.
fn sector_data(theta: f64, width: f64, bottom: f64, height: f64) -> Data {
    let start = theta - width / 2.0;
    let end = theta + width / 2.0;
    let outer = bottom + height;
    let mut data = Data::new();
    for i in 0..=ARC_STEPS {
        let angle = start + (end - start) * (i as f64 / ARC_STEPS as f64);
        let (x, y) = polar_xy(angle, outer);
        data = if i == 0 {
            data.move_to((x, y))
        } else {
            data.line_to((x, y))
        };
    }
    for i in (0..=ARC_STEPS).rev() {
        let angle = start + (end - start) * (i as f64 / ARC_STEPS as f64);
        let (x, y) = polar_xy(angle, bottom);
        data = data.line_to((x, y));
    }
    data.close()
}

fn locus_sector(theta: f64, width: f64, bottom: f64, height: f64, color: &str) -> Path {
    Path::new()
        .set("d", sector_data(theta, width, bottom, height))
        .set("fill", color)
        .set("stroke", "none")
}

fn locus_label(name: &str, theta: f64, text_y: f64, ha: HAlign, va: VAlign) -> Text {
    let (x, y) = polar_xy(theta, text_y);
    let mut text = Text::new(xml_escape(name))
        .set("x", x)
        .set("y", y)
        .set("text-anchor", ha.svg_anchor())
        .set("font-family", "sans-serif")
        .set("font-size", 11);
    if let Some(baseline) = va.svg_baseline() {
        text = text.set("dominant-baseline", baseline);
    }
    text
}

fn variant_marker(variant: &Variant, interactive: bool, with_hf: bool) -> Group {
    let mut group = Group::new().set("class", "variant");
    if interactive {
        // the interactive convention places markers by rotation, in the
        // degree units of the calibration constant
        let degrees = polar_to_degrees(variant.polar_theta());
        let circle = Circle::new()
            .set("cx", 0)
            .set("cy", -(variant.polar_radius() * PX_PER_UNIT))
            .set("r", MARKER_RADIUS)
            .set("fill", "black");
        let hover = if with_hf {
            variant.label_with_hf("\n")
        } else {
            variant.label()
        };
        group = group
            .set(
                "transform",
                format!("translate({CX} {CY}) rotate({:.4})", -degrees),
            )
            .add(circle.add(tooltip(&hover)));
    } else {
        let (x, y) = polar_xy(variant.polar_theta(), variant.polar_radius());
        group = group.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", MARKER_RADIUS)
                .set("fill", "black"),
        );
    }
    group
}

/// Boxed text annotation above a variant marker, one or two lines.
pub(crate) fn annotation_box(x: f64, y: f64, lines: &[String]) -> Group {
    let line_height = 13.0;
    let width = lines
        .iter()
        .map(|line| estimate_text_width(line))
        .fold(0.0, f64::max)
        + 10.0;
    let height = line_height * lines.len() as f64 + 6.0;
    let top = y - 10.0 - height;
    let mut group = Group::new().add(
        Rectangle::new()
            .set("x", x - width / 2.0)
            .set("y", top)
            .set("width", width)
            .set("height", height)
            .set("rx", 4)
            .set("fill", "#ffffff")
            .set("fill-opacity", 0.8)
            .set("stroke", "#999999")
            .set("stroke-width", 0.5),
    );
    for (i, line) in lines.iter().enumerate() {
        group = group.add(
            Text::new(xml_escape(line))
                .set("x", x)
                .set("y", top + line_height * (i + 1) as f64)
                .set("text-anchor", "middle")
                .set("font-family", "monospace")
                .set("font-size", 10)
                .set("fill", "#111111"),
        );
    }
    group
}

fn annotation_lines(variant: &Variant, with_hf: bool) -> Vec<String> {
    if with_hf {
        variant
            .label_with_hf("\n")
            .split('\n')
            .map(str::to_string)
            .collect()
    } else {
        vec![variant.label()]
    }
}

fn legend_block(x: f64, y: f64) -> Group {
    let mut group = Group::new();
    for (i, (color, label)) in legend_entries().iter().enumerate() {
        let row_y = y + 18.0 * i as f64;
        group = group
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", row_y)
                    .set("width", 12)
                    .set("height", 12)
                    .set("fill", *color),
            )
            .add(
                Text::new(*label)
                    .set("x", x + 18.0)
                    .set("y", row_y + 10.0)
                    .set("font-family", "sans-serif")
                    .set("font-size", 11)
                    .set("fill", "#111111"),
            );
    }
    group
}

/// Build the polar figure for one sample.
pub fn polar_figure(
    sample: &str,
    variants: &[Variant],
    options: &PlotOptions,
    interactive: bool,
) -> Document {
    let mut doc = Document::new()
        .set("viewBox", (0, 0, W, H))
        .set("width", W)
        .set("height", H)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", W)
                .set("height", H)
                .set("fill", "#ffffff"),
        );

    if options.split {
        for (index, locus) in PolarSplitLocus::all().enumerate() {
            doc = doc.add(locus_sector(
                locus.theta(),
                locus.width(),
                locus.bottom(),
                locus.height(),
                locus.color(),
            ));
            // the wrap-around gap reuses the control region label drawn
            // at the origin
            if locus.loc_type() != LocusType::NonCoding && index < LOCI.len() {
                doc = doc.add(locus_label(
                    locus.name(),
                    locus.theta(),
                    locus.text_y(),
                    locus.text_ha(),
                    locus.text_va(),
                ));
            }
        }
    } else {
        for locus in PolarLocus::all() {
            doc = doc.add(locus_sector(
                locus.theta(),
                locus.width(),
                locus.bottom(),
                locus.height(),
                locus.color(),
            ));
            if locus.loc_type() != LocusType::NonCoding {
                doc = doc.add(locus_label(
                    locus.name(),
                    locus.theta(),
                    locus.text_y(),
                    locus.text_ha(),
                    locus.text_va(),
                ));
            }
        }
    }

    for variant in variants {
        doc = doc.add(variant_marker(variant, interactive, options.labels_hf));
        if options.labels {
            let (x, y) = polar_xy(variant.polar_theta(), variant.polar_radius());
            doc = doc.add(annotation_box(
                x,
                y,
                &annotation_lines(variant, options.labels_hf),
            ));
        }
    }

    if !sample.is_empty() {
        doc = doc.add(
            Text::new(xml_escape(sample))
                .set("x", CX)
                .set("y", 30)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", 18)
                .set("fill", "#111111"),
        );
    }

    if options.legend {
        // the ring leaves the center empty; the legend goes there
        doc = doc.add(legend_block(CX - 45.0, CY - 45.0));
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Allele;

    fn options() -> PlotOptions {
        PlotOptions::default()
    }

    fn snv() -> Variant {
        Variant::new("C", 3308, Allele::Raw("A".to_string()), 0.3)
    }

    #[test]
    fn figure_contains_loci_and_markers() {
        let svg = polar_figure("HG00001", &[snv()], &options(), false).to_string();
        assert!(svg.contains("HG00001"));
        assert!(svg.contains("#2e8b57")); // coding loci present
        assert!(svg.contains("RNR1"));
        assert!(!svg.contains("NC1")); // non-coding gaps are unlabelled
        assert!(svg.contains("class=\"variant\""));
    }

    #[test]
    fn legend_and_labels_are_optional() {
        let mut opts = options();
        let bare = polar_figure("S", &[snv()], &opts, false).to_string();
        assert!(!bare.contains("Non Coding"));
        assert!(!bare.contains("3308C&gt;A"));
        opts.legend = true;
        opts.labels = true;
        let full = polar_figure("S", &[snv()], &opts, false).to_string();
        assert!(full.contains("Non Coding"));
        assert!(full.contains("3308C&gt;A"));
    }

    #[test]
    fn interactive_markers_use_rotation_and_tooltips() {
        let svg = polar_figure("S", &[snv()], &options(), true).to_string();
        assert!(svg.contains("rotate("));
        assert!(svg.contains("<title>"));
        // theta * 57.1 degrees, negated for the screen direction
        let degrees = polar_to_degrees(snv().polar_theta());
        assert!(svg.contains(&format!("rotate({:.4})", -degrees)));
    }

    #[test]
    fn split_mode_draws_the_wrap_gap() {
        let mut opts = options();
        opts.split = true;
        let split = polar_figure("S", &[], &opts, false).to_string();
        let merged = polar_figure("S", &[], &options(), false).to_string();
        // one extra sector in split mode
        assert_eq!(split.matches("<path").count(), 50);
        assert_eq!(merged.matches("<path").count(), 49);
    }
}
