//! Linear genome figure, built as an SVG document.
//!
//! The x axis is the genome in raw nucleotides; the y axis is the
//! heteroplasmic fraction in [0, 1], with the locus band sitting just
//! below zero and the locus labels below that.

use svg::node::element::{Circle, Group, Line, Rectangle, Text};
use svg::Document;

use crate::genome::{LocusType, MT_GENOME_LEN};
use crate::locus::LinearLocus;
use crate::plot::PlotOptions;
use crate::render::{legend_entries, tooltip, xml_escape};
use crate::render_polar::annotation_box;
use crate::variant::Variant;

const W: f64 = 1200.0;
const H: f64 = 700.0;
const LEFT: f64 = 60.0;
const RIGHT: f64 = W - 60.0;
const TOP: f64 = 70.0;
const BOTTOM: f64 = H - 60.0;
const Y_MIN: f64 = -0.22;
const Y_MAX: f64 = 1.05;
const MARKER_RADIUS: f64 = 3.5;

/// Uniform locus band when strands are not split.
const MERGED_BAND: (f64, f64) = (-0.05, 0.05);

fn bp_to_x(bp: f64) -> f64 {
    LEFT + (RIGHT - LEFT) * bp / f64::from(MT_GENOME_LEN)
}

fn y_px(frac: f64) -> f64 {
    BOTTOM - (frac - Y_MIN) / (Y_MAX - Y_MIN) * (BOTTOM - TOP)
}

fn hf_gridlines(mut doc: Document) -> Document {
    for step in 0..=4 {
        let frac = step as f64 * 0.25;
        let y = y_px(frac);
        doc = doc
            .add(
                Line::new()
                    .set("x1", LEFT)
                    .set("y1", y)
                    .set("x2", RIGHT)
                    .set("y2", y)
                    .set("stroke", "#dddddd")
                    .set("stroke-width", 1),
            )
            .add(
                Text::new(format!("{frac:.2}"))
                    .set("x", LEFT - 8.0)
                    .set("y", y + 3.0)
                    .set("text-anchor", "end")
                    .set("font-family", "monospace")
                    .set("font-size", 10)
                    .set("fill", "#444444"),
            );
    }
    doc
}

fn nt_axis(mut doc: Document) -> Document {
    let axis_y = y_px(-0.16);
    doc = doc.add(
        Line::new()
            .set("x1", LEFT)
            .set("y1", axis_y)
            .set("x2", RIGHT)
            .set("y2", axis_y)
            .set("stroke", "#000000")
            .set("stroke-width", 1),
    );
    let mut tick = 0u32;
    while tick <= MT_GENOME_LEN {
        let x = bp_to_x(f64::from(tick));
        doc = doc
            .add(
                Line::new()
                    .set("x1", x)
                    .set("y1", axis_y)
                    .set("x2", x)
                    .set("y2", axis_y + 5.0)
                    .set("stroke", "#000000")
                    .set("stroke-width", 1),
            )
            .add(
                Text::new(format!("{tick}"))
                    .set("x", x)
                    .set("y", axis_y + 17.0)
                    .set("text-anchor", "middle")
                    .set("font-family", "monospace")
                    .set("font-size", 9)
                    .set("fill", "#444444"),
            );
        tick += 2000;
    }
    doc
}

fn locus_band(locus: &LinearLocus, split: bool) -> Rectangle {
    let (band_bottom, band_top) = if split { locus.height() } else { MERGED_BAND };
    let x1 = bp_to_x(f64::from(locus.start()));
    let x2 = bp_to_x(f64::from(locus.start() + locus.width())).max(x1 + 1.0);
    Rectangle::new()
        .set("x", x1)
        .set("y", y_px(band_top))
        .set("width", x2 - x1)
        .set("height", y_px(band_bottom) - y_px(band_top))
        .set("fill", locus.color())
}

fn variant_marker(variant: &Variant, interactive: bool, with_hf: bool) -> Group {
    let x = bp_to_x(f64::from(variant.linear_x()));
    let y = y_px(variant.linear_y());
    let mut circle = Circle::new()
        .set("cx", x)
        .set("cy", y)
        .set("r", MARKER_RADIUS)
        .set("fill", "black");
    if interactive {
        let hover = if with_hf {
            variant.label_with_hf("\n")
        } else {
            variant.label()
        };
        circle = circle.add(tooltip(&hover));
    }
    Group::new().set("class", "variant").add(circle)
}

/// Build the linear figure for one sample.
pub fn linear_figure(
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

    doc = hf_gridlines(doc);
    doc = nt_axis(doc);

    for locus in LinearLocus::all() {
        doc = doc.add(locus_band(&locus, options.split));
        if locus.loc_type() != LocusType::NonCoding {
            doc = doc.add(
                Text::new(xml_escape(locus.name()))
                    .set("x", bp_to_x(locus.text_x()))
                    .set("y", y_px(locus.text_y()))
                    .set("text-anchor", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", 9)
                    .set("fill", "#111111"),
            );
        }
    }

    for variant in variants {
        doc = doc.add(variant_marker(variant, interactive, options.labels_hf));
        if options.labels {
            let x = bp_to_x(f64::from(variant.linear_x()));
            let y = y_px(variant.linear_y());
            let lines: Vec<String> = if options.labels_hf {
                variant
                    .label_with_hf("\n")
                    .split('\n')
                    .map(str::to_string)
                    .collect()
            } else {
                vec![variant.label()]
            };
            doc = doc.add(annotation_box(x, y, &lines));
        }
    }

    if !sample.is_empty() {
        doc = doc.add(
            Text::new(xml_escape(sample))
                .set("x", W / 2.0)
                .set("y", 28)
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif")
                .set("font-size", 18)
                .set("fill", "#111111"),
        );
    }

    if options.legend {
        let mut group = Group::new();
        for (i, (color, label)) in legend_entries().iter().enumerate() {
            let row_y = TOP - 20.0 + 16.0 * i as f64;
            group = group
                .add(
                    Rectangle::new()
                        .set("x", RIGHT - 110.0)
                        .set("y", row_y)
                        .set("width", 11)
                        .set("height", 11)
                        .set("fill", *color),
                )
                .add(
                    Text::new(*label)
                        .set("x", RIGHT - 94.0)
                        .set("y", row_y + 9.0)
                        .set("font-family", "sans-serif")
                        .set("font-size", 10)
                        .set("fill", "#111111"),
                );
        }
        doc = doc.add(group);
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Allele;

    fn snv() -> Variant {
        Variant::new("C", 3308, Allele::Raw("A".to_string()), 0.3)
    }

    #[test]
    fn figure_contains_axis_band_and_markers() {
        let svg = linear_figure("HG00001", &[snv()], &PlotOptions::default(), false).to_string();
        assert!(svg.contains("HG00001"));
        assert!(svg.contains("16000")); // nt axis tick
        assert!(svg.contains("0.50")); // hf gridline label
        assert!(svg.contains("CYTB"));
        assert!(svg.contains("class=\"variant\""));
    }

    #[test]
    fn marker_sits_at_position_and_hf() {
        let svg = linear_figure("S", &[snv()], &PlotOptions::default(), false).to_string();
        let x = bp_to_x(3308.0);
        let y = y_px(0.3);
        assert!(svg.contains(&format!("cx=\"{x}\"")));
        assert!(svg.contains(&format!("cy=\"{y}\"")));
    }

    #[test]
    fn split_band_heights_differ() {
        let merged = linear_figure("S", &[], &PlotOptions::default(), false).to_string();
        let mut opts = PlotOptions::default();
        opts.split = true;
        let split = linear_figure("S", &[], &opts, false).to_string();
        assert_ne!(merged, split);
    }

    #[test]
    fn interactive_markers_carry_tooltips() {
        let svg = linear_figure("S", &[snv()], &PlotOptions::default(), true).to_string();
        assert!(svg.contains("<title>"));
        assert!(svg.contains("3308C&gt;A"));
    }
}
