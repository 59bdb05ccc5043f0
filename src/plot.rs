//! Entry points: parse an input, render one figure per sample, write the
//! output files.

use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::MitoplotError;
use crate::parsers::{group_records, read_table, read_vcf, ColumnSpec, SampleSet, VariantRecord};
use crate::render::RenderTarget;

/// Everything that shapes a plot run. Loadable from JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Linear plot instead of a polar one.
    pub linear: bool,
    /// Restrict plotting to this sample.
    pub sample: Option<String>,
    /// Write output files; otherwise figures are rendered and discarded.
    pub save: bool,
    /// Output path; the stem and extension are both optional.
    pub output: Option<PathBuf>,
    /// Annotate each variant with its label.
    pub labels: bool,
    /// Append the heteroplasmic fraction to variant labels.
    pub labels_hf: bool,
    /// Draw the locus type legend.
    pub legend: bool,
    /// Render heavy and light strands separately.
    pub split: bool,
    /// Produce a self-contained interactive HTML document.
    pub interactive: bool,
}

/// Plot every sample of a VCF file. Returns the written paths.
pub fn plot_vcf(
    path: impl AsRef<Path>,
    options: &PlotOptions,
) -> Result<Vec<PathBuf>, MitoplotError> {
    let samples = read_vcf(path)?;
    plot_samples(&samples, options)
}

/// Plot every sample of a delimited table.
pub fn plot_table(
    path: impl AsRef<Path>,
    delimiter: u8,
    columns: &ColumnSpec,
    options: &PlotOptions,
) -> Result<Vec<PathBuf>, MitoplotError> {
    let samples = read_table(path, delimiter, columns)?;
    plot_samples(&samples, options)
}

/// Plot in-memory variant records.
pub fn plot_records(
    records: &[VariantRecord],
    options: &PlotOptions,
) -> Result<Vec<PathBuf>, MitoplotError> {
    plot_samples(&group_records(records), options)
}

/// Plot the bare genome diagram, without variants.
pub fn plot_base(options: &PlotOptions) -> Result<Option<PathBuf>, MitoplotError> {
    let target = RenderTarget::from_flags(options.linear, options.interactive);
    let figure = target.render("", &[], options)?;
    if !options.save {
        return Ok(None);
    }
    let (dir, stem, ext) = output_parts(options.output.as_deref(), target);
    let stem = if stem.is_empty() {
        "base_mt".to_string()
    } else {
        stem
    };
    let path = dir.join(format!("{stem}{ext}"));
    figure.save(&path)?;
    log::info!("wrote base genome plot to {}", path.display());
    Ok(Some(path))
}

/// Render and save one figure per sample.
///
/// Naming: an explicit output stem is used as-is for a single sample and
/// suffixed `_1.._N` in sample order otherwise; without a stem each file
/// is named after its sample.
fn plot_samples(
    samples: &SampleSet,
    options: &PlotOptions,
) -> Result<Vec<PathBuf>, MitoplotError> {
    let target = RenderTarget::from_flags(options.linear, options.interactive);
    let (dir, stem, ext) = output_parts(options.output.as_deref(), target);
    let mut written = Vec::new();

    if let Some(wanted) = &options.sample {
        let variants = samples
            .get(wanted)
            .ok_or_else(|| MitoplotError::UnknownSample(wanted.clone()))?;
        log::debug!(
            "plotting sample {wanted}: {}",
            variants.iter().map(|v| v.label()).join(", ")
        );
        let figure = target.render(wanted, variants, options)?;
        if options.save {
            let stem = if stem.is_empty() { wanted } else { &stem };
            let path = dir.join(format!("{stem}{ext}"));
            figure.save(&path)?;
            log::info!("wrote {wanted} to {}", path.display());
            written.push(path);
        }
        return Ok(written);
    }

    for (index, (sample, variants)) in samples.iter().enumerate() {
        let figure = target.render(sample, variants, options)?;
        if !options.save {
            continue;
        }
        let file_stem = if stem.is_empty() {
            sample.to_string()
        } else if samples.len() == 1 {
            stem.clone()
        } else {
            format!("{stem}_{}", index + 1)
        };
        let path = dir.join(format!("{file_stem}{ext}"));
        figure.save(&path)?;
        log::info!("wrote {sample} to {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Split an output path into directory, stem and extension, defaulting
/// the missing pieces. A path naming an existing directory selects the
/// directory and leaves the stem to the caller. Interactive figures are
/// always written as HTML, whatever extension was given.
fn output_parts(output: Option<&Path>, target: RenderTarget) -> (PathBuf, String, String) {
    let dir_only = output.map(|p| p.is_dir()).unwrap_or(false);
    let dir = if dir_only {
        output.map(Path::to_path_buf).unwrap_or_default()
    } else {
        output
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };
    let stem = if dir_only {
        String::new()
    } else {
        output
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    let ext = if target.is_interactive() {
        ".html".to_string()
    } else if dir_only {
        target.default_extension().to_string()
    } else {
        output
            .and_then(|p| p.extension())
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_else(|| target.default_extension().to_string())
    };
    (dir, stem, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_parts_defaults() {
        let target = RenderTarget::PolarStatic;
        let (dir, stem, ext) = output_parts(None, target);
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(stem, "");
        assert_eq!(ext, ".png");
    }

    #[test]
    fn output_parts_split_explicit_path() {
        let target = RenderTarget::PolarStatic;
        let path = PathBuf::from("out/dir/plot.svg");
        let (dir, stem, ext) = output_parts(Some(&path), target);
        assert_eq!(dir, PathBuf::from("out/dir"));
        assert_eq!(stem, "plot");
        assert_eq!(ext, ".svg");
    }

    #[test]
    fn output_parts_interactive_forces_html() {
        let target = RenderTarget::PolarInteractive;
        let path = PathBuf::from("plot.png");
        let (dir, stem, ext) = output_parts(Some(&path), target);
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(stem, "plot");
        assert_eq!(ext, ".html");
    }

    #[test]
    fn base_plot_without_save_writes_nothing() {
        let options = PlotOptions::default();
        assert_eq!(plot_base(&options).unwrap(), None);
    }
}
