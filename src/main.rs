use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use mitoplot::parsers::ColumnSpec;
use mitoplot::{plot_base, plot_table, plot_vcf, PlotOptions};

fn usage() {
    eprintln!(
        "Usage:\n  \
  mitoplot [OPTIONS] INPUT_FILE\n  \
  mitoplot --base [OPTIONS]\n\n\
Options:\n  \
  -r, --linear        linear plot instead of a polar one\n  \
  -s, --sample NAME   plot only this sample\n  \
  -o, --output PATH   output file (extension chooses the format)\n  \
  -l, --labels        annotate variants with their labels\n  \
      --labels-hf     append the heteroplasmic fraction to labels\n  \
  -L, --legend        draw the locus type legend\n  \
  -p, --split         draw heavy and light strands separately\n  \
  -i, --interactive   write a self-contained interactive HTML file\n  \
  -S, --sep CHAR      column delimiter for tabular input [default: ,]\n  \
      --options PATH  load plot options from a JSON file\n  \
  -V, --version       print version information\n\n\
VCF input is detected by extension; everything else is read as a table."
    );
}

fn load_options(path: &str) -> Result<PlotOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read options file '{path}'"))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid options JSON in '{path}'"))
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        bail!("Missing input file");
    }

    let mut options = PlotOptions {
        save: true,
        ..PlotOptions::default()
    };
    let mut delimiter = b',';
    let mut base = false;
    let mut input: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-V" | "--version" => {
                println!("mitoplot {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            "-h" | "--help" => {
                usage();
                return Ok(());
            }
            "-r" | "--linear" => options.linear = true,
            "-l" | "--labels" => options.labels = true,
            "--labels-hf" => options.labels_hf = true,
            "-L" | "--legend" => options.legend = true,
            "-p" | "--split" => options.split = true,
            "-i" | "--interactive" => options.interactive = true,
            "--base" => base = true,
            "-s" | "--sample" => {
                let value = iter.next().context("--sample requires a name")?;
                options.sample = Some(value.clone());
            }
            "-o" | "--output" => {
                let value = iter.next().context("--output requires a path")?;
                options.output = Some(PathBuf::from(value));
            }
            "-S" | "--sep" => {
                let value = iter.next().context("--sep requires a delimiter")?;
                let mut bytes = value.bytes();
                delimiter = bytes.next().context("--sep requires a delimiter")?;
                if bytes.next().is_some() {
                    bail!("--sep expects a single character, got '{value}'");
                }
            }
            "--options" => {
                let value = iter.next().context("--options requires a path")?;
                let save = options.save;
                options = load_options(value)?;
                options.save = save;
            }
            other if other.starts_with('-') => {
                usage();
                bail!("Unknown option '{other}'");
            }
            other => {
                if input.is_some() {
                    usage();
                    bail!("Only one input file is supported");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    if base {
        plot_base(&options)?;
        return Ok(());
    }

    let input = match input {
        Some(path) => path,
        None => {
            usage();
            bail!("Missing input file");
        }
    };
    if !input.exists() {
        bail!("Input file '{}' does not exist", input.display());
    }

    let is_vcf = input
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("vcf"))
        .unwrap_or(false);
    let written = if is_vcf {
        plot_vcf(&input, &options)?
    } else {
        plot_table(&input, delimiter, &ColumnSpec::default(), &options)?
    };
    for path in &written {
        println!("{}", display_relative(path));
    }
    Ok(())
}

fn display_relative(path: &Path) -> String {
    path.strip_prefix(".").unwrap_or(path).display().to_string()
}
