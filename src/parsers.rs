//! Input parsing: VCF files, delimited tables, and in-memory records.
//!
//! Every parser produces the same thing: samples in input order, each
//! with its ordered list of variants. Sources without sample names get
//! the synthetic [`DEFAULT_SAMPLE`]; sources without a heteroplasmic
//! fraction get [`DEFAULT_HF`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MitoplotError;
use crate::variant::{Allele, MutationKind, Variant, DEFAULT_HF};

/// Synthetic sample name for inputs that do not carry one.
pub const DEFAULT_SAMPLE: &str = "MITOPLOT001";

/// Samples mapped to their variants, preserving input order. The order
/// matters: multi-sample output files are numbered by it.
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    samples: Vec<(String, Vec<Variant>)>,
}

impl SampleSet {
    pub fn push(&mut self, sample: &str, variant: Variant) {
        match self.samples.iter_mut().find(|(name, _)| name == sample) {
            Some((_, variants)) => variants.push(variant),
            None => self.samples.push((sample.to_string(), vec![variant])),
        }
    }

    pub fn get(&self, sample: &str) -> Option<&[Variant]> {
        self.samples
            .iter()
            .find(|(name, _)| name == sample)
            .map(|(_, variants)| variants.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Variant])> {
        self.samples
            .iter()
            .map(|(name, variants)| (name.as_str(), variants.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Mutation type from a raw ref/alt pair, the way VCF tooling reports
/// substitution classes: single-base same-length changes are SNVs,
/// longer alternates insertions, shorter ones deletions.
fn substitution_kind(reference: &str, alternate: &str) -> MutationKind {
    if alternate.len() > reference.len() {
        MutationKind::Ins
    } else if alternate.len() < reference.len() {
        MutationKind::Del
    } else {
        MutationKind::Snv
    }
}

/// Read a VCF file and group its variants per sample.
pub fn read_vcf(path: impl AsRef<Path>) -> Result<SampleSet, MitoplotError> {
    let file = File::open(path.as_ref())?;
    parse_vcf(BufReader::new(file))
}

/// Parse VCF content. Multi-allelic records become one variant per
/// alternate allele; the per-sample HF FORMAT field supplies one value
/// per alternate, defaulting to [`DEFAULT_HF`] when absent.
pub fn parse_vcf<R: BufRead>(reader: R) -> Result<SampleSet, MitoplotError> {
    let mut samples: Vec<String> = Vec::new();
    let mut set = SampleSet::default();

    for line in reader.lines() {
        let line = line?;
        if line.starts_with("##") || line.trim().is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('#') {
            // #CHROM POS ID REF ALT QUAL FILTER INFO [FORMAT sample...]
            samples = header
                .split('\t')
                .skip(9)
                .map(|s| s.to_string())
                .collect();
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 8 {
            return Err(MitoplotError::Message(format!(
                "Malformed VCF record (expected at least 8 columns): {line}"
            )));
        }
        let position: u32 = fields[1].parse().map_err(|_| {
            MitoplotError::Message(format!("Invalid VCF position '{}'", fields[1]))
        })?;
        let reference = fields[3];
        let alternates: Vec<&str> = fields[4].split(',').collect();

        if samples.is_empty() {
            for alt in &alternates {
                let allele = Allele::Sub {
                    kind: substitution_kind(reference, alt),
                    value: (*alt).to_string(),
                };
                set.push(
                    DEFAULT_SAMPLE,
                    Variant::new(reference, position, allele, DEFAULT_HF),
                );
            }
            continue;
        }

        let hf_index = fields
            .get(8)
            .and_then(|format| format.split(':').position(|key| key == "HF"));
        for (column, sample) in samples.iter().enumerate() {
            let hf_values: Vec<f64> = match (hf_index, fields.get(9 + column)) {
                (Some(idx), Some(call)) => match call.split(':').nth(idx) {
                    Some(raw) => parse_hf_list(raw)?,
                    None => Vec::new(),
                },
                _ => Vec::new(),
            };
            for (i, alt) in alternates.iter().enumerate() {
                let hf = hf_values.get(i).copied().unwrap_or(DEFAULT_HF);
                let allele = Allele::Sub {
                    kind: substitution_kind(reference, alt),
                    value: (*alt).to_string(),
                };
                set.push(sample, Variant::new(reference, position, allele, hf));
            }
        }
    }

    Ok(set)
}

fn parse_hf_list(raw: &str) -> Result<Vec<f64>, MitoplotError> {
    if raw.is_empty() || raw == "." {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|value| {
            value
                .parse::<f64>()
                .map_err(|_| MitoplotError::Message(format!("Invalid HF value '{value}'")))
        })
        .collect()
}

/// Column names for tabular input.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    pub pos: String,
    pub reference: String,
    pub alternate: String,
    pub sample: String,
    pub hf: String,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            pos: "POS".to_string(),
            reference: "REF".to_string(),
            alternate: "ALT".to_string(),
            sample: "SAMPLE".to_string(),
            hf: "HF".to_string(),
        }
    }
}

/// Read a delimited table (CSV by default) and group its variants per
/// sample. POS/REF/ALT columns are required; SAMPLE and HF are optional.
pub fn read_table(
    path: impl AsRef<Path>,
    delimiter: u8,
    columns: &ColumnSpec,
) -> Result<SampleSet, MitoplotError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_path(path.as_ref())?;

    let headers = reader.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h == name);
    let pos_idx = find(&columns.pos).ok_or_else(|| {
        MitoplotError::Message(format!("Missing required column '{}'", columns.pos))
    })?;
    let ref_idx = find(&columns.reference).ok_or_else(|| {
        MitoplotError::Message(format!("Missing required column '{}'", columns.reference))
    })?;
    let alt_idx = find(&columns.alternate).ok_or_else(|| {
        MitoplotError::Message(format!("Missing required column '{}'", columns.alternate))
    })?;
    let sample_idx = find(&columns.sample);
    let hf_idx = find(&columns.hf);

    let mut set = SampleSet::default();
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("");
        let position: u32 = field(pos_idx).parse().map_err(|_| {
            MitoplotError::Message(format!("Invalid position '{}'", field(pos_idx)))
        })?;
        let hf = match hf_idx {
            Some(idx) => field(idx).parse::<f64>().map_err(|_| {
                MitoplotError::Message(format!("Invalid HF value '{}'", field(idx)))
            })?,
            None => DEFAULT_HF,
        };
        let sample = sample_idx.map(field).unwrap_or(DEFAULT_SAMPLE);
        let variant = Variant::new(
            field(ref_idx),
            position,
            Allele::Raw(field(alt_idx).to_string()),
            hf,
        );
        set.push(sample, variant);
    }

    Ok(set)
}

/// One in-memory variant row, for callers that already hold their data
/// in a table-like structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariantRecord {
    pub sample: Option<String>,
    pub reference: String,
    pub position: u32,
    pub alternate: String,
    pub hf: Option<f64>,
}

/// Group in-memory records per sample, applying the same defaults as the
/// file parsers.
pub fn group_records(records: &[VariantRecord]) -> SampleSet {
    let mut set = SampleSet::default();
    for record in records {
        let sample = record.sample.as_deref().unwrap_or(DEFAULT_SAMPLE);
        let variant = Variant::new(
            record.reference.as_str(),
            record.position,
            Allele::Raw(record.alternate.clone()),
            record.hf.unwrap_or(DEFAULT_HF),
        );
        set.push(sample, variant);
    }
    set
}
