//! Variant records and their renderable geometry.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::coords::{hf_to_radial, nt_to_polar};
use crate::genome::Strand;
use crate::intervals::{color_at, strand_at};

/// Default heteroplasmic fraction when the input source carries none.
pub const DEFAULT_HF: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MutationKind {
    Snv,
    Ins,
    Del,
}

/// Alternate allele: either a bare string from a tabular source, or a
/// substitution carrying the explicit mutation type a VCF provides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allele {
    Raw(String),
    Sub { kind: MutationKind, value: String },
}

impl Allele {
    pub fn value(&self) -> &str {
        match self {
            Allele::Raw(value) => value,
            Allele::Sub { value, .. } => value,
        }
    }

    fn kind(&self) -> Option<MutationKind> {
        match self {
            Allele::Raw(_) => None,
            Allele::Sub { kind, .. } => Some(*kind),
        }
    }
}

/// A single called variant on the mitochondrial genome.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Variant {
    pub reference: String,
    pub position: u32,
    pub alternate: Allele,
    pub hf: f64,
}

impl Variant {
    pub fn new(reference: impl Into<String>, position: u32, alternate: Allele, hf: f64) -> Self {
        Self {
            reference: reference.into(),
            position,
            alternate,
            hf,
        }
    }

    /// Deletion when the source says so; otherwise inferred from allele
    /// lengths, e.g. ref CTG / alt C.
    fn is_deletion(&self) -> bool {
        match self.alternate.kind() {
            Some(kind) => kind == MutationKind::Del,
            None => self.reference.len() > self.alternate.value().len(),
        }
    }

    /// Insertion when the source says so; otherwise inferred from allele
    /// lengths, e.g. ref C / alt CTG.
    fn is_insertion(&self) -> bool {
        match self.alternate.kind() {
            Some(kind) => kind == MutationKind::Ins,
            None => self.reference.len() < self.alternate.value().len(),
        }
    }

    /// Display label for the variant.
    ///
    /// Deletions report the deleted base at position + 1 (the reference
    /// allele leads with a matching base). Insertions report the inserted
    /// suffix after a dot. Everything else falls through to the
    /// `pos ref>alt` form, including equal-length multi-base
    /// substitutions, which a length comparison cannot tell apart from
    /// SNVs.
    pub fn label(&self) -> String {
        let alternate = self.alternate.value();
        if self.is_deletion() {
            format!("{}d", self.position + 1)
        } else if self.is_insertion() {
            let inserted = alternate.get(self.reference.len()..).unwrap_or(alternate);
            format!("{}.{}", self.position, inserted)
        } else {
            format!("{}{}>{}", self.position, self.reference, alternate)
        }
    }

    /// Label with the heteroplasmic fraction on a second line; `sep` is
    /// the line break of the output medium. The value is passed through
    /// unrounded.
    pub fn label_with_hf(&self, sep: &str) -> String {
        format!("{}{}HF: {}", self.label(), sep, self.hf)
    }

    /// Angular position on the polar plot.
    pub fn polar_theta(&self) -> f64 {
        nt_to_polar(self.position)
    }

    /// Radial position on the polar plot; markers sit in the 20..25 band
    /// shared with the locus ring.
    pub fn polar_radius(&self) -> f64 {
        20.0 + hf_to_radial(self.hf)
    }

    /// X position on the linear plot, in raw nucleotides.
    pub fn linear_x(&self) -> u32 {
        self.position
    }

    /// Y position on the linear plot: the heteroplasmic fraction itself.
    pub fn linear_y(&self) -> f64 {
        self.hf
    }

    /// Strand of the locus the variant falls on.
    pub fn strand(&self) -> Strand {
        strand_at(self.position)
    }

    /// Color of the locus the variant falls on, or None for positions
    /// outside every known interval.
    pub fn locus_color(&self) -> Option<&'static str> {
        color_at(self.position)
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
            && self.position == other.position
            && self.alternate == other.alternate
            && self.hf.to_bits() == other.hf.to_bits()
    }
}

impl Eq for Variant {}

impl Hash for Variant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
        self.position.hash(state);
        self.alternate.hash(state);
        self.hf.to_bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snv() -> Variant {
        Variant::new(
            "C",
            3308,
            Allele::Sub {
                kind: MutationKind::Snv,
                value: "A".to_string(),
            },
            0.3,
        )
    }

    fn deletion() -> Variant {
        Variant::new(
            "CT",
            3308,
            Allele::Sub {
                kind: MutationKind::Del,
                value: "C".to_string(),
            },
            0.3,
        )
    }

    fn insertion() -> Variant {
        Variant::new(
            "C",
            3308,
            Allele::Sub {
                kind: MutationKind::Ins,
                value: "CA".to_string(),
            },
            0.3,
        )
    }

    #[test]
    fn label_snv() {
        assert_eq!(snv().label(), "3308C>A");
        let raw = Variant::new("C", 3308, Allele::Raw("A".to_string()), 0.3);
        assert_eq!(raw.label(), "3308C>A");
    }

    #[test]
    fn label_deletion() {
        assert_eq!(deletion().label(), "3309d");
        let raw = Variant::new("CT", 3308, Allele::Raw("C".to_string()), 0.3);
        assert_eq!(raw.label(), "3309d");
    }

    #[test]
    fn label_insertion() {
        assert_eq!(insertion().label(), "3308.A");
        let raw = Variant::new("C", 3308, Allele::Raw("CA".to_string()), 0.3);
        assert_eq!(raw.label(), "3308.A");
    }

    #[test]
    fn label_equal_length_substitution_stays_snv_style() {
        let mnv = Variant::new("CT", 3308, Allele::Raw("AG".to_string()), 0.3);
        assert_eq!(mnv.label(), "3308CT>AG");
    }

    #[test]
    fn label_degenerate_input_does_not_panic() {
        // tagged INS with an alternate shorter than the reference
        let odd = Variant::new(
            "CTG",
            10,
            Allele::Sub {
                kind: MutationKind::Ins,
                value: "A".to_string(),
            },
            0.5,
        );
        assert_eq!(odd.label(), "10.A");
    }

    #[test]
    fn label_with_hf() {
        assert_eq!(snv().label_with_hf("\n"), "3308C>A\nHF: 0.3");
    }

    #[test]
    fn polar_geometry() {
        assert_eq!(snv().polar_theta(), 1.2557981773190898);
        assert_eq!(snv().polar_radius(), 21.5);
    }

    #[test]
    fn linear_geometry() {
        assert_eq!(snv().linear_x(), 3308);
        assert_eq!(snv().linear_y(), 0.3);
    }

    #[test]
    fn strand_and_color() {
        assert_eq!(snv().strand(), Strand::Heavy);
        assert_eq!(snv().locus_color(), Some("#2e8b57"));
        let dloop = Variant::new("T", 100, Allele::Raw("C".to_string()), 0.5);
        assert_eq!(dloop.strand(), Strand::Light);
        assert_eq!(dloop.locus_color(), Some("#ffa500"));
        let outside = Variant::new("T", 17000, Allele::Raw("C".to_string()), 0.5);
        assert_eq!(outside.locus_color(), None);
    }

    #[test]
    fn equality_covers_all_fields() {
        assert_eq!(snv(), snv());
        let mut other = snv();
        other.hf = 0.4;
        assert_ne!(snv(), other);
    }
}
