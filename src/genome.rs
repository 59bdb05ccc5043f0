use serde::{Deserialize, Serialize};

/// Length of the human mitochondrial genome (rCRS), in nucleotides.
pub const MT_GENOME_LEN: u32 = 16569;

/// Angular span of the full genome ring, in polar units.
///
/// Deliberately not 2*pi; the offset marks the origin of the circular
/// plot. Do not replace with TAU.
pub const ORIGIN_GAP_TURN: f64 = 6.29;

/// Degrees per polar unit, as expected by the interactive renderer's
/// rotate() convention. Calibration constant, not derived.
pub const DEGREES_PER_UNIT: f64 = 57.1;

/// Control region head, from the origin to the start of TF.
pub const DLOOP_MAIN_LEN: u32 = 576;

/// Control region tail, wrapping around past the origin (16023..16569).
pub const WRAP_GAP_LEN: u32 = 546;

/// Genome position where the wrap-around control region tail begins.
pub const WRAP_GAP_START: u32 = 16023;

/// Control region as a single arc straddling the origin (head + tail).
pub const DLOOP_FULL_LEN: u32 = DLOOP_MAIN_LEN + WRAP_GAP_LEN;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocusType {
    Regulatory,
    Coding,
    RRna,
    TRna,
    NonCoding,
}

impl LocusType {
    pub fn color(self) -> &'static str {
        match self {
            LocusType::Regulatory => "#ffa500",
            LocusType::Coding => "#2e8b57",
            LocusType::RRna => "#cd5c5c",
            LocusType::TRna => "#4169e1",
            LocusType::NonCoding => "grey",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            LocusType::Regulatory => "Regulatory",
            LocusType::Coding => "Coding",
            LocusType::RRna => "rRNA",
            LocusType::TRna => "tRNA",
            LocusType::NonCoding => "Non Coding",
        }
    }
}

/// The two strands of the circular mitochondrial genome. The tiny
/// non-coding gaps between genes are not assigned to either strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Heavy,
    Light,
    Unplaced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

impl HAlign {
    pub fn svg_anchor(self) -> &'static str {
        match self {
            HAlign::Left => "start",
            HAlign::Center => "middle",
            HAlign::Right => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

impl VAlign {
    /// dominant-baseline value, or None for the default (text sits on top
    /// of the anchor point, the SVG equivalent of bottom alignment).
    pub fn svg_baseline(self) -> Option<&'static str> {
        match self {
            VAlign::Top => Some("hanging"),
            VAlign::Center => Some("middle"),
            VAlign::Bottom => None,
        }
    }
}

/// One named interval of the mitochondrial genome.
///
/// All loci live in a single ordered table; the index into that table is
/// the only key, so every per-locus attribute travels in this one record.
/// The label placement hints are hand-tuned per locus: loci at similar
/// angles still need different alignments to keep the circular plot
/// readable, so no formula can replace them.
#[derive(Clone, Copy, Debug)]
pub struct LocusDef {
    pub name: &'static str,
    pub loc_type: LocusType,
    pub len_nt: u32,
    pub strand: Strand,
    pub text_ha: HAlign,
    pub text_va: VAlign,
    pub text_y: f64,
}

const fn locus(
    name: &'static str,
    loc_type: LocusType,
    len_nt: u32,
    strand: Strand,
    text_ha: HAlign,
    text_va: VAlign,
    text_y: f64,
) -> LocusDef {
    LocusDef {
        name,
        loc_type,
        len_nt,
        strand,
        text_ha,
        text_va,
        text_y,
    }
}

use HAlign::{Center, Left, Right};
use LocusType::{Coding, NonCoding, RRna, Regulatory, TRna};
use Strand::{Heavy, Light, Unplaced};
use VAlign::{Bottom, Center as Middle, Top};

/// The 49 loci of the mitochondrial genome, in genome order starting at
/// the origin. Lengths partition [0, 16023); the wrap-around control
/// region tail (16023..16569) is handled per plot flavor: the polar ring
/// widens locus 0 to [`DLOOP_FULL_LEN`], the linear axis appends a
/// terminal DLOOP segment, and the split ring appends a regulatory gap.
pub const LOCI: [LocusDef; 49] = [
    locus("DLOOP", Regulatory, 576, Light, Center, Top, 19.2),
    locus("TF", TRna, 71, Heavy, Center, Bottom, 25.2),
    locus("RNR1", RRna, 954, Heavy, Right, Bottom, 25.2),
    locus("TV", TRna, 69, Heavy, Right, Bottom, 25.2),
    locus("RNR2", RRna, 1559, Heavy, Right, Bottom, 25.2),
    locus("TL1", TRna, 75, Heavy, Right, Middle, 25.2),
    locus("NC1", NonCoding, 2, Unplaced, Center, Middle, 19.2),
    locus("ND1", Coding, 956, Heavy, Right, Bottom, 25.2),
    locus("TI", TRna, 69, Heavy, Center, Middle, 19.2),
    locus("TQ", TRna, 69, Light, Right, Middle, 25.2),
    locus("NC2", NonCoding, 1, Unplaced, Center, Middle, 19.2),
    locus("TM", TRna, 68, Heavy, Center, Middle, 19.2),
    locus("ND2", Coding, 1042, Heavy, Right, Middle, 25.2),
    locus("TW", TRna, 68, Heavy, Right, Top, 25.2),
    locus("NC3", NonCoding, 7, Unplaced, Center, Middle, 19.2),
    locus("TA", TRna, 69, Light, Center, Top, 19.2),
    locus("NC4", NonCoding, 1, Unplaced, Center, Middle, 19.2),
    locus("TN", TRna, 73, Light, Right, Top, 25.2),
    locus("OLR", Regulatory, 32, Light, Center, Top, 19.2),
    locus("TC", TRna, 65, Light, Center, Top, 19.2),
    locus("TY", TRna, 66, Light, Right, Top, 25.2),
    locus("NC5", NonCoding, 11, Unplaced, Center, Middle, 19.2),
    locus("CO1", Coding, 1542, Heavy, Right, Top, 25.2),
    locus("TS1", TRna, 69, Light, Center, Top, 25.2),
    locus("NC6", NonCoding, 3, Unplaced, Center, Middle, 19.2),
    locus("TD", TRna, 68, Heavy, Center, Top, 19.2),
    locus("CO2", Coding, 684, Heavy, Center, Top, 25.2),
    locus("NC7", NonCoding, 25, Unplaced, Center, Middle, 19.2),
    locus("TK", TRna, 70, Heavy, Center, Top, 19.2),
    locus("NC8", NonCoding, 1, Unplaced, Center, Middle, 19.2),
    locus("ATP8", Coding, 207, Heavy, Center, Top, 25.2),
    locus("ATP6", Coding, 627, Heavy, Left, Top, 25.2),
    locus("CO3", Coding, 784, Heavy, Left, Top, 25.2),
    locus("TG", TRna, 68, Heavy, Left, Top, 25.2),
    locus("ND3", Coding, 346, Heavy, Left, Top, 25.2),
    locus("TR", TRna, 65, Heavy, Left, Top, 25.2),
    locus("ND4L", Coding, 297, Heavy, Left, Top, 25.2),
    locus("ND4", Coding, 1378, Heavy, Left, Top, 25.2),
    locus("TH", TRna, 69, Heavy, Left, Middle, 25.2),
    locus("TS2", TRna, 59, Heavy, Center, Middle, 19.2),
    locus("TL2", TRna, 71, Heavy, Left, Middle, 25.2),
    locus("ND5", Coding, 1812, Heavy, Left, Middle, 25.2),
    locus("ND6", Coding, 525, Light, Left, Middle, 25.2),
    locus("TE", TRna, 69, Light, Center, Bottom, 25.2),
    locus("NC9", NonCoding, 4, Unplaced, Center, Middle, 19.2),
    locus("CYTB", Coding, 1141, Heavy, Left, Bottom, 25.2),
    locus("TT", TRna, 66, Heavy, Center, Bottom, 25.2),
    locus("NC10", NonCoding, 2, Unplaced, Center, Middle, 19.2),
    locus("TP", TRna, 68, Light, Center, Middle, 19.2),
];

/// Genome-absolute start of the locus at `index`, by cumulative sum.
pub fn locus_start(index: usize) -> u32 {
    LOCI[..index].iter().map(|l| l.len_nt).sum()
}
