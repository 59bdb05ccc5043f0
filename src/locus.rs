//! Renderable geometry for each locus, per plot flavor.
//!
//! The three flavors share the same reference table but disagree on
//! units: the polar ring works in angular fractions of [`ORIGIN_GAP_TURN`]
//! with the control region drawn as one arc straddling the origin, while
//! the linear axis works in raw nucleotides with the control region split
//! into a head segment and a terminal wrap-around segment.

use crate::coords::nt_to_polar;
use crate::genome::{
    locus_start, HAlign, LocusDef, LocusType, Strand, VAlign, DLOOP_FULL_LEN, DLOOP_MAIN_LEN,
    LOCI, WRAP_GAP_LEN, WRAP_GAP_START,
};

/// Loci whose linear labels drop to the lower text row. These sit in
/// cramped tRNA clusters where adjacent labels collide on one row.
const LOWER_LABELS: [&str; 6] = ["TQ", "TA", "TC", "TD", "TS2", "TT"];

/// Center angle of the locus at `index`, given the per-flavor length
/// table. Locus 0 is centered on the origin by convention; every other
/// locus is centered on its own arc.
fn ring_theta(lengths: &dyn Fn(usize) -> u32, index: usize) -> f64 {
    if index == 0 {
        return 0.0;
    }
    let base = nt_to_polar(lengths(0)) / 2.0 + nt_to_polar(lengths(index)) / 2.0;
    let run: f64 = (1..index).map(|i| nt_to_polar(lengths(i))).sum();
    base + run
}

/// A locus on the merged-strand polar ring.
#[derive(Clone, Copy, Debug)]
pub struct PolarLocus {
    index: usize,
}

impl PolarLocus {
    pub fn all() -> impl Iterator<Item = PolarLocus> {
        (0..LOCI.len()).map(|index| PolarLocus { index })
    }

    fn def(&self) -> &'static LocusDef {
        &LOCI[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.def().name
    }

    pub fn loc_type(&self) -> LocusType {
        self.def().loc_type
    }

    pub fn color(&self) -> &'static str {
        self.def().loc_type.color()
    }

    /// Length in nucleotides; locus 0 spans the whole control region,
    /// wrap-around tail included.
    pub fn len_nt(&self) -> u32 {
        if self.index == 0 {
            DLOOP_FULL_LEN
        } else {
            self.def().len_nt
        }
    }

    pub fn width(&self) -> f64 {
        nt_to_polar(self.len_nt())
    }

    pub fn theta(&self) -> f64 {
        ring_theta(
            &|i| PolarLocus { index: i }.len_nt(),
            self.index,
        )
    }

    pub fn bottom(&self) -> f64 {
        20.0
    }

    pub fn height(&self) -> f64 {
        5.0
    }

    pub fn text_ha(&self) -> HAlign {
        self.def().text_ha
    }

    pub fn text_va(&self) -> VAlign {
        self.def().text_va
    }

    pub fn text_y(&self) -> f64 {
        self.def().text_y
    }
}

/// A locus on the strand-split polar ring: heavy loci on the outer ring,
/// light loci on the inner one, unplaced gaps spanning both. One extra
/// regulatory gap closes the ring over the wrap-around tail.
#[derive(Clone, Copy, Debug)]
pub struct PolarSplitLocus {
    index: usize,
}

impl PolarSplitLocus {
    pub fn all() -> impl Iterator<Item = PolarSplitLocus> {
        (0..=LOCI.len()).map(|index| PolarSplitLocus { index })
    }

    fn is_wrap_gap(&self) -> bool {
        self.index == LOCI.len()
    }

    pub fn name(&self) -> &'static str {
        if self.is_wrap_gap() {
            "DLOOP"
        } else {
            LOCI[self.index].name
        }
    }

    pub fn loc_type(&self) -> LocusType {
        if self.is_wrap_gap() {
            LocusType::Regulatory
        } else {
            LOCI[self.index].loc_type
        }
    }

    pub fn color(&self) -> &'static str {
        self.loc_type().color()
    }

    pub fn strand(&self) -> Strand {
        if self.is_wrap_gap() {
            Strand::Light
        } else {
            LOCI[self.index].strand
        }
    }

    fn len_nt_at(index: usize) -> u32 {
        if index == 0 {
            DLOOP_FULL_LEN
        } else if index == LOCI.len() {
            WRAP_GAP_LEN
        } else {
            LOCI[index].len_nt
        }
    }

    pub fn len_nt(&self) -> u32 {
        Self::len_nt_at(self.index)
    }

    pub fn width(&self) -> f64 {
        nt_to_polar(self.len_nt())
    }

    pub fn theta(&self) -> f64 {
        ring_theta(&Self::len_nt_at, self.index)
    }

    /// Inner radial edge: heavy loci sit on the outer half of the band.
    pub fn bottom(&self) -> f64 {
        match self.strand() {
            Strand::Heavy => 22.5,
            Strand::Light | Strand::Unplaced => 20.0,
        }
    }

    /// Radial extent: unplaced gaps span both strand rings.
    pub fn height(&self) -> f64 {
        match self.strand() {
            Strand::Unplaced => 5.0,
            Strand::Heavy | Strand::Light => 2.5,
        }
    }

    pub fn text_ha(&self) -> HAlign {
        if self.is_wrap_gap() {
            HAlign::Center
        } else {
            LOCI[self.index].text_ha
        }
    }

    pub fn text_va(&self) -> VAlign {
        if self.is_wrap_gap() {
            VAlign::Center
        } else {
            LOCI[self.index].text_va
        }
    }

    pub fn text_y(&self) -> f64 {
        if self.is_wrap_gap() {
            19.2
        } else {
            LOCI[self.index].text_y
        }
    }
}

/// A locus on the linear axis, in raw nucleotide units.
#[derive(Clone, Copy, Debug)]
pub struct LinearLocus {
    index: usize,
}

impl LinearLocus {
    pub fn all() -> impl Iterator<Item = LinearLocus> {
        (0..=LOCI.len()).map(|index| LinearLocus { index })
    }

    fn is_wrap_gap(&self) -> bool {
        self.index == LOCI.len()
    }

    pub fn name(&self) -> &'static str {
        if self.is_wrap_gap() {
            "DLOOP"
        } else {
            LOCI[self.index].name
        }
    }

    pub fn loc_type(&self) -> LocusType {
        if self.is_wrap_gap() {
            LocusType::Regulatory
        } else {
            LOCI[self.index].loc_type
        }
    }

    pub fn color(&self) -> &'static str {
        self.loc_type().color()
    }

    pub fn strand(&self) -> Strand {
        if self.is_wrap_gap() {
            Strand::Light
        } else {
            LOCI[self.index].strand
        }
    }

    /// Genome-absolute start. The terminal wrap segment restarts the
    /// control region just before the end of the axis.
    pub fn start(&self) -> u32 {
        if self.is_wrap_gap() {
            WRAP_GAP_START
        } else {
            locus_start(self.index)
        }
    }

    /// Width in nucleotides; the control region head keeps its own
    /// length here, unlike the polar flavor.
    pub fn width(&self) -> u32 {
        if self.is_wrap_gap() {
            WRAP_GAP_LEN
        } else if self.index == 0 {
            DLOOP_MAIN_LEN
        } else {
            LOCI[self.index].len_nt
        }
    }

    /// (bottom, top) of the locus band in plot fractions, for split
    /// rendering. Unplaced gaps span both strand rows.
    pub fn height(&self) -> (f64, f64) {
        match self.strand() {
            Strand::Heavy => (-0.05, 0.05),
            Strand::Light => (-0.1, 0.05),
            Strand::Unplaced => (-0.1, 0.1),
        }
    }

    pub fn text_x(&self) -> f64 {
        f64::from(self.start()) + f64::from(self.width()) / 2.0
    }

    pub fn text_y(&self) -> f64 {
        if LOWER_LABELS.contains(&self.name()) {
            -0.13
        } else {
            -0.12
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::MT_GENOME_LEN;

    #[test]
    fn polar_widths() {
        let loci: Vec<PolarLocus> = PolarLocus::all().collect();
        assert_eq!(loci[0].width(), 0.4259388013760637);
        assert_eq!(loci[1].width(), 0.026953346611141286);
        assert_eq!(loci[2].width(), 0.3621618685497012);
        assert_eq!(loci[7].width(), 0.36292111775001507);
    }

    #[test]
    fn polar_thetas() {
        let loci: Vec<PolarLocus> = PolarLocus::all().collect();
        assert_eq!(loci[0].theta(), 0.0);
        assert_eq!(loci[1].theta(), 0.2264460739936025);
        assert_eq!(loci[2].theta(), 0.42100368157402374);
        assert_eq!(loci[7].theta(), 1.4308051179914298);
    }

    #[test]
    fn polar_theta_is_strictly_increasing() {
        let thetas: Vec<f64> = PolarLocus::all().map(|l| l.theta()).collect();
        for pair in thetas[1..].windows(2) {
            assert!(pair[0] < pair[1], "theta not increasing: {pair:?}");
        }
    }

    #[test]
    fn polar_ring_spans_the_genome() {
        let total: f64 = PolarLocus::all().map(|l| l.width()).sum();
        let expected = nt_to_polar(MT_GENOME_LEN);
        assert!((total - expected).abs() < 1e-9, "{total} vs {expected}");
    }

    #[test]
    fn polar_label_hints() {
        let loci: Vec<PolarLocus> = PolarLocus::all().collect();
        assert_eq!(loci[0].text_ha(), HAlign::Center);
        assert_eq!(loci[0].text_va(), VAlign::Top);
        assert_eq!(loci[0].text_y(), 19.2);
        assert_eq!(loci[1].text_va(), VAlign::Bottom);
        assert_eq!(loci[1].text_y(), 25.2);
        assert_eq!(loci[2].text_ha(), HAlign::Right);
        assert_eq!(loci[7].text_ha(), HAlign::Right);
        assert_eq!(loci[7].text_va(), VAlign::Bottom);
    }

    #[test]
    fn split_band_assignment() {
        let loci: Vec<PolarSplitLocus> = PolarSplitLocus::all().collect();
        assert_eq!(loci.len(), 50);
        // DLOOP on the light ring, TF on the heavy ring, NC1 across both
        assert_eq!(loci[0].bottom(), 20.0);
        assert_eq!(loci[0].height(), 2.5);
        assert_eq!(loci[1].bottom(), 22.5);
        assert_eq!(loci[6].bottom(), 20.0);
        assert_eq!(loci[6].height(), 5.0);
        assert_eq!(loci[6].color(), "grey");
        // wrap-around gap closes the light ring
        assert_eq!(loci[49].strand(), Strand::Light);
        assert_eq!(loci[49].len_nt(), WRAP_GAP_LEN);
        assert_eq!(loci[49].loc_type(), LocusType::Regulatory);
    }

    #[test]
    fn split_strand_bands_do_not_overlap() {
        let heavy: Vec<PolarSplitLocus> = PolarSplitLocus::all()
            .filter(|l| l.strand() == Strand::Heavy)
            .collect();
        let light: Vec<PolarSplitLocus> = PolarSplitLocus::all()
            .filter(|l| l.strand() == Strand::Light)
            .collect();
        assert!(!heavy.is_empty() && !light.is_empty());
        for h in &heavy {
            for l in &light {
                let h_top = h.bottom() + h.height();
                let l_top = l.bottom() + l.height();
                assert!(l_top <= h.bottom() || h_top <= l.bottom());
            }
        }
    }

    #[test]
    fn linear_geometry() {
        let loci: Vec<LinearLocus> = LinearLocus::all().collect();
        assert_eq!(loci.len(), 50);
        assert_eq!(loci[0].start(), 0);
        assert_eq!(loci[0].width(), 576);
        assert_eq!(loci[6].start(), 3304);
        assert_eq!(loci[6].width(), 2);
        assert_eq!(loci[7].start(), 3306);
        assert_eq!(loci[7].width(), 956);
        assert_eq!(loci[9].start(), 4331);
        assert_eq!(loci[9].width(), 69);
        assert_eq!(loci[49].start(), WRAP_GAP_START);
        assert_eq!(loci[49].width(), WRAP_GAP_LEN);
    }

    #[test]
    fn linear_heights_by_strand() {
        let loci: Vec<LinearLocus> = LinearLocus::all().collect();
        assert_eq!(loci[0].height(), (-0.1, 0.05)); // light
        assert_eq!(loci[6].height(), (-0.1, 0.1)); // unplaced
        assert_eq!(loci[7].height(), (-0.05, 0.05)); // heavy
        assert_eq!(loci[9].height(), (-0.1, 0.05)); // light
    }

    #[test]
    fn linear_labels() {
        let loci: Vec<LinearLocus> = LinearLocus::all().collect();
        assert_eq!(loci[0].text_x(), 288.0);
        assert_eq!(loci[6].text_x(), 3305.0);
        assert_eq!(loci[7].text_x(), 3784.0);
        assert_eq!(loci[9].text_x(), 4365.5);
        assert_eq!(loci[0].text_y(), -0.12);
        assert_eq!(loci[7].text_y(), -0.12);
        assert_eq!(loci[9].text_y(), -0.13); // TQ drops to the lower row
    }
}
