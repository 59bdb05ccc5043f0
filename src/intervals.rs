//! Range classification of genome positions.
//!
//! Variant strand and color lookups use fixed interval tables that are
//! finer grained than the locus table: they keep the historical
//! boundaries of overlapping genes and the one-off quirks around the
//! light-strand tRNA cluster, so they are maintained as explicit lists
//! rather than derived from locus lengths.

use lazy_static::lazy_static;

use crate::genome::{locus_start, Strand, LOCI, MT_GENOME_LEN, WRAP_GAP_START};

/// Sorted list of half-open `[start, end)` intervals carrying a payload.
///
/// Lookup is a binary search on the interval starts followed by a short
/// backwards scan; the fixed tables contain a few genuinely overlapping
/// entries, in which case the latest-starting interval wins.
#[derive(Clone, Debug)]
pub struct IntervalTable<T: Copy> {
    entries: Vec<(u32, u32, T)>,
}

impl<T: Copy> IntervalTable<T> {
    pub fn new(mut entries: Vec<(u32, u32, T)>) -> Self {
        entries.sort_by_key(|e| e.0);
        Self { entries }
    }

    pub fn get(&self, pos: u32) -> Option<T> {
        let idx = self.entries.partition_point(|e| e.0 <= pos);
        self.entries[..idx]
            .iter()
            .rev()
            .find(|e| pos < e.1)
            .map(|e| e.2)
    }

    pub fn contains(&self, pos: u32) -> bool {
        self.get(pos).is_some()
    }
}

lazy_static! {
    /// Intervals on the light strand. Kept verbatim, overlaps included.
    static ref LIGHT_STRAND: IntervalTable<Strand> = IntervalTable::new(
        [
            (0, 576),
            (4331, 4400),
            (5586, 5655),
            (5656, 5729),
            (5729, 5761),
            (5760, 5826),
            (5826, 5892),
            (7445, 7517),
            (14148, 14673),
            (14673, 14742),
            (15955, 16024),
            (16023, 16569),
        ]
        .into_iter()
        .map(|(start, end)| (start, end, Strand::Light))
        .collect(),
    );

    /// Non-coding gaps that sit on neither strand. Kept verbatim.
    static ref UNPLACED_STRAND: IntervalTable<Strand> = IntervalTable::new(
        [
            (3304, 3306),
            (4400, 4401),
            (5579, 5586),
            (5655, 5656),
            (5891, 5903),
            (7514, 7517),
            (8269, 8294),
            (8364, 8365),
            (14742, 14746),
            (15953, 15955),
        ]
        .into_iter()
        .map(|(start, end)| (start, end, Strand::Unplaced))
        .collect(),
    );

    /// `[start, end)` to locus color, covering the named loci plus the
    /// wrap-around control region tail.
    static ref LOCUS_COLORS: IntervalTable<&'static str> = {
        let mut entries: Vec<(u32, u32, &'static str)> = LOCI
            .iter()
            .enumerate()
            .map(|(index, locus)| {
                let start = locus_start(index);
                (start, start + locus.len_nt, locus.loc_type.color())
            })
            .collect();
        entries.push((WRAP_GAP_START, MT_GENOME_LEN, LOCI[0].loc_type.color()));
        IntervalTable::new(entries)
    };
}

/// Strand of the locus containing `pos`. The light-strand list is
/// consulted first, then the unplaced gaps; everything else is heavy.
pub fn strand_at(pos: u32) -> Strand {
    LIGHT_STRAND
        .get(pos)
        .or_else(|| UNPLACED_STRAND.get(pos))
        .unwrap_or(Strand::Heavy)
}

/// Color of the locus containing `pos`, or None when the position falls
/// outside every known interval.
pub fn color_at(pos: u32) -> Option<&'static str> {
    LOCUS_COLORS.get(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_table_lookup() {
        let table = IntervalTable::new(vec![(0, 10, 'a'), (10, 20, 'b'), (30, 40, 'c')]);
        assert_eq!(table.get(0), Some('a'));
        assert_eq!(table.get(9), Some('a'));
        assert_eq!(table.get(10), Some('b'));
        assert_eq!(table.get(25), None);
        assert_eq!(table.get(39), Some('c'));
        assert_eq!(table.get(40), None);
    }

    #[test]
    fn interval_table_overlaps_prefer_latest_start() {
        let table = IntervalTable::new(vec![(0, 100, 'a'), (50, 60, 'b')]);
        assert_eq!(table.get(55), Some('b'));
        assert_eq!(table.get(70), Some('a'));
    }

    #[test]
    fn strand_lookup() {
        assert_eq!(strand_at(100), Strand::Light); // DLOOP head
        assert_eq!(strand_at(16100), Strand::Light); // DLOOP tail
        assert_eq!(strand_at(3308), Strand::Heavy); // ND1
        assert_eq!(strand_at(3305), Strand::Unplaced); // NC1
        assert_eq!(strand_at(4350), Strand::Light); // TQ
        assert_eq!(strand_at(8280), Strand::Unplaced); // NC7
        assert_eq!(strand_at(577), Strand::Heavy); // TF
    }

    #[test]
    fn strand_lookup_overlap_quirks_keep_light() {
        // positions claimed by both lists resolve to the light strand
        assert_eq!(strand_at(7514), Strand::Light); // TS1 tail vs NC6
        assert_eq!(strand_at(5891), Strand::Light); // TY tail vs NC5
    }

    #[test]
    fn color_lookup() {
        assert_eq!(color_at(100), Some("#ffa500")); // DLOOP
        assert_eq!(color_at(3308), Some("#2e8b57")); // ND1
        assert_eq!(color_at(650), Some("#cd5c5c")); // RNR1
        assert_eq!(color_at(600), Some("#4169e1")); // TF
        assert_eq!(color_at(3305), Some("grey")); // NC1
        assert_eq!(color_at(16500), Some("#ffa500")); // wrap tail
        assert_eq!(color_at(MT_GENOME_LEN), None);
        assert_eq!(color_at(20000), None);
    }
}
