//! Pure converters between genome coordinates and plot coordinates.

use crate::genome::{DEGREES_PER_UNIT, MT_GENOME_LEN, ORIGIN_GAP_TURN};

/// Convert a nucleotide count or position to its angular value on the
/// polar plot. The full genome maps to [`ORIGIN_GAP_TURN`] rather than
/// 2*pi, marking the origin.
pub fn nt_to_polar(nt: u32) -> f64 {
    f64::from(nt) * ORIGIN_GAP_TURN / f64::from(MT_GENOME_LEN)
}

/// Scale a heteroplasmic fraction from [0, 1] to the [0, 5] radial band
/// that variant markers occupy above the ring bottom.
pub fn hf_to_radial(hf: f64) -> f64 {
    hf * 5.0
}

/// Convert a polar value to the degree convention used by the
/// interactive renderer's rotate() transforms.
pub fn polar_to_degrees(value: f64) -> f64 {
    value * DEGREES_PER_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nt_to_polar() {
        assert_eq!(nt_to_polar(3308), 1.2557981773190898);
        assert_eq!(nt_to_polar(0), 0.0);
    }

    #[test]
    fn test_hf_to_radial() {
        assert_eq!(hf_to_radial(0.3), 1.5);
        assert_eq!(hf_to_radial(1.0), 5.0);
    }

    #[test]
    fn test_polar_to_degrees() {
        assert_eq!(polar_to_degrees(1.0), 57.1);
    }
}
