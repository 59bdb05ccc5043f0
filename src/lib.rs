//! Plot human mitochondrial variants on circular or linear genome maps.
//!
//! The genome's 49 named loci form a fixed reference table; variants are
//! parsed from VCF files, delimited tables or in-memory records, placed
//! by genome position and heteroplasmic fraction, and rendered through
//! one of four targets: static or interactive, polar or linear. Static
//! figures are SVG documents (rasterized to PNG on save); interactive
//! figures are self-contained HTML.

pub mod coords;
pub mod error;
pub mod genome;
pub mod intervals;
pub mod locus;
pub mod parsers;
pub mod plot;
pub mod render;
pub mod render_html;
pub mod render_linear;
pub mod render_polar;
pub mod variant;

pub use error::MitoplotError;
pub use parsers::{ColumnSpec, SampleSet, VariantRecord};
pub use plot::{plot_base, plot_records, plot_table, plot_vcf, PlotOptions};
pub use render::{Figure, RenderTarget};
pub use variant::{Allele, MutationKind, Variant};
