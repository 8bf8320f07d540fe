pub mod exon;
pub mod region;
pub mod strand;
pub mod substrate;

// re-export for cleaner imports
pub use self::exon::{Exon, order_exons};
pub use self::region::GenomicRegion;
pub use self::strand::Strand;
pub use self::substrate::SubstrateRecord;
