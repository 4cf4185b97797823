mod canonical_combining_class;
mod decomposition;
mod quick_check;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use quick_check::QuickCheck;
