mod extracted;
mod extractor;
mod sealed_extracted;

pub use extracted::Extracted;
pub use extractor::{Convert, ErrorMap, Extractor, ExtractorExt, Map};
pub use sealed_extracted::SealedExtracted;
