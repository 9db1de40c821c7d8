use std::ops::Deref;

/// Request extension holding a value produced by an [`Extractor`](super::Extractor).
///
/// Only [`ExtensionService`](crate::extension::ExtensionService) can construct it, so
/// handlers can tell extracted values apart from extensions inserted elsewhere.
#[derive(Debug, Clone)]
pub struct SealedExtracted<T>(pub(crate) T);

impl<T> SealedExtracted<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SealedExtracted<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
