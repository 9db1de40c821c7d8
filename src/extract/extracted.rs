/// Handler argument for a value inserted by [`ExtensionLayer`](crate::extension::ExtensionLayer).
///
/// With the `axum` feature, `Extracted<ApiKey>` can be used directly as a handler argument.
#[derive(Debug, Clone)]
pub struct Extracted<T>(pub T);

#[cfg(feature = "axum")]
mod axum {
    use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
    use http::StatusCode;

    use crate::extract::sealed_extracted::SealedExtracted;

    use super::Extracted;

    #[async_trait]
    impl<T, S> FromRequestParts<S> for Extracted<T>
    where
        T: Clone + Send + Sync + 'static,
        S: Send + Sync,
    {
        type Rejection = StatusCode;

        async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
            match parts.extensions.get::<SealedExtracted<T>>() {
                Some(SealedExtracted(extracted)) => Ok(Extracted(extracted.clone())),
                None => {
                    tracing::error!(
                        "Requested extracted extension was not found. Did you use `Extractor` with `ExtensionLayer`?"
                    );

                    Err(StatusCode::INTERNAL_SERVER_ERROR)
                }
            }
        }
    }
}
