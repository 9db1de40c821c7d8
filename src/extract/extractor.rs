use std::future::Future;

use http::HeaderMap;

/// Produces a value from request headers.
///
/// Implementors are run by [`ExtensionService`](crate::extension::ExtensionService) for
/// each request. The extracted value ends up in the request extensions.
pub trait Extractor {
    type Extracted: Clone + Send + Sync;

    type Error;

    fn extract(
        &self,
        headers: &HeaderMap,
    ) -> impl Future<Output = Result<Self::Extracted, Self::Error>> + Send;
}

pub trait ExtractorExt: Sized + Extractor {
    fn map<Fn>(self, map: Fn) -> Map<Self, Fn>;

    fn map_err<Fn>(self, map_err: Fn) -> ErrorMap<Self, Fn>;

    fn convert<Fn>(self, convert: Fn) -> Convert<Self, Fn>;
}

impl<T> ExtractorExt for T
where
    T: Sized + Extractor,
{
    fn map<Fn>(self, map: Fn) -> Map<Self, Fn> {
        Map::new(self, map)
    }

    fn map_err<Fn>(self, map_err: Fn) -> ErrorMap<Self, Fn> {
        ErrorMap::new(self, map_err)
    }

    fn convert<Fn>(self, convert: Fn) -> Convert<Self, Fn> {
        Convert::new(self, convert)
    }
}

#[derive(Debug, Clone)]
pub struct Map<T, Fn> {
    inner: T,
    map: Fn,
}

impl<T, Fn> Map<T, Fn> {
    pub const fn new(inner: T, map: Fn) -> Self {
        Self { inner, map }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorMap<T, Fn> {
    inner: T,
    map_err: Fn,
}

impl<T, Fn> ErrorMap<T, Fn> {
    pub const fn new(inner: T, map_err: Fn) -> Self {
        Self { inner, map_err }
    }
}

#[derive(Debug, Clone)]
pub struct Convert<T, Fn> {
    inner: T,
    convert: Fn,
}

impl<T, Fn> Convert<T, Fn> {
    pub const fn new(inner: T, convert: Fn) -> Self {
        Self { inner, convert }
    }
}

impl<Ex, Fn, T> Extractor for Map<Ex, Fn>
where
    Ex: Extractor + Sync,
    Fn: FnOnce(Ex::Extracted) -> T + Copy + Sync,
    T: Clone + Send + Sync,
{
    type Extracted = T;

    type Error = Ex::Error;

    #[tracing::instrument(skip_all)]
    async fn extract(&self, headers: &HeaderMap) -> Result<Self::Extracted, Self::Error> {
        self.inner.extract(headers).await.map(|ex| (self.map)(ex))
    }
}

impl<Ex, Fn, E> Extractor for ErrorMap<Ex, Fn>
where
    Ex: Extractor + Sync,
    Fn: FnOnce(Ex::Error) -> E + Copy + Sync,
{
    type Extracted = Ex::Extracted;

    type Error = E;

    #[tracing::instrument(skip_all)]
    async fn extract(&self, headers: &HeaderMap) -> Result<Self::Extracted, Self::Error> {
        self.inner
            .extract(headers)
            .await
            .map_err(|err| (self.map_err)(err))
    }
}

impl<Ex, Fn, T, E> Extractor for Convert<Ex, Fn>
where
    Ex: Extractor + Sync,
    Fn: FnOnce(Result<Ex::Extracted, Ex::Error>) -> Result<T, E> + Copy + Sync,
    T: Clone + Send + Sync,
{
    type Extracted = T;

    type Error = E;

    #[tracing::instrument(skip_all)]
    async fn extract(&self, headers: &HeaderMap) -> Result<Self::Extracted, Self::Error> {
        let ex = self.inner.extract(headers).await;

        (self.convert)(ex)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use http::{header::AUTHORIZATION, HeaderValue, StatusCode};

    use crate::{
        authorize::header::api_key::{ApiKey, ApiKeyHeaderError, DefaultApiKeyExtractor},
        test::init_tracing,
    };

    use super::*;

    fn authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[tokio::test]
    async fn map_transforms_the_extracted_key() {
        init_tracing();

        let extractor = DefaultApiKeyExtractor::new().map(|api_key: ApiKey| api_key.len());

        let len = extractor
            .extract(&authorization("ApiKey abc123"))
            .await
            .expect("Failed to extract api key");

        assert_eq!(len, 6);
    }

    #[tokio::test]
    async fn map_err_transforms_the_error() {
        init_tracing();

        let extractor = DefaultApiKeyExtractor::new().map_err(|err: ApiKeyHeaderError| match err {
            ApiKeyHeaderError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            ApiKeyHeaderError::Malformed => StatusCode::BAD_REQUEST,
        });

        let status = extractor
            .extract(&HeaderMap::new())
            .await
            .expect_err("Missing header must fail");
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let status = extractor
            .extract(&authorization("Bearer abc123"))
            .await
            .expect_err("Wrong scheme must fail");
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn convert_can_make_the_key_optional() {
        init_tracing();

        let extractor = DefaultApiKeyExtractor::new()
            .convert(|result: Result<ApiKey, ApiKeyHeaderError>| Ok::<_, Infallible>(result.ok()));

        let missing = extractor.extract(&HeaderMap::new()).await;
        assert!(matches!(missing, Ok(None)));

        let present = extractor.extract(&authorization("ApiKey abc123")).await;
        assert!(matches!(present, Ok(Some(api_key)) if api_key.as_str() == "abc123"));
    }
}
