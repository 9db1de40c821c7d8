use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use http::Request;
use tower::Service;

use crate::extract::{Extractor, SealedExtracted};

/// Service created by [`ExtensionLayer`](super::ExtensionLayer).
///
/// On success the extracted value is inserted into the request extensions as
/// [`SealedExtracted`] and the inner service is called. On failure the inner service is
/// skipped and the response is built from the extraction error.
#[derive(Debug, Clone)]
pub struct ExtensionService<S, Ex> {
    service: S,
    extractor: Ex,
}

impl<S, Ex> ExtensionService<S, Ex> {
    pub fn new(service: S, extractor: Ex) -> Self {
        Self { service, extractor }
    }
}

impl<S, Ex, B> Service<Request<B>> for ExtensionService<S, Ex>
where
    Ex: Extractor + Clone + Send + Sync + 'static,
    S: Service<Request<B>> + Clone + Send + 'static,
    S::Future: Send,
    S::Response: From<Ex::Error>,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        // The clone may not be ready, keep the one that was polled.
        let clone = self.service.clone();
        let mut service = std::mem::replace(&mut self.service, clone);
        let extractor = self.extractor.clone();

        Box::pin(async move {
            let extracted = match extractor.extract(request.headers()).await {
                Ok(extracted) => extracted,
                Err(err) => return Ok(From::from(err)),
            };

            request.extensions_mut().insert(SealedExtracted(extracted));

            service.call(request).await
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        convert::Infallible,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    use http::header::AUTHORIZATION;
    use tower::{service_fn, Layer, ServiceExt};

    use crate::{
        authorize::header::api_key::{ApiKey, ApiKeyHeaderError, DefaultApiKeyExtractor},
        extension::ExtensionLayer,
        test::init_tracing,
    };

    use super::*;

    #[derive(Debug, PartialEq)]
    enum Outcome {
        Handled(Option<ApiKey>),
        Rejected(ApiKeyHeaderError),
    }

    impl From<ApiKeyHeaderError> for Outcome {
        fn from(value: ApiKeyHeaderError) -> Self {
            Self::Rejected(value)
        }
    }

    fn request(authorization: Option<&'static str>) -> Request<()> {
        let mut builder = Request::builder().uri("/");

        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        builder.body(()).expect("Failed to build request")
    }

    fn inner_service(
        calls: Arc<AtomicUsize>,
    ) -> impl Service<Request<()>, Response = Outcome, Error = Infallible, Future: Send>
           + Clone
           + Send
           + 'static {
        service_fn(move |request: Request<()>| {
            let calls = calls.clone();

            async move {
                calls.fetch_add(1, Ordering::SeqCst);

                let api_key = request
                    .extensions()
                    .get::<SealedExtracted<ApiKey>>()
                    .cloned()
                    .map(SealedExtracted::into_inner);

                Ok::<_, Infallible>(Outcome::Handled(api_key))
            }
        })
    }

    #[tokio::test]
    async fn valid_key_is_inserted_into_extensions() {
        init_tracing();

        let calls = Arc::new(AtomicUsize::new(0));
        let service =
            ExtensionService::new(inner_service(calls.clone()), DefaultApiKeyExtractor::new());

        let outcome = service
            .oneshot(request(Some("ApiKey abc123")))
            .await
            .expect("Service is infallible");

        assert_eq!(outcome, Outcome::Handled(Some(ApiKey::new("abc123"))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn extraction_errors_short_circuit() {
        init_tracing();

        let calls = Arc::new(AtomicUsize::new(0));
        let layer = ExtensionLayer::new(DefaultApiKeyExtractor::new());

        let cases = [
            (None, ApiKeyHeaderError::NoAuthHeader),
            (Some(""), ApiKeyHeaderError::NoAuthHeader),
            (Some("abc123"), ApiKeyHeaderError::Malformed),
            (Some("Bearer abc123"), ApiKeyHeaderError::Malformed),
        ];

        for (authorization, expected) in cases {
            let service = Layer::layer(&layer, inner_service(calls.clone()));

            let outcome = service
                .oneshot(request(authorization))
                .await
                .expect("Service is infallible");

            assert_eq!(outcome, Outcome::Rejected(expected), "header: {authorization:?}");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
