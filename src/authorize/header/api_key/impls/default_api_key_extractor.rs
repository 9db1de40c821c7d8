use std::borrow::Cow;

use http::{header::AUTHORIZATION, HeaderMap};

use crate::{
    authorize::header::{
        api_key::ApiKeyExtractor, DefaultHeaderError, DefaultHeaderExtractor, HeaderExtractor,
    },
    extract::Extractor,
};

use super::api_key::ApiKey;

/// Scheme token expected in front of the key: `Authorization: ApiKey <key>`.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Returns the key of an `Authorization: ApiKey <key>` header.
///
/// ```
/// use apikey_header::{get_api_key, ApiKeyHeaderError};
/// use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_api_key(&headers), Err(ApiKeyHeaderError::NoAuthHeader));
///
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey abc123"));
/// assert_eq!(get_api_key(&headers), Ok("abc123"));
/// ```
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyHeaderError> {
    DefaultApiKeyExtractor::new().extract_api_key(headers)
}

/// Extracts the key from the `Authorization` header.
///
/// The header value must consist of exactly two whitespace separated fields: the scheme
/// token (`ApiKey` unless changed with [`DefaultApiKeyExtractor::with_scheme`], compared
/// case-sensitively) and the key. Only the first `Authorization` value is considered.
#[derive(Debug, Clone)]
pub struct DefaultApiKeyExtractor {
    // Not generic, the header name is always "Authorization"
    header_extractor: DefaultHeaderExtractor,
    scheme: Cow<'static, str>,
}

impl DefaultApiKeyExtractor {
    pub fn new() -> Self {
        Self {
            header_extractor: DefaultHeaderExtractor::new(Cow::from(
                AUTHORIZATION.as_str(),
            )),
            scheme: Cow::Borrowed(API_KEY_SCHEME),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<Cow<'static, str>>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Splits an already read `Authorization` value into scheme and key.
    pub fn parse_api_key<'a>(
        &self,
        authorization: &'a str,
    ) -> Result<&'a str, ApiKeyHeaderError> {
        let mut fields = authorization.split_whitespace();

        match (fields.next(), fields.next(), fields.next()) {
            (Some(scheme), Some(api_key), None) if scheme == self.scheme => Ok(api_key),
            _ => Err(ApiKeyHeaderError::Malformed),
        }
    }
}

impl Default for DefaultApiKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiKeyExtractor for DefaultApiKeyExtractor {
    type Error = ApiKeyHeaderError;

    #[tracing::instrument(
        skip_all,
        fields(header_name = %self.header_extractor.header_name(), scheme = %self.scheme)
    )]
    fn extract_api_key<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error> {
        let authorization = self.header_extractor.extract_header(headers)?;
        let api_key = self.parse_api_key(authorization)?;

        Ok(api_key)
    }
}

impl Extractor for DefaultApiKeyExtractor {
    type Extracted = ApiKey;

    type Error = ApiKeyHeaderError;

    async fn extract(&self, headers: &HeaderMap) -> Result<Self::Extracted, Self::Error> {
        let api_key = self.extract_api_key(headers)?;

        Ok(ApiKey::new(api_key.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyHeaderError {
    /// The header is missing or empty.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The header is not in the form `ApiKey xyz`.
    #[error("malformed authorization header")]
    Malformed,
}

impl From<DefaultHeaderError> for ApiKeyHeaderError {
    fn from(value: DefaultHeaderError) -> Self {
        match value {
            DefaultHeaderError::Missing | DefaultHeaderError::Empty => Self::NoAuthHeader,
            DefaultHeaderError::Ascii(_) => Self::Malformed,
        }
    }
}

#[cfg(feature = "axum")]
mod axum {
    use axum::response::{IntoResponse, Response};
    use http::StatusCode;

    use super::ApiKeyHeaderError;

    impl IntoResponse for ApiKeyHeaderError {
        fn into_response(self) -> Response {
            tracing::warn!(err = %self, "Unauthorized");

            StatusCode::UNAUTHORIZED.into_response()
        }
    }

    impl From<ApiKeyHeaderError> for Response {
        fn from(value: ApiKeyHeaderError) -> Self {
            value.into_response()
        }
    }
}
