use http::HeaderMap;

pub trait ApiKeyExtractor {
    type Error;

    fn extract_api_key<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error>;
}
