mod api_key_extractor;
mod impls;

pub use api_key_extractor::ApiKeyExtractor;
pub use impls::{
    api_key::ApiKey,
    default_api_key_extractor::{
        get_api_key, ApiKeyHeaderError, DefaultApiKeyExtractor, API_KEY_SCHEME,
    },
};
