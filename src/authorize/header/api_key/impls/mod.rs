pub mod api_key;
pub mod default_api_key_extractor;
