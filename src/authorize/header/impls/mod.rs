pub mod default_header_extractor;
