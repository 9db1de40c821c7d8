mod layer;
mod service;

pub use layer::{ExtensionLayer, ExtensionLayerExt};
pub use service::ExtensionService;
