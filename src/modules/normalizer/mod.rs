pub mod service;

pub use service::{NormalizerService, normalize};
