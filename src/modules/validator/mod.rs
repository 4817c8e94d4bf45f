pub mod service;

pub use service::{ValidatorService, validate};
