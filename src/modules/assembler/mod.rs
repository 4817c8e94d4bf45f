pub mod service;

pub use service::{AssemblerService, assemble, summarize};
