pub mod duration;
pub mod errors;
pub mod input;
pub mod urls;
