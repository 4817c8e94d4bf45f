pub mod assembler;
pub mod normalizer;
pub mod progress;
pub mod validator;
