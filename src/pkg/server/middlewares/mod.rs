pub mod authn;
pub mod errors;
