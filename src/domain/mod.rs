pub mod authentication;
pub mod vault;
