pub mod constants;
pub mod loader;
