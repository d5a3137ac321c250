pub mod args;
pub mod errors;
pub mod settings;
pub mod types;
pub mod util;
