pub mod autoediting;
pub mod settings;
