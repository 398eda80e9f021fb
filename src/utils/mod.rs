//! Utility modules shared by the generator and the dev server.

pub mod assets;
pub mod date;
pub mod log;
pub mod minify;
