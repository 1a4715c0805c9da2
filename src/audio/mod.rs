pub mod commands;
pub mod config;
pub mod error;
pub mod playback;
pub mod session;
pub mod state;
pub mod traits;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;
