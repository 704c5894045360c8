#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod command;
mod common;
mod config;
mod game;
mod interface;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod rng;
mod session;
pub mod stub;
#[cfg(feature = "std")]
pub mod terminal;

pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use interface::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, LOG_ENV};
pub use placement::*;
pub use rng::*;
pub use session::*;
pub use stub::*;
#[cfg(feature = "std")]
pub use terminal::{LineInput, TerminalDisplay};
