#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod cursor;
#[cfg(feature = "std")]
pub mod loader;
#[cfg(feature = "std")]
mod logging;
mod record;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod session;
mod space;
#[cfg(feature = "std")]
mod summary;
mod view;

pub use board::*;
pub use common::*;
pub use config::*;
pub use cursor::*;
#[cfg(feature = "std")]
pub use loader::{load_log, parse_log, LoadError, LogFile};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use record::*;
#[cfg(feature = "std")]
pub use render::{render_board, render_view, RenderStyle};
#[cfg(feature = "std")]
pub use session::{run_session, Command};
pub use space::*;
#[cfg(feature = "std")]
pub use summary::GameSummary;
pub use view::*;
