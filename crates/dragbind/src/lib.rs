//! # dragbind: Pointer drag gestures for X11 clients
//!
//! Register a begin/step/end triple for a button on a window with
//! [`dispatch::Dispatcher::register_drag`], then feed every
//! [`input_event::InputEvent`] from the event loop to
//! [`dispatch::Dispatcher::dispatch`]. The pointer is grabbed for the lifetime of a gesture and released exactly once
//! when it ends.

#[allow(unused_imports)]
#[macro_use]
extern crate tracing;

#[cfg(feature = "x11")]
pub mod backend;
pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod drag;
mod envvar;
pub mod error;
pub mod input;
pub mod input_event;
pub mod pointer;
#[cfg(feature = "x11")]
pub mod xevent;

pub use envvar::{DragbindEnvVar, EnvVar, GenericEnvVar};
pub use error::{Error, Result};

#[cfg(feature = "x11")]
pub mod reexports {
    pub use x11rb;
}
