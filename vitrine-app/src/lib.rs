//! Vitrine application library
//!
//! This crate contains the desktop showcase's library surfaces used by the
//! executable in `src/main.rs`: application glue, the carousel engine, UI
//! state, and views.
//!
//! Most consumers should use the `vitrine-app` binary; the library is
//! exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod carousel;
pub mod constants;
pub mod content;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod updates;
pub mod view;
pub mod views;
