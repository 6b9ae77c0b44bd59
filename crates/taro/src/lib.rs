//! **taro** -- ratatui widgets with keyed selection and accessibility
//! attributes.
//!
//! This umbrella crate re-exports everything from a single dependency:
//!
//! * all public items of [`taro_core`] at the crate root ([`Component`],
//!   [`Command`], [`Emitter`], [`Property`], logging helpers);
//! * [`taro_widgets`] under [`widgets`];
//! * [`ratatui`] and [`crossterm`], so downstream crates stay on the same
//!   versions.
//!
//! # Quick start
//!
//! ```ignore
//! use taro::widgets::{Selection, SelectionEvent};
//!
//! let mut selection = Selection::<usize>::single();
//! selection.on_event(|event| {
//!     if let SelectionEvent::Select { key, .. } = event {
//!         println!("row {key} selected");
//!     }
//! });
//! selection.select(2, None);
//! selection.select(5, None); // deselects 2 first
//! ```

pub use taro_core::*;
pub mod widgets {
    pub use taro_widgets::*;
}

pub use crossterm;
pub use ratatui;
