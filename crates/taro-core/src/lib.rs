//! Core primitives for the **taro** widget toolkit.
//!
//! `taro-core` carries the small set of traits and types every taro widget
//! is built from. There is no event loop here: a host application owns the
//! terminal, forwards input into [`Component::update`], and draws with
//! [`Component::view`].
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Component`] | Stateful widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Messages a component reports back to its owner |
//! | [`Emitter`] | Typed, ordered listener registry |
//! | [`Property`] | Field wrapper whose setter reports real changes |
//! | [`ComponentHarness`](testing::ComponentHarness) | Headless harness for unit-testing a component |
//!
//! Diagnostics go through [`tracing`]; see [`logging`] for routing them to
//! a file while the terminal is in use.

pub mod command;
pub mod component;
pub mod logging;
pub mod observer;
pub mod property;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use logging::{init_file_logging, log_to_file, LogError};
pub use observer::{Emitter, ListenerId};
pub use property::{Changed, Property};
