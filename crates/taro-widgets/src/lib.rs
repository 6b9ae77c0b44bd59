//! Ready-made widgets for the **taro** toolkit.
//!
//! Stateful widgets implement [`taro_core::Component`], so they can be
//! embedded in any host and composed within [`ratatui`] layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`selection`] | Keyed single/multi selection with change notifications |
//! | [`table`] | Row table with a cursor and row selection |
//! | [`accessibility`] | Accessibility properties mirrored to named attributes |
//! | [`key`] | Key-binding helpers |

pub mod accessibility;
pub mod key;
pub mod selection;
pub mod table;

pub use accessibility::{Accessibility, AttributeMap, AttributeSink};
pub use selection::{Selection, SelectionEvent};
pub use table::{Table, TableRow};
