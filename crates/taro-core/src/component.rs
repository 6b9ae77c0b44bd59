use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable piece of UI state that renders into a given [`Rect`] area.
///
/// A component owns its state, reacts to messages in
/// [`update`](Component::update) and draws itself in
/// [`view`](Component::view). Anything the owner should hear about (a row
/// was confirmed, the selection changed) comes back as a [`Command`].
///
/// # Composition pattern
///
/// Wrap the child's message type in a variant of the parent's and lift the
/// returned command with [`Command::map`]:
///
/// ```rust,ignore
/// use taro_core::{Command, Component};
/// use taro_widgets::table::{self, Table};
///
/// struct Inbox { messages: Table }
///
/// enum InboxMsg { Table(table::Message) }
///
/// impl Inbox {
///     fn update(&mut self, msg: InboxMsg) -> Command<InboxMsg> {
///         match msg {
///             InboxMsg::Table(m) => self.messages.update(m).map(InboxMsg::Table),
///         }
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type.
    ///
    /// Covers both input (key presses, programmatic requests) and the
    /// notifications the component reports back to its owner.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return any notifications.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area` of the [`Frame`]. Implementations must confine
    /// drawing to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has keyboard focus.
    ///
    /// The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
