/// A message-producing effect returned from [`Component::update`](crate::Component::update).
///
/// taro has no event loop of its own, so commands are purely synchronous:
/// a command is either empty, a single message addressed back to the
/// component's owner, or a batch of further commands. Hosts flatten a
/// command with [`into_messages`](Command::into_messages) and route the
/// resulting messages wherever they need to go.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::<Msg>::none();
///
/// // Report a notification to the parent:
/// let cmd = Command::message(Msg::SelectionChanged(vec![1, 3]));
///
/// // Lift a child command into the parent's message type:
/// let cmd = table.update(msg).map(AppMsg::Table);
/// ```
pub struct Command<Msg: Send + 'static> {
    inner: CommandInner<Msg>,
}

enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// A command that does nothing.
    pub fn none() -> Self {
        Self {
            inner: CommandInner::None,
        }
    }

    /// Deliver `msg` to the owner of the component.
    pub fn message(msg: Msg) -> Self {
        Self {
            inner: CommandInner::Message(msg),
        }
    }

    /// Combine several commands. Empty commands are dropped, and a batch
    /// containing a single command collapses to that command.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::none(),
            1 => cmds.remove(0),
            _ => Self {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform every message this command will produce.
    pub fn map<NewMsg: Send + 'static>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg: Send + 'static>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|c| c.map_with(f)).collect()),
            },
        }
    }

    /// Whether this command produces no messages at all.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Flatten the command into its messages, in order.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(self, out: &mut Vec<Msg>) {
        match self.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => out.push(msg),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_into(out);
                }
            }
        }
    }
}

impl<Msg: Send + 'static> Default for Command<Msg> {
    fn default() -> Self {
        Self::none()
    }
}

impl<Msg: Send + 'static> std::fmt::Debug for Command<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            CommandInner::None => f.write_str("Command::None"),
            CommandInner::Message(_) => f.write_str("Command::Message(..)"),
            CommandInner::Batch(cmds) => write!(f, "Command::Batch({})", cmds.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Msg {
        A(u8),
        B,
    }

    #[test]
    fn none_has_no_messages() {
        let cmd = Command::<Msg>::none();
        assert!(cmd.is_none());
        assert!(cmd.into_messages().is_empty());
    }

    #[test]
    fn batch_preserves_order() {
        let cmd = Command::batch([
            Command::message(Msg::A(1)),
            Command::none(),
            Command::batch([Command::message(Msg::B), Command::message(Msg::A(2))]),
        ]);
        assert_eq!(cmd.into_messages(), vec![Msg::A(1), Msg::B, Msg::A(2)]);
    }

    #[test]
    fn batch_of_nothing_is_none() {
        let cmd = Command::<Msg>::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn map_lifts_nested_messages() {
        #[derive(Debug, PartialEq)]
        enum Parent {
            Child(Msg),
        }
        let cmd = Command::batch([Command::message(Msg::A(7)), Command::message(Msg::B)])
            .map(Parent::Child);
        assert_eq!(
            cmd.into_messages(),
            vec![Parent::Child(Msg::A(7)), Parent::Child(Msg::B)]
        );
    }
}
