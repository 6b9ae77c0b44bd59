use crate::command::Command;
use crate::component::Component;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless harness that drives a [`Component`] without a real terminal.
///
/// Messages returned from [`Component::update`] are collected in an outbox
/// instead of being routed to a parent, so tests can assert on exactly
/// which notifications a component produced.
///
/// # Example
///
/// ```rust,ignore
/// use taro_core::testing::ComponentHarness;
///
/// let mut h = ComponentHarness::new(table);
/// h.send(table::Message::ToggleRow(1));
/// assert_eq!(h.take_messages().len(), 1);
/// assert!(h.render_string(30, 6).contains("Bob"));
/// ```
pub struct ComponentHarness<C: Component> {
    component: C,
    outbox: Vec<C::Message>,
}

impl<C: Component> ComponentHarness<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            outbox: Vec::new(),
        }
    }

    /// Run one update cycle and collect whatever it emits.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.collect(cmd);
    }

    /// Remove and return everything collected so far.
    pub fn take_messages(&mut self) -> Vec<C::Message> {
        std::mem::take(&mut self.outbox)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    /// Mutable access for arranging state outside the message cycle.
    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component to a [`Buffer`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                let area = frame.area();
                self.component.view(frame, area);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render and return the visible content as newline-separated rows.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect(&mut self, cmd: Command<C::Message>) {
        self.outbox.extend(cmd.into_messages());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use ratatui::Frame;

    struct Counter {
        count: i64,
    }

    #[derive(Debug, PartialEq)]
    enum CounterMsg {
        Increment,
        Reset,
        Overflowed,
    }

    impl Component for Counter {
        type Message = CounterMsg;

        fn update(&mut self, msg: CounterMsg) -> Command<CounterMsg> {
            match msg {
                CounterMsg::Increment => {
                    self.count += 1;
                    if self.count > 2 {
                        return Command::message(CounterMsg::Overflowed);
                    }
                }
                CounterMsg::Reset => self.count = 0,
                CounterMsg::Overflowed => {}
            }
            Command::none()
        }

        fn view(&self, frame: &mut Frame, area: Rect) {
            frame.render_widget(Paragraph::new(format!("Count: {}", self.count)), area);
        }
    }

    #[test]
    fn send_updates_component() {
        let mut h = ComponentHarness::new(Counter { count: 0 });
        h.send(CounterMsg::Increment);
        h.send(CounterMsg::Increment);
        assert_eq!(h.component().count, 2);
        assert!(h.take_messages().is_empty());
    }

    #[test]
    fn emitted_messages_are_collected() {
        let mut h = ComponentHarness::new(Counter { count: 2 });
        h.send(CounterMsg::Increment);
        assert_eq!(h.take_messages(), vec![CounterMsg::Overflowed]);
        assert!(h.take_messages().is_empty());
    }

    #[test]
    fn component_mut_bypasses_update() {
        let mut h = ComponentHarness::new(Counter { count: 0 });
        h.component_mut().count = 41;
        h.send(CounterMsg::Reset);
        assert_eq!(h.component().count, 0);
    }

    #[test]
    fn render_string_shows_state() {
        let mut h = ComponentHarness::new(Counter { count: 0 });
        h.send(CounterMsg::Increment);
        let out = h.render_string(12, 2);
        assert!(out.starts_with("Count: 1"));
        assert_eq!(out.lines().count(), 2);
    }
}
