//! Data table component with a row cursor, keyed row selection, and
//! accessibility attributes.
//!
//! The table owns a [`Selection`] keyed by row index. Deleting a row through
//! [`Table::remove_row`] re-keys the selection so the remaining selected
//! rows stay selected.

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell as RatatuiCell, Row, Table as RatatuiTable, TableState};
use ratatui::Frame;
use taro_core::command::Command;
use taro_core::component::Component;
use taro_core::observer::ListenerId;
use unicode_width::UnicodeWidthStr;

use crate::accessibility::{attr, Accessibility, AttributeMap, AttributeSink};
use crate::key::{Binding, KeyCombination};
use crate::selection::{Selection, SelectionEvent};

/// Messages for the table component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press forwarded to the table.
    KeyPress(KeyEvent),
    /// Move the cursor to a row.
    MoveTo(usize),
    /// Flip the selection state of a row.
    ToggleRow(usize),
    /// Emitted when the cursor lands on a row.
    CursorMoved(usize),
    /// Emitted when the set of selected rows changes; indices ascending.
    SelectionChanged(Vec<usize>),
    /// Emitted when the cursor row is confirmed (Enter).
    Confirm(usize),
}

/// One row of cells, with an optional base style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    cells: Vec<String>,
    style: Option<Style>,
}

impl TableRow {
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            style: None,
        }
    }

    /// Style this row independently of [`TableStyle::normal`].
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn cell(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(String::as_str)
    }

    pub fn style(&self) -> Option<Style> {
        self.style
    }
}

impl<S: Into<String>> From<Vec<S>> for TableRow {
    fn from(cells: Vec<S>) -> Self {
        Self::new(cells)
    }
}

/// Configurable key bindings for the table component.
#[derive(Debug, Clone)]
pub struct TableKeyBindings {
    /// Default: Up, k
    pub up: Binding,
    /// Default: Down, j
    pub down: Binding,
    /// Default: Home, g
    pub first: Binding,
    /// Default: End, G
    pub last: Binding,
    pub page_up: Binding,
    pub page_down: Binding,
    /// Toggle the cursor row. Default: Space
    pub toggle: Binding,
    /// Select every row (multi-select only). Default: Ctrl+A
    pub select_all: Binding,
    /// Clear the selection. Default: Esc
    pub clear: Binding,
    /// Default: Enter
    pub confirm: Binding,
}

impl Default for TableKeyBindings {
    fn default() -> Self {
        Self {
            up: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Up),
                    KeyCombination::new(KeyCode::Char('k')),
                ],
                "Up",
            ),
            down: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::new(KeyCode::Char('j')),
                ],
                "Down",
            ),
            first: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Home),
                    KeyCombination::new(KeyCode::Char('g')),
                ],
                "First",
            ),
            last: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::End),
                    KeyCombination::new(KeyCode::Char('G')),
                ],
                "Last",
            ),
            page_up: Binding::new(KeyCombination::new(KeyCode::PageUp), "Page up"),
            page_down: Binding::new(KeyCombination::new(KeyCode::PageDown), "Page down"),
            toggle: Binding::new(KeyCombination::new(KeyCode::Char(' ')), "Toggle"),
            select_all: Binding::new(KeyCombination::ctrl(KeyCode::Char('a')), "Select all"),
            clear: Binding::new(KeyCombination::new(KeyCode::Esc), "Clear selection"),
            confirm: Binding::new(KeyCombination::new(KeyCode::Enter), "Confirm"),
        }
    }
}

/// Style configuration for the table.
#[derive(Debug, Clone)]
pub struct TableStyle {
    pub header: Style,
    /// Base style for rows without their own style.
    pub normal: Style,
    /// Patched onto selected rows.
    pub selected_row: Style,
    /// Patched onto the cursor row.
    pub cursor: Style,
    pub focused_border: Style,
    pub unfocused_border: Style,
    /// Symbol left of the cursor row.
    pub highlight_symbol: String,
    /// Prefix for the first cell of a selected row.
    pub selected_marker: String,
    /// Prefix for the first cell of an unselected row.
    pub unselected_marker: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            normal: Style::default(),
            selected_row: Style::default().fg(Color::Green),
            cursor: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            focused_border: Style::default().fg(Color::Cyan),
            unfocused_border: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
            selected_marker: "* ".to_string(),
            unselected_marker: "  ".to_string(),
        }
    }
}

/// A data table with a row cursor and keyed row selection.
///
/// # Example
///
/// ```ignore
/// let mut table = Table::new(
///     vec!["Name".into(), "Age".into()],
///     vec![TableRow::new(["Alice", "30"]), TableRow::new(["Bob", "25"])],
/// )
/// .with_title("People")
/// .with_multi_select(true);
/// table.focus();
/// table.toggle_row(1);
/// assert_eq!(table.selected_rows(), vec![1]);
/// ```
pub struct Table {
    headers: Vec<String>,
    rows: Vec<TableRow>,
    widths: Vec<Constraint>,
    state: TableState,
    focus: bool,
    style: TableStyle,
    title: String,
    visible_height: Cell<usize>,
    selection: Selection<usize>,
    a11y: Accessibility<AttributeMap>,
    key_bindings: TableKeyBindings,
}

impl Table {
    /// Create a single-select table.
    ///
    /// Column widths default to equal percentages. The cursor starts on the
    /// first row when `rows` is non-empty.
    pub fn new(headers: Vec<String>, rows: Vec<TableRow>) -> Self {
        let col_count = headers.len();
        let widths = if col_count == 0 {
            Vec::new()
        } else {
            let share = 100 / u16::try_from(col_count).unwrap_or(u16::MAX);
            vec![Constraint::Percentage(share); col_count]
        };
        let mut state = TableState::default();
        if !rows.is_empty() {
            state.select(Some(0));
        }
        let mut table = Self {
            headers,
            rows,
            widths,
            state,
            focus: false,
            style: TableStyle::default(),
            title: String::new(),
            visible_height: Cell::new(10),
            selection: Selection::single(),
            a11y: Accessibility::default().with_role("grid"),
            key_bindings: TableKeyBindings::default(),
        };
        table.sync_multiselectable();
        table
    }

    pub fn with_key_bindings(mut self, bindings: TableKeyBindings) -> Self {
        self.key_bindings = bindings;
        self
    }

    pub fn key_bindings(&self) -> &TableKeyBindings {
        &self.key_bindings
    }

    pub fn with_widths(mut self, widths: Vec<Constraint>) -> Self {
        self.widths = widths;
        self
    }

    /// Set the border title, which doubles as the accessible label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.a11y.set_label(self.title.clone());
        self
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_multi_select(mut self, multi: bool) -> Self {
        self.set_multi_select(multi);
        self
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    pub fn blur(&mut self) {
        self.focus = false;
    }

    pub fn is_multi_select(&self) -> bool {
        self.selection.is_multi()
    }

    /// Switch selection mode. Leaving multi-select clears the selection.
    pub fn set_multi_select(&mut self, multi: bool) {
        self.selection.set_multi(multi);
        self.sync_multiselectable();
    }

    /// Row index under the cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Jump to a row, clamped to the valid range.
    pub fn set_cursor(&mut self, n: usize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.state.select(Some(n.min(last)));
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selection(&self) -> &Selection<usize> {
        &self.selection
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.selection.is_selected(&index)
    }

    /// Selected row indices, ascending.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.selection.selected_indices()
    }

    /// Listen to the table's selection events.
    pub fn on_selection_event(
        &mut self,
        listener: impl FnMut(&SelectionEvent<usize, ()>) + Send + 'static,
    ) -> ListenerId {
        self.selection.on_event(listener)
    }

    pub fn remove_selection_listener(&mut self, id: ListenerId) -> bool {
        self.selection.remove_listener(id)
    }

    /// Select a row following the table's selection mode. Out-of-range
    /// indices are ignored.
    pub fn select_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.selection.select(index, None);
        }
    }

    pub fn deselect_row(&mut self, index: usize) {
        self.selection.deselect(&index);
    }

    /// Flip a row's selection. Out-of-range indices are ignored.
    pub fn toggle_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.selection.toggle(index, None);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every row. Does nothing in single-select mode.
    pub fn select_all(&mut self) {
        if !self.selection.is_multi() {
            return;
        }
        for index in 0..self.rows.len() {
            if !self.selection.is_selected(&index) {
                self.selection.set_by_key(index, true, None);
            }
        }
    }

    pub fn push_row(&mut self, row: TableRow) {
        self.rows.push(row);
        if self.state.selected().is_none() {
            self.state.select(Some(0));
        }
    }

    /// Remove a row, keeping the selection and cursor on the same rows.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn remove_row(&mut self, index: usize) -> Option<TableRow> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);
        self.selection.remove(index);

        if self.rows.is_empty() {
            self.state.select(None);
        } else if let Some(cursor) = self.state.selected() {
            let cursor = if cursor > index { cursor - 1 } else { cursor };
            self.state.select(Some(cursor.min(self.rows.len() - 1)));
        }
        tracing::debug!(index, remaining = self.rows.len(), "table row removed");
        Some(row)
    }

    /// Replace every row. The selection is cleared and the cursor clamped.
    pub fn set_rows(&mut self, rows: Vec<TableRow>) {
        self.rows = rows;
        self.selection.clear();
        if self.rows.is_empty() {
            self.state.select(None);
        } else {
            let cursor = self.state.selected().unwrap_or(0);
            self.state.select(Some(cursor.min(self.rows.len() - 1)));
        }
        tracing::debug!(rows = self.rows.len(), "table rows replaced");
    }

    pub fn set_columns(&mut self, headers: Vec<String>, widths: Vec<Constraint>) {
        self.headers = headers;
        self.widths = widths;
    }

    /// Size every column to its widest cell (header included), measured in
    /// terminal columns. The first column also fits the selection marker.
    pub fn fit_columns(&mut self) {
        let marker = self
            .style
            .selected_marker
            .width()
            .max(self.style.unselected_marker.width());
        self.widths = (0..self.headers.len())
            .map(|col| {
                let cells = self
                    .rows
                    .iter()
                    .filter_map(|row| row.cell(col))
                    .map(|cell| cell.width() + if col == 0 { marker } else { 0 });
                let widest = cells.fold(self.headers[col].width(), usize::max);
                Constraint::Length(widest.min(u16::MAX as usize) as u16)
            })
            .collect();
    }

    pub fn widths(&self) -> &[Constraint] {
        &self.widths
    }

    pub fn accessibility(&self) -> &Accessibility<AttributeMap> {
        &self.a11y
    }

    pub fn accessibility_mut(&mut self) -> &mut Accessibility<AttributeMap> {
        &mut self.a11y
    }

    /// Attributes describing one row, or `None` if out of range.
    pub fn row_attributes(&self, index: usize) -> Option<AttributeMap> {
        if index >= self.rows.len() {
            return None;
        }
        let mut attrs = AttributeMap::new();
        attrs.set_attribute(attr::ROLE, Some("row"));
        let selected = if self.is_row_selected(index) { "true" } else { "false" };
        attrs.set_attribute(attr::SELECTED, Some(selected));
        Some(attrs)
    }

    fn sync_multiselectable(&mut self) {
        let multi = if self.selection.is_multi() { "true" } else { "false" };
        self.a11y
            .sink_mut()
            .set_attribute(attr::MULTISELECTABLE, Some(multi));
    }

    fn move_by(&mut self, delta: isize, wrap: bool) -> Command<Message> {
        if self.rows.is_empty() {
            return Command::none();
        }
        let len = self.rows.len() as isize;
        let current = self.state.selected().unwrap_or(0) as isize;
        let next = if wrap {
            (current + delta).rem_euclid(len)
        } else {
            (current + delta).clamp(0, len - 1)
        };
        self.state.select(Some(next as usize));
        Command::message(Message::CursorMoved(next as usize))
    }

    fn jump_to(&mut self, index: usize) -> Command<Message> {
        if self.rows.is_empty() {
            return Command::none();
        }
        self.set_cursor(index);
        match self.cursor() {
            Some(i) => Command::message(Message::CursorMoved(i)),
            None => Command::none(),
        }
    }

    fn selection_changed(&self) -> Command<Message> {
        Command::message(Message::SelectionChanged(self.selected_rows()))
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let page = self.visible_height.get().max(1) as isize;
        let bindings = &self.key_bindings;

        if bindings.up.matches(&key) {
            self.move_by(-1, true)
        } else if bindings.down.matches(&key) {
            self.move_by(1, true)
        } else if bindings.page_up.matches(&key) {
            self.move_by(-page, false)
        } else if bindings.page_down.matches(&key) {
            self.move_by(page, false)
        } else if bindings.first.matches(&key) {
            self.jump_to(0)
        } else if bindings.last.matches(&key) {
            self.jump_to(self.rows.len().saturating_sub(1))
        } else if bindings.toggle.matches(&key) {
            match self.cursor() {
                Some(i) => self.update(Message::ToggleRow(i)),
                None => Command::none(),
            }
        } else if bindings.select_all.matches(&key) {
            let before = self.selection.len();
            self.select_all();
            if self.selection.len() != before {
                self.selection_changed()
            } else {
                Command::none()
            }
        } else if bindings.clear.matches(&key) {
            if self.selection.is_empty() {
                Command::none()
            } else {
                self.clear_selection();
                self.selection_changed()
            }
        } else if bindings.confirm.matches(&key) {
            match self.cursor() {
                Some(i) => Command::message(Message::Confirm(i)),
                None => Command::none(),
            }
        } else {
            Command::none()
        }
    }
}

impl Component for Table {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::MoveTo(i) if i < self.rows.len() => {
                self.state.select(Some(i));
                Command::message(Message::CursorMoved(i))
            }
            Message::ToggleRow(i) if i < self.rows.len() => {
                self.toggle_row(i);
                self.selection_changed()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focus {
            self.style.focused_border
        } else {
            self.style.unfocused_border
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        if !self.title.is_empty() {
            block = block.title(self.title.as_str());
        }

        // Header row plus its bottom margin take two lines.
        let data_height = (block.inner(area).height as usize).saturating_sub(2);
        self.visible_height
            .set(if data_height > 0 { data_height } else { 10 });

        let header_cells: Vec<RatatuiCell> = self
            .headers
            .iter()
            .map(|h| RatatuiCell::from(h.as_str()).style(self.style.header))
            .collect();
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let selected = self.is_row_selected(index);
                let mut style = row.style.unwrap_or(self.style.normal);
                if selected {
                    style = style.patch(self.style.selected_row);
                }
                let marker = if selected {
                    &self.style.selected_marker
                } else {
                    &self.style.unselected_marker
                };
                let cells: Vec<RatatuiCell> = row
                    .cells
                    .iter()
                    .enumerate()
                    .map(|(col, text)| {
                        if col == 0 {
                            RatatuiCell::from(format!("{marker}{text}"))
                        } else {
                            RatatuiCell::from(text.as_str())
                        }
                    })
                    .collect();
                Row::new(cells).style(style)
            })
            .collect();

        let table = RatatuiTable::new(rows, &self.widths)
            .header(header)
            .block(block)
            .row_highlight_style(self.style.cursor)
            .highlight_symbol(self.style.highlight_symbol.as_str());

        frame.render_stateful_widget(table, area, &mut self.state.clone());
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
