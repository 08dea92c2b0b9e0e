//! Sortable, selectable data table component
//!
//! The table renders rows the host owns. Sort state and row selection live
//! inside the widget; every selection change is reported through
//! `on_row_select` with the selected records in display order.
//!
//! Keys (when focused): `j`/`k` or arrows move the row cursor, `h`/`l` move
//! the column cursor, `s`/Enter sorts by the column under the cursor, Space
//! toggles the row under the cursor, `a` toggles all rows. Mouse clicks on a
//! header sort, clicks on a checkbox toggle.

mod column;
mod selection;
mod sort;

pub use column::{CellValue, Column, Columns, Record};
pub use selection::{CheckState, Selection};
pub use sort::{compare_cells, sort_order, SortDirection, SortKey, SortState, UNSORTED_GLYPH};

use std::marker::PhantomData;

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;
use tui_kit_core::{rect_contains, Component, EventKind};

use crate::theme::Theme;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data to display.";
pub const LOADING_TEXT: &str = "Loading…";

const CHECKBOX_WIDTH: u16 = 3;
const COLUMN_SPACING: u16 = 1;

/// Props for DataTable component
pub struct DataTableProps<'a, T, A> {
    /// Rows in input order (never reordered in place)
    pub data: &'a [T],
    pub columns: &'a Columns<T>,
    /// Overlay a loading indicator and suppress the empty-state row
    pub loading: bool,
    /// Add a leading checkbox column
    pub selectable: bool,
    /// Called with the selected records after every selection change
    pub on_row_select: Option<fn(Vec<T>) -> A>,
    /// Shown when there are no rows and not loading
    pub empty_message: &'a str,
    pub is_focused: bool,
    pub theme: Theme,
}

impl<'a, T, A> DataTableProps<'a, T, A> {
    pub fn new(data: &'a [T], columns: &'a Columns<T>) -> Self {
        Self {
            data,
            columns,
            loading: false,
            selectable: false,
            on_row_select: None,
            empty_message: DEFAULT_EMPTY_MESSAGE,
            is_focused: false,
            theme: Theme::default(),
        }
    }
}

impl<T, A> Clone for DataTableProps<'_, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, A> Copy for DataTableProps<'_, T, A> {}

/// Sort state of a header as exposed to assistive tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaSort {
    None,
    Ascending,
    Descending,
}

/// Geometry captured at the last render, for mouse hit-testing
#[derive(Debug, Default)]
struct HitMap {
    area: Rect,
    header_y: Option<u16>,
    body_y: u16,
    first_row: usize,
    visible_rows: usize,
    checkbox: Option<Rect>,
    columns: Vec<Rect>,
}

/// A table over host-owned rows with client-side sort and selection
pub struct DataTable<T> {
    sort: SortState,
    selection: Selection,
    /// Set when a row-count change dropped the selection; reported on the next event
    selection_dropped: bool,
    cursor_row: usize,
    cursor_col: usize,
    scroll_offset: usize,
    hits: HitMap,
    _rows: PhantomData<fn(&T)>,
}

impl<T> Default for DataTable<T> {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            selection: Selection::default(),
            selection_dropped: false,
            cursor_row: 0,
            cursor_col: 0,
            scroll_offset: 0,
            hits: HitMap::default(),
            _rows: PhantomData,
        }
    }
}

impl<T: Clone + 'static> DataTable<T> {
    /// Create a new DataTable
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Row and column under the keyboard cursor
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn aria_sort(&self, column: &str) -> AriaSort {
        match self.sort.direction_of(column) {
            Some(SortDirection::Ascending) => AriaSort::Ascending,
            Some(SortDirection::Descending) => AriaSort::Descending,
            None => AriaSort::None,
        }
    }

    /// State of the select-all checkbox for `rows` displayed rows
    pub fn header_check_state(&self, rows: usize) -> CheckState {
        self.selection.check_state(rows)
    }

    /// Rows in display order
    pub fn displayed<'a, A>(&self, props: &DataTableProps<'a, T, A>) -> Vec<&'a T> {
        sort_order(props.data, props.columns, &self.sort)
            .into_iter()
            .map(|i| &props.data[i])
            .collect()
    }

    /// Header activation for the column at `index`
    ///
    /// Returns whether the sort changed. Non-sortable columns never change it.
    pub fn activate_header<A>(&mut self, index: usize, props: DataTableProps<'_, T, A>) -> bool {
        let Some(column) = props.columns.get(index) else {
            return false;
        };
        let changed = self.sort.activate(column);
        if changed {
            debug!(
                column = %column.key,
                direction = ?self.sort.direction_of(&column.key),
                "Table sort changed"
            );
        }
        changed
    }

    /// Flip the row at display position `position` and notify
    pub fn toggle_row<A>(&mut self, position: usize, props: DataTableProps<'_, T, A>) -> Option<A> {
        self.sync(props.data.len(), props.columns.len());
        if position >= props.data.len() {
            return None;
        }
        let selected = self.selection.toggle(position);
        debug!(position, selected, "Table row toggled");
        self.notify(props)
    }

    /// Select every displayed row, or clear if all are already selected
    pub fn toggle_all<A>(&mut self, props: DataTableProps<'_, T, A>) -> Option<A> {
        self.sync(props.data.len(), props.columns.len());
        self.selection.toggle_all(props.data.len());
        debug!(selected = self.selection.len(), "Table select-all toggled");
        self.notify(props)
    }

    fn notify<A>(&self, props: DataTableProps<'_, T, A>) -> Option<A> {
        let on_row_select = props.on_row_select?;
        let order = sort_order(props.data, props.columns, &self.sort);
        Some(on_row_select(self.selection.records(&order, props.data)))
    }

    /// Bring widget state in line with the current props
    fn sync(&mut self, rows: usize, cols: usize) {
        if self.selection.reconcile(rows) {
            debug!(rows, "Row count changed, selection cleared");
            self.selection_dropped = true;
        }
        let last_row = rows.saturating_sub(1);
        self.cursor_row = self.cursor_row.min(last_row);
        self.scroll_offset = self.scroll_offset.min(last_row);
        self.cursor_col = self.cursor_col.min(cols.saturating_sub(1));
    }

    fn move_cursor(&mut self, delta: isize, rows: usize) {
        let last = rows.saturating_sub(1);
        self.cursor_row = self.cursor_row.saturating_add_signed(delta).min(last);
    }

    fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if self.cursor_row >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor_row + 1 - viewport_height;
        }
    }

    fn handle_key<A>(&mut self, code: KeyCode, props: DataTableProps<'_, T, A>) -> Option<A> {
        let rows = props.data.len();
        let interactive = !props.loading;

        match code {
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(-1, rows);
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(1, rows);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.cursor_row = 0;
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.cursor_row = rows.saturating_sub(1);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.cursor_col = self.cursor_col.saturating_sub(1);
                None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.cursor_col = (self.cursor_col + 1).min(props.columns.len() - 1);
                None
            }
            KeyCode::Char('s') | KeyCode::Enter if interactive => {
                self.activate_header(self.cursor_col, props);
                None
            }
            KeyCode::Char(' ') if interactive && props.selectable => {
                self.toggle_row(self.cursor_row, props)
            }
            KeyCode::Char('a') if interactive && props.selectable => self.toggle_all(props),
            _ => None,
        }
    }

    /// The loading overlay covers the whole table, so clicks are ignored while loading
    fn handle_click<A>(&mut self, x: u16, y: u16, props: DataTableProps<'_, T, A>) -> Option<A> {
        if props.loading || !rect_contains(self.hits.area, x, y) {
            return None;
        }
        let on_checkbox = self.hits.checkbox.is_some_and(|cb| x >= cb.x && x < cb.right());

        if self.hits.header_y == Some(y) {
            if on_checkbox {
                return self.toggle_all(props);
            }
            if let Some(index) = self.hits.columns.iter().position(|c| x >= c.x && x < c.right()) {
                self.cursor_col = index;
                self.activate_header(index, props);
            }
            return None;
        }

        let body_end = self.hits.body_y + self.hits.visible_rows as u16;
        if y < self.hits.body_y || y >= body_end {
            return None;
        }
        let position = self.hits.first_row + usize::from(y - self.hits.body_y);
        self.cursor_row = position;
        if on_checkbox {
            return self.toggle_row(position, props);
        }
        None
    }
}

fn header_label<T>(column: &Column<T>, sort: &SortState) -> String {
    if !column.sortable {
        return column.title.clone();
    }
    let glyph = sort
        .direction_of(&column.key)
        .map_or(UNSORTED_GLYPH, SortDirection::glyph);
    format!("{} {}", column.title, glyph)
}

fn render_loading_overlay(frame: &mut Frame, body: Rect, theme: &Theme) {
    let width = (LOADING_TEXT.chars().count() as u16 + 4).min(body.width);
    let height = if body.height >= 3 { 3 } else { 1 };
    let overlay = Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + (body.height - height) / 2,
        width,
        height,
    };
    let text_area = Rect {
        y: overlay.y + height / 2,
        height: 1,
        ..overlay
    };

    frame.render_widget(Clear, overlay);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.overlay_bg)),
        overlay,
    );
    frame.render_widget(
        Paragraph::new(LOADING_TEXT)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(theme.overlay_bg)
                    .fg(theme.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        text_area,
    );
}

impl<T: Clone + 'static, A> Component<A> for DataTable<T> {
    type Props<'a> = DataTableProps<'a, T, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        self.sync(props.data.len(), props.columns.len());

        let mut actions = Vec::new();
        if std::mem::take(&mut self.selection_dropped) {
            actions.extend(self.notify(props));
        }

        let action = match event {
            EventKind::Key(key)
                if props.is_focused && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.handle_key(key.code, props)
            }
            EventKind::Scroll { column, row, delta }
                if rect_contains(self.hits.area, *column, *row) =>
            {
                self.move_cursor(*delta, props.data.len());
                None
            }
            _ => event
                .left_click()
                .and_then(|(x, y)| self.handle_click(x, y, props)),
        };
        actions.extend(action);
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.data.len(), props.columns.len());
        let theme = props.theme;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if props.is_focused {
                theme.accent
            } else {
                theme.border
            }))
            .style(Style::default().bg(theme.surface).fg(theme.fg));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.hits = HitMap {
            area,
            ..HitMap::default()
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut constraints = Vec::with_capacity(props.columns.len() + 1);
        if props.selectable {
            constraints.push(Constraint::Length(CHECKBOX_WIDTH));
        }
        constraints.extend(props.columns.iter().map(|c| c.width));
        let cells = Layout::horizontal(constraints)
            .spacing(COLUMN_SPACING)
            .split(Rect { height: 1, ..inner });
        let (checkbox, column_cells) = if props.selectable {
            (Some(cells[0]), &cells[1..])
        } else {
            (None, &cells[..])
        };

        let rows = props.data.len();
        let header_y = inner.y;
        let body = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };

        // Header
        let header_style = Style::default()
            .bg(theme.header_bg)
            .fg(theme.fg)
            .add_modifier(Modifier::BOLD);
        let buf = frame.buffer_mut();
        buf.set_style(Rect { height: 1, ..inner }, header_style);
        if let Some(cb) = checkbox {
            let glyph = self.selection.check_state(rows).glyph();
            buf.set_stringn(cb.x, header_y, glyph, cb.width.into(), header_style.fg(theme.accent));
        }
        for (i, (column, cell)) in props.columns.iter().zip(column_cells).enumerate() {
            let mut style = header_style;
            if props.is_focused && i == self.cursor_col {
                style = style.fg(theme.accent).add_modifier(Modifier::UNDERLINED);
            }
            let label = header_label(column, &self.sort);
            buf.set_stringn(cell.x, header_y, label, cell.width.into(), style);
        }

        self.hits.header_y = Some(header_y);
        self.hits.body_y = body.y;
        self.hits.checkbox = checkbox;
        self.hits.columns = column_cells.to_vec();

        // Body
        let order = sort_order(props.data, props.columns, &self.sort);
        if order.is_empty() {
            if !props.loading && body.height > 0 {
                frame.render_widget(
                    Paragraph::new(props.empty_message)
                        .alignment(Alignment::Center)
                        .style(Style::default().fg(theme.muted)),
                    Rect { height: 1, ..body },
                );
            }
        } else {
            self.ensure_visible(body.height.into());
            let buf = frame.buffer_mut();
            let visible = order
                .iter()
                .enumerate()
                .skip(self.scroll_offset)
                .take(body.height.into());

            for (line, (position, &data_index)) in visible.enumerate() {
                let y = body.y + line as u16;
                let record = &props.data[data_index];
                let bg = if position % 2 == 0 {
                    theme.row_bg
                } else {
                    theme.row_alt
                };
                let mut style = Style::default().bg(bg).fg(theme.fg);
                if props.is_focused && position == self.cursor_row {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                buf.set_style(Rect { y, height: 1, ..inner }, style);

                if let Some(cb) = checkbox {
                    let (glyph, cb_style) = if self.selection.is_selected(position) {
                        (CheckState::Checked.glyph(), style.fg(theme.accent))
                    } else {
                        (CheckState::Unchecked.glyph(), style)
                    };
                    buf.set_stringn(cb.x, y, glyph, cb.width.into(), cb_style);
                }
                for (column, cell) in props.columns.iter().zip(column_cells) {
                    buf.set_stringn(cell.x, y, column.cell_text(record), cell.width.into(), style);
                }
            }

            self.hits.first_row = self.scroll_offset;
            self.hits.visible_rows = (rows - self.scroll_offset).min(body.height.into());
        }

        if props.loading && body.height > 0 {
            render_loading_overlay(frame, body, &theme);
        }
    }
}
