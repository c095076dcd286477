//! Custom select component that stands in for a hidden native control.
//!
//! A [`Select`] snapshots the native control's options, builds its own
//! surface once, hides the native control, and from then on keeps both in
//! step: every selection change goes through
//! [`SelectState::select_value`](crate::SelectState::select_value) and the
//! resulting [`Effect`]s are applied to the native control and the surface
//! together.

use crate::dom::class;
use crate::error::SelectError;
use crate::native::{FormSelect, NativeControl};
use crate::option::OptionRecord;
use crate::state::{Effect, Key, SelectEvent, SelectState};
use crate::surface::{DomSurface, Surface, DEFAULT_VISIBLE_ROWS};
use crate::typeahead::DEFAULT_SEARCH_TIMEOUT;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use pickbox_core::command::Command;
use pickbox_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use std::borrow::Cow;
use std::cell::Cell;
use std::time::Duration;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press, handled only while focused.
    KeyPress(KeyEvent),
    /// A mouse event, hit-tested against the last rendered layout.
    Mouse(MouseEvent),
    /// The label region was activated.
    LabelClicked,
    /// The item with this value was activated.
    ItemClicked(String),
    /// Give the select keyboard focus.
    Focus,
    /// Take focus away; closes the list.
    Blur,
    /// Type-ahead timer fired for this generation.
    SearchExpired(u64),
    /// Emitted when the selected option changes, with its index and value.
    Changed { index: usize, value: String },
}

/// Behaviour settings for a [`Select`].
#[derive(Debug, Clone)]
pub struct SelectOptions {
    /// Idle time after which the type-ahead buffer clears.
    pub search_timeout: Duration,
    /// List rows shown before scrolling.
    pub visible_rows: usize,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            search_timeout: DEFAULT_SEARCH_TIMEOUT,
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }
}

/// Visual style for the terminal rendering of a [`Select`].
#[derive(Debug, Clone)]
pub struct SelectStyle {
    /// Current value in the trigger row.
    pub value: Style,
    /// Open/closed arrow after the value.
    pub indicator: Style,
    /// Unselected list items.
    pub item: Style,
    /// The selected list item.
    pub selected_item: Style,
    /// Border while focused.
    pub focused_border: Style,
    /// Border while not focused.
    pub unfocused_border: Style,
    /// Prefix drawn before the selected item.
    pub highlight_symbol: String,
}

impl Default for SelectStyle {
    fn default() -> Self {
        Self {
            value: Style::default(),
            indicator: Style::default().fg(Color::DarkGray),
            item: Style::default(),
            selected_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            focused_border: Style::default().fg(Color::Cyan),
            unfocused_border: Style::default().fg(Color::DarkGray),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// Where the last frame put things, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
struct HitMap {
    trigger: Rect,
    list: Option<Rect>,
    offset: usize,
}

/// A single-choice select bound to a native control `N`, drawn on surface `S`.
///
/// # Example
///
/// ```ignore
/// let native = FormSelect::new("state")
///     .with_option("OH", "Ohio")
///     .with_selected_option("CA", "California");
///
/// let mut select = Select::new(native)?.with_title(" State ");
/// select.select_value("OH")?;
/// assert_eq!(select.native().form_value(), Some(("state", "OH")));
/// ```
pub struct Select<N: NativeControl = FormSelect, S: Surface = DomSurface> {
    state: SelectState,
    native: N,
    surface: S,
    style: SelectStyle,
    title: Option<String>,
    focus: bool,
    hits: Cell<HitMap>,
}

impl<N: NativeControl> Select<N, DomSurface> {
    /// Build a select over `native` with default options.
    pub fn new(native: N) -> Result<Self, SelectError> {
        Self::with_options(native, SelectOptions::default())
    }

    /// Build a select over `native` drawing onto a [`DomSurface`].
    pub fn with_options(native: N, options: SelectOptions) -> Result<Self, SelectError> {
        let surface = DomSurface::new(options.visible_rows);
        Self::with_surface(native, surface, options)
    }
}

impl<N: NativeControl, S: Surface> Select<N, S> {
    /// Build a select over `native` drawing onto `surface`.
    ///
    /// Fails with [`SelectError::NoOptions`] if the native control is empty,
    /// in which case neither the control nor the surface is touched.
    pub fn with_surface(
        native: N,
        mut surface: S,
        options: SelectOptions,
    ) -> Result<Self, SelectError> {
        let (state, fixups) = SelectState::from_options(native.options(), options.search_timeout)?;

        surface.build(state.records());
        surface.scroll_into_view(state.selected().value());

        let mut select = Self {
            state,
            native,
            surface,
            style: SelectStyle::default(),
            title: None,
            focus: false,
            hits: Cell::new(HitMap::default()),
        };
        select.apply(&fixups);
        select.native.hide();

        log::debug!(
            "select built with {} options, {:?} selected",
            select.state.len(),
            select.state.selected().value()
        );
        Ok(select)
    }

    /// Set the title shown in the trigger border.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Drop focus and close the list.
    pub fn blur(&mut self) -> Command<Message> {
        self.focus = false;
        self.handle(SelectEvent::Blur)
    }

    pub fn is_focused(&self) -> bool {
        self.focus
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    pub fn records(&self) -> &[OptionRecord] {
        self.state.records()
    }

    pub fn selected(&self) -> &OptionRecord {
        self.state.selected()
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index()
    }

    pub fn selected_value(&self) -> &str {
        self.state.selected().value()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn native(&self) -> &N {
        &self.native
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Tear down the select, handing back the native control and surface.
    pub fn into_parts(self) -> (N, S) {
        (self.native, self.surface)
    }

    /// Select the option carrying `value`, updating both representations.
    pub fn select_value(&mut self, value: &str) -> Result<(), SelectError> {
        let effects = self.state.select_value(value)?;
        self.apply(&effects);
        Ok(())
    }

    /// Select the option at `index`, updating both representations.
    pub fn select_index(&mut self, index: usize) -> Result<(), SelectError> {
        let effects = self.state.select_index(index)?;
        self.apply(&effects);
        Ok(())
    }

    /// Feed one interaction event through the state machine and apply the
    /// result. Returns the effects that were applied.
    ///
    /// A returned [`Effect::ScheduleSearchReset`] is the caller's to honour:
    /// dispatch [`SelectEvent::SearchExpired`] with that generation once the
    /// delay has passed. The component path does this with a timer command.
    pub fn dispatch(&mut self, event: SelectEvent) -> Result<Vec<Effect>, SelectError> {
        let effects = self.state.dispatch(event)?;
        self.apply(&effects);
        Ok(effects)
    }

    /// Apply effects in order. Returns the pending search reset, if any.
    fn apply(&mut self, effects: &[Effect]) -> Option<(u64, Duration)> {
        let mut reset = None;
        for effect in effects {
            match effect {
                Effect::MirrorNative { at, selected } => self.native.set_selected(*at, *selected),
                Effect::Label(label) => self.surface.set_label(label),
                Effect::MarkItem { value, selected } => {
                    self.surface.set_item_selected(value, *selected)
                }
                Effect::Reveal(value) => self.surface.scroll_into_view(value),
                Effect::Panel(panel) => self.surface.set_open(panel.is_open()),
                Effect::ScheduleSearchReset { generation, after } => {
                    reset = Some((*generation, *after));
                }
            }
        }
        reset
    }

    /// Dispatch from the component path: errors are logged, a selection
    /// change is reported upward, and a search reset becomes a timer.
    fn handle(&mut self, event: SelectEvent) -> Command<Message> {
        let before = self.state.selected_index();
        let effects = match self.state.dispatch(event) {
            Ok(effects) => effects,
            Err(err) => {
                log::error!("select event dropped: {err}");
                return Command::none();
            }
        };
        let reset = self.apply(&effects);

        let index = self.state.selected_index();
        let changed = (index != before).then(|| {
            Command::message(Message::Changed {
                index,
                value: self.state.selected().value().to_string(),
            })
        });
        let timer = reset.map(|(generation, after)| {
            Command::tick(after, move |_| Message::SearchExpired(generation))
        });
        Command::batch(changed.into_iter().chain(timer))
    }

    fn step(&mut self, msg: Message) -> Command<Message> {
        let event = match msg {
            Message::KeyPress(key) if self.focus => match Key::from_key_event(&key) {
                Some(key) => SelectEvent::Key(key),
                None => return Command::none(),
            },
            Message::KeyPress(_) => return Command::none(),
            Message::Mouse(mouse) => match self.hit_test(&mouse) {
                Some(event) => event,
                None => return Command::none(),
            },
            Message::LabelClicked => {
                self.focus = true;
                SelectEvent::LabelClick
            }
            Message::ItemClicked(value) => {
                self.focus = true;
                SelectEvent::ItemClick(value)
            }
            Message::Focus => {
                self.focus = true;
                return Command::none();
            }
            Message::Blur => return self.blur(),
            Message::SearchExpired(generation) => SelectEvent::SearchExpired(generation),
            Message::Changed { .. } => return Command::none(),
        };
        self.handle(event)
    }

    /// Map a left press onto the last rendered layout: trigger row, a
    /// visible list row, or (while focused) somewhere else, which blurs.
    fn hit_test(&mut self, mouse: &MouseEvent) -> Option<SelectEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let pos = Position::new(mouse.column, mouse.row);
        let hits = self.hits.get();

        if hits.trigger.contains(pos) {
            self.focus = true;
            return Some(SelectEvent::LabelClick);
        }
        if let Some(list) = hits.list.filter(|_| self.state.is_open()) {
            if list.contains(pos) {
                let index = hits.offset + usize::from(pos.y - list.y);
                let value = self.state.records().get(index)?.value().to_string();
                self.focus = true;
                return Some(SelectEvent::ItemClick(value));
            }
        }
        if self.focus {
            self.focus = false;
            return Some(SelectEvent::Blur);
        }
        None
    }
}

impl<N: NativeControl> Select<N, DomSurface> {
    /// Draw the open list below `anchor`. Returns the rows area and the
    /// index of its first row.
    fn render_list(&self, frame: &mut Frame, anchor: Rect) -> Option<(Rect, usize)> {
        let viewport = self.surface.viewport();
        let wanted = u16::try_from(viewport.visible().len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let y = anchor.bottom();
        let height = wanted.min(frame.area().bottom().saturating_sub(y));
        if height < 3 || anchor.width < 4 {
            return None;
        }

        let list_area = Rect::new(anchor.x, y, anchor.width, height);
        frame.render_widget(Clear, list_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.focused_border);
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        // The screen edge may leave fewer rows than the viewport holds; the
        // selected item still has to be among the ones drawn.
        let mut window = *viewport;
        window.set_rows(usize::from(inner.height));
        if let Some(selected) = self.surface.selected_position() {
            window.reveal(selected);
        }

        let items = self.surface.items();
        let text_width = usize::from(inner.width.saturating_sub(2));
        for (row, index) in window.visible().enumerate() {
            let Some(item) = items.get(index) else {
                break;
            };
            let (prefix, style) = if item.has_class(class::SELECTED) {
                (self.style.highlight_symbol.as_str(), self.style.selected_item)
            } else {
                ("  ", self.style.item)
            };
            let row_area = Rect {
                y: inner.y + row as u16,
                height: 1,
                ..inner
            };
            let text = format!("{prefix}{}", truncate(item.text(), text_width));
            frame.render_widget(Paragraph::new(Span::styled(text, style)), row_area);
        }
        Some((inner, window.offset()))
    }
}

impl<N> Component for Select<N, DomSurface>
where
    N: NativeControl + Send + 'static,
{
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        self.step(msg)
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let border = if self.focus {
            self.style.focused_border
        } else {
            self.style.unfocused_border
        };
        let mut block = Block::default().borders(Borders::ALL).border_style(border);
        if let Some(ref title) = self.title {
            block = block.title(title.as_str());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let open = self.surface.is_open();
        let arrow = if open { " ▾" } else { " ▸" };
        let label_width = usize::from(inner.width.saturating_sub(2));
        let line = Line::from(vec![
            Span::styled(truncate(self.surface.label_text(), label_width), self.style.value),
            Span::styled(arrow, self.style.indicator),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        let list = if open {
            self.render_list(frame, area)
        } else {
            None
        };
        self.hits.set(HitMap {
            trigger: area,
            list: list.map(|(rows, _)| rows),
            offset: list.map_or(0, |(_, offset)| offset),
        });
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

/// Cut `text` to `max` columns, ending in an ellipsis when shortened.
fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    if text.width() <= max {
        return Cow::Borrowed(text);
    }
    if max == 0 {
        return Cow::Borrowed("");
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use pickbox_core::testing::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click(column: u16, row: u16) -> Message {
        Message::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn states() -> FormSelect {
        FormSelect::new("state")
            .with_option("OH", "Ohio")
            .with_selected_option("CA", "California")
    }

    fn alabama() -> FormSelect {
        FormSelect::new("state")
            .with_selected_option("AL", "Alabama")
            .with_option("AK", "Alaska")
            .with_option("AZ", "Arizona")
    }

    /// Records, native control, and surface all name the same option.
    fn assert_in_sync(select: &Select) {
        let selected = select.selected();
        assert_eq!(
            select.records().iter().filter(|r| r.is_selected()).count(),
            1
        );
        assert_eq!(select.native().selected_value(), Some(selected.value()));
        assert_eq!(select.surface().label_text(), selected.label());
        assert_eq!(
            select.surface().selected_position(),
            Some(select.selected_index())
        );
        assert_eq!(select.surface().is_open(), select.is_open());
    }

    fn render(select: &Select, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| select.view(frame, Rect::new(0, 0, width, 3)))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn construction_mirrors_native_selection() {
        let select = Select::new(states()).unwrap();
        assert_eq!(select.surface().label_text(), "California");
        assert!(select.native().is_hidden());
        assert!(!select.is_open());
        assert_in_sync(&select);
    }

    #[test]
    fn select_value_round_trip() {
        let mut select = Select::new(states()).unwrap();
        select.select_value("OH").unwrap();

        assert_eq!(select.surface().label_text(), "Ohio");
        let native = select.native();
        assert_eq!(native.option(0).map(|o| o.selected), Some(true));
        assert_eq!(native.option(1).map(|o| o.selected), Some(false));
        assert_eq!(native.form_value(), Some(("state", "OH")));
        assert_in_sync(&select);
    }

    #[test]
    fn unknown_value_leaves_everything_untouched() {
        let mut select = Select::new(states()).unwrap();
        let html = select.surface().to_html();
        let native = select.native().clone();

        let err = select.select_value("TX").unwrap_err();
        assert_eq!(err, SelectError::NoSuchOption("TX".into()));
        assert_eq!(select.surface().to_html(), html);
        assert_eq!(select.native(), &native);
    }

    #[test]
    fn empty_native_control_is_rejected() {
        let err = Select::new(FormSelect::new("empty")).err();
        assert_eq!(err, Some(SelectError::NoOptions));
    }

    #[test]
    fn missing_selection_is_mirrored_to_native() {
        let native = FormSelect::new("color")
            .with_option("r", "Red")
            .with_option("g", "Green");
        let select = Select::new(native).unwrap();
        assert_eq!(select.native().form_value(), Some(("color", "r")));
        assert_in_sync(&select);
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut select = Select::new(alabama()).unwrap();
        let cmd = select.update(key(KeyCode::Down));
        assert!(cmd.is_none());
        assert_eq!(select.selected_value(), "AL");
    }

    #[test]
    fn arrow_down_reports_change() {
        let mut select = Select::new(alabama()).unwrap();
        select.focus();
        let messages = select.update(key(KeyCode::Down)).into_messages();
        assert!(matches!(
            messages.as_slice(),
            [Message::Changed { index: 1, value }] if value == "AK"
        ));
        assert_in_sync(&select);
    }

    #[test]
    fn arrow_at_edges_reports_nothing() {
        let mut select = Select::new(alabama()).unwrap();
        select.focus();
        assert!(select.update(key(KeyCode::Up)).is_none());
        select.select_index(2).unwrap();
        assert!(select.update(key(KeyCode::Down)).is_none());
        assert_eq!(select.selected_value(), "AZ");
    }

    #[test]
    fn typing_schedules_one_reset_per_keystroke() {
        let mut select = Select::new(alabama()).unwrap();
        select.focus();

        let cmd = select.update(key(KeyCode::Char('a')));
        assert_eq!(cmd.pending_futures(), 1);
        assert!(cmd.into_messages().is_empty());

        let cmd = select.update(key(KeyCode::Char('r')));
        assert_eq!(cmd.pending_futures(), 1);
        assert_eq!(select.selected_value(), "AZ");
        assert_eq!(select.state().search_query(), "ar");

        select.update(Message::SearchExpired(2));
        assert_eq!(select.state().search_query(), "");
        assert_in_sync(&select);
    }

    #[test]
    fn space_toggles_and_escape_closes() {
        let mut select = Select::new(states()).unwrap();
        select.focus();
        select.update(key(KeyCode::Char(' ')));
        assert!(select.surface().is_open());
        select.update(key(KeyCode::Esc));
        assert!(!select.surface().is_open());
        select.update(key(KeyCode::Enter));
        assert!(select.surface().is_open());
    }

    #[test]
    fn blur_closes_and_drops_focus() {
        let mut select = Select::new(states()).unwrap();
        select.update(Message::LabelClicked);
        assert!(select.is_focused());
        assert!(select.is_open());

        select.update(Message::Blur);
        assert!(!select.is_focused());
        assert!(!select.surface().is_open());
    }

    #[test]
    fn item_click_selects_and_closes() {
        let mut select = Select::new(states()).unwrap();
        select.update(Message::LabelClicked);
        let messages = select
            .update(Message::ItemClicked("OH".into()))
            .into_messages();
        assert_eq!(messages.len(), 1);
        assert!(!select.is_open());
        assert_eq!(select.native().form_value(), Some(("state", "OH")));
        assert_in_sync(&select);
    }

    #[test]
    fn mouse_clicks_follow_rendered_layout() {
        let mut select = Select::new(states()).unwrap();
        render(&select, 20, 10);

        // Trigger row opens.
        select.update(click(3, 1));
        assert!(select.is_open());
        render(&select, 20, 10);

        // List block starts at row 3; first item sits at row 4.
        select.update(click(3, 4));
        assert_eq!(select.selected_value(), "OH");
        assert!(!select.is_open());
        assert!(select.is_focused());

        // Anywhere else blurs.
        select.update(click(3, 9));
        assert!(!select.is_focused());
        assert_in_sync(&select);
    }

    #[test]
    fn closed_view_shows_label_and_arrow() {
        let select = Select::new(states()).unwrap().with_title("State");
        let screen = render(&select, 20, 4);
        assert!(screen.contains("State"));
        assert!(screen.contains("California ▸"));
        assert!(!screen.contains("Ohio"));
    }

    #[test]
    fn open_view_lists_items_with_highlight() {
        let mut select = Select::new(states()).unwrap();
        select.update(Message::LabelClicked);
        let screen = render(&select, 20, 8);
        assert!(screen.contains("California ▾"));
        assert!(screen.contains("  Ohio"));
        assert!(screen.contains("▸ California"));
    }

    fn ten_items() -> FormSelect {
        (0..10).fold(FormSelect::new("item"), |native, i| {
            native.with_option(format!("v{i}"), format!("Item{i}"))
        })
    }

    #[test]
    fn short_screen_still_shows_selected_item() {
        let mut select = Select::new(ten_items()).unwrap();
        select.update(Message::LabelClicked);
        for _ in 0..4 {
            select.update(key(KeyCode::Down));
        }

        // Only two list rows fit under the trigger.
        let screen = render(&select, 20, 7);
        assert!(screen.contains("Item4 ▾"));
        assert!(screen.contains("▸ Item4"));
        assert!(screen.contains("  Item3"));
        assert!(!screen.contains("Item0"));
    }

    #[test]
    fn clicks_map_onto_clipped_rows() {
        let mut select = Select::new(ten_items()).unwrap();
        select.update(Message::LabelClicked);
        for _ in 0..4 {
            select.update(key(KeyCode::Down));
        }
        render(&select, 20, 7);

        let messages = select.update(click(3, 4)).into_messages();
        assert!(matches!(
            messages.as_slice(),
            [Message::Changed { index: 3, value }] if value == "v3"
        ));
        assert_in_sync(&select);
    }

    #[test]
    fn oversized_row_count_renders() {
        let options = SelectOptions {
            visible_rows: usize::MAX,
            ..SelectOptions::default()
        };
        let mut select = Select::with_options(states(), options).unwrap();
        select.update(Message::LabelClicked);
        let screen = render(&select, 20, 8);
        assert!(screen.contains("  Ohio"));
        assert!(screen.contains("▸ California"));
    }

    #[test]
    fn blur_closes_without_follow_up() {
        let mut select = Select::new(states()).unwrap();
        select.update(Message::LabelClicked);
        let cmd = select.blur();
        assert!(cmd.is_none());
        assert!(!select.is_open());
        assert!(!select.is_focused());
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("California", 20), "California");
        assert_eq!(truncate("California", 5), "Cali…");
        assert_eq!(truncate("California", 0), "");
    }

    /// Logs every surface call, to check what the select asks of a target.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn build(&mut self, records: &[OptionRecord]) {
            self.calls.push(format!("build {}", records.len()));
        }
        fn set_label(&mut self, label: &str) {
            self.calls.push(format!("label {label}"));
        }
        fn set_item_selected(&mut self, value: &str, selected: bool) {
            self.calls.push(format!("item {value} {selected}"));
        }
        fn scroll_into_view(&mut self, value: &str) {
            self.calls.push(format!("reveal {value}"));
        }
        fn set_open(&mut self, open: bool) {
            self.calls.push(format!("open {open}"));
        }
    }

    #[test]
    fn surface_is_built_once_then_patched() {
        let mut select =
            Select::with_surface(states(), RecordingSurface::default(), SelectOptions::default())
                .unwrap();
        select
            .dispatch(SelectEvent::ItemClick("OH".into()))
            .unwrap();

        let (native, surface) = select.into_parts();
        assert_eq!(
            surface.calls,
            vec![
                "build 2",
                "reveal CA",
                "label Ohio",
                "item CA false",
                "item OH true",
                "reveal OH",
                "open false",
            ]
        );
        assert!(native.is_hidden());
        assert_eq!(native.form_value(), Some(("state", "OH")));
    }
}
