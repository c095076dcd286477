//! Selection state and the interaction state machine.
//!
//! [`SelectState::dispatch`] maps an incoming [`SelectEvent`] to a new state
//! plus the [`Effect`]s that bring the native control and the custom surface
//! in line with it. Nothing in here touches either representation, which
//! keeps every transition testable on its own.

use crate::error::SelectError;
use crate::option::{NativeOption, NativeRef, OptionRecord};
use crate::typeahead::{find_prefix, TypeAhead};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Whether the option list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Closed,
    Open,
}

impl Panel {
    pub fn toggled(self) -> Self {
        match self {
            Panel::Closed => Panel::Open,
            Panel::Open => Panel::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Panel::Open
    }
}

/// Keys the select reacts to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Enter,
    ArrowUp,
    ArrowDown,
    Escape,
    /// Any other printable character; feeds type-ahead.
    Char(char),
}

impl Key {
    /// Translate a terminal key press. Keys the select ignores (Tab,
    /// function keys, anything chorded with Ctrl or Alt) map to `None`.
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        match event.code {
            KeyCode::Char(' ') => Some(Key::Space),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Up => Some(Key::ArrowUp),
            KeyCode::Down => Some(Key::ArrowDown),
            KeyCode::Esc => Some(Key::Escape),
            KeyCode::Char(c) if !c.is_control() => Some(Key::Char(c)),
            _ => None,
        }
    }
}

/// Everything that can happen to a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    /// The label region was clicked.
    LabelClick,
    /// A list item was clicked; carries the item's value.
    ItemClick(String),
    /// The container lost focus.
    Blur,
    Key(Key),
    /// The type-ahead timer for this generation elapsed.
    SearchExpired(u64),
}

/// One patch to apply to the native control or the surface, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Mirror a selected flag onto a native entry.
    MirrorNative { at: NativeRef, selected: bool },
    /// Replace the label text.
    Label(String),
    /// Add or remove the selected marker on a list item.
    MarkItem { value: String, selected: bool },
    /// Scroll a list item into view, nearest edge.
    Reveal(String),
    /// Show or hide the list.
    Panel(Panel),
    /// Arrange for `SearchExpired(generation)` after `after`.
    ScheduleSearchReset { generation: u64, after: Duration },
}

/// Option records, panel state, and the type-ahead buffer of one select.
///
/// Invariant: once constructed, exactly one record is selected.
#[derive(Debug, Clone)]
pub struct SelectState {
    records: Vec<OptionRecord>,
    panel: Panel,
    search: TypeAhead,
}

impl SelectState {
    /// Snapshot `options` into records.
    ///
    /// An empty list is rejected. If no option is flagged selected the first
    /// one is selected; if several are, the first flagged one wins. The
    /// returned effects mirror any such correction back to the native
    /// control.
    pub fn from_options(
        options: Vec<NativeOption>,
        search_timeout: Duration,
    ) -> Result<(Self, Vec<Effect>), SelectError> {
        if options.is_empty() {
            return Err(SelectError::NoOptions);
        }

        let mut records: Vec<OptionRecord> = options
            .into_iter()
            .enumerate()
            .map(|(i, option)| OptionRecord::snapshot(i, option))
            .collect();

        let mut fixups = Vec::new();
        match records.iter().position(OptionRecord::is_selected) {
            None => {
                log::warn!(
                    "no option selected; defaulting to {:?}",
                    records[0].value()
                );
                records[0].set_selected(true);
                fixups.push(Effect::MirrorNative {
                    at: records[0].native_ref(),
                    selected: true,
                });
            }
            Some(first) => {
                for record in records.iter_mut().skip(first + 1) {
                    if record.is_selected() {
                        log::warn!(
                            "option {:?} also flagged selected; clearing it",
                            record.value()
                        );
                        record.set_selected(false);
                        fixups.push(Effect::MirrorNative {
                            at: record.native_ref(),
                            selected: false,
                        });
                    }
                }
            }
        }

        let state = Self {
            records,
            panel: Panel::Closed,
            search: TypeAhead::new(search_timeout),
        };
        Ok((state, fixups))
    }

    pub fn records(&self) -> &[OptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`: construction rejects empty option lists.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the selected record.
    pub fn selected_index(&self) -> usize {
        // Construction guarantees a selected record.
        self.records
            .iter()
            .position(OptionRecord::is_selected)
            .unwrap_or_default()
    }

    pub fn selected(&self) -> &OptionRecord {
        &self.records[self.selected_index()]
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    /// Select the record carrying `value`.
    ///
    /// This is the only writer of selected flags. An unknown value is
    /// rejected before anything changes. Selecting the current value
    /// deselects and reselects it, ending in the same state.
    pub fn select_value(&mut self, value: &str) -> Result<Vec<Effect>, SelectError> {
        let target = self
            .records
            .iter()
            .position(|r| r.value() == value)
            .ok_or_else(|| SelectError::NoSuchOption(value.to_string()))?;
        Ok(self.select_at(target))
    }

    /// Select the record at `index`.
    pub fn select_index(&mut self, index: usize) -> Result<Vec<Effect>, SelectError> {
        match self.records.get(index) {
            Some(record) => {
                let value = record.value().to_string();
                self.select_value(&value)
            }
            None => Err(SelectError::IndexOutOfRange {
                index,
                len: self.records.len(),
            }),
        }
    }

    fn select_at(&mut self, target: usize) -> Vec<Effect> {
        let previous = self.selected_index();

        let prev = &mut self.records[previous];
        prev.set_selected(false);
        let prev_native = prev.native_ref();
        let prev_value = prev.value().to_string();

        let next = &mut self.records[target];
        next.set_selected(true);

        log::debug!("select {:?} -> {:?}", prev_value, next.value());

        vec![
            Effect::MirrorNative {
                at: prev_native,
                selected: false,
            },
            Effect::MirrorNative {
                at: next.native_ref(),
                selected: true,
            },
            Effect::Label(next.label().to_string()),
            Effect::MarkItem {
                value: prev_value,
                selected: false,
            },
            Effect::MarkItem {
                value: next.value().to_string(),
                selected: true,
            },
            Effect::Reveal(next.value().to_string()),
        ]
    }

    fn set_panel(&mut self, panel: Panel) -> Effect {
        self.panel = panel;
        Effect::Panel(panel)
    }

    /// Apply one event and return the patches it calls for.
    pub fn dispatch(&mut self, event: SelectEvent) -> Result<Vec<Effect>, SelectError> {
        let effects = match event {
            SelectEvent::LabelClick => vec![self.set_panel(self.panel.toggled())],
            SelectEvent::ItemClick(value) => {
                let mut effects = self.select_value(&value)?;
                effects.push(self.set_panel(Panel::Closed));
                effects
            }
            SelectEvent::Blur => vec![self.set_panel(Panel::Closed)],
            SelectEvent::Key(key) => self.on_key(key),
            SelectEvent::SearchExpired(generation) => {
                if self.search.expire(generation) {
                    log::trace!("search buffer cleared");
                }
                Vec::new()
            }
        };
        Ok(effects)
    }

    fn on_key(&mut self, key: Key) -> Vec<Effect> {
        match key {
            Key::Space | Key::Enter => vec![self.set_panel(self.panel.toggled())],
            Key::Escape => vec![self.set_panel(Panel::Closed)],
            Key::ArrowUp => match self.selected_index().checked_sub(1) {
                Some(prev) => self.select_at(prev),
                None => Vec::new(),
            },
            Key::ArrowDown => {
                let next = self.selected_index() + 1;
                if next < self.records.len() {
                    self.select_at(next)
                } else {
                    Vec::new()
                }
            }
            Key::Char(ch) => {
                let generation = self.search.push(ch);
                let mut effects = vec![Effect::ScheduleSearchReset {
                    generation,
                    after: self.search.timeout(),
                }];
                if let Some(found) = find_prefix(&self.records, self.search.query()) {
                    effects.extend(self.select_at(found));
                }
                effects
            }
        }
    }
}
