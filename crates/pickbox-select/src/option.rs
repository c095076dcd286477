//! In-memory mirror of a native control's options.

/// Non-owning handle to one entry of a [`NativeControl`](crate::NativeControl),
/// by position. Only ever used to mirror a selected flag back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeRef(usize);

impl NativeRef {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One option as a native control reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl NativeOption {
    /// An unselected option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// Mark this option as the selected one.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

/// A snapshot of one native option plus its live selected flag.
///
/// Records are created once when a [`Select`](crate::Select) is built and
/// live as long as it does. Only `selected` ever changes, and only through
/// [`SelectState::select_value`](crate::SelectState::select_value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRecord {
    value: String,
    label: String,
    selected: bool,
    native: NativeRef,
}

impl OptionRecord {
    pub(crate) fn snapshot(index: usize, option: NativeOption) -> Self {
        Self {
            value: option.value,
            label: option.label,
            selected: option.selected,
            native: NativeRef::new(index),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn native_ref(&self) -> NativeRef {
        self.native
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
