//! The native control a [`Select`](crate::Select) stands in for.

use crate::option::{NativeOption, NativeRef};

/// The host's own selection control.
///
/// The select reads the options once at construction, hides the control,
/// and from then on only writes selected flags back through
/// [`set_selected`](NativeControl::set_selected). It never adds, removes,
/// or reorders entries.
pub trait NativeControl {
    /// Current options in display order, with their selected flags.
    fn options(&self) -> Vec<NativeOption>;

    /// Mirror one entry's selected flag.
    fn set_selected(&mut self, at: NativeRef, selected: bool);

    /// Remove the control from visual layout. It must stay present for form
    /// submission.
    fn hide(&mut self);
}

/// An in-memory single-choice form field: a name plus ordered options.
///
/// This is what an enclosing form reads at submit time, so it is the
/// authority for [`form_value`](FormSelect::form_value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSelect {
    name: String,
    options: Vec<NativeOption>,
    hidden: bool,
}

impl FormSelect {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            hidden: false,
        }
    }

    /// Append an unselected option.
    pub fn with_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(NativeOption::new(value, label));
        self
    }

    /// Append an option marked selected.
    pub fn with_selected_option(
        mut self,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.options.push(NativeOption::new(value, label).selected());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at `index`, if any.
    pub fn option(&self, index: usize) -> Option<&NativeOption> {
        self.options.get(index)
    }

    /// Value of the first option flagged selected.
    pub fn selected_value(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.as_str())
    }

    /// The `(name, value)` pair a form submission would carry.
    pub fn form_value(&self) -> Option<(&str, &str)> {
        self.selected_value().map(|v| (self.name.as_str(), v))
    }
}

impl NativeControl for FormSelect {
    fn options(&self) -> Vec<NativeOption> {
        self.options.clone()
    }

    fn set_selected(&mut self, at: NativeRef, selected: bool) {
        match self.options.get_mut(at.index()) {
            Some(option) => option.selected = selected,
            None => log::error!(
                "{}: no native option at index {}",
                self.name,
                at.index()
            ),
        }
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states() -> FormSelect {
        FormSelect::new("state")
            .with_option("OH", "Ohio")
            .with_selected_option("CA", "California")
    }

    #[test]
    fn builder_preserves_order_and_flags() {
        let native = states();
        assert_eq!(native.len(), 2);
        assert_eq!(native.option(0).map(|o| o.value.as_str()), Some("OH"));
        assert_eq!(native.selected_value(), Some("CA"));
    }

    #[test]
    fn form_value_pairs_name_and_selection() {
        assert_eq!(states().form_value(), Some(("state", "CA")));
        assert_eq!(FormSelect::new("empty").form_value(), None);
    }

    #[test]
    fn set_selected_mirrors_by_position() {
        let mut native = states();
        native.set_selected(NativeRef::new(1), false);
        native.set_selected(NativeRef::new(0), true);
        assert_eq!(native.selected_value(), Some("OH"));
    }

    #[test]
    fn set_selected_out_of_range_is_ignored() {
        let mut native = states();
        native.set_selected(NativeRef::new(9), true);
        assert_eq!(native, states());
    }

    #[test]
    fn hide_keeps_options() {
        let mut native = states();
        native.hide();
        assert!(native.is_hidden());
        assert_eq!(native.form_value(), Some(("state", "CA")));
    }
}
