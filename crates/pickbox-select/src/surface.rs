//! The custom visual surface a select draws its state onto.

use crate::dom::{class, Element, DATA_VALUE};
use crate::option::OptionRecord;
use crate::scroll::Viewport;

/// A rendering target for the custom select.
///
/// [`build`](Surface::build) runs once at construction. After that the
/// select never re-renders; each interaction patches exactly the parts it
/// changed through the remaining methods.
pub trait Surface {
    /// Create the container, label, and one item per record.
    fn build(&mut self, records: &[OptionRecord]);

    /// Replace the label text.
    fn set_label(&mut self, label: &str);

    /// Add or remove the selected marker on the item for `value`.
    fn set_item_selected(&mut self, value: &str, selected: bool);

    /// Scroll the item for `value` into view, nearest edge.
    fn scroll_into_view(&mut self, value: &str);

    /// Show or hide the option list.
    fn set_open(&mut self, open: bool);
}

/// Default number of list rows shown before scrolling.
pub const DEFAULT_VISIBLE_ROWS: usize = 8;

/// The surface as an element tree:
///
/// ```text
/// <div class="custom-select-container" tabindex="0">
///   <span class="custom-select-value">California</span>
///   <ul class="custom-select-options [show]">
///     <li class="custom-select-option" data-value="OH">Ohio</li>
///     <li class="custom-select-option selected" data-value="CA">California</li>
///   </ul>
/// </div>
/// ```
///
/// The terminal view of [`Select`](crate::Select) reads this tree, so what
/// is drawn is exactly what the markup says.
#[derive(Debug, Clone)]
pub struct DomSurface {
    root: Element,
    viewport: Viewport,
}

const LABEL: usize = 0;
const LIST: usize = 1;

impl DomSurface {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            root: Element::new("div"),
            viewport: Viewport::new(0, visible_rows),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    pub fn label(&self) -> Option<&Element> {
        self.root.child(LABEL)
    }

    pub fn list(&self) -> Option<&Element> {
        self.root.child(LIST)
    }

    pub fn label_text(&self) -> &str {
        self.label().map(Element::text).unwrap_or_default()
    }

    pub fn is_open(&self) -> bool {
        self.list().is_some_and(|list| list.has_class(class::SHOW))
    }

    pub fn items(&self) -> &[Element] {
        self.list().map(Element::children).unwrap_or_default()
    }

    /// Position of the item carrying `value`, looked up by its data attribute.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items()
            .iter()
            .position(|item| item.attribute(DATA_VALUE) == Some(value))
    }

    /// Value of the item at `index`.
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.items().get(index)?.attribute(DATA_VALUE)
    }

    /// Position of the item marked selected.
    pub fn selected_position(&self) -> Option<usize> {
        self.items()
            .iter()
            .position(|item| item.has_class(class::SELECTED))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn item_mut(&mut self, value: &str) -> Option<&mut Element> {
        let index = self.position(value)?;
        self.root.child_mut(LIST)?.child_mut(index)
    }
}

impl Default for DomSurface {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_ROWS)
    }
}

impl Surface for DomSurface {
    fn build(&mut self, records: &[OptionRecord]) {
        let label = records
            .iter()
            .find(|r| r.is_selected())
            .map(OptionRecord::label)
            .unwrap_or_default();

        let mut root = Element::new("div")
            .with_class(class::CONTAINER)
            .with_attribute("tabindex", "0");
        root.push_child(Element::new("span").with_class(class::VALUE).with_text(label));

        let mut list = Element::new("ul").with_class(class::OPTIONS);
        for record in records {
            let mut item = Element::new("li")
                .with_class(class::OPTION)
                .with_attribute(DATA_VALUE, record.value())
                .with_text(record.label());
            item.set_class(class::SELECTED, record.is_selected());
            list.push_child(item);
        }
        root.push_child(list);

        self.root = root;
        self.viewport.set_len(records.len());
    }

    fn set_label(&mut self, label: &str) {
        if let Some(el) = self.root.child_mut(LABEL) {
            el.set_text(label);
        }
    }

    fn set_item_selected(&mut self, value: &str, selected: bool) {
        match self.item_mut(value) {
            Some(item) => item.set_class(class::SELECTED, selected),
            None => log::warn!("no list item with {DATA_VALUE}={value:?}"),
        }
    }

    fn scroll_into_view(&mut self, value: &str) {
        if let Some(index) = self.position(value) {
            self.viewport.reveal(index);
        }
    }

    fn set_open(&mut self, open: bool) {
        if let Some(list) = self.root.child_mut(LIST) {
            list.set_class(class::SHOW, open);
        }
    }
}
