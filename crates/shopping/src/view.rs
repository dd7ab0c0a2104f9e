use pantrycam_shared::handoff;

use crate::ShoppingList;

/// State of the shopping page. Lives for one render only: nothing about the
/// checked items is kept once the page is left.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShoppingView {
    pub list: ShoppingList,
}

impl ShoppingView {
    /// `param` is the percent-decoded `shopping` query value.
    ///
    /// Every decoded name becomes an unchecked item. An absent or empty value
    /// gives an empty list; a value that does not decode is logged and also
    /// gives an empty list.
    pub fn load(param: Option<&str>) -> Self {
        let Some(raw) = param.filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };

        match handoff::decode(raw) {
            Ok(names) => Self {
                list: ShoppingList::from_names(names),
            },
            Err(err) => {
                tracing::error!(err = %err, "failed to parse shopping list");

                Self::default()
            }
        }
    }

    /// Same as [`ShoppingView::load`], then ticks the items at `checked`.
    pub fn restore(param: Option<&str>, checked: &[usize]) -> Self {
        let loaded = Self::load(param);

        Self {
            list: ShoppingList::restore(loaded.list.names(), checked),
        }
    }

    pub fn toggle(&mut self, position: usize) -> pantrycam_shared::Result<bool> {
        self.list.toggle(position)
    }

    pub fn reset(&mut self) {
        self.list.reset();
    }

    /// JSON array of the item names, as posted back by the page.
    pub fn payload(&self) -> pantrycam_shared::Result<String> {
        handoff::to_json(&self.list.names())
    }
}
