#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub checked: bool,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
        }
    }
}

/// Ordered shopping items. Only the `checked` flags ever change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: names.into_iter().map(ShoppingItem::new).collect(),
        }
    }

    /// Rebuilds a list whose items at `checked` positions are ticked.
    /// Positions past the end are ignored.
    pub fn restore<I, S>(names: I, checked: &[usize]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::from_names(names);
        for position in checked {
            if let Some(item) = list.items.get_mut(*position) {
                item.checked = true;
            }
        }

        list
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    pub fn checked_positions(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| item.checked.then_some(position))
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }

    /// `"{checked} of {total}"`.
    pub fn summary(&self) -> String {
        format!("{} of {}", self.checked_count(), self.len())
    }

    /// Flips the item at `position` and returns its new state.
    pub fn toggle(&mut self, position: usize) -> pantrycam_shared::Result<bool> {
        let Some(item) = self.items.get_mut(position) else {
            pantrycam_shared::user!("item {position} not found");
        };

        item.checked = !item.checked;

        Ok(item.checked)
    }

    pub fn reset(&mut self) {
        for item in self.items.iter_mut() {
            item.checked = false;
        }
    }
}
