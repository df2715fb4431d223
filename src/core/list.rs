use crate::utils::error::{Result, RosterError};
use std::fmt;

/// An ordered, homogeneous sequence with controlled mutation.
///
/// Elements keep insertion order and the only mutating operations are
/// [`push`](OrderedList::push) and [`pop`](OrderedList::pop). The element
/// type is fixed when the list is created, so heterogeneous sequences are
/// rejected at compile time rather than checked at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> OrderedList<T> {
    /// Creates a list that takes ownership of `initial`, preserving its order.
    pub fn new(initial: Vec<T>) -> Self {
        Self { items: initial }
    }

    /// Appends `item` at the end. Always succeeds.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the last element.
    ///
    /// Popping an empty list is a defined outcome, not undefined behavior:
    /// it returns [`RosterError::EmptyListError`].
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(RosterError::EmptyListError)
    }

    /// Like [`pop`](OrderedList::pop), for callers that treat an empty list
    /// as routine rather than an error.
    pub fn pop_opt(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Display> OrderedList<T> {
    /// Renders the current sequence as `[a, b, c]`. Read-only, so calling it
    /// twice in a row yields identical output.
    pub fn render(&self) -> String {
        let mut out = String::from("[");
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&item.to_string());
        }
        out.push(']');
        out
    }

    /// Emits the current sequence to the log channel without mutating it.
    pub fn print(&self) {
        tracing::info!("{}", self.render());
    }
}

impl<T: fmt::Display> fmt::Display for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
