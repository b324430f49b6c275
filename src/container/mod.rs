//! Generic growable container
//!
//! Thin wrapper over `Vec<T>` mirroring the original demo's container type:
//! items go in, the count comes out. Kept deliberately minimal.

/// Append-only container of items
#[derive(Debug, Clone, Default)]
pub struct Container<T> {
    items: Vec<T>,
}

impl<T> Container<T> {
    /// Create an empty container
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the container holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_container() {
        let container: Container<i64> = Container::new();
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
    }

    #[test]
    fn test_add_and_len() {
        let mut container = Container::new();
        container.add(42);
        assert_eq!(container.len(), 1);
        assert!(!container.is_empty());

        container.add(7);
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let container: Container<&str> = ["a", "b", "c"].into_iter().collect();
        let collected: Vec<&str> = container.iter().copied().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }
}
