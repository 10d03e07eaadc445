//! Mutability guard shared by every composite [`Value`](crate::Value).

use crate::ValueError;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;

/// A container slot with an explicit frozen flag.
///
/// Reads always succeed. Writes go through [`Node::update`], which refuses
/// to run once the node has been frozen. Freezing is one-way.
pub struct Node<T> {
    frozen: Cell<bool>,
    data: RefCell<T>,
}

impl<T> Node<T> {
    pub fn new(data: T) -> Self {
        Self {
            frozen: Cell::new(false),
            data: RefCell::new(data),
        }
    }

    /// Returns `true` once the node has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen.get()
    }

    /// Shallow freeze. Returns `true` if this call locked the node and
    /// `false` if it was already frozen.
    pub fn freeze(&self) -> bool {
        !self.frozen.replace(true)
    }

    /// Borrows the contents for reading.
    ///
    /// # Panics
    ///
    /// Panics if called from inside an [`update`](Node::update) closure on
    /// the same node.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.data.borrow()
    }

    /// Mutates the contents in place.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Frozen`] if the node is frozen; the closure is
    /// not called in that case.
    ///
    /// # Panics
    ///
    /// Panics if the closure reads or updates this same node, since the
    /// contents stay mutably borrowed while it runs.
    ///
    /// # Example
    ///
    /// ```
    /// use plainkit_value::{Node, ValueError};
    ///
    /// let node = Node::new(vec![1, 2]);
    /// node.update(|items| items.push(3)).unwrap();
    /// assert_eq!(*node.borrow(), vec![1, 2, 3]);
    ///
    /// node.freeze();
    /// assert_eq!(node.update(|items| items.clear()), Err(ValueError::Frozen));
    /// assert_eq!(node.borrow().len(), 3);
    /// ```
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, ValueError> {
        if self.is_frozen() {
            return Err(ValueError::Frozen);
        }
        Ok(f(&mut *self.data.borrow_mut()))
    }

    /// Fills a node that is still under construction. Skips the frozen check.
    pub(crate) fn set(&self, data: T) {
        *self.data.borrow_mut() = data;
    }
}

impl<T: Default> Default for Node<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("frozen", &self.is_frozen())
            .field("data", &*self.data.borrow())
            .finish()
    }
}
