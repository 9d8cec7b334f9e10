use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Generic storage trait for physics objects
pub trait Storage<T, H> {
    /// Creates a new empty storage
    fn new() -> Self;

    /// Adds an item to the storage and returns its handle
    fn add(&mut self, item: T) -> H;

    /// Gets a reference to an item by its handle
    fn get(&self, handle: H) -> Option<&T>;

    /// Gets a mutable reference to an item by its handle
    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    /// Removes an item from the storage
    fn remove(&mut self, handle: H) -> Option<T>;

    /// Returns the number of items in the storage
    fn len(&self) -> usize;

    /// Returns whether the storage is empty
    fn is_empty(&self) -> bool;

    /// Clears all items from the storage
    fn clear(&mut self);

    /// Returns all handles in storage order
    fn handles(&self) -> Vec<H>;

    /// Returns an iterator over all items
    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a where T: 'a;

    /// Returns a mutable iterator over all items
    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a where T: 'a;
}

/// Storage for physics bodies.
///
/// Items are kept densely in registration order. Handles grow
/// monotonically and are never reused, so the handle list stays sorted and
/// lookups are a binary search.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    handles: Vec<BodyHandle>,
    items: Vec<T>,
    next_id: u32,
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        <Self as Storage<T, BodyHandle>>::new()
    }
}

impl<T> Storage<T, BodyHandle> for BodyStorage<T> {
    fn new() -> Self {
        Self {
            handles: Vec::new(),
            items: Vec::new(),
            next_id: 1, // Start at 1, so 0 can represent invalid handle
        }
    }

    fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.next_id);
        self.next_id += 1;
        self.handles.push(handle);
        self.items.push(item);
        handle
    }

    fn get(&self, handle: BodyHandle) -> Option<&T> {
        let index = self.index_of(handle)?;
        Some(&self.items[index])
    }

    fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        let index = self.index_of(handle)?;
        Some(&mut self.items[index])
    }

    fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let index = self.index_of(handle)?;
        self.handles.remove(index);
        Some(self.items.remove(index))
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.handles.clear();
        self.items.clear();
    }

    fn handles(&self) -> Vec<BodyHandle> {
        self.handles.clone()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (BodyHandle, &'a T)> + 'a where T: 'a {
        self.handles.iter().copied().zip(self.items.iter())
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (BodyHandle, &'a mut T)> + 'a where T: 'a {
        self.handles.iter().copied().zip(self.items.iter_mut())
    }
}

impl<T> BodyStorage<T> {
    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.binary_search(&handle).ok()
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Borrows two distinct bodies mutably at once.
    ///
    /// Returns `None` if either handle is unknown or both handles are equal.
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<(&mut T, &mut T)> {
        let index_a = self.index_of(a)?;
        let index_b = self.index_of(b)?;

        if index_a < index_b {
            let (head, tail) = self.items.split_at_mut(index_b);
            Some((&mut head[index_a], &mut tail[0]))
        } else if index_b < index_a {
            let (head, tail) = self.items.split_at_mut(index_a);
            Some((&mut tail[0], &mut head[index_b]))
        } else {
            None
        }
    }

    /// Returns the items as a slice in registration order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
