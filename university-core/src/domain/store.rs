use std::{collections::HashMap, fmt, hash::Hash};

/// An entity that carries its own stable identifier.
pub trait Entity {
    /// The identifier type used to key the entity.
    type Id: Copy + Eq + Hash + fmt::Debug;

    /// The entity's identifier.
    fn id(&self) -> Self::Id;
}

/// An in-memory store of entities keyed by their identifier.
///
/// Lookups are public, but mutable access is crate-private so that only the
/// [`University`](crate::University) registry can change stored entities.
#[derive(Debug)]
pub struct Store<T: Entity> {
    entries: HashMap<T::Id, T>,
}

impl<T: Entity> Default for Store<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Entity> Store<T> {
    /// Inserts an entity under its own identifier and returns that identifier.
    ///
    /// An existing entity with the same identifier is replaced.
    pub fn insert(&mut self, entity: T) -> T::Id {
        let id = entity.id();
        self.entries.insert(id, entity);
        id
    }

    /// Retrieves an entity by identifier.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.entries.get_mut(id)
    }

    /// Whether an entity with this identifier is stored.
    #[must_use]
    pub fn contains(&self, id: &T::Id) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns an iterator over all stored entities, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// The number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
