//! Normalized entity collections.

use std::collections::HashMap;

use crate::api::ApiError;
use crate::model::{Entity, EntityId};
use crate::store::mvi::StoreState;

/// Entities keyed by id, plus the order they are presented in.
///
/// `ids` and `entities` always hold the same set of keys; `ids` has no
/// duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<T: Entity> {
    ids: Vec<EntityId>,
    entities: HashMap<EntityId, T>,
}

impl<T: Entity> Default for EntityCollection<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            entities: HashMap::new(),
        }
    }
}

impl<T: Entity> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection. A repeated id keeps its first position
    /// and the last value.
    pub fn set_all(&mut self, entities: impl IntoIterator<Item = T>) {
        self.ids.clear();
        self.entities.clear();
        for entity in entities {
            self.add_one(entity);
        }
    }

    /// Insert an entity. A colliding id is overwritten in place.
    pub fn add_one(&mut self, entity: T) {
        let id = entity.id();
        if self.entities.insert(id, entity).is_none() {
            self.ids.push(id);
        }
    }

    /// Replace the entity with the same id, or append it.
    pub fn upsert_one(&mut self, entity: T) {
        self.add_one(entity);
    }

    /// Remove by id. Returns the removed entity, if any.
    pub fn remove_one(&mut self, id: EntityId) -> Option<T> {
        let removed = self.entities.remove(&id)?;
        self.ids.retain(|existing| *existing != id);
        Some(removed)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.entities.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Entities in presentation order.
    pub fn all(&self) -> impl Iterator<Item = &T> + '_ {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<T: Entity> FromIterator<T> for EntityCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.set_all(iter);
        collection
    }
}

/// One entity collection with its request flags.
///
/// `loading` and `error` are independent: every reducer arm sets both.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T: Entity> {
    pub entities: EntityCollection<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T: Entity> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            entities: EntityCollection::default(),
            loading: false,
            error: None,
        }
    }
}

impl<T: Entity> StoreState for CollectionState<T> {}

impl<T: Entity> CollectionState<T> {
    /// A request is in flight.
    pub(crate) fn started(mut self) -> Self {
        self.loading = true;
        self.error = None;
        self
    }

    /// A request finished; apply its payload to the entities.
    pub(crate) fn succeeded(mut self, apply: impl FnOnce(&mut EntityCollection<T>)) -> Self {
        apply(&mut self.entities);
        self.loading = false;
        self.error = None;
        self
    }

    /// A request failed; entities stay as they were.
    pub(crate) fn failed(mut self, error: ApiError) -> Self {
        self.loading = false;
        self.error = Some(error);
        self
    }
}
