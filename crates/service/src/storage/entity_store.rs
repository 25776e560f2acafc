use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;

use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// A stored record: the store-assigned `id` plus the caller's fields.
///
/// Serializes flat, e.g. `{"id": 1, "name": "Alice", ...}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity<T> {
    pub id: u64,
    #[serde(flatten)]
    pub fields: T,
}

struct Inner<T> {
    records: Vec<Entity<T>>,
    /// Next id to hand out. Only ever grows, independent of `records.len()`;
    /// `None` once `u64::MAX` has been issued.
    next_id: Option<u64>,
}

/// Generic in-memory store of entities of one shape.
///
/// Ids start at 1 and are issued from a monotonic counter, so an id is never
/// handed out twice by the same store instance. Once `u64::MAX` has been
/// issued the store refuses further creates instead of wrapping. Enumeration
/// follows insertion order. Clones share the same backing collection.
#[derive(Clone)]
pub struct EntityStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityStore<T> {
    /// Empty store; the first created entity gets id 1.
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { records: Vec::new(), next_id: Some(1) })) }
    }

    /// Store pre-populated with `seed`, each record taking the next id in order.
    pub fn with_seed<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut inner = Inner { records: Vec::new(), next_id: Some(1) };
        for fields in seed {
            let seeded = inner.records.len();
            if let Err(e) = inner.append(fields) {
                warn!(error = %e, seeded, "seed truncated");
                break;
            }
        }
        Self { inner: Arc::new(RwLock::new(inner)) }
    }

    /// Number of stored entities.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

impl<T> Inner<T> {
    fn append(&mut self, fields: T) -> Result<&Entity<T>, ServiceError> {
        let id = self.next_id.ok_or(ServiceError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        self.records.push(Entity { id, fields });
        Ok(&self.records[self.records.len() - 1])
    }
}

impl<T: Clone> EntityStore<T> {
    /// Assign the next id, append the record and return it.
    ///
    /// Id assignment and append happen under a single write guard with no
    /// suspension point in between. Fails only when the id space is used up.
    pub async fn create(&self, fields: T) -> Result<Entity<T>, ServiceError> {
        let mut inner = self.inner.write().await;
        inner.append(fields).cloned()
    }

    /// All entities in insertion order.
    pub async fn get_all(&self) -> Vec<Entity<T>> {
        self.inner.read().await.records.clone()
    }

    /// Entity with the given id, if any.
    pub async fn get_by_id(&self, id: u64) -> Option<Entity<T>> {
        let inner = self.inner.read().await;
        inner.records.iter().find(|e| e.id == id).cloned()
    }

    /// One page of entities in insertion order.
    pub async fn page(&self, opts: Pagination) -> Vec<Entity<T>> {
        let (page_idx, per_page) = opts.normalize();
        let inner = self.inner.read().await;
        let skip = usize::try_from(page_idx.saturating_mul(per_page)).unwrap_or(usize::MAX);
        inner
            .records
            .iter()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Note {
        text: String,
    }

    fn note(text: &str) -> Note {
        Note { text: text.into() }
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let store = EntityStore::new();
        let mut last = 0;
        let mut seen = HashSet::new();
        for i in 0..50 {
            let e = store.create(note(&format!("n{i}"))).await.unwrap();
            assert!(e.id > last);
            assert!(seen.insert(e.id));
            last = e.id;
        }
        assert_eq!(store.len().await, 50);
    }

    #[tokio::test]
    async fn first_id_is_one() {
        let store = EntityStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.create(note("a")).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn get_all_preserves_insertion_order() {
        let store = EntityStore::new();
        for t in ["c", "a", "b"] {
            store.create(note(t)).await.unwrap();
        }
        let texts: Vec<_> = store.get_all().await.into_iter().map(|e| e.fields.text).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn lookup_returns_created_record() {
        let store = EntityStore::new();
        let a = store.create(note("a")).await.unwrap();
        let b = store.create(note("b")).await.unwrap();
        assert_eq!(store.get_by_id(a.id).await, Some(a));
        assert_eq!(store.get_by_id(b.id).await, Some(b));
        assert_eq!(store.get_by_id(0).await, None);
        assert_eq!(store.get_by_id(999).await, None);
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let store = EntityStore::with_seed(vec![note("x"), note("y")]);
        let first = store.get_all().await;
        let second = store.get_all().await;
        assert_eq!(first, second);
        assert_eq!(store.get_by_id(2).await, store.get_by_id(2).await);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn seed_consumes_ids() {
        let store = EntityStore::with_seed(vec![note("x"), note("y"), note("z")]);
        let ids: Vec<_> = store.get_all().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.create(note("w")).await.unwrap().id, 4);
        assert_eq!(store.create(note("v")).await.unwrap().id, 5);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = EntityStore::new();
        let other = store.clone();
        let e = store.create(note("shared")).await.unwrap();
        assert_eq!(other.get_by_id(e.id).await, Some(e));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_never_share_an_id() {
        let store = EntityStore::new();
        let mut handles = Vec::new();
        for i in 0..200 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.create(note(&i.to_string())).await.map(|e| e.id) }));
        }
        let mut ids = HashSet::new();
        for h in handles {
            assert!(ids.insert(h.await.unwrap().unwrap()));
        }
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.iter().copied().max(), Some(200));
        assert_eq!(store.len().await, 200);
    }

    #[tokio::test]
    async fn page_slices_in_order() {
        let store = EntityStore::with_seed((1..=5).map(|i| note(&i.to_string())));
        let p1 = store.page(Pagination { page: 1, per_page: 2 }).await;
        let p3 = store.page(Pagination { page: 3, per_page: 2 }).await;
        let p4 = store.page(Pagination { page: 4, per_page: 2 }).await;
        assert_eq!(p1.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(p3.iter().map(|e| e.id).collect::<Vec<_>>(), vec![5]);
        assert!(p4.is_empty());
    }

    #[tokio::test]
    async fn last_id_is_issued_once_then_creates_fail() {
        let store = EntityStore {
            inner: Arc::new(RwLock::new(Inner { records: Vec::new(), next_id: Some(u64::MAX - 1) })),
        };
        assert_eq!(store.create(note("a")).await.unwrap().id, u64::MAX - 1);
        assert_eq!(store.create(note("b")).await.unwrap().id, u64::MAX);
        assert_eq!(store.create(note("c")).await, Err(ServiceError::IdsExhausted));
        assert_eq!(store.create(note("d")).await, Err(ServiceError::IdsExhausted));

        let ids: Vec<_> = store.get_all().await.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn entity_serializes_flat() {
        let e = Entity { id: 7, fields: note("hi") };
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v, serde_json::json!({"id": 7, "text": "hi"}));
        let back: Entity<Note> = serde_json::from_value(v).unwrap();
        assert_eq!(back, e);
    }
}
