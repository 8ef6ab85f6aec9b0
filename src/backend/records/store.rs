/**
 * JSON File Record Store
 *
 * A record store keeps one collection in memory and mirrors it to a single
 * JSON file of the form `{"<collection>": [ ... ]}`.
 *
 * # Lifecycle
 *
 * 1. `load` reads the file once at start-up (a missing file is an empty store)
 * 2. Reads are served from memory
 * 3. Every write mutates memory and flushes the whole collection while the
 *    write lock is still held, so the file never lags behind a later write
 *
 * Flushing writes a sibling `.tmp` file and renames it over the target.
 */

use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;

/// A record that can live in a [`JsonRecordStore`]
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Identifier type the collection is keyed by
    type Id: Ord + Copy + Debug + Display + DeserializeOwned + Send + Sync + 'static;

    /// Top-level key in the JSON file
    const COLLECTION: &'static str;

    /// Message returned when a record is missing
    const NOT_FOUND: &'static str;

    fn id(&self) -> Self::Id;

    /// Return the record with its identifier replaced
    fn with_id(self, id: Self::Id) -> Self;
}

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}: expected \"{collection}\" to be an array")]
    Shape {
        path: PathBuf,
        collection: &'static str,
    },

    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

/// In-memory collection mirrored to a JSON file
#[derive(Debug)]
pub struct JsonRecordStore<R: Record> {
    path: PathBuf,
    records: RwLock<BTreeMap<R::Id, R>>,
}

impl<R: Record> JsonRecordStore<R> {
    /// Load the collection from `path`
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first write.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => parse_collection::<R>(&path, &bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, starting with an empty {} store", path.display(), R::COLLECTION);
                Vec::new()
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        let mut map = BTreeMap::new();
        for record in records {
            if map.insert(record.id(), record).is_some() {
                tracing::warn!("Duplicate id in {}, keeping the last entry", path.display());
            }
        }

        tracing::info!("Loaded {} {} from {}", map.len(), R::COLLECTION, path.display());

        Ok(Self {
            path,
            records: RwLock::new(map),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in id order
    pub async fn list(&self) -> Vec<R> {
        self.records.read().await.values().cloned().collect()
    }

    /// One record by id
    pub async fn get(&self, id: R::Id) -> Option<R> {
        self.records.read().await.get(&id).cloned()
    }

    /// Insert a record, replacing any record with the same id
    pub async fn upsert(&self, record: R) -> Result<R, StoreError> {
        let mut records = self.records.write().await;
        let previous = records.insert(record.id(), record.clone());
        if let Err(e) = self.flush(&records).await {
            match previous {
                Some(previous) => records.insert(previous.id(), previous),
                None => records.remove(&record.id()),
            };
            return Err(e);
        }
        Ok(record)
    }

    /// Replace an existing record. Returns `None` when `id` is unknown.
    ///
    /// The stored record always carries `id`, whatever the payload said.
    pub async fn replace(&self, id: R::Id, record: R) -> Result<Option<R>, StoreError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return Ok(None);
        }
        let record = record.with_id(id);
        let previous = records.insert(id, record.clone());
        if let Err(e) = self.flush(&records).await {
            if let Some(previous) = previous {
                records.insert(id, previous);
            }
            return Err(e);
        }
        Ok(Some(record))
    }

    /// Remove a record. Returns `None` when `id` is unknown.
    pub async fn remove(&self, id: R::Id) -> Result<Option<R>, StoreError> {
        let mut records = self.records.write().await;
        let Some(removed) = records.remove(&id) else {
            return Ok(None);
        };
        if let Err(e) = self.flush(&records).await {
            records.insert(id, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    async fn flush(&self, records: &BTreeMap<R::Id, R>) -> Result<(), StoreError> {
        let mut document = serde_json::Map::new();
        document.insert(
            R::COLLECTION.to_string(),
            serde_json::to_value(records.values().collect::<Vec<_>>())?,
        );
        let bytes = serde_json::to_vec_pretty(&serde_json::Value::Object(document))?;

        let tmp = self.path.with_extension("json.tmp");
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(&tmp, &bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;

        tracing::debug!("Flushed {} {} to {}", records.len(), R::COLLECTION, self.path.display());
        Ok(())
    }
}

fn parse_collection<R: Record>(path: &Path, bytes: &[u8]) -> Result<Vec<R>, StoreError> {
    let parse_err = |source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let mut document: serde_json::Value = serde_json::from_slice(bytes).map_err(parse_err)?;
    match document.get_mut(R::COLLECTION).map(serde_json::Value::take) {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(items @ serde_json::Value::Array(_)) => serde_json::from_value(items).map_err(parse_err),
        Some(_) => Err(StoreError::Shape {
            path: path.to_path_buf(),
            collection: R::COLLECTION,
        }),
    }
}
