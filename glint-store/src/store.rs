//! SQLite-backed generic document store.
//!
//! One `documents` table holds every collection, keyed by
//! `(collection, id)`: typed system columns beside an opaque JSON body.

use crate::error::{StoreError, StoreResult};
use crate::filter::{Filter, FindOptions};
use glint_model::Document;
use glint_types::UserId;
use rusqlite::{Connection, params, params_from_iter};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Multi-collection document store backed by a single SQLite file.
pub struct DocumentStore {
    conn: Arc<Mutex<Connection>>,
}

impl DocumentStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| StoreError::Storage(format!("failed to open document store: {e}")))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store (for testing and demos).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            StoreError::Storage(format!("failed to open in-memory document store: {e}"))
        })?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                owner TEXT,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                body TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            );

            CREATE INDEX IF NOT EXISTS idx_documents_order
                ON documents (collection, created_at DESC, id DESC);
            ",
        )
        .map_err(|e| StoreError::Storage(format!("failed to init document schema: {e}")))?;
        Ok(())
    }

    /// Inserts a document into a collection.
    pub fn insert(&self, collection: &str, doc: &Document) -> StoreResult<()> {
        let body = serde_json::to_string(&doc.data)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO documents (collection, id, owner, created_at, updated_at, body)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                collection,
                doc.id,
                doc.owner.map(|o| o.to_string()),
                doc.created_at,
                doc.updated_at,
                body,
            ],
        )
        .map_err(|e| StoreError::Storage(format!("failed to insert document: {e}")))?;
        Ok(())
    }

    /// Fetches the documents of a collection matching a predicate, in the
    /// requested order.
    ///
    /// A row that cannot be read back (corrupt body JSON, unparseable
    /// owner id) is logged and skipped; one bad row never fails the fetch.
    pub fn find_many(
        &self,
        collection: &str,
        filter: &Filter,
        options: &FindOptions,
    ) -> StoreResult<Vec<Document>> {
        let (clause, mut args) = filter.to_sql();
        let mut sql = format!(
            "SELECT id, owner, created_at, updated_at, body FROM documents \
             WHERE collection = ? AND ({clause}) ORDER BY {}",
            options.sort.to_sql()
        );
        if let Some(limit) = options.limit {
            // Ceilings come from operator configuration, never requests.
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        args.insert(0, collection.to_string());

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| StoreError::Storage(format!("failed to prepare find query: {e}")))?;
        let rows = stmt
            .query_map(params_from_iter(args.iter()), |row| {
                let id: String = row.get(0)?;
                let owner: Option<String> = row.get(1)?;
                let created_at: i64 = row.get(2)?;
                let updated_at: i64 = row.get(3)?;
                let body: String = row.get(4)?;
                Ok((id, owner, created_at, updated_at, body))
            })
            .map_err(|e| StoreError::Storage(format!("failed to query documents: {e}")))?;

        let mut result = Vec::new();
        for row in rows {
            let (id, owner, created_at, updated_at, body) = row
                .map_err(|e| StoreError::Storage(format!("failed to read document row: {e}")))?;
            match decode_row(id, owner, created_at, updated_at, &body) {
                Ok(doc) => result.push(doc),
                Err(reason) => warn!("skipping unreadable document in {collection}: {reason}"),
            }
        }
        Ok(result)
    }

    /// Fetches every document of a collection, in the requested order.
    pub fn find_all(&self, collection: &str, options: &FindOptions) -> StoreResult<Vec<Document>> {
        self.find_many(collection, &Filter::All, options)
    }

    /// Total number of documents in a collection.
    pub fn count(&self, collection: &str) -> StoreResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM documents WHERE collection = ?1",
                params![collection],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::Storage(format!("failed to count documents: {e}")))?;
        Ok(count as usize)
    }
}

fn decode_row(
    id: String,
    owner: Option<String>,
    created_at: i64,
    updated_at: i64,
    body: &str,
) -> Result<Document, String> {
    let owner = match owner {
        None => None,
        Some(s) => Some(
            s.parse::<UserId>()
                .map_err(|e| format!("invalid owner id: {e}"))?,
        ),
    };
    let data = serde_json::from_str(body).map_err(|e| format!("invalid body json: {e}"))?;
    Ok(Document {
        id,
        owner,
        created_at,
        updated_at,
        data,
    })
}
