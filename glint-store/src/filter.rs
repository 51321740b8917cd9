//! Query predicates and ordering for the document store.

use glint_types::UserId;

/// A store-query predicate selecting a subset of documents.
///
/// Predicates are built by access-control code and translated to SQL by
/// the store; callers never hand the store raw SQL.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Every document in the collection.
    All,
    /// No document at all. Callers normally short-circuit instead of
    /// executing this; executing it is safe and returns nothing.
    Nothing,
    /// Documents whose owner equals the given user.
    Owner(UserId),
    /// Documents with no recorded owner (rows that predate ownership).
    OwnerMissing,
    /// Documents whose top-level body field equals the given string.
    FieldEq { field: String, value: String },
    /// Logical OR of the inner predicates.
    AnyOf(Vec<Filter>),
}

impl Filter {
    /// Convenience constructor for a body-field equality predicate.
    #[must_use]
    pub fn field_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::FieldEq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Renders this predicate as a SQL boolean expression plus its
    /// positional text parameters.
    pub(crate) fn to_sql(&self) -> (String, Vec<String>) {
        match self {
            Filter::All => ("1".to_string(), Vec::new()),
            Filter::Nothing => ("0".to_string(), Vec::new()),
            Filter::Owner(id) => ("owner = ?".to_string(), vec![id.to_string()]),
            Filter::OwnerMissing => ("owner IS NULL".to_string(), Vec::new()),
            Filter::FieldEq { field, value } => (
                "json_extract(body, ?) = ?".to_string(),
                vec![format!("$.{field}"), value.clone()],
            ),
            Filter::AnyOf(inner) => {
                if inner.is_empty() {
                    return ("0".to_string(), Vec::new());
                }
                let mut clauses = Vec::with_capacity(inner.len());
                let mut params = Vec::new();
                for f in inner {
                    let (sql, mut p) = f.to_sql();
                    clauses.push(format!("({sql})"));
                    params.append(&mut p);
                }
                (clauses.join(" OR "), params)
            }
        }
    }
}

/// Result ordering for fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first by creation time, id descending as the tiebreak.
    /// The listing surface relies on this order.
    #[default]
    CreatedDesc,
    /// Oldest first.
    CreatedAsc,
}

impl SortOrder {
    pub(crate) fn to_sql(self) -> &'static str {
        match self {
            SortOrder::CreatedDesc => "created_at DESC, id DESC",
            SortOrder::CreatedAsc => "created_at ASC, id ASC",
        }
    }
}

/// Options for a fetch: ordering plus an optional row ceiling.
///
/// `limit: None` keeps the fetch unbounded; ceilings come from operator
/// configuration, never from request input.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl FindOptions {
    /// Newest-first ordering with an optional ceiling.
    #[must_use]
    pub fn newest_first(limit: Option<usize>) -> Self {
        Self {
            sort: SortOrder::CreatedDesc,
            limit,
        }
    }
}
