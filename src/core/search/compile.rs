//! Query compilation.
//!
//! Translates [`SearchQueryOptions`] into the store's native
//! boolean query form: a `must` list of scored text clauses, a
//! `filter` list of exact/range clauses, and an optional sort.
//! Compilation is a pure function; the store executes the result.
//!
//! Filter semantics are asymmetric on purpose: actor and label
//! identifier lists are AND-joined, studio identifiers are
//! OR-joined.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::types::{SearchQueryOptions, PAGE_SIZE, RELEVANCE_SORT, SHUFFLE_SORT};

/// Fields matched by the free-text clause; actor names are boosted
const TEXT_FIELDS: [&str; 3] = ["name", "actorNames^1.5", "labelNames"];

/// Store-native boolean query, ready for execution.
///
/// Serializes to the store's request body shape:
///
/// ```json
/// {
///   "from": 0, "size": 24, "track_total_hits": true,
///   "sort": {"addedOn": "desc"},
///   "query": {"bool": {"must": [...], "filter": [...]}}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// Offset of the first hit to return
    pub from: usize,

    /// Maximum hits to return (always [`PAGE_SIZE`])
    pub size: usize,

    /// Request an exact total count, not an estimate
    pub track_total_hits: bool,

    /// Explicit sort; `None` defers to backend score ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,

    pub query: QueryContext,
}

/// Wrapper producing the `{"bool": {...}}` nesting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryContext {
    #[serde(rename = "bool")]
    pub boolean: BoolQuery,
}

/// The boolean clause lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoolQuery {
    /// Scored clauses contributing to relevance
    pub must: Vec<QueryClause>,

    /// Non-scored exact inclusion clauses
    pub filter: Vec<QueryClause>,
}

/// One clause in a boolean query.
///
/// External tagging yields the store's clause form, e.g.
/// `{"multi_match": {...}}` or `{"range": {"rating": {"gte": 0}}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryClause {
    MultiMatch(MultiMatch),
    FunctionScore(FunctionScore),
    QueryString(QueryString),
    Range(RatingRange),
    Term(FavoriteTerm),
    Exists(FieldExists),
}

/// Fuzzy multi-field text match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiMatch {
    pub query: String,
    pub fields: Vec<String>,
    pub fuzziness: String,
}

/// Raw query-string clause for identifier matching
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryString {
    pub query: String,
}

/// Minimum-rating floor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingRange {
    pub rating: RangeBound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBound {
    pub gte: u8,
}

/// Exact match on the favorite flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteTerm {
    pub favorite: bool,
}

/// Matches documents where a field is present (non-null)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldExists {
    pub field: String,
}

/// Match-all scored by a seeded pseudo-random function.
///
/// Same seed, same data state: same ordering. See
/// [`shuffle_score`](crate::core::search::shuffle_score) for the
/// scoring function store implementations apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionScore {
    pub query: ScoredQuery,
    pub random_score: RandomScore,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredQuery {
    pub match_all: MatchAll,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchAll {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomScore {
    pub seed: String,
}

/// Explicit sort field and direction.
///
/// Serializes to the store's `{"field": "direction"}` map form.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Serialize for SortSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.field, &self.direction)?;
        map.end()
    }
}

/// Compile search options into a store-native boolean query.
///
/// Pure; every optional field independently contributes or omits
/// its clause. In shuffle mode the free-text clause is replaced by
/// the seeded match-all, not combined with it.
pub fn compile(options: &SearchQueryOptions, shuffle_seed: &str) -> CompiledQuery {
    let is_shuffle = options.sort_by.as_deref() == Some(SHUFFLE_SORT);

    let must = if is_shuffle {
        vec![QueryClause::FunctionScore(FunctionScore {
            query: ScoredQuery {
                match_all: MatchAll {},
            },
            random_score: RandomScore {
                seed: shuffle_seed.to_string(),
            },
        })]
    } else {
        match options.query.as_deref() {
            Some(text) if !text.is_empty() => vec![QueryClause::MultiMatch(MultiMatch {
                query: text.to_string(),
                fields: TEXT_FIELDS.iter().map(|f| f.to_string()).collect(),
                fuzziness: "AUTO".to_string(),
            })],
            _ => Vec::new(),
        }
    };

    let mut filter = Vec::new();

    if !options.actors.is_empty() {
        filter.push(id_filter("actors", &options.actors, "AND"));
    }
    if !options.include.is_empty() {
        filter.push(id_filter("labels", &options.include, "AND"));
    }

    // No-op floor of 0 when unset
    filter.push(QueryClause::Range(RatingRange {
        rating: RangeBound {
            gte: options.rating.unwrap_or(0),
        },
    }));

    if options.bookmark == Some(true) {
        filter.push(QueryClause::Exists(FieldExists {
            field: "bookmark".to_string(),
        }));
    }
    if options.favorite == Some(true) {
        filter.push(QueryClause::Term(FavoriteTerm { favorite: true }));
    }
    if !options.studios.is_empty() {
        filter.push(id_filter("studioName", &options.studios, "OR"));
    }

    let page = options.page.unwrap_or(0).max(0) as usize;

    CompiledQuery {
        from: page * PAGE_SIZE,
        size: PAGE_SIZE,
        track_total_hits: true,
        sort: resolve_sort(options, is_shuffle),
        query: QueryContext {
            boolean: BoolQuery { must, filter },
        },
    }
}

/// Build a `(field:id <op> field:id ...)` query-string clause
fn id_filter(field: &str, ids: &[String], op: &str) -> QueryClause {
    let joined = ids
        .iter()
        .map(|id| format!("{field}:{id}"))
        .collect::<Vec<_>>()
        .join(&format!(" {op} "));

    QueryClause::QueryString(QueryString {
        query: format!("({joined})"),
    })
}

fn resolve_sort(options: &SearchQueryOptions, is_shuffle: bool) -> Option<SortSpec> {
    if is_shuffle {
        return None;
    }

    let sort_by = options.sort_by.as_deref()?;
    let has_query = options.query.as_deref().is_some_and(|q| !q.is_empty());

    if sort_by == RELEVANCE_SORT {
        if has_query {
            // Relevance with a query is the backend's default order
            return None;
        }
        // Relevance without a query is meaningless; substitute recency
        return Some(SortSpec {
            field: "addedOn".to_string(),
            direction: SortDirection::Desc,
        });
    }

    let direction = match options.sort_dir.as_deref() {
        Some("asc") => SortDirection::Asc,
        _ => SortDirection::Desc,
    };

    Some(SortSpec {
        field: sort_by.to_string(),
        direction,
    })
}
