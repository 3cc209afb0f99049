// In-memory collaborator fakes for integration testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use media_search::core::search::{shuffle_score, CompiledQuery, QueryClause, SortDirection};
use media_search::{
    Actor, Label, MediaItem, MediaRepository, Result, SearchDocument, SearchError, SearchStore,
    StoreHits,
};

/// In-memory media repository with per-item associations
#[derive(Default)]
pub struct InMemoryRepository {
    pub items: Vec<MediaItem>,
    pub labels: HashMap<String, Vec<Label>>,
    pub actors: HashMap<String, Vec<Actor>>,
    pub fail_associations: AtomicBool,
}

impl InMemoryRepository {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    #[allow(dead_code)]
    pub fn with_associations(
        items: Vec<MediaItem>,
        labels: HashMap<String, Vec<Label>>,
        actors: HashMap<String, Vec<Actor>>,
    ) -> Self {
        Self {
            items,
            labels,
            actors,
            fail_associations: AtomicBool::new(false),
        }
    }

    #[allow(dead_code)]
    pub fn fail_association_fetches(&self) {
        self.fail_associations.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl MediaRepository for InMemoryRepository {
    async fn get_all(&self) -> Result<Vec<MediaItem>> {
        Ok(self.items.clone())
    }

    async fn get_labels(&self, item: &MediaItem) -> Result<Vec<Label>> {
        if self.fail_associations.load(Ordering::SeqCst) {
            return Err(SearchError::AssociationFetch(format!(
                "labels unavailable for {}",
                item.id
            )));
        }
        Ok(self.labels.get(&item.id).cloned().unwrap_or_default())
    }

    async fn get_actors(&self, item: &MediaItem) -> Result<Vec<Actor>> {
        if self.fail_associations.load(Ordering::SeqCst) {
            return Err(SearchError::AssociationFetch(format!(
                "actors unavailable for {}",
                item.id
            )));
        }
        Ok(self.actors.get(&item.id).cloned().unwrap_or_default())
    }
}

/// In-memory document store.
///
/// Records every batch-write and executes compiled queries over
/// the upserted documents, including seeded shuffle ordering.
#[derive(Default)]
pub struct InMemoryStore {
    pub docs: Mutex<HashMap<String, SearchDocument>>,
    pub writes: Mutex<Vec<(String, Vec<SearchDocument>)>>,
    pub fail_writes: AtomicBool,
}

impl InMemoryStore {
    #[allow(dead_code)]
    pub fn fail_bulk_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn document_count(&self) -> usize {
        self.docs.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchStore for InMemoryStore {
    async fn bulk_write(&self, index: &str, docs: Vec<SearchDocument>) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(SearchError::StoreWrite("bulk request rejected".to_string()));
        }

        let mut stored = self.docs.lock().unwrap();
        for doc in &docs {
            stored.insert(doc.id.clone(), doc.clone());
        }
        drop(stored);

        self.writes.lock().unwrap().push((index.to_string(), docs));
        Ok(())
    }

    async fn search(&self, _index: &str, query: &CompiledQuery) -> Result<StoreHits> {
        let stored = self.docs.lock().unwrap();

        let mut matched: Vec<(&SearchDocument, u64)> = stored
            .values()
            .filter(|doc| {
                query
                    .query
                    .boolean
                    .filter
                    .iter()
                    .all(|clause| clause_matches(clause, doc))
                    && query
                        .query
                        .boolean
                        .must
                        .iter()
                        .all(|clause| clause_matches(clause, doc))
            })
            .map(|doc| (doc, score(&query.query.boolean.must, doc)))
            .collect();

        sort_hits(&mut matched, query);

        let total = matched.len();
        let hits = matched
            .into_iter()
            .skip(query.from)
            .take(query.size)
            .map(|(doc, _)| doc.clone())
            .collect();

        Ok(StoreHits { hits, total })
    }
}

/// Evaluate one boolean clause against a document
fn clause_matches(clause: &QueryClause, doc: &SearchDocument) -> bool {
    match clause {
        QueryClause::MultiMatch(m) => {
            let needle = m.query.to_lowercase();
            text_fields(doc, &m.fields)
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
        }
        QueryClause::FunctionScore(_) => true,
        QueryClause::QueryString(qs) => query_string_matches(&qs.query, doc),
        QueryClause::Range(range) => doc.rating >= range.rating.gte,
        QueryClause::Term(term) => doc.favorite == term.favorite,
        QueryClause::Exists(exists) => match exists.field.as_str() {
            "bookmark" => doc.bookmark.is_some(),
            _ => false,
        },
    }
}

/// Interpret a `(field:id OP field:id ...)` query-string clause
fn query_string_matches(raw: &str, doc: &SearchDocument) -> bool {
    let inner = raw.trim_start_matches('(').trim_end_matches(')');

    let check = |token: &str| -> bool {
        let Some((field, value)) = token.split_once(':') else {
            return false;
        };
        match field {
            "actors" => doc.actors.iter().any(|id| id == value),
            "labels" => doc.labels.iter().any(|id| id == value),
            "studioName" => doc.studio_name.as_deref() == Some(value),
            _ => false,
        }
    };

    if inner.contains(" AND ") {
        inner.split(" AND ").all(check)
    } else {
        inner.split(" OR ").any(check)
    }
}

fn text_fields(doc: &SearchDocument, fields: &[String]) -> Vec<String> {
    let mut values = Vec::new();
    for field in fields {
        // Boost markers like "actorNames^1.5" only affect scoring
        let name = field.split('^').next().unwrap_or(field);
        match name {
            "name" => values.push(doc.name.clone()),
            "actorNames" => values.extend(doc.actor_names.iter().cloned()),
            "labelNames" => values.extend(doc.label_names.iter().cloned()),
            _ => {}
        }
    }
    values
}

fn score(must: &[QueryClause], doc: &SearchDocument) -> u64 {
    for clause in must {
        if let QueryClause::FunctionScore(fs) = clause {
            return shuffle_score(&fs.random_score.seed, &doc.id);
        }
    }
    0
}

fn sort_hits(matched: &mut [(&SearchDocument, u64)], query: &CompiledQuery) {
    if let Some(sort) = &query.sort {
        let field = sort.field.clone();
        matched.sort_by(|(a, _), (b, _)| {
            let ordering = match field.as_str() {
                "addedOn" => a.added_on.cmp(&b.added_on),
                "name" => a.name.cmp(&b.name),
                "rating" => a.rating.cmp(&b.rating),
                _ => std::cmp::Ordering::Equal,
            };
            let ordering = match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });
    } else {
        // Score order; ties broken by id for determinism
        matched.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| a.id.cmp(&b.id)));
    }
}
