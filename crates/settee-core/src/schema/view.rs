use indexmap::IndexMap;
use serde::Serialize;
use std::{fmt, sync::Arc};

/// Concrete map/reduce source text for one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSource {
    pub map: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce: Option<String>,
}

/// A deferred view body.
///
/// Evaluated when views are materialized for a repository, not when the view
/// is declared. Returning `None` declares a "null" view, which is skipped
/// when the design document is provisioned.
pub type ViewSpec = Arc<dyn Fn() -> Option<ViewSource> + Send + Sync>;

/// Named view declarations for one model, grouped by repository.
#[derive(Clone, Default)]
pub struct Views {
    declared: IndexMap<String, IndexMap<String, ViewSpec>>,
}

impl ViewSource {
    pub fn map(source: impl Into<String>) -> Self {
        Self {
            map: source.into(),
            reduce: None,
        }
    }

    pub fn with_reduce(mut self, source: impl Into<String>) -> Self {
        self.reduce = Some(source.into());
        self
    }

    pub fn has_reduce(&self) -> bool {
        self.reduce.is_some()
    }
}

impl Views {
    /// Declares (or re-declares) view `name` for `repository`.
    pub fn declare(&mut self, repository: impl Into<String>, name: impl Into<String>, spec: ViewSpec) {
        self.declared
            .entry(repository.into())
            .or_default()
            .insert(name.into(), spec);
    }

    pub fn is_declared(&self, repository: &str, name: &str) -> bool {
        self.declared
            .get(repository)
            .is_some_and(|views| views.contains_key(name))
    }

    pub fn names<'a>(&'a self, repository: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.declared
            .get(repository)
            .into_iter()
            .flat_map(|views| views.keys().map(String::as_str))
    }

    /// Evaluates every view declared for `repository`, dropping null views.
    pub fn materialize(&self, repository: &str) -> IndexMap<String, ViewSource> {
        let Some(views) = self.declared.get(repository) else {
            return IndexMap::new();
        };

        views
            .iter()
            .filter_map(|(name, spec)| spec().map(|source| (name.clone(), source)))
            .collect()
    }

    /// Evaluates a single view declared for `repository`.
    pub fn materialize_one(&self, repository: &str, name: &str) -> Option<ViewSource> {
        self.declared.get(repository)?.get(name).and_then(|spec| spec())
    }
}

impl fmt::Debug for Views {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (repository, views) in &self.declared {
            map.entry(repository, &views.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}
