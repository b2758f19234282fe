use serde_json::Value as Json;

/// Names a persistent view to read through, together with the per-call
/// options passed to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewRef {
    /// View name inside the model's design document
    pub name: String,

    pub options: ViewOptions,
}

/// Options applied to a view query.
///
/// Keys are arbitrary JSON because views may emit compound (array) keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOptions {
    pub key: Option<Json>,
    pub startkey: Option<Json>,
    pub endkey: Option<Json>,

    /// Overrides whether the view's reduce function runs.
    pub reduce: Option<bool>,

    /// Groups reduce output by key.
    pub group: Option<bool>,

    /// Explicit key list. Sent in the request body rather than the query
    /// string.
    pub keys: Option<Vec<Json>>,
}

impl ViewRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: ViewOptions::default(),
        }
    }

    pub fn key(mut self, key: impl Into<Json>) -> Self {
        self.options.key = Some(key.into());
        self
    }

    pub fn startkey(mut self, key: impl Into<Json>) -> Self {
        self.options.startkey = Some(key.into());
        self
    }

    pub fn endkey(mut self, key: impl Into<Json>) -> Self {
        self.options.endkey = Some(key.into());
        self
    }

    pub fn reduce(mut self, reduce: bool) -> Self {
        self.options.reduce = Some(reduce);
        self
    }

    pub fn group(mut self, group: bool) -> Self {
        self.options.group = Some(group);
        self
    }

    pub fn keys<T: Into<Json>>(mut self, keys: impl IntoIterator<Item = T>) -> Self {
        self.options.keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }
}
