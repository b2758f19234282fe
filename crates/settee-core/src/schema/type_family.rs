/// The discriminator values that make up one polymorphic document family.
///
/// Documents of every model share one database; the `couchdb_type` field
/// tells them apart. A query on a model matches documents whose
/// discriminator is any member of the model's family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFamily {
    names: Vec<String>,
}

impl TypeFamily {
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let mut family = Self { names: vec![] };

        for name in names {
            if !family.contains(&name) {
                family.names.push(name);
            }
        }

        family
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|member| member == name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
