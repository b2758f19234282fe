use crate::compiler::{quote, Compiler};
use serde::Serialize;
use settee_core::{stmt::Query, Result, Schema};

/// Synthesizes the map function of an ad hoc view answering a query.
///
/// The function emits every document of the queried model's type family
/// that satisfies the query filter:
///
/// ```text
/// function(doc) { if (<type guard> && (<filter>)) { emit(<key>, doc); } }
/// ```
///
/// The emit key is `null` for unordered queries, otherwise the list of
/// ordering fields.
#[derive(Debug, Clone, Copy)]
pub struct MapFunction<'a> {
    schema: &'a Schema,
}

/// Request body of an ad hoc view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TempView {
    pub map: String,
}

impl<'a> MapFunction<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    pub fn source(&self, query: &Query) -> Result<String> {
        let compiler = Compiler::new(self.schema);
        let model = self.schema.model(query.model);

        let discriminator = compiler.field_ref(model.discriminator_field());
        let family = self.schema.type_family(model.id);

        let mut guard = family
            .iter()
            .map(|name| format!("{discriminator} == {}", quote(&name.into())))
            .collect::<Vec<_>>()
            .join(" || ");

        if let Some(filter) = &query.filter {
            let compiled = compiler.compile(filter, false)?;

            if family.len() > 1 {
                guard = format!("({guard})");
            }
            guard = format!("{guard} && ({})", compiled.expr);
        }

        let key = self.emit_key(&compiler, query);

        Ok(format!(
            "function(doc) {{ if ({guard}) {{ emit({key}, doc); }} }}"
        ))
    }

    pub fn temp_view(&self, query: &Query) -> Result<TempView> {
        Ok(TempView {
            map: self.source(query)?,
        })
    }

    fn emit_key(&self, compiler: &Compiler<'_>, query: &Query) -> String {
        if query.order_by.is_empty() {
            return "null".to_string();
        }

        let fields = query
            .order_by
            .iter()
            .map(|order_by| compiler.field_ref(self.schema.field(order_by.field)))
            .collect::<Vec<_>>();

        format!("[{}]", fields.join(", "))
    }
}
