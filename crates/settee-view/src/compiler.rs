#[macro_use]
mod fmt;
use fmt::{Scope, ToJs};

mod comparison;
mod condition;

mod delim;
use delim::Delimited;

mod ident;
use ident::FieldRef;

mod like;
pub use like::{escape_regex_source, like_to_regex};

mod literal;
use literal::Literal;
pub(crate) use literal::quote;

use settee_core::{
    schema::{Field, FieldId},
    stmt::{Condition, Value},
    Error, Result, Schema,
};

/// Compiles condition trees into boolean expressions for view map
/// functions.
///
/// A compiler holds no state between calls; the same instance may compile
/// any number of conditions, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'a> {
    /// Schema the compared fields are resolved against
    schema: &'a Schema,
}

/// A compiled condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    /// Expression text, evaluated against the map function's `doc` argument
    pub expr: String,

    /// Literal values embedded in `expr`, in the order they appear
    pub params: Vec<Value>,
}

struct Formatter<'a> {
    /// Handle to the compiler
    compiler: &'a Compiler<'a>,

    /// Where to write the expression
    dst: &'a mut String,

    /// Where to record bound literals
    params: &'a mut Vec<Value>,
}

impl<'a> Compiler<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Compiles `condition`.
    ///
    /// `qualify` requests collection-qualified field references. Reads never
    /// span collections, so only unqualified references are supported and
    /// `qualify = true` fails.
    pub fn compile(&self, condition: &Condition, qualify: bool) -> Result<Compiled> {
        if qualify {
            return Err(Error::unsupported_condition(
                "qualified field references",
            ));
        }

        let mut expr = String::new();
        let mut params = vec![];

        let mut f = Formatter {
            compiler: self,
            dst: &mut expr,
            params: &mut params,
        };

        condition.to_js(Scope::default(), &mut f)?;

        Ok(Compiled { expr, params })
    }

    /// Renders a reference to `field` on the map function's `doc` argument.
    pub fn field_ref(&self, field: &Field) -> String {
        ident::render(field.storage_name())
    }

    fn field(&self, id: FieldId) -> &'a Field {
        self.schema.field(id)
    }
}
