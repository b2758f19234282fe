use serde_json::{Map, Value as Json};
use settee_core::{
    schema::Model,
    stmt::{Record, Value},
    Result,
};

/// Builds the JSON document for `record`.
///
/// Each field is encoded by its type. With `dirty_only`, only fields
/// changed since the record was last persisted are included. An absent or
/// empty `_attachments` member is dropped, as are `_id` and `_rev` while
/// they are unset.
pub(crate) fn to_document(model: &Model, record: &Record, dirty_only: bool) -> Map<String, Json> {
    let mut document = Map::new();

    for field in &model.fields {
        if dirty_only && !record.is_dirty(field.id.index) {
            continue;
        }

        let value = record.get(field.id);
        document.insert(field.storage_name().to_string(), field.ty.dump(value));
    }

    let attachments = Model::ATTACHMENTS_FIELD;
    if document.get(attachments).is_some_and(is_blank) {
        document.remove(attachments);
    }

    for reserved in [Model::KEY_FIELD, Model::REV_FIELD] {
        if document.get(reserved).is_some_and(Json::is_null) {
            document.remove(reserved);
        }
    }

    document
}

/// Reads the requested fields out of a document, coercing each raw member
/// by the field's type. Missing members are `Null`.
pub(crate) fn from_document<'a>(
    document: &Map<String, Json>,
    fields: impl IntoIterator<Item = &'a settee_core::schema::Field>,
) -> Result<Vec<Value>> {
    fields
        .into_iter()
        .map(|field| match document.get(field.storage_name()) {
            Some(raw) => field.ty.typecast(raw),
            None => Ok(Value::Null),
        })
        .collect()
}

fn is_blank(value: &Json) -> bool {
    match value {
        Json::Null => true,
        Json::Object(map) => map.is_empty(),
        Json::Array(items) => items.is_empty(),
        Json::String(s) => s.is_empty(),
        _ => false,
    }
}
