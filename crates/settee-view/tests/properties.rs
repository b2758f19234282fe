use pretty_assertions::assert_eq;
use settee_core::{
    schema::{FieldId, Model},
    stmt::{Comparison, ComparisonOp, Condition, Operand, Query, Type, Value, ValueRange},
    Schema,
};
use settee_view::{Compiler, MapFunction};

fn schema() -> Schema {
    Schema::builder()
        .model(
            Model::builder("Post")
                .field("title", Type::String)
                .field("views", Type::I64),
        )
        .build()
        .unwrap()
}

fn fields(schema: &Schema) -> (FieldId, FieldId) {
    let post = schema.model_by_name("Post").unwrap();
    (
        post.field_by_name("title").unwrap().id,
        post.field_by_name("views").unwrap().id,
    )
}

/// A mix of shapes: leaves, nested operations, single-operand wrappers and
/// negations at different depths.
fn conditions(title: FieldId, views: FieldId) -> Vec<Condition> {
    let leaves = vec![
        Condition::eq(title, "A"),
        Condition::ne(views, 2),
        Condition::ge(views, 2.5),
        Condition::in_list(title, ["A", "B"]),
        Condition::in_range(views, ValueRange::inclusive(1, 5)),
        Condition::in_range(views, ValueRange::exclusive(1, 5)),
        Condition::regexp(title, "^[a-z]+$"),
    ];

    let mut all = leaves.clone();
    for (i, lhs) in leaves.iter().enumerate() {
        let rhs = &leaves[(i + 1) % leaves.len()];
        all.push(Condition::and(lhs.clone(), rhs.clone()));
        all.push(Condition::or(lhs.clone(), Condition::not(rhs.clone())));
        all.push(Condition::and_from_vec(vec![Condition::or(
            lhs.clone(),
            rhs.clone(),
        )]));
        all.push(Condition::or(
            Condition::and(lhs.clone(), rhs.clone()),
            Condition::not(Condition::or(lhs.clone(), rhs.clone())),
        ));
    }
    all
}

#[test]
fn negating_twice_is_identity() {
    let schema = schema();
    let (title, views) = fields(&schema);
    let compiler = Compiler::new(&schema);

    for condition in conditions(title, views) {
        let once = compiler.compile(&condition, false).unwrap();
        let twice = compiler
            .compile(&Condition::not(Condition::not(condition.clone())), false)
            .unwrap();
        assert_eq!(once, twice, "{condition:?}");
    }
}

#[test]
fn single_operand_operation_equals_its_operand() {
    let schema = schema();
    let (title, views) = fields(&schema);
    let compiler = Compiler::new(&schema);

    for condition in conditions(title, views) {
        let direct = compiler.compile(&condition, false).unwrap();

        for wrapped in [
            Condition::and_from_vec(vec![condition.clone()]),
            Condition::or_from_vec(vec![condition.clone()]),
        ] {
            assert_eq!(compiler.compile(&wrapped, false).unwrap(), direct);
        }
    }
}

#[test]
fn negated_like_always_fails() {
    let schema = schema();
    let (title, views) = fields(&schema);
    let compiler = Compiler::new(&schema);

    let unlike = Condition::not(Condition::like(title, "A%"));

    for condition in [
        unlike.clone(),
        Condition::and(Condition::eq(views, 1), unlike.clone()),
        Condition::not(Condition::or(Condition::eq(views, 1), Condition::like(title, "A%"))),
        Condition::or_from_vec(vec![unlike]),
    ] {
        let err = compiler.compile(&condition, false).unwrap_err();
        assert!(err.is_unsupported_condition(), "{err}");
    }
}

#[test]
fn operators_need_matching_operands() {
    let schema = schema();
    let (title, _) = fields(&schema);
    let compiler = Compiler::new(&schema);

    let condition: Condition = Comparison::new(
        title,
        ComparisonOp::Eq,
        Operand::List(vec![Value::from("A")]),
    )
    .into();

    assert!(compiler
        .compile(&condition, false)
        .unwrap_err()
        .is_unsupported_condition());
}

#[test]
fn ad_hoc_map_for_unconditioned_post() {
    let schema = schema();
    let post = schema.model_by_name("Post").unwrap();

    let source = MapFunction::new(&schema).source(&Query::new(post)).unwrap();
    assert_eq!(
        source,
        "function(doc) { if (doc.couchdb_type == 'Post') { emit(null, doc); } }"
    );
}
