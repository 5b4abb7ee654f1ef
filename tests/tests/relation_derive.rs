use tests::*;

use corral::stmt::{Alias, Expr, Value};
use corral::Record;
use pretty_assertions::assert_eq;

fn article_record(env: &TestEnv, id: i64, title: &str, original_id: Option<i64>) -> Record {
    Record::load(
        env.model("Article"),
        vec![id.into(), title.into(), original_id.into()],
    )
    .unwrap()
}

/// Destructure a derived filter into its field reference and key list.
fn in_list_parts(expr: &Expr) -> (&corral::stmt::ExprField, &[Value]) {
    let Expr::InList(in_list) = expr else {
        panic!("expected IN-list filter, got {expr:#?}");
    };
    let Expr::Field(field) = &*in_list.expr else {
        panic!("expected field reference, got {:#?}", in_list.expr);
    };
    let Some(Value::List(keys)) = in_list.list.as_value() else {
        panic!("expected key list, got {:#?}", in_list.list);
    };
    (field, keys)
}

#[test]
fn belongs_to_derivation_deduplicates_foreign_keys() {
    let env = setup();
    let article = env.model("Article");
    let relation = article.relation("original").unwrap();

    let records = [
        article_record(&env, 2, "Revision A", Some(7)),
        article_record(&env, 3, "Revision B", Some(7)),
        article_record(&env, 4, "Revision C", Some(9)),
        article_record(&env, 5, "Standalone", None),
    ];

    let query = relation.derive_query(article, &records);
    let (field, keys) = in_list_parts(query.filter_expr());

    // Target-side identity column, repeated and null keys collapsed.
    assert_eq!(field.field, article.primary_key);
    assert_eq!(keys, &[Value::I64(7), Value::I64(9)]);
}

#[test]
fn has_many_derivation_keys_off_identity() {
    let env = setup();
    let article = env.model("Article");
    let relation = article.relation("revisions").unwrap();

    let records = [
        article_record(&env, 1, "Sample Article", None),
        article_record(&env, 6, "Other Article", None),
    ];

    let query = relation.derive_query(article, &records);
    let (field, keys) = in_list_parts(query.filter_expr());

    let original_id = article.field_by_name("original_id").unwrap().id;
    assert_eq!(field.field, original_id);
    assert_eq!(keys, &[Value::I64(1), Value::I64(6)]);
}

#[test]
fn self_referential_derivation_aliases_the_target_side() {
    let env = setup();
    let article = env.model("Article");

    let records = [article_record(&env, 2, "Revision A", Some(1))];

    // The source side of a query is unaliased.
    let source_query = article.all();
    assert_eq!(source_query.source().alias, None);

    for accessor in ["original", "revisions"] {
        let relation = article.relation(accessor).unwrap();
        let derived = relation.derive_query(article, &records);

        // Same model on both sides, but distinct aliases.
        assert_eq!(derived.model_id(), article.id);
        assert_eq!(derived.source().alias, Some(Alias::DERIVED));

        let (field, _) = in_list_parts(derived.filter_expr());
        assert_eq!(field.alias, Some(Alias::DERIVED));
        assert_ne!(field.alias, source_query.source().alias);
    }
}

#[test]
fn cross_model_derivation_is_unaliased() {
    let env = setup();
    let article = env.model("Article");
    let relation = article.relation("comments").unwrap();

    let records = [article_record(&env, 1, "Sample Article", None)];
    let derived = relation.derive_query(article, &records);

    assert_eq!(derived.model_id(), env.model("Comment").id);
    assert_eq!(derived.source().alias, None);

    let (field, keys) = in_list_parts(derived.filter_expr());
    let article_id = env.model("Comment").field_by_name("article_id").unwrap().id;
    assert_eq!(field.field, article_id);
    assert_eq!(field.alias, None);
    assert_eq!(keys, &[Value::I64(1)]);
}

#[test]
fn empty_source_derives_a_query_that_never_matches() {
    let env = setup();
    let article = env.model("Article");

    for accessor in ["original", "revisions", "comments"] {
        let relation = article.relation(accessor).unwrap();
        let derived = relation.derive_query(article, &[]);
        assert!(derived.never_matches());
    }
}
