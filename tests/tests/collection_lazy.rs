use tests::*;

use corral::stmt::Expr;
use corral::Collection;
use pretty_assertions::assert_eq;

fn sample_articles_query(env: &TestEnv) -> corral::stmt::Query {
    let article = env.model("Article");
    article.filter(Expr::eq(
        article.field_by_name("title").unwrap().id,
        "Sample Article",
    ))
}

#[tokio::test]
async fn new_collection_is_unloaded_and_calls_no_collaborators() {
    let env = setup();
    env.article(1, "Sample Article", None);

    let articles = env.repo.all(sample_articles_query(&env));

    assert!(!articles.is_loaded());
    assert!(env.log.is_empty());

    // Inspecting load-state again still triggers nothing.
    assert!(!articles.is_loaded());
    assert!(env.log.is_empty());
}

#[tokio::test]
async fn first_kicker_executes_the_query_once() {
    let env = setup();
    env.article(1, "Sample Article", None);
    env.article(2, "Other Article", None);

    let articles = env.repo.all(sample_articles_query(&env));

    let entries = articles.entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].get(env.model("Article"), "title").unwrap().as_str(),
        Some("Sample Article")
    );
    assert!(articles.is_loaded());
    assert_eq!(env.log.len(), 1);

    // Subsequent kickers serve the cached sequence.
    assert_eq!(articles.count().await.unwrap(), 1);
    assert!(!articles.is_empty().await.unwrap());
    assert!(articles.get(0).await.unwrap().is_some());
    assert!(articles.get(1).await.unwrap().is_none());
    assert_eq!(articles.first().await.unwrap(), articles.get(0).await.unwrap());
    assert_eq!(articles.to_vec().await.unwrap().len(), 1);
    assert_eq!(env.log.len(), 1);
}

#[tokio::test]
async fn kicker_on_empty_result_set() {
    let env = setup();

    let articles = env.repo.all(sample_articles_query(&env));

    assert!(articles.is_empty().await.unwrap());
    assert!(articles.is_loaded());
    assert_eq!(env.log.len(), 1);
}

#[tokio::test]
async fn equality_compares_member_sequences() {
    let env = setup();
    env.article(1, "Sample Article", None);
    env.article(2, "Other Article", None);

    let article = env.model("Article");
    let title = article.field_by_name("title").unwrap().id;

    let sample_a = env.repo.all(article.filter(Expr::eq(title, "Sample Article")));
    let sample_b = env.repo.all(article.filter(Expr::eq(title, "Sample Article")));
    let other = env.repo.all(article.filter(Expr::eq(title, "Other Article")));

    assert!(sample_a.eq(&sample_b).await.unwrap());
    assert!(!sample_a.eq(&other).await.unwrap());

    // Equality is a kicker on both sides.
    assert!(sample_a.is_loaded());
    assert!(sample_b.is_loaded());
    assert!(other.is_loaded());
}

#[tokio::test]
async fn adapter_failure_leaves_collection_unloaded() {
    let env = setup();
    env.article(1, "Sample Article", None);
    env.mem.inject_fault("connection refused");

    let articles = env.repo.all(sample_articles_query(&env));

    let err = articles.entries().await.unwrap_err();
    assert!(err.is_adapter());
    assert!(err.to_string().contains("connection refused"));
    assert!(!articles.is_loaded());
    assert_eq!(env.log.len(), 1);

    // The caller may retry once the fault clears.
    env.mem.clear_fault();
    assert_eq!(articles.count().await.unwrap(), 1);
    assert!(articles.is_loaded());
    assert_eq!(env.log.len(), 2);
}

#[tokio::test]
async fn malformed_row_leaves_collection_unloaded() {
    let env = setup();
    // Article rows carry three columns; this one is short.
    env.mem
        .insert(env.model("Article").id, vec![1i64.into()]);

    let articles = env.repo.all(env.model("Article").all());

    let err = articles.entries().await.unwrap_err();
    assert!(err.is_schema_mismatch());
    assert!(!articles.is_loaded());
}

#[tokio::test]
async fn ordering_and_limit_shape_the_member_sequence() {
    let env = setup();
    env.article(1, "A", None);
    env.article(2, "B", None);
    env.article(3, "C", None);

    let article = env.model("Article");
    let query = article
        .all()
        .order_by(corral::stmt::OrderByExpr::desc(article.primary_key))
        .offset(1)
        .limit(2);

    let articles = env.repo.all(query);
    let keys: Vec<_> = articles
        .entries()
        .await
        .unwrap()
        .iter()
        .map(|record| record.key().clone())
        .collect();

    assert_eq!(keys, vec![2i64.into(), 1i64.into()]);
}

#[tokio::test]
async fn find_by_key_selects_one_record() {
    let env = setup();
    env.article(1, "Sample Article", None);
    env.article(2, "Other Article", None);

    let articles = env.repo.all(env.model("Article").find_by_key(2i64));

    let entries = articles.entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].get(env.model("Article"), "title").unwrap().as_str(),
        Some("Other Article")
    );
}

#[tokio::test]
async fn refined_query_narrows_without_touching_the_original() {
    let env = setup();
    env.article(1, "Sample Article", None);
    env.article(2, "Sample Article", None);

    let article = env.model("Article");
    let base = sample_articles_query(&env);
    let refined = base.refine(Expr::eq(article.primary_key, 2i64));

    let all_samples = env.repo.all(base);
    let narrowed = env.repo.all(refined);

    assert_eq!(all_samples.count().await.unwrap(), 2);
    assert_eq!(narrowed.count().await.unwrap(), 1);
}

#[tokio::test]
async fn concurrent_kickers_execute_the_query_once() {
    let env = setup();
    env.article(1, "Sample Article", None);

    let articles = std::sync::Arc::new(env.repo.all(sample_articles_query(&env)));

    let mut handles = vec![];
    for _ in 0..8 {
        let articles: std::sync::Arc<Collection> = articles.clone();
        handles.push(tokio::spawn(async move {
            articles.count().await.unwrap()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), 1);
    }

    assert_eq!(env.log.len(), 1);
}
