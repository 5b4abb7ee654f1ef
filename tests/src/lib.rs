pub mod logging_driver;

pub use exec_log::ExecLog;
pub use logging_driver::LoggingDriver;
pub use mem_driver::MemDriver;

use corral::{schema::Model, stmt::Type, Repository, Schema};

use std::sync::Arc;

/// A repository over the article/comment fixture schema, wired through a
/// logging in-memory driver.
pub struct TestEnv {
    pub repo: Arc<Repository>,
    pub mem: MemDriver,
    pub log: ExecLog,
}

impl TestEnv {
    pub fn model(&self, name: &str) -> &Model {
        self.repo
            .schema()
            .model_by_name(name)
            .expect("fixture model not declared")
    }

    /// Insert an article row: `(id, title, original_id)`.
    pub fn article(&self, id: i64, title: &str, original_id: Option<i64>) {
        self.mem.insert(
            self.model("Article").id,
            vec![id.into(), title.into(), original_id.into()],
        );
    }

    /// Insert a comment row: `(id, article_id, body)`.
    pub fn comment(&self, id: i64, article_id: i64, body: &str) {
        self.mem.insert(
            self.model("Comment").id,
            vec![id.into(), article_id.into(), body.into()],
        );
    }
}

/// The fixture schema: a self-referential `Article` (original/revisions) and
/// a `Comment` hanging off it.
pub fn fixture_schema() -> Schema {
    let mut builder = Schema::builder();

    builder
        .model("Article")
        .key("id", Type::I64)
        .field("title", Type::String)
        .field("original_id", Type::I64)
        .belongs_to("original", "Article", "original_id")
        .has_many_via("revisions", "Article", "original")
        .has_many("comments", "Comment");

    builder
        .model("Comment")
        .key("id", Type::I64)
        .field("article_id", Type::I64)
        .field("body", Type::String)
        .belongs_to("article", "Article", "article_id");

    builder.build().expect("fixture schema is valid")
}

pub fn setup() -> TestEnv {
    let mem = MemDriver::new();
    let logging = LoggingDriver::new(mem.clone());
    let log = logging.exec_log();

    let repo = Repository::builder()
        .schema(fixture_schema())
        .driver(corral::repository::DEFAULT, logging)
        .build()
        .expect("fixture repository is valid");

    TestEnv { repo, mem, log }
}
