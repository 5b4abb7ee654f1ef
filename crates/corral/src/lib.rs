mod error;
pub use error::Error;

pub mod driver;
pub use driver::Driver;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

mod record;
pub use record::Record;

mod collection;
pub use collection::{Collection, Dispatch, Preload};

pub mod repository;
pub use repository::Repository;

/// A Result type alias that uses Corral's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
