mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_field;
pub use expr_field::{Alias, ExprField};

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

mod source;
pub use source::SourceModel;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

use crate::schema::{FieldId, ModelId};
