mod comparison;
pub use comparison::{Comparison, ComparisonOp, Operand, ValueRange};

mod condition;
pub use condition::{Condition, ConditionAnd, ConditionNot, ConditionOr};

mod direction;
pub use direction::Direction;

mod order_by;
pub use order_by::OrderBy;

mod query;
pub use query::Query;

mod record;
pub use record::Record;

mod result_set;
pub use result_set::{ResultSet, Row};

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod view_ref;
pub use view_ref::{ViewOptions, ViewRef};
