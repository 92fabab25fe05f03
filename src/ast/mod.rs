pub mod builders;
pub mod conditions;
pub mod operators;
pub mod values;

pub use self::builders::{field, null, val};
pub use self::conditions::{Condition, Operand};
pub use self::operators::Operator;
pub use self::values::Value;
