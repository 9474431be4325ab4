pub mod calculator;
pub mod host;
pub mod multiplier;
pub mod operation;

pub use crate::domain::model::{Level, LogEvent, NumericKind, Operation};
pub use crate::domain::ports::{Logger, Maths, Operand};
pub use crate::utils::error::Result;
