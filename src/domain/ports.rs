use crate::domain::model::{Level, NumericKind, Operation};
use crate::utils::error::Result;
use std::fmt;
use std::sync::Arc;

/// Logging capability supplied by the host at component construction.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()>;
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()> {
        (**self).log(level, context, message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()> {
        (**self).log(level, context, message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: Level, context: &str, message: &str) -> Result<()> {
        (**self).log(level, context, message)
    }
}

/// The capability interface a maths guest exports.
pub trait Maths<T: Operand> {
    fn multiply(&self, a: T, b: T) -> Result<T>;
}

/// Numeric types a component can be declared over.
pub trait Operand: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    const KIND: NumericKind;

    /// Default string representation used in log messages.
    fn render(&self) -> String;

    /// `None` when the result is not representable in `Self`.
    fn checked(op: Operation, a: Self, b: Self) -> Option<Self>;

    fn is_zero(&self) -> bool;
}

macro_rules! integer_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                const KIND: NumericKind = NumericKind::Integer;

                fn render(&self) -> String {
                    self.to_string()
                }

                fn checked(op: Operation, a: Self, b: Self) -> Option<Self> {
                    match op {
                        Operation::Add => a.checked_add(b),
                        Operation::Subtract => a.checked_sub(b),
                        Operation::Multiply => a.checked_mul(b),
                        Operation::Divide => a.checked_div(b),
                    }
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

macro_rules! float_operand {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                const KIND: NumericKind = NumericKind::Float;

                // Debug keeps the fractional part: 4.0 renders as "4.0", not "4".
                fn render(&self) -> String {
                    format!("{:?}", self)
                }

                fn checked(op: Operation, a: Self, b: Self) -> Option<Self> {
                    Some(match op {
                        Operation::Add => a + b,
                        Operation::Subtract => a - b,
                        Operation::Multiply => a * b,
                        Operation::Divide => a / b,
                    })
                }

                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

integer_operand!(i32, i64, u32, u64);
float_operand!(f32, f64);
