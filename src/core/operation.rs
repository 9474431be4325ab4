use crate::domain::model::{Level, Operation};
use crate::domain::ports::{Logger, Operand};
use crate::utils::error::{MathsError, Result};

/// Source tag for events emitted by `op` in a guest written in `language`.
pub fn source_tag(language: &str, op: Operation) -> String {
    format!("guest:{}:{}", language, op.name())
}

/// Compute `a <op> b`, report it through `logger`, and return the value.
///
/// Nothing is logged when the arithmetic itself fails, except for a zero
/// divisor, which is reported at error level before the error is returned.
pub(crate) fn apply<T, L>(logger: &L, context: &str, op: Operation, a: T, b: T) -> Result<T>
where
    T: Operand,
    L: Logger + ?Sized,
{
    if op == Operation::Divide && b.is_zero() {
        logger.log(Level::Error, context, "Division by zero error")?;
        return Err(MathsError::DivisionByZero);
    }

    let result = T::checked(op, a, b).ok_or_else(|| MathsError::Overflow {
        op: op.symbol().to_string(),
        a: a.render(),
        b: b.render(),
    })?;

    let message = format!(
        "{} {} {} = {}",
        a.render(),
        op.symbol(),
        b.render(),
        result.render()
    );
    logger.log(Level::Info, context, &message)?;

    Ok(result)
}
