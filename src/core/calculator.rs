use crate::core::operation::{apply, source_tag};
use crate::domain::model::Operation;
use crate::domain::ports::{Logger, Maths, Operand};
use crate::utils::error::Result;

/// All four guests of the maths world behind one logger.
///
/// Each operation tags its events `guest:<language>:<operation>`.
#[derive(Debug, Clone)]
pub struct Calculator<L: Logger> {
    logger: L,
    language: String,
}

impl<L: Logger> Calculator<L> {
    pub fn new(logger: L, language: impl Into<String>) -> Self {
        Self {
            logger,
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn evaluate<T: Operand>(&self, op: Operation, a: T, b: T) -> Result<T> {
        let context = source_tag(&self.language, op);
        tracing::debug!(operation = %op, numeric = %T::KIND, context = %context, "evaluating");
        apply(&self.logger, &context, op, a, b)
    }

    pub fn add<T: Operand>(&self, a: T, b: T) -> Result<T> {
        self.evaluate(Operation::Add, a, b)
    }

    pub fn subtract<T: Operand>(&self, a: T, b: T) -> Result<T> {
        self.evaluate(Operation::Subtract, a, b)
    }

    pub fn multiply<T: Operand>(&self, a: T, b: T) -> Result<T> {
        self.evaluate(Operation::Multiply, a, b)
    }

    pub fn divide<T: Operand>(&self, a: T, b: T) -> Result<T> {
        self.evaluate(Operation::Divide, a, b)
    }
}

impl<T: Operand, L: Logger> Maths<T> for Calculator<L> {
    fn multiply(&self, a: T, b: T) -> Result<T> {
        Calculator::multiply(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::RecordingLogger;
    use crate::domain::model::{Level, LogEvent};
    use crate::utils::error::MathsError;

    fn calculator(language: &str) -> (Calculator<RecordingLogger>, RecordingLogger) {
        let sink = RecordingLogger::new();
        (Calculator::new(sink.clone(), language), sink)
    }

    #[test]
    fn test_add_and_subtract() {
        let (calc, sink) = calculator("rust");
        assert_eq!(calc.add(1.5f32, 2.0f32).unwrap(), 3.5);
        assert_eq!(calc.subtract(10i64, 4i64).unwrap(), 6);
        assert_eq!(
            sink.events(),
            vec![
                LogEvent::new(Level::Info, "guest:rust:add", "1.5 + 2.0 = 3.5"),
                LogEvent::new(Level::Info, "guest:rust:subtract", "10 - 4 = 6"),
            ]
        );
    }

    #[test]
    fn test_divide() {
        let (calc, sink) = calculator("rust");
        assert_eq!(calc.divide(9.0f64, 2.0f64).unwrap(), 4.5);
        assert_eq!(calc.divide(9i64, 2i64).unwrap(), 4);
        assert_eq!(sink.messages(), vec!["9.0 / 2.0 = 4.5", "9 / 2 = 4"]);
    }

    #[test]
    fn test_divide_by_zero_logs_error() {
        let (calc, sink) = calculator("rust");
        let err = calc.divide(1.0f64, 0.0f64).unwrap_err();
        assert!(matches!(err, MathsError::DivisionByZero));
        assert_eq!(
            sink.events(),
            vec![LogEvent::new(
                Level::Error,
                "guest:rust:divide",
                "Division by zero error"
            )]
        );

        assert!(matches!(
            calc.divide(5i32, 0i32),
            Err(MathsError::DivisionByZero)
        ));
    }

    #[test]
    fn test_multiply_through_capability_trait() {
        let (calc, sink) = calculator("python");
        let maths: &dyn Maths<i64> = &calc;
        assert_eq!(maths.multiply(3, 4).unwrap(), 12);
        assert_eq!(sink.events()[0].context, "guest:python:multiply");
        assert_eq!(calc.language(), "python");
    }

    #[test]
    fn test_subtract_underflow_is_not_logged() {
        let (calc, sink) = calculator("rust");
        assert!(matches!(
            calc.subtract(0u64, 1u64),
            Err(MathsError::Overflow { .. })
        ));
        assert!(sink.events().is_empty());
    }
}
