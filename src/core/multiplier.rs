use crate::core::operation::{apply, source_tag};
use crate::domain::model::{MultiplyRequest, MultiplyResult, Operation};
use crate::domain::ports::{Logger, Maths, Operand};
use crate::utils::error::Result;

/// The multiplication guest: one operation, one log event per successful call.
#[derive(Debug, Clone)]
pub struct Multiplier<L: Logger> {
    logger: L,
    context: String,
}

impl<L: Logger> Multiplier<L> {
    /// Tag events as `guest:<language>:multiply`.
    pub fn new(logger: L, language: &str) -> Self {
        Self::with_context(logger, source_tag(language, Operation::Multiply))
    }

    pub fn with_context(logger: L, context: impl Into<String>) -> Self {
        Self {
            logger,
            context: context.into(),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn multiply<T: Operand>(&self, a: T, b: T) -> Result<T> {
        apply(&self.logger, &self.context, Operation::Multiply, a, b)
    }

    pub fn handle<T: Operand>(&self, request: MultiplyRequest<T>) -> Result<MultiplyResult<T>> {
        let result = self.multiply(request.a, request.b)?;
        Ok(MultiplyResult { result })
    }
}

impl<T: Operand, L: Logger> Maths<T> for Multiplier<L> {
    fn multiply(&self, a: T, b: T) -> Result<T> {
        Multiplier::multiply(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::logging::RecordingLogger;
    use crate::domain::model::{Level, LogEvent};
    use crate::utils::error::MathsError;

    struct BrokenSink;

    impl Logger for BrokenSink {
        fn log(&self, _level: Level, _context: &str, _message: &str) -> Result<()> {
            Err(MathsError::Logging {
                message: "sink unavailable".to_string(),
            })
        }
    }

    fn multiplier() -> (Multiplier<RecordingLogger>, RecordingLogger) {
        let sink = RecordingLogger::new();
        (Multiplier::new(sink.clone(), "rust"), sink)
    }

    #[test]
    fn test_integer_multiply() {
        let (m, sink) = multiplier();
        assert_eq!(m.multiply(3i64, 4i64).unwrap(), 12);
        assert_eq!(
            sink.events(),
            vec![LogEvent::new(Level::Info, "guest:rust:multiply", "3 * 4 = 12")]
        );
    }

    #[test]
    fn test_float_multiply() {
        let (m, sink) = multiplier();
        assert_eq!(m.multiply(2.5f64, 4.0f64).unwrap(), 10.0);
        assert_eq!(sink.messages(), vec!["2.5 * 4.0 = 10.0"]);
    }

    #[test]
    fn test_zero_operand() {
        let (m, sink) = multiplier();
        assert_eq!(m.multiply(0i64, 7i64).unwrap(), 0);
        assert_eq!(sink.messages(), vec!["0 * 7 = 0"]);
    }

    #[test]
    fn test_negative_float_operand() {
        let (m, sink) = multiplier();
        assert_eq!(m.multiply(-3.0f64, 2.0f64).unwrap(), -6.0);
        assert_eq!(sink.messages(), vec!["-3.0 * 2.0 = -6.0"]);
    }

    #[test]
    fn test_commutative_and_identity() {
        let (m, _sink) = multiplier();
        for &(a, b) in &[(3i64, 4i64), (-7, 9), (0, 11), (123_456, -789)] {
            assert_eq!(m.multiply(a, b).unwrap(), m.multiply(b, a).unwrap());
            assert_eq!(m.multiply(a, 1).unwrap(), a);
            assert_eq!(m.multiply(a, 0).unwrap(), 0);
        }
        for &(a, b) in &[(2.5f64, 4.0f64), (-1.25, 8.0), (0.1, 0.3)] {
            assert_eq!(m.multiply(a, b).unwrap(), m.multiply(b, a).unwrap());
            assert_eq!(m.multiply(a, 1.0).unwrap(), a);
        }
    }

    #[test]
    fn test_one_event_per_call() {
        let (m, sink) = multiplier();
        m.multiply(2i32, 3i32).unwrap();
        m.multiply(4i32, 5i32).unwrap();
        assert_eq!(sink.messages(), vec!["2 * 3 = 6", "4 * 5 = 20"]);
    }

    #[test]
    fn test_overflow_propagates_without_logging() {
        let (m, sink) = multiplier();
        let err = m.multiply(i64::MAX, 2).unwrap_err();
        assert!(matches!(err, MathsError::Overflow { .. }));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let m = Multiplier::new(BrokenSink, "rust");
        let err = m.multiply(3i64, 4i64).unwrap_err();
        assert!(matches!(err, MathsError::Logging { .. }));
    }

    #[test]
    fn test_handle_request_and_trait_object_use() {
        let (m, sink) = multiplier();
        let reply = m.handle(MultiplyRequest { a: 6u32, b: 7u32 }).unwrap();
        assert_eq!(reply.result, 42);

        let maths: &dyn Maths<f32> = &m;
        assert_eq!(maths.multiply(1.5, 2.0).unwrap(), 3.0);
        assert_eq!(sink.messages(), vec!["6 * 7 = 42", "1.5 * 2.0 = 3.0"]);
    }

    #[test]
    fn test_custom_context() {
        let sink = RecordingLogger::new();
        let m = Multiplier::with_context(sink.clone(), "guest:python:multiply");
        assert_eq!(m.context(), "guest:python:multiply");
        m.multiply(1i64, 1i64).unwrap();
        assert_eq!(sink.events()[0].context, "guest:python:multiply");
    }
}
