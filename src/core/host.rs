use crate::core::calculator::Calculator;
use crate::domain::model::{NumericKind, Operation};
use crate::domain::ports::Logger;
use crate::utils::error::{MathsError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// One call as it arrives from the host, e.g. `{"op":"multiply","a":3,"b":4}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub op: Operation,
    pub a: Number,
    pub b: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvocationResponse {
    Success { result: Value },
    Failure { error: String, kind: String },
}

impl From<&MathsError> for InvocationResponse {
    fn from(e: &MathsError) -> Self {
        InvocationResponse::Failure {
            error: e.to_string(),
            kind: e.kind().to_string(),
        }
    }
}

/// Binds a calculator to the numeric family the deployment declares and
/// marshals calls across the JSON boundary.
pub struct Host<L: Logger> {
    calculator: Calculator<L>,
    numeric: NumericKind,
}

impl<L: Logger> Host<L> {
    pub fn new(calculator: Calculator<L>, numeric: NumericKind) -> Self {
        Self {
            calculator,
            numeric,
        }
    }

    pub fn numeric(&self) -> NumericKind {
        self.numeric
    }

    pub fn invoke(&self, invocation: &Invocation) -> Result<Value> {
        match self.numeric {
            NumericKind::Integer => {
                let a = integer_operand(&invocation.a)?;
                let b = integer_operand(&invocation.b)?;
                let result = self.calculator.evaluate(invocation.op, a, b)?;
                Ok(Value::from(result))
            }
            NumericKind::Float => {
                let a = float_operand(&invocation.a)?;
                let b = float_operand(&invocation.b)?;
                let result = self.calculator.evaluate(invocation.op, a, b)?;
                // Non-finite floats have no JSON form and come back as null.
                Ok(Value::from(result))
            }
        }
    }

    pub fn respond(&self, invocation: &Invocation) -> InvocationResponse {
        match self.invoke(invocation) {
            Ok(result) => InvocationResponse::Success { result },
            Err(e) => {
                tracing::debug!(error = %e, kind = e.kind(), "invocation failed");
                InvocationResponse::from(&e)
            }
        }
    }

    /// Answer newline-delimited JSON invocations until `reader` is exhausted.
    ///
    /// Returns the number of requests answered. Blank lines are skipped and a
    /// malformed line gets an error response without stopping the loop.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled = 0;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Invocation>(line) {
                Ok(invocation) => self.respond(&invocation),
                Err(e) => InvocationResponse::from(&MathsError::SerializationError(e)),
            };

            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            handled += 1;
        }

        writer.flush().await?;
        tracing::debug!("served {} invocations", handled);
        Ok(handled)
    }
}

/// Read a textual operand in the given numeric family.
pub fn parse_operand(numeric: NumericKind, text: &str) -> Result<Number> {
    let invalid = |reason: &str| MathsError::InvalidOperand {
        value: text.to_string(),
        reason: reason.to_string(),
    };

    match numeric {
        NumericKind::Integer => text
            .trim()
            .parse::<i64>()
            .map(Number::from)
            .map_err(|e| invalid(&e.to_string())),
        NumericKind::Float => {
            let value = text.trim().parse::<f64>().map_err(|e| invalid(&e.to_string()))?;
            Number::from_f64(value).ok_or_else(|| invalid("operand must be finite"))
        }
    }
}

fn integer_operand(n: &Number) -> Result<i64> {
    n.as_i64().ok_or_else(|| MathsError::InvalidOperand {
        value: n.to_string(),
        reason: "expected a signed 64-bit integer".to_string(),
    })
}

fn float_operand(n: &Number) -> Result<f64> {
    n.as_f64().ok_or_else(|| MathsError::InvalidOperand {
        value: n.to_string(),
        reason: "expected a floating-point number".to_string(),
    })
}
