pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::logging::{JsonLinesLogger, RecordingLogger, TracingLogger};
pub use config::GuestConfig;
pub use core::{
    calculator::Calculator,
    host::{parse_operand, Host, Invocation, InvocationResponse},
    multiplier::Multiplier,
};
pub use domain::model::{Level, LogEvent, MultiplyRequest, MultiplyResult, NumericKind, Operation};
pub use domain::ports::{Logger, Maths, Operand};
pub use utils::error::{MathsError, Result};
