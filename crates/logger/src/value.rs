//! Context values and the self-describing value protocol

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Types that control their own representation in log output.
///
/// When a value implementing this trait appears in context, the logger
/// substitutes the result of [`format_for_log`](Loggable::format_for_log)
/// before serialization instead of serializing the value directly.
pub trait Loggable {
    /// Produce the JSON value that stands in for `self` in a log record.
    fn format_for_log(&self) -> Value;
}

/// A context field value.
///
/// Either a JSON-native value serialized as-is, or a self-describing value
/// replaced by its own log representation at emit time. Every variant is
/// JSON-representable by construction.
#[derive(Clone)]
pub enum ContextValue {
    /// A value serialized unchanged
    Json(Value),
    /// A value replaced by its [`Loggable`] description
    Loggable(Arc<dyn Loggable + Send + Sync>),
}

impl ContextValue {
    /// Wrap a self-describing value.
    pub fn loggable(value: impl Loggable + Send + Sync + 'static) -> Self {
        Self::Loggable(Arc::new(value))
    }

    /// The JSON value this resolves to in a record.
    pub fn resolve(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Loggable(value) => value.format_for_log(),
        }
    }
}

impl fmt::Debug for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Loggable(value) => f.debug_tuple("Loggable").field(&value.format_for_log()).finish(),
        }
    }
}

impl From<Value> for ContextValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

macro_rules! impl_from_json_native {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ContextValue {
                fn from(value: $ty) -> Self {
                    Self::Json(Value::from(value))
                }
            }
        )*
    };
}

impl_from_json_native!(bool, i32, i64, u32, u64, f64, &str, String);
