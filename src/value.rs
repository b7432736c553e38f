//! Rendering of argument values for diagnostics.

use serde_json::Value;

/// Lower-cased type name of a value as shown in `<type:value>` renderings.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders a single value as `<type:value>`.
///
/// Strings render without quotes; arrays and objects render as compact
/// JSON. `null` carries no value part and renders as `<null>`.
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "<null>".to_string(),
        Value::String(s) => format!("<string:{s}>"),
        other => format!("<{}:{other}>", type_name(other)),
    }
}

/// Renders an argument list, comma separated.
#[must_use]
pub fn render_list(values: &[Value]) -> String {
    values.iter().map(render).collect::<Vec<_>>().join(", ")
}
