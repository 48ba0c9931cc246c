use serde::Serialize;

/// Result of evaluating an expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Original expression echoed back for display
    pub expression: String,
    /// Numeric result; decimal inches in measurement mode, a bare number otherwise
    pub value: f64,
    /// Feet-inches-fraction rendering (e.g. `1' 6"`), or the bare number
    pub display: String,
    /// Total-inches rendering (e.g. "18 In"), or the bare number
    pub total_inches: String,
    /// Whether feet/inches/fraction formatting applies
    pub measurement: bool,
}
