//! Output formatting for CLI responses.
//!
//! Supports both human-readable and JSON output formats for
//! integration with scripts and other tools.

use moblog::{Call, Param, Procedure, CREDENTIAL_PARAMS, DEFAULT_ENDPOINT};

const MASK: &str = "****";

/// Trait for types that can be output in multiple formats.
pub trait Outputable {
    /// Convert to JSON value for structured output.
    fn to_json(&self) -> serde_json::Value;

    /// Convert to human-readable string.
    fn to_human(&self) -> String;
}

/// Print a value in the appropriate format.
pub fn print_output<T: Outputable>(value: &T, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&value.to_json())
                .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize: {}\"}}", e))
        );
    } else {
        println!("{}", value.to_human());
    }
}

/// A built call, with the credential triple masked unless revealed.
pub struct CallOutput<'a> {
    call: &'a Call,
    reveal: bool,
}

impl<'a> CallOutput<'a> {
    pub fn new(call: &'a Call, reveal: bool) -> Self {
        Self { call, reveal }
    }

    fn params(&self) -> Vec<Param> {
        self.call
            .params()
            .iter()
            .enumerate()
            .map(|(i, param)| {
                if i < CREDENTIAL_PARAMS && !self.reveal {
                    Param::from(MASK)
                } else {
                    param.clone()
                }
            })
            .collect()
    }
}

impl Outputable for CallOutput<'_> {
    fn to_json(&self) -> serde_json::Value {
        let procedure = self.call.procedure();
        serde_json::json!({
            "procedure": procedure.wire_name(),
            "result_shape": procedure.result_shape(),
            "params": self.params(),
        })
    }

    fn to_human(&self) -> String {
        let procedure = self.call.procedure();
        let mut out = format!(
            "Procedure: {}\n\
             Returns:   {}\n\
             Parameters ({}):",
            procedure.wire_name(),
            procedure.result_shape(),
            self.call.arity()
        );
        for (i, param) in self.params().iter().enumerate() {
            out.push_str(&format!("\n  [{i}] {param}"));
        }
        out
    }
}

/// The service endpoint and every procedure with its wire identifier and
/// result shape.
pub struct ProceduresOutput;

impl Outputable for ProceduresOutput {
    fn to_json(&self) -> serde_json::Value {
        let procedures: Vec<_> = Procedure::ALL
            .iter()
            .map(|p| {
                serde_json::json!({
                    "procedure": p.wire_name(),
                    "result_shape": p.result_shape(),
                })
            })
            .collect();
        serde_json::json!({
            "endpoint": DEFAULT_ENDPOINT,
            "procedures": procedures,
        })
    }

    fn to_human(&self) -> String {
        let width = Procedure::ALL.iter().map(|p| p.wire_name().len()).max().unwrap_or(0);
        let mut out = format!("Endpoint: {DEFAULT_ENDPOINT}\n");
        for p in Procedure::ALL {
            out.push_str(&format!("\n{:width$}  {}", p.wire_name(), p.result_shape()));
        }
        out
    }
}
