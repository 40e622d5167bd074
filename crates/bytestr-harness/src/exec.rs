//! Fixture execution: dispatch a case to the byte-string operations.
//!
//! Every string input is admitted through the membrane first, so strict mode
//! reports an unterminated input the same way for every function. Outputs
//! are rendered as text: string results as their (lossy UTF-8) content,
//! numbers in decimal, booleans as `true`/`false`, a missing `find` match as
//! `-1`, and contract violations as `error:<code>`.

use serde_json::{Value, json};

use bytestr_core::{StrError, checked, string};
use bytestr_membrane::SafetyLevel;

use crate::error::HarnessError;

/// Functions understood by [`execute_fixture_case`].
pub const FUNCTIONS: &[&str] = &[
    "length",
    "copy",
    "reverse_in_place",
    "reverse_copy",
    "find",
    "to_upper",
    "to_lower",
    "is_numeric",
    "is_alpha",
    "concat",
    "starts_with",
];

/// Fill byte for copy destinations, so untouched bytes are visible.
const DST_FILL: u8 = 0xAA;

fn bytes_arg(inputs: &Value, key: &str) -> Result<Vec<u8>, HarnessError> {
    match inputs.get(key) {
        Some(Value::String(text)) => {
            let mut bytes = text.as_bytes().to_vec();
            bytes.push(0);
            Ok(bytes)
        }
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .ok_or_else(|| HarnessError::bad_input(key, "byte values must be 0..=255"))
            })
            .collect(),
        Some(_) => Err(HarnessError::bad_input(
            key,
            "expected a string or an array of bytes",
        )),
        None => Err(HarnessError::bad_input(key, "missing")),
    }
}

fn byte_arg(inputs: &Value, key: &str) -> Result<u8, HarnessError> {
    match inputs.get(key) {
        Some(Value::String(text)) if text.len() == 1 => Ok(text.as_bytes()[0]),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| HarnessError::bad_input(key, "byte value must be 0..=255")),
        Some(_) => Err(HarnessError::bad_input(
            key,
            "expected a one-byte string or a number",
        )),
        None => Err(HarnessError::bad_input(key, "missing")),
    }
}

fn usize_arg(inputs: &Value, key: &str) -> Result<usize, HarnessError> {
    inputs
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| HarnessError::bad_input(key, "expected a non-negative integer"))
}

/// Content of a NUL-terminated buffer as text.
#[must_use]
pub fn render(s: &[u8]) -> String {
    String::from_utf8_lossy(&s[..string::length(s)]).into_owned()
}

fn render_error(err: StrError) -> String {
    format!("error:{}", err.code())
}

/// Execute one fixture case and render its output.
///
/// Returns `Err` only for harness problems (unknown function, malformed
/// inputs); contract violations by the inputs are part of the output.
pub fn execute_fixture_case(
    function: &str,
    inputs: &Value,
    level: SafetyLevel,
) -> Result<String, HarnessError> {
    let outcome: Result<String, StrError> = match function {
        "length" => {
            let s = bytes_arg(inputs, "s")?;
            checked::length_with(level, &s).map(|n| n.to_string())
        }
        "copy" => {
            let src = bytes_arg(inputs, "src")?;
            let mut dst = vec![DST_FILL; usize_arg(inputs, "dst_len")?];
            checked::copy_with(level, &src, &mut dst).map(|_| render(&dst))
        }
        "reverse_in_place" => {
            let mut s = bytes_arg(inputs, "s")?;
            checked::length_with(level, &s).map(|_| {
                string::reverse_in_place(&mut s);
                render(&s)
            })
        }
        "reverse_copy" => {
            let s = bytes_arg(inputs, "s")?;
            checked::reverse_copy_with(level, &s).map(|r| r.to_string())
        }
        "find" => {
            let s = bytes_arg(inputs, "s")?;
            let c = byte_arg(inputs, "c")?;
            checked::length_with(level, &s).map(|_| match string::find(&s, c) {
                Some(i) => i.to_string(),
                None => "-1".to_string(),
            })
        }
        "to_upper" | "to_lower" => {
            let mut s = bytes_arg(inputs, "s")?;
            checked::length_with(level, &s).map(|_| {
                if function == "to_upper" {
                    string::to_upper(&mut s);
                } else {
                    string::to_lower(&mut s);
                }
                render(&s)
            })
        }
        "is_numeric" | "is_alpha" => {
            let s = bytes_arg(inputs, "s")?;
            checked::length_with(level, &s).map(|_| {
                let verdict = if function == "is_numeric" {
                    string::is_numeric(&s)
                } else {
                    string::is_alpha(&s)
                };
                verdict.to_string()
            })
        }
        "concat" => {
            let a = bytes_arg(inputs, "a")?;
            let b = bytes_arg(inputs, "b")?;
            checked::concat_with(level, &a, &b).map(|r| r.to_string())
        }
        "starts_with" => {
            let s = bytes_arg(inputs, "s")?;
            let prefix = bytes_arg(inputs, "prefix")?;
            checked::starts_with_with(level, &s, &prefix).map(|v| v.to_string())
        }
        other => return Err(HarnessError::UnknownFunction(other.to_string())),
    };
    Ok(outcome.unwrap_or_else(render_error))
}

/// Build fixture-style inputs for `function` from one line of user input.
///
/// The line is raw bytes (any 8-bit value) and becomes a byte-array input
/// with a terminator appended. `arg` fills the second argument (`concat`'s
/// `b`, `starts_with`'s `prefix`, `find`'s `c`). `copy` uses `dst_len`,
/// defaulting to a destination that fits the line exactly.
pub fn inputs_for_line(
    function: &str,
    line: &[u8],
    arg: Option<&str>,
    dst_len: Option<usize>,
) -> Result<Value, HarnessError> {
    let need_arg = |key: &str| {
        arg.map(str::to_string)
            .ok_or_else(|| HarnessError::bad_input(key, "pass it with --arg"))
    };
    let mut bytes = line.to_vec();
    bytes.push(0);
    let inputs = match function {
        "copy" => json!({
            "src": bytes,
            "dst_len": dst_len.unwrap_or(line.len() + 1),
        }),
        "concat" => json!({ "a": bytes, "b": need_arg("b")? }),
        "starts_with" => json!({ "s": bytes, "prefix": need_arg("prefix")? }),
        "find" => json!({ "s": bytes, "c": need_arg("c")? }),
        f if FUNCTIONS.contains(&f) => json!({ "s": bytes }),
        other => return Err(HarnessError::UnknownFunction(other.to_string())),
    };
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(function: &str, inputs: Value) -> String {
        execute_fixture_case(function, &inputs, SafetyLevel::Strict).expect("known function")
    }

    #[test]
    fn text_inputs_get_a_terminator() {
        assert_eq!(run("length", json!({"s": "Hasan"})), "5");
        assert_eq!(run("length", json!({"s": ""})), "0");
    }

    #[test]
    fn byte_array_inputs_are_verbatim() {
        assert_eq!(run("length", json!({"s": [72, 97, 0, 115]})), "2");
        assert_eq!(run("length", json!({"s": [72, 97]})), "error:unterminated");
    }

    #[test]
    fn every_function_dispatches() {
        assert_eq!(run("copy", json!({"src": "Hasan", "dst_len": 6})), "Hasan");
        assert_eq!(run("reverse_in_place", json!({"s": "abc"})), "cba");
        assert_eq!(run("reverse_copy", json!({"s": "Hasan"})), "nasaH");
        assert_eq!(run("find", json!({"s": "hello", "c": "l"})), "2");
        assert_eq!(run("find", json!({"s": "hello", "c": "z"})), "-1");
        assert_eq!(run("to_upper", json!({"s": "Hasan"})), "HASAN");
        assert_eq!(run("to_lower", json!({"s": "Hasan"})), "hasan");
        assert_eq!(run("is_numeric", json!({"s": "123"})), "true");
        assert_eq!(run("is_alpha", json!({"s": "ab1"})), "false");
        assert_eq!(run("concat", json!({"a": "Has", "b": "an"})), "Hasan");
        assert_eq!(run("starts_with", json!({"s": "Has", "prefix": "Hasan"})), "false");
    }

    #[test]
    fn copy_violation_depends_on_mode() {
        let inputs = json!({"src": "Hasan", "dst_len": 4});
        assert_eq!(
            execute_fixture_case("copy", &inputs, SafetyLevel::Strict).unwrap(),
            "error:destination_too_small"
        );
        assert_eq!(
            execute_fixture_case("copy", &inputs, SafetyLevel::Hardened).unwrap(),
            "Has"
        );
    }

    #[test]
    fn unknown_function_and_bad_inputs_are_harness_errors() {
        assert!(matches!(
            execute_fixture_case("strlen", &json!({}), SafetyLevel::Strict),
            Err(HarnessError::UnknownFunction(_))
        ));
        assert!(matches!(
            execute_fixture_case("length", &json!({"s": 5}), SafetyLevel::Strict),
            Err(HarnessError::BadInput { .. })
        ));
        assert!(matches!(
            execute_fixture_case("length", &json!({"s": [300]}), SafetyLevel::Strict),
            Err(HarnessError::BadInput { .. })
        ));
        assert!(matches!(
            execute_fixture_case("find", &json!({"s": "a", "c": "ab"}), SafetyLevel::Strict),
            Err(HarnessError::BadInput { .. })
        ));
    }

    #[test]
    fn inputs_from_a_line() {
        assert_eq!(
            inputs_for_line("copy", b"Has", None, None).unwrap(),
            json!({"src": [72, 97, 115, 0], "dst_len": 4})
        );
        assert_eq!(
            inputs_for_line("concat", b"Has", Some("an"), None).unwrap(),
            json!({"a": [72, 97, 115, 0], "b": "an"})
        );
        assert_eq!(
            inputs_for_line("is_alpha", b"ab", None, None).unwrap(),
            json!({"s": [97, 98, 0]})
        );
        assert!(inputs_for_line("starts_with", b"Hasan", None, None).is_err());
        assert!(inputs_for_line("bogus", b"x", None, None).is_err());
    }

    #[test]
    fn non_utf8_line_runs_byte_for_byte() {
        let line = b"\xE9t\xE9";
        let run_line = |function: &str| {
            let inputs = inputs_for_line(function, line, None, None).unwrap();
            execute_fixture_case(function, &inputs, SafetyLevel::Strict).unwrap()
        };
        assert_eq!(run_line("length"), "3");
        assert_eq!(run_line("is_alpha"), "false");
        assert_eq!(run_line("to_upper"), "\u{FFFD}T\u{FFFD}");
    }
}
