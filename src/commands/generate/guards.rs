//! Guard family state and predicted guard-violation warnings.
use super::axes::{AttributeKind, Family};

/// Statement driving the family's ambient condition from a test's `active` flag.
pub fn activation_line(family: Family) -> &'static str {
    match family {
        Family::Server => "NetworkServer.active = active;",
        Family::Client => {
            "NetworkClient.connectState = active ? ConnectState.Connected : ConnectState.None;"
        }
    }
}

/// Statement returning the family to its inactive default.
pub fn reset_line(family: Family) -> &'static str {
    match family {
        Family::Server => "NetworkServer.active = false;",
        Family::Client => "NetworkClient.connectState = ConnectState.None;",
    }
}

/// Warning the runtime emits when `signature` is called while its guard is
/// inactive. `None` when the guard is active or the attribute is silent.
pub fn expected_diagnostic(
    attribute: &AttributeKind,
    guard_active: bool,
    signature: &str,
) -> Option<String> {
    if guard_active || attribute.silent {
        return None;
    }
    Some(format!(
        "[{}] function '{}' called when {} was not active",
        attribute.label,
        signature,
        attribute.label.to_lowercase()
    ))
}

/// Quote `s` as a C# regular string literal.
pub fn csharp_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Log expectation registered for the inactive case only.
pub fn render_log_expectation(message: &str) -> Vec<String> {
    vec![
        "if (!active)".to_string(),
        "{".to_string(),
        format!(
            "    LogAssert.Expect(LogType.Warning, {});",
            csharp_string_literal(message)
        ),
        "}".to_string(),
    ]
}
