//! Print the cross-product a generation run would emit, without emitting it.
use crate::commands::generate::catalog::value_spec;
use crate::commands::generate::render::{self, CaseExpectation, ExpectedValue};
use crate::commands::generate::{assemble, build_suites, BaseSuite, Config};
use std::path::Path;
use tracing::info;

pub fn run_plan(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = Config::load(config_path)?;
    if let Some(p) = &source {
        info!("Loaded config from {}", p.display());
    }
    let suites = build_suites(&config);
    for line in render_plan_lines(&config, &suites) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render_plan_lines(config: &Config, suites: &[BaseSuite]) -> Vec<String> {
    let mut out = Vec::new();
    out.push(format!(
        "Plan for artifact '{}' in namespace {}",
        config.artifact, config.namespace
    ));
    for suite in suites {
        out.push(String::new());
        out.push(format!(
            "Base type: {} (host {}, fixture {})",
            suite.base.name,
            suite.base.host_type_name(),
            suite.base.fixture_type_name()
        ));
        for cell in &suite.cells {
            let family = if cell.attribute.silent {
                format!("{}, silent", cell.attribute.family)
            } else {
                cell.attribute.family.to_string()
            };
            out.push(format!("  {} [{}]", cell.callable, family));
            out.push(format!("    signature: {}", cell.signature));
            for case in &cell.cases {
                out.push(format!("    {}", describe_case(case)));
            }
        }
    }

    out.push(String::new());
    out.push("Value kinds:".to_string());
    for &kind in &config.axes.value_kinds {
        let spec = value_spec(kind, &config.namespace);
        out.push(format!(
            "  {} = {} ({})",
            spec.kind, spec.literal, spec.qualified_type_name
        ));
    }

    let summary = assemble(config, suites).summary;
    out.push(String::new());
    out.push("Totals:".to_string());
    for line in render::render_summary_lines(&summary) {
        out.push(format!("  {}", line));
    }
    out
}

fn describe_case(case: &CaseExpectation) -> String {
    let expected = match &case.expected {
        ExpectedValue::Constant(c) => c.as_str(),
        ExpectedValue::Default => "default",
    };
    match &case.diagnostic {
        Some(msg) => format!(
            "active={} -> {}, warning: {}",
            case.guard_active, expected, msg
        ),
        None => format!("active={} -> {}, no warning", case.guard_active, expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::axes::{AttributeKind, BaseType, Family, ValueKind};

    #[test]
    fn plan_lists_cells_with_predicted_warnings() {
        let mut config = Config::default();
        config.namespace = "NS".to_string();
        config.axes.attributes = vec![
            AttributeKind::new("Client", Family::Client, false),
            AttributeKind::new("ClientCallback", Family::Client, true),
        ];
        config.axes.base_types = vec![BaseType::new("HostX")];
        config.axes.value_kinds = vec![ValueKind::Byte];
        let lines = render_plan_lines(&config, &build_suites(&config));

        assert_eq!(lines[0], "Plan for artifact 'AttributeTest' in namespace NS");
        assert_eq!(
            lines[2],
            "Base type: HostX (host AttributeBehaviour_HostX, fixture AttributeTest_HostX)"
        );
        assert_eq!(lines[3], "  Client_byte_Function [client]");
        assert_eq!(
            lines[4],
            "    signature: System.Byte NS.AttributeBehaviour_HostX::Client_byte_Function()"
        );
        assert_eq!(
            lines[5],
            "    active=true -> AttributeBehaviour_HostX.Expected_byte, no warning"
        );
        assert_eq!(
            lines[6],
            "    active=false -> default, warning: [Client] function 'System.Byte NS.AttributeBehaviour_HostX::Client_byte_Function()' called when client was not active"
        );
        assert!(lines.contains(&"  ClientCallback_byte_out_Function [client, silent]".to_string()));
        assert!(lines.contains(&"  byte = 224 (System.Byte)".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("  silent inactive cases: 2"));
    }
}
