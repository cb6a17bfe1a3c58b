//! Test suite generation: enumerate the axes, render every cell, assemble one document.
use crate::commands::emit::{EmissionSink, FileSink, StdoutSink};
use std::path::Path;
use tracing::{debug, info, warn};

pub mod axes;
pub mod catalog;
pub mod config;
pub mod error;
pub mod guards;
pub mod render;
pub mod signature;

pub use config::Config;
pub use error::{GenError, GenResult};

use axes::{BaseType, CallShape};
use render::{GeneratedCell, GenerationSummary};

/// All cells attached to one base type, in enumeration order.
#[derive(Debug, Clone)]
pub struct BaseSuite {
    pub base: BaseType,
    pub cells: Vec<GeneratedCell>,
}

/// Final artifact of one run. Nothing is kept between runs.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub artifact: String,
    pub text: String,
    pub summary: GenerationSummary,
}

/// Cross-product per base type: attributes outer, value kinds inner, and the
/// direct-return shape before the out-parameter shape.
pub fn build_suites(config: &Config) -> Vec<BaseSuite> {
    let axes = &config.axes;
    axes.base_types
        .iter()
        .map(|base| {
            let mut cells = Vec::new();
            for attribute in &axes.attributes {
                for &kind in &axes.value_kinds {
                    for shape in CallShape::ALL {
                        cells.push(render::generate_cell(
                            &config.namespace,
                            attribute,
                            base,
                            kind,
                            shape,
                        ));
                    }
                }
            }
            BaseSuite {
                base: base.clone(),
                cells,
            }
        })
        .collect()
}

pub fn assemble(config: &Config, suites: &[BaseSuite]) -> GeneratedDocument {
    let mut summary = GenerationSummary::default();
    let mut rendered = Vec::new();
    for suite in suites {
        summary.add_base_type();
        for cell in &suite.cells {
            summary.add_cell(cell);
        }
        rendered.push((
            render::render_host(&suite.base, &config.axes.value_kinds, &suite.cells),
            render::render_fixture(&suite.base, &suite.cells),
        ));
    }
    GeneratedDocument {
        artifact: config.artifact.clone(),
        text: render::assemble_document(
            &config.namespace,
            &config.imports,
            &config.axes.value_kinds,
            &rendered,
        ),
        summary,
    }
}

/// Validate, enumerate and assemble. Fails before rendering anything.
pub fn generate_document(config: &Config) -> GenResult<GeneratedDocument> {
    config.validate()?;
    let suites = build_suites(config);
    Ok(assemble(config, &suites))
}

pub fn run_generate(
    config_path: Option<&Path>,
    out_dir: &Path,
    to_stdout: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = Config::load(config_path)?;
    match &source {
        Some(p) => info!("Loaded config from {}", p.display()),
        None => debug!("No config file, using built-in axes"),
    }
    if config.axes.attributes.iter().all(|a| a.silent) {
        warn!("Every attribute is silent; no warning expectations will be generated");
    }

    debug!("Enumerating {} cells", config.axes.cell_count());
    let suites = build_suites(&config);
    for suite in &suites {
        for cell in &suite.cells {
            debug!(
                base = %suite.base.name,
                kind = %cell.kind,
                shape = ?cell.shape,
                callable = %cell.callable,
                signature = %cell.signature,
                "rendered cell"
            );
        }
    }
    let doc = assemble(&config, &suites);
    for line in render::render_summary_lines(&doc.summary) {
        info!("{}", line);
    }

    let mut sink: Box<dyn EmissionSink> = if to_stdout {
        Box::new(StdoutSink)
    } else {
        Box::new(FileSink::new(out_dir))
    };
    sink.emit(&doc.artifact, &doc.text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::axes::{AttributeKind, Family, ValueKind};
    use super::render::ExpectedValue;

    fn scenario_config() -> Config {
        let mut config = Config::default();
        config.namespace = "NS".to_string();
        config.axes.attributes = vec![AttributeKind::new("RequiresA", Family::Server, false)];
        config.axes.base_types = vec![BaseType::new("HostX")];
        config.axes.value_kinds = vec![ValueKind::Int];
        config
    }

    #[test]
    fn every_cell_generated_exactly_once() {
        let mut config = Config::default();
        config.axes.base_types.push(BaseType::new("OtherBehaviour"));
        let suites = build_suites(&config);
        let cells: Vec<&GeneratedCell> = suites.iter().flat_map(|s| &s.cells).collect();
        assert_eq!(cells.len(), config.axes.cell_count());
        assert_eq!(cells.len(), 4 * 2 * 11 * 2);

        for suite in &suites {
            let mut names = std::collections::HashSet::new();
            for cell in &suite.cells {
                assert!(names.insert(cell.callable.clone()), "duplicate {}", cell.callable);
                assert_eq!(cell.cases.len(), 2);
            }
        }

        let doc = generate_document(&config).unwrap();
        assert_eq!(doc.summary.members, 176);
        assert_eq!(doc.summary.test_cases, 352);
        assert_eq!(doc.text.matches("[TestCase(").count(), 352);
    }

    #[test]
    fn enumeration_order_is_attribute_then_kind_then_shape() {
        let suites = build_suites(&Config::default());
        let names: Vec<&str> = suites[0].cells.iter().map(|c| c.callable.as_str()).collect();
        assert_eq!(
            &names[..4],
            &[
                "Client_float_Function",
                "Client_float_out_Function",
                "Client_double_Function",
                "Client_double_out_Function",
            ]
        );
        assert_eq!(names[22], "Server_float_Function");
        assert_eq!(names.last().copied(), Some("ServerCallback_ClassWithConstructor_out_Function"));
    }

    #[test]
    fn active_cases_expect_constant_without_warning() {
        for suite in build_suites(&Config::default()) {
            for cell in &suite.cells {
                let active = &cell.cases[0];
                assert!(active.guard_active);
                assert_eq!(active.diagnostic, None);
                assert!(matches!(&active.expected, ExpectedValue::Constant(c) if c.ends_with(&catalog::constant_name(cell.kind))));
            }
        }
    }

    #[test]
    fn inactive_cases_follow_attribute_silence() {
        for suite in build_suites(&Config::default()) {
            for cell in &suite.cells {
                let inactive = &cell.cases[1];
                assert!(!inactive.guard_active);
                assert_eq!(inactive.expected, ExpectedValue::Default);
                assert_eq!(inactive.diagnostic.is_some(), !cell.attribute.silent);
            }
        }
    }

    #[test]
    fn concrete_scenario_matches_runtime_warning() {
        let suites = build_suites(&scenario_config());
        let cell = &suites[0].cells[0];
        assert_eq!(cell.callable, "RequiresA_int_Function");
        assert_eq!(
            cell.cases[1].diagnostic.as_deref(),
            Some("[RequiresA] function 'System.Int32 NS.AttributeBehaviour_HostX::RequiresA_int_Function()' called when requiresa was not active")
        );
        let doc = generate_document(&scenario_config()).unwrap();
        assert!(doc.text.contains("public static readonly int Expected_int = 103;"));
        assert!(doc.text.contains("int expected = active ? AttributeBehaviour_HostX.Expected_int : default;"));
        assert_eq!(doc.text.matches("LogAssert.Expect").count(), 2);
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let a = generate_document(&Config::default()).unwrap();
        let b = generate_document(&Config::default()).unwrap();
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn invalid_config_produces_no_document() {
        let mut config = Config::default();
        config.axes.value_kinds.clear();
        assert!(matches!(
            generate_document(&config),
            Err(GenError::EmptyAxis("value_kinds"))
        ));
    }
}
