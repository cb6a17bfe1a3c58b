use super::GeneratedCell;

/// Counts over one generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub base_types: usize,
    pub members: usize,
    pub test_methods: usize,
    pub test_cases: usize,
    pub expected_diagnostics: usize,
    pub silent_cases: usize,
}

impl GenerationSummary {
    pub fn add_base_type(&mut self) {
        self.base_types += 1;
    }

    pub fn add_cell(&mut self, cell: &GeneratedCell) {
        self.members += 1;
        self.test_methods += 1;
        self.test_cases += cell.cases.len();
        for case in &cell.cases {
            if case.diagnostic.is_some() {
                self.expected_diagnostics += 1;
            } else if !case.guard_active {
                self.silent_cases += 1;
            }
        }
    }
}

pub fn render_summary_lines(summary: &GenerationSummary) -> Vec<String> {
    vec![
        format!("base types: {}", summary.base_types),
        format!("members: {}", summary.members),
        format!(
            "test methods: {} ({} cases)",
            summary.test_methods, summary.test_cases
        ),
        format!("expected warnings: {}", summary.expected_diagnostics),
        format!("silent inactive cases: {}", summary.silent_cases),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::generate::axes::{AttributeKind, BaseType, CallShape, Family, ValueKind};
    use crate::commands::generate::render::generate_cell;

    #[test]
    fn summary_counts_warnings_and_silent_cases() {
        let base = BaseType::new("HostX");
        let mut summary = GenerationSummary::default();
        summary.add_base_type();
        for attr in [
            AttributeKind::new("Server", Family::Server, false),
            AttributeKind::new("ServerCallback", Family::Server, true),
        ] {
            summary.add_cell(&generate_cell("NS", &attr, &base, ValueKind::Int, CallShape::Return));
        }
        assert_eq!(
            summary,
            GenerationSummary {
                base_types: 1,
                members: 2,
                test_methods: 2,
                test_cases: 4,
                expected_diagnostics: 1,
                silent_cases: 1,
            }
        );
        assert_eq!(render_summary_lines(&summary)[2], "test methods: 2 (4 cases)");
    }
}
