use super::{indent, join_blocks, GeneratedCell};
use crate::commands::generate::axes::{BaseType, Family};
use crate::commands::generate::guards::reset_line;

/// Test fixture sharing one host instance across every case for `base`.
/// Teardown destroys it and resets both guard families.
pub fn render_fixture(base: &BaseType, cells: &[GeneratedCell]) -> Vec<String> {
    let host = base.host_type_name();
    let mut blocks = Vec::new();
    blocks.push(vec![
        format!("{} behaviour;", host),
        "GameObject go;".to_string(),
    ]);
    blocks.push(vec![
        "[OneTimeSetUp]".to_string(),
        "public void SetUp()".to_string(),
        "{".to_string(),
        "    go = new GameObject();".to_string(),
        format!("    behaviour = go.AddComponent<{}>();", host),
        "}".to_string(),
    ]);

    let mut teardown = vec![
        "[OneTimeTearDown]".to_string(),
        "public void TearDown()".to_string(),
        "{".to_string(),
        "    UnityEngine.Object.DestroyImmediate(go);".to_string(),
    ];
    for family in Family::ALL {
        teardown.push(format!("    {}", reset_line(family)));
    }
    teardown.push("}".to_string());
    blocks.push(teardown);

    for cell in cells {
        blocks.push(cell.test.clone());
    }

    let mut lines = Vec::new();
    lines.push(format!("public class {}", base.fixture_type_name()));
    lines.push("{".to_string());
    lines.extend(indent(&join_blocks(&blocks), 1));
    lines.push("}".to_string());
    lines
}
