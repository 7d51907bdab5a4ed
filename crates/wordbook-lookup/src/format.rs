use wordbook_types::Numbering;

use crate::WordDefinition;

/// Numbered list of every definition across every entry and meaning group.
///
/// Blank definitions are skipped and do not take a number.
pub fn format_definitions(entries: &[WordDefinition], numbering: Numbering) -> String {
    let mut lines = Vec::new();
    let mut n = 0;

    for group in entries.iter().flat_map(|entry| &entry.meanings) {
        if numbering == Numbering::PerMeaning {
            n = 0;
        }
        for definition in &group.definitions {
            let text = definition.definition.trim();
            if text.is_empty() {
                continue;
            }
            n += 1;
            lines.push(format!("{n}. {text}"));
        }
    }

    lines.join("\n")
}
