// Shared prompt fragments. Each service that needs LLM calls defines its own prompts.rs
// alongside it; this file only holds pieces used by more than one of them.

/// Describes the section-marker layout the section codec decodes.
pub const SECTION_MARKER_FORMAT: &str = "\
    Return each section with a clear heading like this:\n\n\
    === Section Name ===\n\
    Section content...\n\n";

/// Appended to prompts whose reply is pasted straight into an editable section.
pub const CONTENT_ONLY_INSTRUCTION: &str = "\
    Return only the improved content without section headers or additional commentary.";

/// Fills `{name}` placeholders in one left-to-right pass over the template.
///
/// Substituted values are appended verbatim and never rescanned, so user text that happens
/// to contain `{resume_text}` or similar stays literal. Unknown placeholders are kept as is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let value_len: usize = values.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + value_len);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = &after_open[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }
    out.push_str(rest);
    out
}
