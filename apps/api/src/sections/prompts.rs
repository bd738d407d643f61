// LLM prompt templates for section parsing and regeneration.
// Placeholders in braces are replaced before sending.

use crate::llm_client::prompts::{fill_template, CONTENT_ONLY_INSTRUCTION, SECTION_MARKER_FORMAT};

/// Section parsing prompt. Replace `{resume_text}` before sending.
const PARSE_SECTIONS_PROMPT_TEMPLATE: &str = "\
You are an expert resume parser. Given the following unstructured resume text, extract and \
organize it into a clean structured format. Detect all relevant sections, even if they are not \
standard (like Certifications, Projects, Publications, Languages, etc). {marker_format}\
Make sure the output is complete and readable.\n\n\
Resume:\n{resume_text}";

/// Section rewrite prompt. Replace `{section_name}` and `{content}` before sending.
const REGENERATE_SECTION_PROMPT_TEMPLATE: &str = "\
You are an expert resume writer. Rewrite the '{section_name}' section below to improve clarity, \
impact, and alignment with industry best practices. Keep it concise and relevant. \
{content_only}\n\n\
{section_name} Section:\n{content}";

pub fn parse_sections_prompt(resume_text: &str) -> String {
    fill_template(
        PARSE_SECTIONS_PROMPT_TEMPLATE,
        &[
            ("marker_format", SECTION_MARKER_FORMAT),
            ("resume_text", resume_text),
        ],
    )
}

pub fn regenerate_section_prompt(section_name: &str, content: &str) -> String {
    fill_template(
        REGENERATE_SECTION_PROMPT_TEMPLATE,
        &[
            ("content_only", CONTENT_ONLY_INSTRUCTION),
            ("section_name", section_name),
            ("content", content),
        ],
    )
}
