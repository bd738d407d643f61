// LLM prompt templates for section scoring.

use crate::llm_client::prompts::fill_template;

/// Section scoring prompt. Replace `{section_name}` and `{content}` before sending.
const SCORE_SECTION_PROMPT_TEMPLATE: &str = "\
Evaluate the following '{section_name}' section of a resume. \
Score it from 1 to 10 based on clarity, impact, and relevance to a typical job description. \
Also give 1-2 sentences of constructive feedback.\n\n\
Section Content:\n{content}";

pub fn score_section_prompt(section_name: &str, content: &str) -> String {
    fill_template(
        SCORE_SECTION_PROMPT_TEMPLATE,
        &[("section_name", section_name), ("content", content)],
    )
}
