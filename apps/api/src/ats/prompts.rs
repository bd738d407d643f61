// LLM prompt templates for the ATS module.

use crate::llm_client::prompts::fill_template;

/// Skill extraction prompt. Replace `{jd_text}` before sending.
const SKILLSET_PROMPT_TEMPLATE: &str = "\
Extract a list of up to 50 relevant technical and soft skills from the following job description. \
Only return a comma-separated list of skill names, no explanations:\n\n{jd_text}";

pub fn skillset_prompt(jd_text: &str) -> String {
    fill_template(SKILLSET_PROMPT_TEMPLATE, &[("jd_text", jd_text)])
}
