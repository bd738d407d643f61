// LLM prompt templates for the analysis pipeline.

use crate::llm_client::prompts::fill_template;

/// Resume tailoring prompt. Replace `{skills}`, `{resume_text}` and `{jd_text}` before sending.
const OPTIMIZE_RESUME_PROMPT_TEMPLATE: &str = "\
You are an expert resume optimizer. Given the following resume and job description, tailor the \
resume towards the job, add important missing keywords and skills, and suggest ATS improvements. \
Highlight additions and changes.\n\n\
Relevant Skills: {skills}\n\n\
Resume:\n{resume_text}\n\nJob Description:\n{jd_text}";

pub fn optimize_resume_prompt<'a, I>(resume_text: &str, jd_text: &str, skills: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let skills = skills
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    fill_template(
        OPTIMIZE_RESUME_PROMPT_TEMPLATE,
        &[
            ("skills", skills.as_str()),
            ("resume_text", resume_text),
            ("jd_text", jd_text),
        ],
    )
}
