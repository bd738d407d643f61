// ATS keyword analysis: tokenizer, keyword set comparison, model-assisted skill matching.

pub mod keywords;
pub mod matcher;
pub mod prompts;
pub mod skills;

pub use matcher::{ats_keyword_check, AtsReport};
pub use skills::{fetch_skillset, skill_report, SkillReport};
