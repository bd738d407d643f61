// Section marker round trip: decode model output into named sections, keep them editable,
// encode them back for export. All LLM calls go through llm_client.

pub mod codec;
pub mod prompts;
pub mod store;

pub use codec::{decode, encode, Section, SectionCollection};
pub use store::{SectionStore, StoreError};
