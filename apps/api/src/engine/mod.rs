// Skill-matching engine: vocabulary, extraction, anonymization, scoring,
// comparison. Pure and deterministic — no I/O below the handlers.

pub mod anonymizer;
pub mod compare;
pub mod extractor;
pub mod handlers;
pub mod scorer;
pub mod vocabulary;
