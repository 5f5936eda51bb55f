mod jsonl;

pub use jsonl::{WorldSummary, flush_to_jsonl};
