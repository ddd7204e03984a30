pub mod jsonl_source;
pub mod logging_sink;
