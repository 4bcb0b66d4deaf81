// Adapters layer: concrete implementations for external systems (input documents, output sinks).

pub mod input;
pub mod storage;
