pub mod document_ctx;
pub mod document_flow;
pub mod record_assembler;

pub use document_ctx::DocumentCtx;
pub use document_flow::{DocumentFlow, DocumentReport};
pub use record_assembler::{parse_lines, parse_text, RecordAssembler};
