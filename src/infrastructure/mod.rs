pub mod text_source;

pub use text_source::{ensure_exists, extract_lines, list_documents, topic_name, DocumentKind};
