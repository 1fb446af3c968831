pub mod lang;
mod reader;

pub use lang::{extractor_for, IncludeExtractor, ModuleExtractor, SymbolExtractor};
pub use reader::{extract_file, read_source, ExtractError};
