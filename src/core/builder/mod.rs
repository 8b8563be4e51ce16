pub mod errors;
pub mod graph_builder;
pub mod parser;

pub use errors::ParseError;
pub use graph_builder::GraphBuilder;
pub use parser::{parse_declaration, parse_declarations};
