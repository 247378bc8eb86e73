pub mod fountain_parser;
pub mod header_parser;
pub mod body_parser;
pub mod rules;
pub mod state;

pub use fountain_parser::{FountainParser, normalize_line_endings};
pub use header_parser::{HeaderParser, has_header_block};
pub use body_parser::BodyParser;
pub use rules::{LineContext, Rule};
pub use state::ParserState;
