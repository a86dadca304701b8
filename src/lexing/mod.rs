pub mod lexer;
pub mod token;

pub use lexer::{LexMode, Lexer};
pub use token::{Token, TokenKind, TokenString};
