mod expr;
mod lexer;
mod notation;
mod parser;
mod token;

pub use expr::Expr;
pub use lexer::{tokenize, Lexer};
pub use notation::{detect, Notation};
pub use parser::build;
pub use token::{Assoc, Operator, Precedence, Token};
