mod token;
mod operator;
mod path;
mod graphics_state;
mod interpreter;

pub use token::*;
pub use operator::*;
pub use path::*;
pub use graphics_state::*;
pub use interpreter::*;
