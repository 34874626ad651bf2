extern crate num_bigint;
extern crate num_integer;
extern crate num_traits;

pub mod assign;
pub mod command;
pub mod error;
pub mod eval;
pub mod infix;
pub mod lexer;
pub mod postfix;
pub mod session;
pub mod sign;
pub mod stack;
pub mod store;
pub mod validate;

pub use error::CalcError;
pub use eval::EvalConfig;
pub use session::{evaluate, process, process_with_config, Calculator, Outcome};
pub use store::VariableStore;
