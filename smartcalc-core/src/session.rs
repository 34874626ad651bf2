use std::fmt;

use log::debug;
use num_bigint::BigInt;

use crate::assign::assign;
use crate::error::CalcError;
use crate::eval::{eval_postfix, EvalConfig};
use crate::infix::substitute;
use crate::lexer::Token;
use crate::postfix::to_postfix;
use crate::sign::normalize;
use crate::store::VariableStore;
use crate::validate::{classify, Line};

/// What processing one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value of an expression, to be printed.
    Printed(BigInt),

    /// A blank line or an assignment; there is nothing to print.
    Silent,

    /// The line was rejected. The store was not changed.
    Error(CalcError),
}

impl Outcome {
    /// The text to show the user, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Printed(val) => Some(val.to_string()),
            Outcome::Silent => None,
            Outcome::Error(err) => Some(err.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Printed(val) => write!(f, "{}", val),
            Outcome::Silent => Ok(()),
            Outcome::Error(err) => write!(f, "{}", err),
        }
    }
}

impl From<Result<Option<BigInt>, CalcError>> for Outcome {
    fn from(result: Result<Option<BigInt>, CalcError>) -> Outcome {
        match result {
            Ok(Some(val)) => Outcome::Printed(val),
            Ok(None) => Outcome::Silent,
            Err(err) => Outcome::Error(err),
        }
    }
}

fn eval_tokens(
    tokens: Vec<Token>,
    store: &VariableStore,
    config: &EvalConfig,
) -> Result<BigInt, CalcError> {
    let items = normalize(substitute(tokens, store)?);
    eval_postfix(to_postfix(items)?, config)
}

/// Evaluates an expression without touching the store. Blank lines and
/// assignments are rejected.
pub fn evaluate(
    line: &str,
    store: &VariableStore,
    config: &EvalConfig,
) -> Result<BigInt, CalcError> {
    match classify(line)? {
        Line::Expression(tokens) => eval_tokens(tokens, store, config),
        Line::Blank | Line::Assignment { .. } => Err(CalcError::InvalidExpression),
    }
}

fn run(
    line: &str,
    store: &mut VariableStore,
    config: &EvalConfig,
) -> Result<Option<BigInt>, CalcError> {
    match classify(line)? {
        Line::Blank => Ok(None),
        Line::Assignment { lhs, rhs } => assign(lhs, rhs, store).map(|_| None),
        Line::Expression(tokens) => eval_tokens(tokens, store, config).map(Some),
    }
}

/// Processes one line with an explicit configuration.
pub fn process_with_config(
    line: &str,
    store: &mut VariableStore,
    config: &EvalConfig,
) -> Outcome {
    let outcome = Outcome::from(run(line, store, config));
    debug!("{:?} -> {:?}", line, outcome);
    outcome
}

/// Processes one line: assignments update `store`, expressions are evaluated
/// against it.
pub fn process(line: &str, store: &mut VariableStore) -> Outcome {
    process_with_config(line, store, &EvalConfig::default())
}

/// A calculator session that owns its variables.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    store: VariableStore,
    config: EvalConfig,
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator::default()
    }

    pub fn with_config(config: EvalConfig) -> Calculator {
        Calculator {
            store: VariableStore::new(),
            config,
        }
    }

    pub fn process(&mut self, line: &str) -> Outcome {
        process_with_config(line, &mut self.store, &self.config)
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }
}
