use num_bigint::BigInt;

use crate::error::CalcError;
use crate::lexer::{OpKind, Token, TokenKind};
use crate::store::VariableStore;

/// An item of an expression once every variable was replaced by its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Infix {
    Num(BigInt),
    Op(OpKind),
    OpenParen,
    CloseParen,
}

/// Replaces every identifier by the value it has in `store`.
///
/// Fails with [`CalcError::UnknownVariable`] on the first identifier that was
/// never assigned. The store is only read.
pub fn substitute(tokens: Vec<Token>, store: &VariableStore) -> Result<Vec<Infix>, CalcError> {
    tokens
        .into_iter()
        .map(|token| {
            Ok(match token.kind {
                TokenKind::Num(val) => Infix::Num(val),
                TokenKind::Ident(name) => match store.get(&name) {
                    Some(val) => Infix::Num(val.clone()),
                    None => return Err(CalcError::UnknownVariable),
                },
                TokenKind::Op(op) => Infix::Op(op),
                TokenKind::OpenParen => Infix::OpenParen,
                TokenKind::CloseParen => Infix::CloseParen,

                // assignments never reach this point
                TokenKind::Equals => return Err(CalcError::InvalidExpression),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn it_replaces_variables_by_their_values() {
        let mut store = VariableStore::new();
        store.set("a", BigInt::from(-3)).unwrap();

        let items = substitute(tokenize("(a + 2)").unwrap(), &store).unwrap();
        assert_eq!(
            items,
            vec![
                Infix::OpenParen,
                Infix::Num(BigInt::from(-3)),
                Infix::Op(OpKind::Add),
                Infix::Num(BigInt::from(2)),
                Infix::CloseParen,
            ]
        );
    }

    #[test]
    fn it_fails_on_unknown_variables() {
        let store = VariableStore::new();
        assert_eq!(
            substitute(tokenize("c + 1").unwrap(), &store),
            Err(CalcError::UnknownVariable)
        );
    }
}
