//! Lexical analyzer for assignment expressions.
//!
//! Produces identifier and operator [`Token`]s. A token is either a name of
//! ASCII word characters with an optional single leading `!` and an optional
//! `[digits]` suffix, or one of `&&`, `||`, `&`, `|`, `^`. Every other
//! character is skipped; non-whitespace skips are reported as ignored spans
//! so callers can point at them. Lexing never fails.

use crate::token::{ExprToken, Token};
use lumen_common::{BitOp, Span};

/// Result of lexing one expression.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct LexedExpr {
    /// Tokens in source order.
    pub tokens: Vec<Token>,
    /// Runs of non-whitespace characters that produced no token.
    pub ignored: Vec<Span>,
}

/// Lexes an expression into tokens, recording skipped characters.
pub fn lex(expr: &str) -> LexedExpr {
    let mut lexer = Lexer {
        source: expr.as_bytes(),
        pos: 0,
        out: LexedExpr::default(),
    };
    lexer.lex_all();
    lexer.out
}

/// Lexes an expression and returns only the tokens.
pub fn tokenize(expr: &str) -> Vec<Token> {
    lex(expr).tokens
}

struct Lexer<'a> {
    source: &'a [u8],
    pos: usize,
    out: LexedExpr,
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl Lexer<'_> {
    fn lex_all(&mut self) {
        while self.pos < self.source.len() {
            let start = self.pos;
            let c = self.peek();
            if c.is_ascii_whitespace() {
                self.pos += 1;
            } else if is_word(c) {
                let kind = self.lex_name(false);
                self.push(kind, start);
            } else if c == b'!' && is_word(self.peek_at(1)) {
                self.pos += 1;
                let kind = self.lex_name(true);
                self.push(kind, start);
            } else if let Some(op) = self.lex_operator() {
                self.push(ExprToken::Operator(op), start);
            } else {
                self.skip_char();
                self.ignore(start);
            }
        }
    }

    fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        let idx = self.pos + offset;
        if idx < self.source.len() {
            self.source[idx]
        } else {
            0
        }
    }

    fn advance(&mut self) -> u8 {
        let b = self.source[self.pos];
        self.pos += 1;
        b
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    fn push(&mut self, kind: ExprToken, start: usize) {
        self.out.tokens.push(Token {
            kind,
            span: Span::from_range(start, self.pos),
        });
    }

    fn ignore(&mut self, start: usize) {
        if let Some(last) = self.out.ignored.last_mut() {
            if last.end as usize == start {
                last.end = self.pos as u32;
                return;
            }
        }
        self.out.ignored.push(Span::from_range(start, self.pos));
    }

    /// Skips one UTF-8 encoded character.
    fn skip_char(&mut self) {
        self.advance();
        while self.pos < self.source.len() && (self.peek() & 0xC0) == 0x80 {
            self.pos += 1;
        }
    }

    fn lex_name(&mut self, negated: bool) -> ExprToken {
        let name_start = self.pos;
        while is_word(self.peek()) {
            self.pos += 1;
        }
        let name = self.text(name_start, self.pos);

        match self.index_suffix() {
            Some((lo, hi)) => {
                let index = self.text(lo, hi);
                if negated {
                    ExprToken::NegatedIndexedIdentifier { name, index }
                } else {
                    ExprToken::IndexedIdentifier { name, index }
                }
            }
            None if negated => ExprToken::NegatedIdentifier(name),
            None => ExprToken::Identifier(name),
        }
    }

    /// Consumes `[digits]` if it is complete, returning the digit range.
    fn index_suffix(&mut self) -> Option<(usize, usize)> {
        if self.peek() != b'[' || !self.peek_at(1).is_ascii_digit() {
            return None;
        }
        let mut len = 1;
        while self.peek_at(len).is_ascii_digit() {
            len += 1;
        }
        if self.peek_at(len) != b']' {
            return None;
        }
        let digits = (self.pos + 1, self.pos + len);
        self.pos += len + 1;
        Some(digits)
    }

    fn lex_operator(&mut self) -> Option<BitOp> {
        let op = match (self.peek(), self.peek_at(1)) {
            (b'&', b'&') => {
                self.pos += 2;
                return Some(BitOp::And);
            }
            (b'|', b'|') => {
                self.pos += 2;
                return Some(BitOp::Or);
            }
            (b'&', _) => BitOp::And,
            (b'|', _) => BitOp::Or,
            (b'^', _) => BitOp::Xor,
            _ => return None,
        };
        self.pos += 1;
        Some(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(expr: &str) -> Vec<ExprToken> {
        tokenize(expr).into_iter().map(|t| t.kind).collect()
    }

    fn ident(name: &str) -> ExprToken {
        ExprToken::Identifier(name.into())
    }

    fn indexed(name: &str, index: &str) -> ExprToken {
        ExprToken::IndexedIdentifier {
            name: name.into(),
            index: index.into(),
        }
    }

    #[test]
    fn simple_binary() {
        assert_eq!(
            kinds("sw[1] & sw[2]"),
            vec![indexed("sw", "1"), ExprToken::Operator(BitOp::And), indexed("sw", "2")]
        );
    }

    #[test]
    fn logical_and_bitwise_spellings() {
        assert_eq!(
            kinds("a&&b||c^d|e&f"),
            vec![
                ident("a"),
                ExprToken::Operator(BitOp::And),
                ident("b"),
                ExprToken::Operator(BitOp::Or),
                ident("c"),
                ExprToken::Operator(BitOp::Xor),
                ident("d"),
                ExprToken::Operator(BitOp::Or),
                ident("e"),
                ExprToken::Operator(BitOp::And),
                ident("f"),
            ]
        );
    }

    #[test]
    fn negation_forms() {
        assert_eq!(
            kinds("!sw[6] !w1"),
            vec![
                ExprToken::NegatedIndexedIdentifier {
                    name: "sw".into(),
                    index: "6".into()
                },
                ExprToken::NegatedIdentifier("w1".into()),
            ]
        );
    }

    #[test]
    fn double_negation_keeps_one() {
        let lexed = lex("!!x");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![ExprToken::NegatedIdentifier("x".into())]
        );
        assert_eq!(lexed.tokens[0].span, Span::new(1, 3));
        assert_eq!(lexed.ignored, vec![Span::new(0, 1)]);
    }

    #[test]
    fn parentheses_are_ignored() {
        let lexed = lex("(a & b) | ~c");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![
                ident("a"),
                ExprToken::Operator(BitOp::And),
                ident("b"),
                ExprToken::Operator(BitOp::Or),
                ident("c"),
            ]
        );
        assert_eq!(
            lexed.ignored,
            vec![Span::new(0, 1), Span::new(6, 7), Span::new(10, 11)]
        );
    }

    #[test]
    fn incomplete_index_splits_tokens() {
        let lexed = lex("sw[a] sw[12");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
            vec![ident("sw"), ident("a"), ident("sw"), ident("12")]
        );
        assert_eq!(lexed.ignored.len(), 3);
    }

    #[test]
    fn slice_syntax_not_supported() {
        assert_eq!(kinds("sw[3:0]"), vec![ident("sw"), ident("3"), ident("0")]);
    }

    #[test]
    fn spans_cover_token_text() {
        let src = "  w1 ^ !btn[4]";
        let toks = tokenize(src);
        let texts: Vec<_> = toks
            .iter()
            .map(|t| &src[t.span.start as usize..t.span.end as usize])
            .collect();
        assert_eq!(texts, vec!["w1", "^", "!btn[4]"]);
    }

    #[test]
    fn non_ascii_is_skipped_whole() {
        let lexed = lex("a → b");
        assert_eq!(lexed.tokens.len(), 2);
        assert_eq!(lexed.ignored, vec![Span::new(2, 5)]);
    }

    #[test]
    fn lone_bang_is_ignored() {
        let lexed = lex("! a");
        assert_eq!(lexed.tokens.len(), 1);
        assert_eq!(lexed.tokens[0].kind, ident("a"));
        assert_eq!(lexed.ignored, vec![Span::new(0, 1)]);
    }

    #[test]
    fn empty_expression() {
        assert_eq!(lex(""), LexedExpr::default());
        assert_eq!(lex("   "), LexedExpr::default());
    }
}
