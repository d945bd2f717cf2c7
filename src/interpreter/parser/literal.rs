use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence, token_to_assign_operator, token_precedence},
    },
};

/// Parses the text of an integer literal, honoring base prefixes.
///
/// `0x`/`0X` selects hexadecimal, `0o`/`0O` octal, `0b`/`0B` binary;
/// everything else parses as decimal.
///
/// # Parameters
/// - `text`: The literal exactly as spelled in the source.
///
/// # Returns
/// The parsed value, or `None` when it does not fit an `i64`.
#[must_use]
pub fn parse_integer_text(text: &str) -> Option<i64> {
    if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return i64::from_str_radix(digits, 16).ok();
    }
    if let Some(digits) = text.strip_prefix("0o").or_else(|| text.strip_prefix("0O")) {
        return i64::from_str_radix(digits, 8).ok();
    }
    if let Some(digits) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        return i64::from_str_radix(digits, 2).ok();
    }
    text.parse().ok()
}

impl Parser<'_> {
    /// Parses an integer literal from the current token.
    pub(crate) fn parse_integer_literal(&mut self) -> Option<Expr> {
        let Token::Int(literal) = self.cur() else {
            unreachable!()
        };
        let literal = literal.clone();

        match parse_integer_text(&literal) {
            Some(value) => Some(Expr::Integer(value)),
            None => {
                self.record(ParseError::InvalidIntegerLiteral { literal });
                None
            },
        }
    }

    /// Parses a float literal from the current token.
    pub(crate) fn parse_float_literal(&mut self) -> Option<Expr> {
        let Token::Float(literal) = self.cur() else {
            unreachable!()
        };
        let literal = literal.clone();

        match literal.parse() {
            Ok(value) => Some(Expr::Float(value)),
            Err(_) => {
                self.record(ParseError::InvalidFloatLiteral { literal });
                None
            },
        }
    }

    /// Parses an identifier, or an assignment when the next token belongs to
    /// the assignment family (`=`, `+=`, `-=`, `*=`, `/=`).
    ///
    /// The right side of an assignment parses at the assignment token's own
    /// precedence, i.e. the whole rest of the expression.
    pub(crate) fn parse_identifier(&mut self) -> Option<Expr> {
        let Token::Ident(name) = self.cur() else {
            unreachable!()
        };
        let name = name.clone();

        if let Some(operator) = token_to_assign_operator(self.peek()) {
            self.next_token();
            let precedence = token_precedence(self.cur());
            self.next_token();
            let value = self.parse_expression(precedence)?;

            return Some(Expr::Assign { operator,
                                       name,
                                       value: Box::new(value) });
        }

        Some(Expr::Identifier(name))
    }

    /// Parses a parenthesized expression.
    pub(crate) fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses an array literal: `[ expr (, expr)* ]`.
    pub(crate) fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expr::Array { elements })
    }

    /// Parses a hash literal: `{ key : value (, key : value)* }`.
    pub(crate) fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expr::Hash { pairs })
    }

    /// Parses a comma-separated expression list up to a closing token.
    ///
    /// Shared by array literals and call arguments. An immediately
    /// encountered closing token produces an empty list.
    pub(crate) fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
