use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a conditional expression:
    ///
    /// ```text
    /// if (<condition>) { <block> }
    /// if (<condition>) { <block> } else { <block> }
    /// ```
    pub(crate) fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(&Token::Else) {
            self.next_token();

            if !self.expect_peek(&Token::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses a while loop: `while (<condition>) { <block> }`.
    pub(crate) fn parse_while_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::While { condition: Box::new(condition),
                           body })
    }

    /// Parses a for loop: `for (<init>; <condition>; <increment>) { <block> }`.
    pub(crate) fn parse_for_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.next_token();
        let init = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Semicolon) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Semicolon) {
            return None;
        }

        self.next_token();
        let increment = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::For { init: Box::new(init),
                         condition: Box::new(condition),
                         increment: Box::new(increment),
                         body })
    }

    /// Parses a function literal: `func (<params>) { <block> }`.
    pub(crate) fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::Function { parameters, body })
    }

    /// Parses a comma-separated parameter-name list up to `)`.
    ///
    /// Every parameter must be an identifier.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(&Token::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.parse_parameter_name()?);

        while self.peek_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.parse_parameter_name()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Reads the current token as a parameter name.
    fn parse_parameter_name(&mut self) -> Option<String> {
        if let Token::Ident(name) = self.cur() {
            Some(name.clone())
        } else {
            let found = self.cur().kind();
            self.record(ParseError::UnexpectedToken { expected: "IDENT",
                                                      found });
            None
        }
    }

    /// Parses the argument list of a call expression. The callee has already
    /// been parsed and the current token is `(`.
    pub(crate) fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Some(Expr::Call { function: Box::new(function),
                          arguments })
    }

    /// Parses an index expression. The target has already been parsed and
    /// the current token is `[`.
    pub(crate) fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expr::Index { left:  Box::new(left),
                           index: Box::new(index), })
    }
}
