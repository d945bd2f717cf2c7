use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Literal-bearing variants (`Int`, `Float`, `Str`, `Ident`, `Illegal`) keep
/// the exact source spelling; numeric parsing happens later, in the parser.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+\.[0-9]*", |lex| lex.slice().to_string())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().to_string())]
    Float(String),
    /// Integer literal tokens, such as `42`, `0x2a`, `0o52` or `0b101010`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| lex.slice().to_string())]
    #[regex(r"0[oO][0-7]+", |lex| lex.slice().to_string())]
    #[regex(r"0[bB][01]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens. Double-quoted, no escape processing; an
    /// unterminated string runs to the end of the input.
    #[regex(r#""[^"]*"?"#, read_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[A-Za-z_][A-Za-z_0-9]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// `func`
    #[token("func")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `break`
    #[token("break")]
    Break,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `=`
    #[token("=")]
    Assign,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    LogicalAnd,
    /// `||`
    #[token("||")]
    LogicalOr,
    /// `**`
    #[token("**")]
    Power,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// End of input. A literal NUL byte also lexes as `Eof`; the language
    /// treats byte 0 as the end-of-input sentinel.
    #[token("\0")]
    Eof,
    /// Any byte no other rule recognizes.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
    /// Spaces, tabs and line breaks between tokens.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Whitespace,
}

impl Token {
    /// Returns the token kind as it appears in parser error messages:
    /// the uppercase tag for literal-bearing kinds and keywords, the source
    /// symbol for punctuation and operators.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "FLOAT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Ident(_) => "IDENT",
            Self::Function => "FUNCTION",
            Self::Return => "RETURN",
            Self::Break => "BREAK",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::For => "FOR",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Power => "**",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Bang => "!",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Eof => "EOF",
            Self::Illegal(_) => "ILLEGAL",
            Self::Whitespace => "WHITESPACE",
        }
    }
}

/// Reads the body of a string literal from the current token slice.
///
/// Strips the opening quote and, when the literal is terminated, the closing
/// quote. No escape sequences are processed.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The string contents without the surrounding quotes.
fn read_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let body = slice.strip_prefix('"').unwrap_or(slice);
    body.strip_suffix('"').unwrap_or(body).to_string()
}

/// Pull-based lexer over a source string.
///
/// Wraps the generated Logos lexer behind the `next_token` contract the
/// parser consumes: one token per call, `Token::Eof` on every call after the
/// input is exhausted, and `Token::Illegal` for bytes no rule matches.
///
/// # Example
/// ```
/// use doge::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("x = 5;");
///
/// assert_eq!(lexer.next_token(), Token::Ident("x".to_string()));
/// assert_eq!(lexer.next_token(), Token::Assign);
/// assert_eq!(lexer.next_token(), Token::Int("5".to_string()));
/// assert_eq!(lexer.next_token(), Token::Semicolon);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// assert_eq!(lexer.next_token(), Token::Eof);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { inner: Token::lexer(input), }
    }

    /// Produces the next token.
    ///
    /// Returns `Token::Eof` once the input is exhausted and keeps returning
    /// it on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            None => Token::Eof,
        }
    }
}
