mod keywords;
mod token;
mod tokens;

pub use keywords::DECORATIVE_MARKERS;
pub use token::*;
pub use tokens::*;

use std::{error::Error, fmt::Display, iter::Peekable, str::Chars};

use crate::ast::Position;

use self::keywords::lookup_keyword;

#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

pub type LexResult<T> = Result<T, LexError>;

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, col) = self.position;
        write!(f, "렉서 오류 (줄 {line}, 열 {col}): {}", self.message)
    }
}

impl Error for LexError {}

/// Hand-written, char-by-char lexer for HanLang source.
///
/// Mirrors the reference implementation's single left-to-right scan: skip
/// whitespace/comments/decorative markers, then dispatch on the next
/// character's class (digit, quote, identifier-start, operator).
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    iterator: Peekable<Chars<'a>>,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: vec![],
            iterator: source.chars().peekable(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.iterator.peek().copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let next = self.iterator.next()?;
        self.pos += next.len_utf8();
        if next == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(next)
    }

    fn error(&self, message: impl Into<String>) -> LexError {
        LexError {
            message: message.into(),
            position: (self.line, self.col),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.advance();
        }
    }

    fn skip_comment(&mut self) -> LexResult<bool> {
        if self.peek() == Some('#') {
            while self.peek().is_some_and(|c| c != '\n') {
                self.advance();
            }
            return Ok(true);
        }
        if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            self.advance();
            self.advance();
            loop {
                match self.peek() {
                    None => return Err(self.error("종료되지 않은 주석")),
                    Some('*') if self.peek_at(1) == Some('/') => {
                        self.advance();
                        self.advance();
                        return Ok(true);
                    }
                    _ => {
                        self.advance();
                    }
                }
            }
        }
        Ok(false)
    }

    fn skip_decorative_marker(&mut self) -> bool {
        for marker in DECORATIVE_MARKERS {
            if self.source[self.pos..].starts_with(marker) {
                for _ in marker.chars() {
                    self.advance();
                }
                return true;
            }
        }
        false
    }

    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        loop {
            self.skip_whitespace();

            if self.skip_comment()? {
                continue;
            }
            if self.skip_decorative_marker() {
                continue;
            }

            let Some(next) = self.peek() else { break };
            let position = (self.line, self.col);

            if next == '\n' {
                self.advance();
                self.tokens.push(Token::new(TokenKind::Newline, position));
                continue;
            }

            if next == '"' || next == '\'' {
                let token = self.lex_string(next, position)?;
                self.tokens.push(token);
                continue;
            }

            if next.is_ascii_digit() {
                let token = self.lex_number(position)?;
                self.tokens.push(token);
                continue;
            }

            if next.is_alphabetic() || next == '_' || (next as u32) > 127 {
                let token = self.lex_identifier(position);
                self.tokens.push(token);
                continue;
            }

            let token = self.lex_operator(position)?;
            self.tokens.push(token);
        }

        self.tokens.push(Token::new(TokenKind::Eof, (self.line, self.col)));
        Ok(self.tokens)
    }

    fn lex_string(&mut self, quote: char, position: Position) -> LexResult<Token> {
        self.advance();
        let mut value = String::new();

        loop {
            match self.peek() {
                None => return Err(self.error("문자열이 닫히지 않았습니다")),
                Some(c) if c == quote => break,
                Some('\n') => return Err(self.error("문자열이 닫히지 않았습니다")),
                Some('\\') => {
                    self.advance();
                    match self.advance() {
                        None => return Err(self.error("문자열이 닫히지 않았습니다")),
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('\\') => value.push('\\'),
                        Some(c) if c == quote => value.push(quote),
                        Some(other) => value.push(other),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.advance();
        Ok(Token::new(TokenKind::Str(value), position))
    }

    fn lex_number(&mut self, position: Position) -> LexResult<Token> {
        let mut raw = String::new();
        let mut has_dot = false;

        while let Some(c) = self.peek() {
            if c == '.' {
                if has_dot || !self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
                    break;
                }
                has_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            raw.push(c);
            self.advance();
        }

        if has_dot {
            let value = raw
                .parse::<f64>()
                .map_err(|_| self.error("숫자를 해석할 수 없습니다"))?;
            Ok(Token::new(TokenKind::Float(value), position))
        } else {
            let value = raw
                .parse::<i64>()
                .map_err(|_| self.error("숫자를 해석할 수 없습니다"))?;
            Ok(Token::new(TokenKind::Int(value), position))
        }
    }

    fn lex_identifier(&mut self, position: Position) -> Token {
        let mut raw = String::new();

        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || (c as u32) > 127 {
                raw.push(c);
                self.advance();
            } else {
                break;
            }
        }

        match lookup_keyword(&raw) {
            Some(kind) => Token::new(kind, position),
            None => Token::new(TokenKind::Ident(raw), position),
        }
    }

    fn lex_operator(&mut self, position: Position) -> LexResult<Token> {
        let c = self.advance().expect("checked by caller");

        let kind = match c {
            '+' => self.select('=', TokenKind::PlusAssign, TokenKind::Plus),
            '-' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::MinusAssign
                } else if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '*' => {
                if self.peek() == Some('*') {
                    self.advance();
                    TokenKind::StarStar
                } else if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::StarAssign
                } else {
                    TokenKind::Star
                }
            }
            '/' => self.select('=', TokenKind::SlashAssign, TokenKind::Slash),
            '%' => TokenKind::Percent,
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Eq
                } else if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::FatArrow
                } else {
                    TokenKind::Assign
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Ne
                } else {
                    return Err(self.error("예상치 못한 문자: !"));
                }
            }
            '<' => self.select('=', TokenKind::Le, TokenKind::Lt),
            '>' => self.select('=', TokenKind::Ge, TokenKind::Gt),
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            other => return Err(self.error(format!("예상치 못한 문자: {other}"))),
        };

        Ok(Token::new(kind, position))
    }

    fn select(&mut self, expect: char, if_match: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.peek() == Some(expect) {
            self.advance();
            if_match
        } else {
            otherwise
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .lex()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_identifier() {
        assert_eq!(kinds("이름"), vec![TokenKind::Ident("이름".into()), TokenKind::Eof]);
    }

    #[test]
    fn lexes_integer_and_float() {
        assert_eq!(
            kinds("42 3.14"),
            vec![TokenKind::Int(42), TokenKind::Float(3.14), TokenKind::Eof]
        );
    }

    #[test]
    fn lexes_keyword_and_declaration() {
        assert_eq!(
            kinds("변수 나이 = 25"),
            vec![
                TokenKind::Let,
                TokenKind::Ident("나이".into()),
                TokenKind::Assign,
                TokenKind::Int(25),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn lexes_string_with_escapes() {
        assert_eq!(
            kinds("\"a\\nb\""),
            vec![TokenKind::Str("a\nb".into()), TokenKind::Eof]
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(Lexer::new("\"unterminated").lex().is_err());
    }

    #[test]
    fn bare_bang_is_an_error() {
        assert!(Lexer::new("!참").lex().is_err());
    }

    #[test]
    fn skips_decorative_markers() {
        assert_eq!(
            kinds("변수 x = 1 개발자한준후가 만든언어입니다."),
            vec![
                TokenKind::Let,
                TokenKind::Ident("x".into()),
                TokenKind::Assign,
                TokenKind::Int(1),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn skips_line_and_block_comments() {
        assert_eq!(
            kinds("1 # 코멘트\n/* 여러줄\n주석 */ 2"),
            vec![
                TokenKind::Int(1),
                TokenKind::Newline,
                TokenKind::Int(2),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn maximal_munch_on_power_operator() {
        assert_eq!(
            kinds("2**3"),
            vec![TokenKind::Int(2), TokenKind::StarStar, TokenKind::Int(3), TokenKind::Eof]
        );
    }
}
