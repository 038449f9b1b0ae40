use std::collections::HashMap;

use lazy_static::lazy_static;

use super::token::TokenKind;

/// The two decorative phrases the reference source scatters through example
/// programs. They carry no meaning and are skipped like whitespace wherever
/// they occur, matching `skip_hanlang_special` in the original lexer.
pub const DECORATIVE_MARKERS: [&str; 2] = ["개발자한준후가 만든언어입니다.", "감사합니다."];

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("변수", TokenKind::Let);
        m.insert("상수", TokenKind::Const);
        m.insert("함수", TokenKind::Fn);
        m.insert("반환", TokenKind::Return);
        m.insert("만약", TokenKind::If);
        m.insert("아니면", TokenKind::Else);
        m.insert("아니면만약", TokenKind::Elif);
        m.insert("반복", TokenKind::For);
        m.insert("동안", TokenKind::While);
        m.insert("중단", TokenKind::Break);
        m.insert("계속", TokenKind::Continue);
        m.insert("클래스", TokenKind::Class);
        m.insert("참", TokenKind::True);
        m.insert("거짓", TokenKind::False);
        m.insert("없음", TokenKind::Nil);
        m.insert("그리고", TokenKind::And);
        m.insert("또는", TokenKind::Or);
        m.insert("아님", TokenKind::Not);
        m.insert("출력", TokenKind::Print);
        m.insert("입력", TokenKind::Input);
        m.insert("시도", TokenKind::Try);
        m.insert("잡기", TokenKind::Catch);
        m.insert("마침내", TokenKind::Finally);
        m.insert("던지기", TokenKind::Throw);
        m
    };
}

/// Look up a scanned identifier against the keyword table.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).cloned()
}
