use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer};

const LITERAL_PLACEHOLDER: &str = "?";

/// Canonical form of a statement: comments and whitespace dropped, tokens
/// separated by one space, unquoted words lower-cased, literals replaced by `?`.
///
/// Text the tokenizer rejects (unterminated quotes and the like) is only
/// lower-cased and whitespace-collapsed.
pub fn normalize(sql: &str) -> String {
    let dialect = MySqlDialect {};
    match Tokenizer::new(&dialect, sql).tokenize() {
        Ok(tokens) => tokens
            .iter()
            .filter_map(normalize_token)
            .collect::<Vec<_>>()
            .join(" "),
        Err(_) => sql
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn normalize_token(token: &Token) -> Option<String> {
    match token {
        Token::Whitespace(_) | Token::EOF => None,
        Token::Word(word) if word.quote_style.is_none() => Some(word.value.to_lowercase()),
        Token::Number(..)
        | Token::SingleQuotedString(_)
        | Token::DoubleQuotedString(_)
        | Token::NationalStringLiteral(_)
        | Token::EscapedStringLiteral(_)
        | Token::HexStringLiteral(_)
        | Token::SingleQuotedByteStringLiteral(_)
        | Token::DoubleQuotedByteStringLiteral(_) => Some(LITERAL_PLACEHOLDER.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize("SELECT  *\n\tFROM   Users"), "select * from users");
    }

    #[test]
    fn test_normalize_redacts_literals() {
        assert_eq!(
            normalize("select name from t where id = 42 and tag = 'x'"),
            "select name from t where id = ? and tag = ?"
        );
        assert_eq!(normalize("INSERT INTO t VALUES (\"a\", 1.5)"), "insert into t values ( ? , ? )");
    }

    #[test]
    fn test_normalize_keeps_quoted_identifiers() {
        assert_eq!(normalize("SELECT `Name` FROM t"), "select `Name` from t");
    }

    #[test]
    fn test_normalize_drops_comments() {
        assert_eq!(normalize("/* hint */ select 1 -- trailing"), "select ?");
    }

    #[test]
    fn test_normalize_untokenizable_falls_back() {
        assert_eq!(normalize("SELECT 'unterminated"), "select 'unterminated");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \n "), "");
    }
}
