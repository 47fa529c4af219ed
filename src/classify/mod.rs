mod normalize;

pub use normalize::normalize;

/// Tag used when the statement has no leading token.
pub const OTHER_SQL_TYPE: &str = "other";

/// Statement type of `sql`: the first token of its normalized form.
pub fn sql_type(sql: &str) -> String {
    normalize(sql)
        .split_whitespace()
        .next()
        .unwrap_or(OTHER_SQL_TYPE)
        .to_string()
}
