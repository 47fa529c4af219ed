use serde::de::DeserializeOwned;

/// Result of decoding one line of a line-delimited JSON source.
///
/// Input is never rejected: a line that fails to decode still produces a
/// record, the zero value of `T`, tagged as `Malformed` so callers can tell
/// the two apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded<T> {
    Ok(T),
    Malformed(T),
}

impl<T> Decoded<T> {
    pub fn is_malformed(&self) -> bool {
        matches!(self, Decoded::Malformed(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Decoded::Ok(value) | Decoded::Malformed(value) => value,
        }
    }
}

pub fn decode_line<T>(line: &str) -> Decoded<T>
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_str(line) {
        Ok(value) => Decoded::Ok(value),
        Err(_) => Decoded::Malformed(T::default()),
    }
}
