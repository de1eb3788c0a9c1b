use crate::error::CodingError;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap()
}

pub fn error(msg: &str, line: usize, column: usize) -> CodingError {
    CodingError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}
