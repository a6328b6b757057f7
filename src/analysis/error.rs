/// Errors surfaced by the query layer. The HTTP adapter maps the
/// variants onto 400, 404, and 500; the CLI treats them all as fatal.
#[derive(Debug)]
pub enum QueryError {
    InvalidRequest(String),
    NotFound(String),
    Internal(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(message) => write!(f, "{}", message),
            Self::NotFound(message) => write!(f, "{}", message),
            Self::Internal(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<duckdb::Error> for QueryError {
    fn from(e: duckdb::Error) -> Self {
        Self::Internal(e.to_string())
    }
}
