#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("`{0}` is not a valid table or column name")]
    InvalidIdentifier(String),
}
