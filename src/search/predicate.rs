use sqlx::{Postgres, QueryBuilder};

use crate::errors::SearchError;

/// A filter condition tree. Values are always sent as bind parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Eq { column: String, value: String },
    Like { column: String, pattern: String },
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Pushes this predicate onto `builder`, binding its values and
    /// recording them in `args` in bind order.
    pub fn push_to(
        &self,
        builder: &mut QueryBuilder<'static, Postgres>,
        args: &mut Vec<String>,
    ) -> Result<(), SearchError> {
        match self {
            Self::Eq { column, value } => {
                validate_identifier(column)?;
                builder.push(column).push(" = ").push_bind(value.clone());
                args.push(value.clone());
            }
            Self::Like { column, pattern } => {
                validate_identifier(column)?;
                builder.push(column).push(" LIKE ").push_bind(pattern.clone());
                args.push(pattern.clone());
            }
            // an empty group matches nothing
            Self::Or(predicates) if predicates.is_empty() => {
                builder.push("(1=0)");
            }
            Self::Or(predicates) => {
                builder.push("(");
                for (i, predicate) in predicates.iter().enumerate() {
                    if i > 0 {
                        builder.push(" OR ");
                    }
                    predicate.push_to(builder, args)?;
                }
                builder.push(")");
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Or(predicates) => predicates.is_empty(),
            Self::Eq { .. } | Self::Like { .. } => false,
        }
    }
}

// table and column names are interpolated, so only plain identifiers
// (optionally schema-qualified) are allowed
pub fn validate_identifier(identifier: &str) -> Result<(), SearchError> {
    let valid = !identifier.is_empty()
        && !identifier.starts_with('.')
        && !identifier.ends_with('.')
        && identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if valid {
        Ok(())
    } else {
        Err(SearchError::InvalidIdentifier(identifier.to_string()))
    }
}
