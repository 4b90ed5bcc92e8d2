use sqlx::{Postgres, QueryBuilder};

use super::{Predicate, validate_identifier};
use crate::errors::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("{other} is not a sort direction. Use `asc` or `desc`.")),
        }
    }
}

/// A single-table select, handed to whatever executes queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    columns: String,
    from: String,
    conditions: Vec<Predicate>,
    order_by: Option<(String, SortDirection)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectQuery {
    pub fn new(columns: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            columns: columns.into(),
            from: from.into(),
            conditions: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    #[must_use]
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.conditions.push(predicate);
        self
    }

    #[must_use]
    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some((column.into(), direction));
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The statement as a sqlx builder, ready for `build()` and execution
    /// by whoever owns the connection.
    pub fn build(&self) -> Result<QueryBuilder<'static, Postgres>, SearchError> {
        self.render().map(|(builder, _)| builder)
    }

    /// Renders the statement and its bind values.
    pub fn to_sql(&self) -> Result<(String, Vec<String>), SearchError> {
        let (builder, args) = self.render()?;
        Ok((builder.sql().to_string(), args))
    }

    fn render(&self) -> Result<(QueryBuilder<'static, Postgres>, Vec<String>), SearchError> {
        validate_identifier(&self.from)?;

        let mut builder = QueryBuilder::new("SELECT ");
        builder.push(&self.columns).push(" FROM ").push(&self.from);
        let mut args = Vec::new();

        // conditions are AND-ed together
        for (i, predicate) in self.conditions.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_to(&mut builder, &mut args)?;
        }
        if let Some((column, direction)) = &self.order_by {
            validate_identifier(column)?;
            builder
                .push(" ORDER BY ")
                .push(column)
                .push(" ")
                .push(direction.as_str());
        }
        if let Some(limit) = self.limit {
            builder.push(" LIMIT ").push(limit);
        }
        if let Some(offset) = self.offset {
            builder.push(" OFFSET ").push(offset);
        }
        Ok((builder, args))
    }
}
