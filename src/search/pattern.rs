use super::Predicate;

/// How a search value is matched against a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPattern {
    /// `-`
    Exact,
    /// `<-`, the column ends with the value
    Suffix,
    /// `->`, the column starts with the value
    Prefix,
    /// `<->`
    Substring,
}

impl SearchPattern {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "-" => Some(Self::Exact),
            "<-" => Some(Self::Suffix),
            "->" => Some(Self::Prefix),
            "<->" => Some(Self::Substring),
            _ => None,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Exact => "-",
            Self::Suffix => "<-",
            Self::Prefix => "->",
            Self::Substring => "<->",
        }
    }

    pub fn predicate(self, column: &str, value: &str) -> Predicate {
        let column = column.to_string();
        match self {
            Self::Exact => Predicate::Eq {
                column,
                value: value.to_string(),
            },
            Self::Suffix => Predicate::Like {
                column,
                pattern: format!("%{value}"),
            },
            Self::Prefix => Predicate::Like {
                column,
                pattern: format!("{value}%"),
            },
            Self::Substring => Predicate::Like {
                column,
                pattern: format!("%{value}%"),
            },
        }
    }
}
