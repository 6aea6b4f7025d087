// Query Layer - Parameterized SQL statement assembly
//
// Statements use PostgreSQL positional placeholders ($1, $2, ...). The bound
// parameter list is kept in lock-step with the placeholders emitted.

pub mod property_search;

#[cfg(test)]
mod property_search_test;

pub use property_search::build_property_search;

/// A bound statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Statement text plus its ordered parameter list
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    sql: String,
    params: Vec<SqlParam>,
}

impl SearchQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }
}

/// Incremental statement builder.
///
/// `has_predicate` is tracked on its own: non-predicate parameters (the
/// HAVING threshold, the limit) also grow `params`.
#[derive(Debug)]
pub(crate) struct StatementBuilder {
    sql: String,
    params: Vec<SqlParam>,
    has_predicate: bool,
}

impl StatementBuilder {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            sql: base.trim().to_string(),
            params: Vec::new(),
            has_predicate: false,
        }
    }

    /// Append a parameter and return its 1-indexed placeholder position
    pub(crate) fn bind(&mut self, param: SqlParam) -> usize {
        self.params.push(param);
        self.params.len()
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        self.sql.push('\n');
        self.sql.push_str(line);
    }

    /// Bind `param` and append `<column> <op> $n`, introduced by WHERE or AND
    pub(crate) fn push_predicate(&mut self, column: &str, op: &str, param: SqlParam) {
        let position = self.bind(param);
        let keyword = if self.has_predicate { "AND" } else { "WHERE" };
        self.has_predicate = true;
        self.push_line(&format!("{} {} {} ${}", keyword, column, op, position));
    }

    pub(crate) fn finish(self) -> SearchQuery {
        SearchQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_predicate_uses_where_then_and() {
        let mut builder = StatementBuilder::new("SELECT * FROM t");
        builder.push_predicate("a", "=", SqlParam::Int(1));
        builder.push_predicate("b", "<=", SqlParam::Int(2));
        let query = builder.finish();
        assert_eq!(query.sql(), "SELECT * FROM t\nWHERE a = $1\nAND b <= $2");
        assert_eq!(query.params(), &[SqlParam::Int(1), SqlParam::Int(2)]);
    }

    #[test]
    fn test_plain_bind_does_not_count_as_predicate() {
        let mut builder = StatementBuilder::new("SELECT * FROM t");
        let position = builder.bind(SqlParam::Int(10));
        assert_eq!(position, 1);
        builder.push_predicate("a", "=", SqlParam::Text("x".into()));
        assert!(builder.finish().sql().ends_with("WHERE a = $2"));
    }
}
