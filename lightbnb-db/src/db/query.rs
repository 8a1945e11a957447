//! Dynamic SQL assembly
//!
//! Statements with an optional-filter shape are composed from fragments that
//! carry their bound values with them. A placeholder number is always the
//! position of its value in the bound list at the moment the fragment is
//! appended, so `$n` cannot drift from bind order. User-supplied values never
//! appear in the SQL text itself.

use sqlx::postgres::PgRow;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Builder for SELECT statements with optional filter conditions.
///
/// The first `filter` call opens the WHERE clause; every later one is joined
/// with AND. Unparameterized tails (GROUP BY, ORDER BY) go through `raw`,
/// single-value tails (HAVING, LIMIT) through `clause`.
#[derive(Debug)]
pub struct QueryBuilder {
    sql: String,
    values: Vec<SqlValue>,
    has_where: bool,
}

impl QueryBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            sql: base.into(),
            values: Vec::new(),
            has_where: false,
        }
    }

    /// Claim the next placeholder for `value`.
    fn placeholder(&mut self, value: SqlValue) -> String {
        self.values.push(value);
        format!("${}", self.values.len())
    }

    /// Append a filter condition. `expr` is the left-hand side including the
    /// comparison operator (e.g. `"city LIKE"`); the placeholder follows it.
    pub fn filter(&mut self, expr: &str, value: SqlValue) -> &mut Self {
        let placeholder = self.placeholder(value);
        let keyword = if self.has_where { "AND" } else { "WHERE" };
        self.has_where = true;
        self.sql
            .push_str(&format!("\n{} {} {}", keyword, expr, placeholder));
        self
    }

    /// Append SQL with no bound values.
    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.sql.push('\n');
        self.sql.push_str(fragment);
        self
    }

    /// Append a clause taking one bound value, e.g. `"LIMIT"` or
    /// `"HAVING AVG(rating) >="`.
    pub fn clause(&mut self, prefix: &str, value: SqlValue) -> &mut Self {
        let placeholder = self.placeholder(value);
        self.sql.push_str(&format!("\n{} {}", prefix, placeholder));
        self
    }

    /// The assembled SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound values, in placeholder order.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Execute the statement, binding every value in placeholder order.
    pub async fn fetch_all(&self, pool: &PgPool) -> DbResult<Vec<PgRow>> {
        let mut query = sqlx::query(&self.sql);
        for value in &self.values {
            query = match value {
                SqlValue::Text(text) => query.bind(text.as_str()),
                SqlValue::Int(int) => query.bind(*int),
                SqlValue::Float(float) => query.bind(*float),
            };
        }
        Ok(query.fetch_all(pool).await?)
    }
}

/// Builder for single-row INSERT statements with a dynamic column list.
///
/// Columns appear in the statement in the order they were added.
#[derive(Debug)]
pub struct InsertBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
}

impl InsertBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add a column and its value.
    pub fn column(&mut self, name: &'static str, value: SqlValue) -> &mut Self {
        self.columns.push(name);
        self.values.push(value);
        self
    }

    /// Add the column only when a value is present.
    pub fn column_opt(&mut self, name: &'static str, value: Option<SqlValue>) -> &mut Self {
        if let Some(value) = value {
            self.column(name, value);
        }
        self
    }

    /// Column names added so far, in statement order.
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Bound values, in placeholder order.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Assemble `INSERT INTO <table> (..) VALUES ($1..$n) RETURNING *`.
    ///
    /// An empty column set is reported as [`DbError::EmptyInsert`] rather
    /// than handed to the server as malformed SQL.
    pub fn build(&self) -> DbResult<String> {
        if self.columns.is_empty() {
            return Err(DbError::EmptyInsert { table: self.table });
        }
        let placeholders: Vec<String> = (1..=self.columns.len())
            .map(|position| format!("${}", position))
            .collect();
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        ))
    }

    /// Execute the insert, returning the stored row.
    pub async fn fetch_one(&self, pool: &PgPool) -> DbResult<PgRow> {
        let sql = self.build()?;
        let mut query = sqlx::query(&sql);
        for value in &self.values {
            query = match value {
                SqlValue::Text(text) => query.bind(text.as_str()),
                SqlValue::Int(int) => query.bind(*int),
                SqlValue::Float(float) => query.bind(*float),
            };
        }
        Ok(query.fetch_one(pool).await?)
    }
}
