use sqlx::{Encode, FromRow, PgPool, Postgres, QueryBuilder, Type, postgres::PgRow};

use super::{SortField, SortOrder};
use crate::dto::common::PaginationParams;
use crate::error::Result;

/// A single bounded read query against one table.
pub struct Criteria<'args> {
    query: QueryBuilder<'args, Postgres>,
}

impl<'args> Criteria<'args> {
    /// `source` is everything up to (but excluding) the `WHERE` clause,
    /// including any joins.
    pub fn new(source: &str) -> Self {
        let mut query = QueryBuilder::new(source);
        query.push(" WHERE 1=1");
        Self { query }
    }

    /// Case-insensitive substring match. Absent or blank values add nothing.
    pub fn contains(&mut self, column: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.query.push(" AND ");
            self.query.push(column);
            self.query.push(" ILIKE ");
            self.query.push_bind(like_pattern(value));
        }
        self
    }

    pub fn equals<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        self.compare(column, "=", value)
    }

    /// Strict `>`; equal values never match.
    pub fn greater_than<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        self.compare(column, ">", value)
    }

    /// Strict `<`; equal values never match.
    pub fn less_than<T>(&mut self, column: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        self.compare(column, "<", value)
    }

    fn compare<T>(&mut self, column: &str, operator: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.query.push(" AND ");
            self.query.push(column);
            self.query.push(" ");
            self.query.push(operator);
            self.query.push(" ");
            self.query.push_bind(value);
        }
        self
    }

    /// Appends a raw predicate followed by one bound value, e.g.
    /// `push_predicate("additional_info @> ", json)`.
    pub fn push_predicate<T>(&mut self, predicate: &str, value: Option<T>) -> &mut Self
    where
        T: 'args + Encode<'args, Postgres> + Type<Postgres> + Send,
    {
        if let Some(value) = value {
            self.query.push(" AND ");
            self.query.push(predicate);
            self.query.push_bind(value);
        }
        self
    }

    /// Case-insensitive substring match against a related table.
    ///
    /// `subquery` is an `EXISTS` body ending with the column to match, e.g.
    /// `SELECT 1 FROM results r INNER JOIN sports s ON ... WHERE ... AND s.name`.
    pub fn exists_containing(&mut self, subquery: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.query.push(" AND EXISTS (");
            self.query.push(subquery);
            self.query.push(" ILIKE ");
            self.query.push_bind(like_pattern(value));
            self.query.push(")");
        }
        self
    }

    /// Orders by the resolved field with `tiebreaker` as a secondary key.
    pub fn order_by<F: SortField>(
        &mut self,
        field: F,
        order: SortOrder,
        tiebreaker: &str,
    ) -> &mut Self {
        self.query.push(" ORDER BY ");
        self.query.push(field.as_column());
        self.query.push(" ");
        self.query.push(order.as_sql());
        if field.as_column() != tiebreaker {
            self.query.push(", ");
            self.query.push(tiebreaker);
        }
        self
    }

    pub fn order_by_column(&mut self, column: &str) -> &mut Self {
        self.query.push(" ORDER BY ");
        self.query.push(column);
        self
    }

    pub fn paginate(&mut self, pagination: &PaginationParams) -> &mut Self {
        self.query.push(" LIMIT ");
        self.query.push_bind(pagination.limit);
        self.query.push(" OFFSET ");
        self.query.push_bind(pagination.skip);
        self
    }

    pub fn sql(&self) -> &str {
        self.query.sql()
    }

    pub async fn fetch_all<T>(mut self, pool: &PgPool) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let rows = self.query.build_query_as::<T>().fetch_all(pool).await?;
        Ok(rows)
    }
}

/// Wraps `value` in `%` after escaping LIKE metacharacters, so the match is
/// a literal substring.
fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
