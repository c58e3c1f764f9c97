//! The query accumulator.
//!
//! A [`Builder`] owns four text buffers (select, from, where, order) and one
//! positional parameter list. Fragments are appended verbatim, except that `?`
//! markers are replaced by `$n` tokens for the values supplied with them.
//! Nothing is parsed, validated, trimmed or separated: the caller writes every
//! keyword and every space.
//!
//! # Example
//!
//! ```ignore
//! use pgbuf::Builder;
//!
//! let mut b = Builder::new();
//! b.add("SELECT id, name", ());
//! b.add_from(" FROM employees", ());
//! b.add_where(" WHERE 1=1", ());
//! b.where_if(" AND dept = ?", dept);          // Option<String>
//! b.where_if(" AND age > ?", min_age);         // Option<i32>
//! b.add_order(" ORDER BY id", ());
//!
//! let rows = client.query(&b.to_sql(), &b.params_ref()).await?;
//! ```

mod clause;


pub use clause::Clause;

use crate::error::{BufError, BufResult};
use crate::param::{IntoParam, IntoParams, MaybeParam, Null, Param};
use crate::placeholder::PlaceholderStyle;
use std::fmt;
use tokio_postgres::types::ToSql;

static NULL: Null = Null;

/// A bare-bones accumulator of query text and positional parameters.
///
/// The parameter list only grows. Holes (unset positions) appear only through
/// [`Builder::set_param`] past the current length and are sent as SQL `NULL`
/// by [`Builder::params_ref`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    buffers: [String; 4],
    params: Vec<Option<Param>>,
    style: PlaceholderStyle,
}

impl Builder {
    /// Create an empty builder with the default `?` → `$n` style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with a custom placeholder style.
    pub fn with_style(style: PlaceholderStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// The placeholder style used by this builder.
    pub fn style(&self) -> PlaceholderStyle {
        self.style
    }

    // ==================== Unconditional appends ====================

    /// Append `sql` to `clause`, binding `values` to its markers left to right.
    ///
    /// Every value is appended to the parameter list, even when `sql` has
    /// fewer markers than values; markers without a value stay as written.
    pub fn push(&mut self, clause: Clause, sql: &str, values: impl IntoParams) -> &mut Self {
        let values = values.into_params();
        let first = self.params.len() + 1;
        let text = self.style.substitute(sql, first, values.len());

        #[cfg(feature = "tracing")]
        {
            let markers = sql.matches(self.style.marker).count();
            if values.len() > markers {
                tracing::trace!(
                    clause = %clause,
                    values = values.len(),
                    markers,
                    "values appended without a matching placeholder"
                );
            }
        }

        self.params.extend(values.into_iter().map(Some));
        self.append(clause, &text);
        self
    }

    /// Append to the select buffer. See [`Builder::push`].
    pub fn add(&mut self, sql: &str, values: impl IntoParams) -> &mut Self {
        self.push(Clause::Select, sql, values)
    }

    /// Append to the from buffer. See [`Builder::push`].
    pub fn add_from(&mut self, sql: &str, values: impl IntoParams) -> &mut Self {
        self.push(Clause::From, sql, values)
    }

    /// Append to the where buffer. See [`Builder::push`].
    pub fn add_where(&mut self, sql: &str, values: impl IntoParams) -> &mut Self {
        self.push(Clause::Where, sql, values)
    }

    /// Append to the order buffer. See [`Builder::push`].
    pub fn add_order(&mut self, sql: &str, values: impl IntoParams) -> &mut Self {
        self.push(Clause::Order, sql, values)
    }

    // ==================== Conditional appends ====================

    /// Append `sql` to `clause` only if `value` is present.
    ///
    /// An absent value (`None`, or an `Option` wrapping an empty `Option`)
    /// makes this a no-op: no text and no parameter. A present value is bound
    /// to the first marker only; any further markers stay literal.
    pub fn push_if(&mut self, clause: Clause, sql: &str, value: impl MaybeParam) -> &mut Self {
        match value.into_maybe_param() {
            Some(param) => self.push(clause, sql, param),
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(clause = %clause, sql, "skipped fragment for absent value");
                self
            }
        }
    }

    /// Conditionally append to the select buffer. See [`Builder::push_if`].
    pub fn add_if(&mut self, sql: &str, value: impl MaybeParam) -> &mut Self {
        self.push_if(Clause::Select, sql, value)
    }

    /// Conditionally append to the from buffer. See [`Builder::push_if`].
    pub fn from_if(&mut self, sql: &str, value: impl MaybeParam) -> &mut Self {
        self.push_if(Clause::From, sql, value)
    }

    /// Conditionally append to the where buffer. See [`Builder::push_if`].
    pub fn where_if(&mut self, sql: &str, value: impl MaybeParam) -> &mut Self {
        self.push_if(Clause::Where, sql, value)
    }

    /// Conditionally append to the order buffer. See [`Builder::push_if`].
    pub fn order_if(&mut self, sql: &str, value: impl MaybeParam) -> &mut Self {
        self.push_if(Clause::Order, sql, value)
    }

    // ==================== Positional parameters ====================

    /// Set the parameter at 1-based `index`.
    ///
    /// Within the current length the value is overwritten in place. Past the
    /// end, the list grows with holes up to `index - 1`. Text is never
    /// touched. Index `0` has no slot and is ignored; use
    /// [`Builder::try_set_param`] to get an error instead.
    pub fn set_param(&mut self, index: usize, value: impl IntoParam) -> &mut Self {
        if self.try_set_param(index, value).is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!(index, "set_param ignored: positions start at 1");
        }
        self
    }

    /// Checked variant of [`Builder::set_param`]; fails for index `0`.
    pub fn try_set_param(&mut self, index: usize, value: impl IntoParam) -> BufResult<&mut Self> {
        if index == 0 {
            return Err(BufError::InvalidParamIndex(index));
        }

        if index > self.params.len() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                from = self.params.len(),
                to = index,
                "growing parameter list with unset positions"
            );
            self.params.resize(index, None);
        }
        self.params[index - 1] = Some(value.into_param());
        Ok(self)
    }

    // ==================== Output ====================

    /// The parameter list in position order; `None` marks an unset position.
    ///
    /// This is a borrowed view: it reflects the builder at the time of the
    /// call and cannot be used to modify it.
    pub fn params(&self) -> &[Option<Param>] {
        &self.params
    }

    /// Parameter refs compatible with `tokio-postgres`, holes sent as `NULL`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| match p {
                Some(param) => param.as_dyn(),
                None => &NULL as &(dyn ToSql + Sync),
            })
            .collect()
    }

    /// Number of parameter positions, holes included.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// True when no text and no parameter has been added.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.buffers.iter().all(String::is_empty)
    }

    /// The text accumulated so far in one buffer.
    pub fn clause_sql(&self, clause: Clause) -> &str {
        &self.buffers[clause.index()]
    }

    /// Render the query: select, from, where and order buffers concatenated
    /// as written, with nothing inserted between them.
    pub fn to_sql(&self) -> String {
        let len = self.buffers.iter().map(String::len).sum();
        let mut out = String::with_capacity(len);
        for buffer in &self.buffers {
            out.push_str(buffer);
        }
        out
    }

    /// Consume the builder into its rendered text and parameter list.
    pub fn into_parts(self) -> (String, Vec<Option<Param>>) {
        let sql = self.to_sql();
        (sql, self.params)
    }

    fn append(&mut self, clause: Clause, text: &str) {
        if text.is_empty() {
            return;
        }
        self.buffers[clause.index()].push_str(text);
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for buffer in &self.buffers {
            f.write_str(buffer)?;
        }
        Ok(())
    }
}
