//! # pgbuf
//!
//! A bare-bones, no-magic accumulator for PostgreSQL query text and
//! positional parameters.
//!
//! ## Features
//!
//! - **SQL explicit**: fragments are appended verbatim; no parsing, no
//!   validation, no inserted whitespace or keywords
//! - **Automatic numbering**: `?` markers become `$1, $2, ...` in call order
//! - **Conditional fragments**: `where_if` and friends skip the fragment and
//!   its parameter when the value is `None` (at any `Option` depth)
//! - **Fixed clause order**: select, from, where and order buffers are
//!   rendered in that order, whatever order they were written in
//! - **Driver-ready output**: `params_ref()` plugs straight into
//!   `tokio-postgres`
//!
//! ## Example
//!
//! ```ignore
//! use pgbuf::Builder;
//!
//! let mut b = Builder::new();
//! b.add("SELECT id,name,age,dept", ());
//! b.add_from(" FROM employees ", ());
//! b.add_where("WHERE 1=1", ());
//! b.where_if(" AND dept = ?", Some("HR"));
//! b.where_if(" AND name = ?", None::<String>);
//! b.where_if(" AND age > ?", 30);
//! b.add_order(" ORDER BY id", ());
//!
//! assert_eq!(
//!     b.to_sql(),
//!     "SELECT id,name,age,dept FROM employees WHERE 1=1 AND dept = $1 AND age > $2 ORDER BY id"
//! );
//! let rows = client.query(&b.to_sql(), &b.params_ref()).await?;
//! ```

pub mod builder;
pub mod error;
pub mod param;
pub mod placeholder;

pub use builder::{Builder, Clause};
pub use error::{BufError, BufResult};
pub use param::{IntoParam, IntoParams, MaybeParam, Null, Param};
pub use placeholder::PlaceholderStyle;
