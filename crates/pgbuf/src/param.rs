//! Parameter values and the presence model used by conditional appends.
//!
//! - [`Param`] is a clone-friendly wrapper around any `tokio-postgres` [`ToSql`] value.
//! - [`IntoParam`] turns one concrete value into a [`Param`].
//! - [`MaybeParam`] decides whether a candidate value is present. `Option`
//!   layers are unwrapped recursively, so `Some(None)` is as absent as `None`.
//! - [`IntoParams`] is the argument list of an unconditional append: `()`, a
//!   single value, a tuple, an array, or a `Vec<Param>` built with [`params!`](crate::params).

use bytes::BytesMut;
use std::error::Error;
use std::fmt;
use std::sync::Arc;
use tokio_postgres::types::{IsNull, ToSql, Type};

/// A clone-friendly parameter wrapper using Arc.
///
/// Cloning a builder shares its parameter values instead of copying them.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Create a new parameter from any ToSql value.
    pub fn new<T: ToSql + Send + Sync + 'static>(value: T) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_dyn(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl fmt::Debug for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// SQL `NULL` for a parameter of any type.
///
/// Unset slots of a builder's parameter list are handed to the driver as this
/// value. It can also be bound explicitly, e.g. `builder.set_param(2, Null)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

impl ToSql for Null {
    fn to_sql(
        &self,
        _ty: &Type,
        _out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}

/// Conversion of a single concrete value into a [`Param`].
///
/// `Option<T>` is intentionally not an `IntoParam`: optional values go through
/// the conditional appends (`add_if`, `where_if`, ...) and [`MaybeParam`].
pub trait IntoParam {
    fn into_param(self) -> Param;
}

/// A candidate value for a conditional append.
///
/// Returns `None` when the value is absent. Plain values are always present;
/// `Option` and `Box` wrappers are unwrapped until a value or an empty layer is
/// reached, so an optional that wraps an empty optional is absent too.
pub trait MaybeParam {
    fn into_maybe_param(self) -> Option<Param>;
}

/// The values supplied to one unconditional append, in placeholder order.
pub trait IntoParams {
    fn into_params(self) -> Vec<Param>;
}

impl IntoParam for Param {
    fn into_param(self) -> Param {
        self
    }
}

impl MaybeParam for Param {
    fn into_maybe_param(self) -> Option<Param> {
        Some(self)
    }
}

impl IntoParams for Param {
    fn into_params(self) -> Vec<Param> {
        vec![self]
    }
}

impl IntoParam for Null {
    fn into_param(self) -> Param {
        Param::new(self)
    }
}

impl IntoParams for Null {
    fn into_params(self) -> Vec<Param> {
        vec![Param::new(self)]
    }
}

impl<T: MaybeParam> MaybeParam for Option<T> {
    fn into_maybe_param(self) -> Option<Param> {
        self.and_then(MaybeParam::into_maybe_param)
    }
}

impl<T: MaybeParam> MaybeParam for Box<T> {
    fn into_maybe_param(self) -> Option<Param> {
        (*self).into_maybe_param()
    }
}

impl IntoParams for () {
    fn into_params(self) -> Vec<Param> {
        Vec::new()
    }
}

impl IntoParams for Vec<Param> {
    fn into_params(self) -> Vec<Param> {
        self
    }
}

impl<T: IntoParam, const N: usize> IntoParams for [T; N] {
    fn into_params(self) -> Vec<Param> {
        self.into_iter().map(IntoParam::into_param).collect()
    }
}

macro_rules! impl_param_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoParam for $ty {
                fn into_param(self) -> Param {
                    Param::new(self)
                }
            }

            impl MaybeParam for $ty {
                fn into_maybe_param(self) -> Option<Param> {
                    Some(Param::new(self))
                }
            }

            impl IntoParams for $ty {
                fn into_params(self) -> Vec<Param> {
                    vec![Param::new(self)]
                }
            }
        )*
    };
}

impl_param_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u32,
    f32,
    f64,
    String,
    &'static str,
    Vec<u8>,
    Vec<bool>,
    Vec<i16>,
    Vec<i32>,
    Vec<i64>,
    Vec<f32>,
    Vec<f64>,
    Vec<String>,
    Vec<&'static str>,
    std::net::IpAddr,
    std::time::SystemTime,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
    chrono::DateTime<chrono::Local>,
    uuid::Uuid,
    Vec<uuid::Uuid>,
    serde_json::Value,
);

#[cfg(feature = "rust_decimal")]
impl_param_value!(rust_decimal::Decimal);

#[cfg(feature = "time")]
impl_param_value!(
    time::Date,
    time::Time,
    time::PrimitiveDateTime,
    time::OffsetDateTime,
);

macro_rules! impl_into_params_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoParam),+> IntoParams for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_params(self) -> Vec<Param> {
                let ($($name,)+) = self;
                vec![$($name.into_param()),+]
            }
        }
    };
}

impl_into_params_tuple!(A);
impl_into_params_tuple!(A, B);
impl_into_params_tuple!(A, B, C);
impl_into_params_tuple!(A, B, C, D);
impl_into_params_tuple!(A, B, C, D, E);
impl_into_params_tuple!(A, B, C, D, E, F);
impl_into_params_tuple!(A, B, C, D, E, F, G);
impl_into_params_tuple!(A, B, C, D, E, F, G, H);
impl_into_params_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_params_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_params_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_params_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

/// Build a `Vec<Param>` from values of different types.
///
/// ```ignore
/// builder.add_where(" AND id = ? AND name = ? AND active = ?", pgbuf::params![7_i64, "bob", true]);
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::Param>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoParam::into_param($value)),+]
    };
}
