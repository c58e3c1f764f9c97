//! Placeholder markers and positional-parameter tokens.

/// How placeholders are written in input fragments and rendered in output.
///
/// The default reads `?` markers and renders PostgreSQL-style `$1, $2, ...`
/// tokens.
///
/// # Example
/// ```ignore
/// use pgbuf::{Builder, PlaceholderStyle};
///
/// let mut b = Builder::with_style(PlaceholderStyle::new().with_prefix(':'));
/// b.add("SELECT * FROM t WHERE id = ?", 7_i64);
/// assert_eq!(b.to_sql(), "SELECT * FROM t WHERE id = :1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderStyle {
    /// Character marking a placeholder in input fragments.
    pub marker: char,
    /// Character written before the 1-based parameter position.
    pub prefix: char,
}

impl Default for PlaceholderStyle {
    fn default() -> Self {
        Self::postgres()
    }
}

impl PlaceholderStyle {
    /// Create a new configuration with defaults (`?` markers, `$n` tokens).
    pub fn new() -> Self {
        Self::default()
    }

    /// `?` markers rendered as `$1, $2, ...`.
    pub const fn postgres() -> Self {
        Self {
            marker: '?',
            prefix: '$',
        }
    }

    /// Set the character recognised as a placeholder marker.
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Set the character written before each parameter position.
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    /// Render the token for a 1-based parameter position, e.g. `$12`.
    pub fn token(&self, position: usize) -> String {
        let mut out = String::with_capacity(1 + decimal_digits(position));
        self.write_token(&mut out, position);
        out
    }

    /// Replace the first `count` markers of `sql`, left to right, with tokens
    /// numbered from `first_position`. Markers beyond `count` are kept as-is.
    pub(crate) fn substitute(&self, sql: &str, first_position: usize, count: usize) -> String {
        if count == 0 {
            return sql.to_string();
        }

        let token_len = 1 + decimal_digits(first_position + count);
        let mut out = String::with_capacity(sql.len() + count * token_len);
        let mut last = 0;
        let mut position = first_position;
        for (at, marker) in sql.match_indices(self.marker).take(count) {
            out.push_str(&sql[last..at]);
            self.write_token(&mut out, position);
            position += 1;
            last = at + marker.len();
        }
        out.push_str(&sql[last..]);
        out
    }

    fn write_token(&self, out: &mut String, position: usize) {
        out.push(self.prefix);
        push_usize(out, position);
    }
}

#[inline]
fn decimal_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else if n < 100 {
        2
    } else if n < 1000 {
        3
    } else {
        (n.ilog10() as usize) + 1
    }
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    out.extend(buf[pos..].iter().map(|&d| d as char));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_postgres() {
        let style = PlaceholderStyle::default();
        assert_eq!(style, PlaceholderStyle::postgres());
        assert_eq!(style.marker, '?');
        assert_eq!(style.prefix, '$');
    }

    #[test]
    fn token_has_no_padding() {
        let style = PlaceholderStyle::new();
        assert_eq!(style.token(1), "$1");
        assert_eq!(style.token(12), "$12");
        assert_eq!(style.token(1000), "$1000");
    }

    #[test]
    fn substitutes_left_to_right_from_first_position() {
        let style = PlaceholderStyle::new();
        assert_eq!(style.substitute("a = ? AND b = ?", 3, 2), "a = $3 AND b = $4");
    }

    #[test]
    fn leaves_markers_beyond_count() {
        let style = PlaceholderStyle::new();
        assert_eq!(style.substitute("? ? ?", 1, 2), "$1 $2 ?");
        assert_eq!(style.substitute("? ?", 1, 0), "? ?");
    }

    #[test]
    fn count_larger_than_markers_is_harmless() {
        let style = PlaceholderStyle::new();
        assert_eq!(style.substitute("x = ?", 1, 3), "x = $1");
        assert_eq!(style.substitute("no markers", 1, 2), "no markers");
    }

    #[test]
    fn custom_marker_and_prefix() {
        let style = PlaceholderStyle::new().with_marker('%').with_prefix(':');
        assert_eq!(style.substitute("a = % AND b = ?", 9, 2), "a = :9 AND b = ?");
    }

    #[test]
    fn multibyte_text_around_markers_is_preserved() {
        let style = PlaceholderStyle::new();
        assert_eq!(style.substitute("名前 = ? AND ä = ?", 1, 2), "名前 = $1 AND ä = $2");
    }
}
