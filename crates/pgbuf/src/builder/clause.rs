/// One of the four text buffers of a [`Builder`](crate::Builder).
///
/// Buffers are rendered in declaration order: `Select`, `From`, `Where`,
/// `Order`, no matter in which order they were written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    From,
    Where,
    Order,
}

impl Clause {
    /// All clauses in render order.
    pub const ALL: [Clause; 4] = [
        Clause::Select,
        Clause::From,
        Clause::Where,
        Clause::Order,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            Clause::Select => 0,
            Clause::From => 1,
            Clause::Where => 2,
            Clause::Order => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Clause::Select => "select",
            Clause::From => "from",
            Clause::Where => "where",
            Clause::Order => "order",
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_render_order() {
        let indexes: Vec<usize> = Clause::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3]);
        assert_eq!(Clause::Where.to_string(), "where");
    }
}
