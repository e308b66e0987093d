/// Maps caller-supplied sort names onto a fixed set of columns.
///
/// `resolve` never fails: unknown names fall back to `DEFAULT`.
pub trait SortField: Copy + Sized {
    const DEFAULT: Self;

    fn from_name(name: &str) -> Option<Self>;

    fn as_column(&self) -> &'static str;

    fn resolve(name: &str) -> Self {
        match Self::from_name(name.trim()) {
            Some(field) => field,
            None => Self::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}
