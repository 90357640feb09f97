//! Tagged clause input resolved at the call site.

/// Input accepted by clause setters.
///
/// A clause value is either one text fragment or an ordered list of
/// fragments joined with the clause separator. Empty text, an empty list,
/// or a list of empty elements all leave the clause absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// A single text value
    Text(String),
    /// An ordered list of values joined with the clause separator
    List(Vec<String>),
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Fragment::Text(value.to_string())
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Fragment::Text(value)
    }
}

impl From<&String> for Fragment {
    fn from(value: &String) -> Self {
        Fragment::Text(value.clone())
    }
}

impl From<Vec<String>> for Fragment {
    fn from(values: Vec<String>) -> Self {
        Fragment::List(values)
    }
}

impl From<Vec<&str>> for Fragment {
    fn from(values: Vec<&str>) -> Self {
        Fragment::List(values.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[&str]> for Fragment {
    fn from(values: &[&str]) -> Self {
        Fragment::List(values.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fragment {
    fn from(values: [&str; N]) -> Self {
        Fragment::List(values.iter().map(|s| s.to_string()).collect())
    }
}
