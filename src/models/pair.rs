use serde::Serialize;
use std::fmt;

/// Unordered pair of two employee ids, stored in lexicographic order so that
/// (A, B) and (B, A) are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmployeePair {
    pub first: String,
    pub second: String,
}

impl EmployeePair {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}

impl fmt::Display for EmployeePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_canonical_regardless_of_argument_order() {
        assert_eq!(EmployeePair::new("B", "A"), EmployeePair::new("A", "B"));
        let pair = EmployeePair::new("143", "12");
        assert_eq!(pair.first, "12");
        assert_eq!(pair.second, "143");
    }

    #[test]
    fn ids_containing_dashes_do_not_collide() {
        assert_ne!(
            EmployeePair::new("a-b", "c"),
            EmployeePair::new("a", "b-c")
        );
    }
}
