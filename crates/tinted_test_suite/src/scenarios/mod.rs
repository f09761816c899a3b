//! Visual test cases organized by category

pub mod errors;
pub mod fit;
pub mod tint;

use crate::runner::TestSuite;

/// Create all test suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![fit::suite(), tint::suite(), errors::suite()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_names_are_unique() {
        let mut names: Vec<String> = all_suites()
            .iter()
            .flat_map(|s| s.cases.iter().map(move |c| format!("{}::{}", s.name, c.name)))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
