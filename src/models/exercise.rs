//! Exercise and test case models
//!
//! These shapes mirror what the content API serves; the grader never writes
//! them. Exercises are authored elsewhere and immutable from this service's
//! perspective.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_EXERCISE_POINTS, languages};

/// An authored coding problem, as served by the content API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub title: String,
    pub difficulty: Difficulty,
    /// Maximum points a fully correct submission earns
    #[serde(default = "default_points")]
    pub points: i32,
    pub time_limit_minutes: Option<i32>,
    /// Judge0 language identifier the exercise targets
    pub language_id: i32,
    pub starter_code: Option<String>,
    pub solution_code: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    pub content: Option<String>,
}

fn default_points() -> i32 {
    DEFAULT_EXERCISE_POINTS
}

/// Exercise difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Get difficulty as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One input/expected-output pair bound to an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub exercise_id: Uuid,
    /// Stdin fed to the learner's program; absent means empty input
    pub input: Option<String>,
    pub expected_output: String,
    /// Hidden test cases are graded but their detail is never shown to learners
    #[serde(default)]
    pub is_hidden: bool,
    /// Authoring-side point weight; carried through from the content API
    /// but not summed for scoring (the exercise's point value is split
    /// evenly instead)
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub sort_order: i32,
}

/// Exercise together with its ordered test cases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseWithTests {
    #[serde(flatten)]
    pub exercise: Exercise,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
}

impl ExerciseWithTests {
    /// Test cases in author-defined order
    pub fn ordered_test_cases(&self) -> Vec<TestCase> {
        let mut cases = self.test_cases.clone();
        cases.sort_by_key(|tc| tc.sort_order);
        cases
    }
}

/// Check whether a Judge0 language id is supported by the platform
pub fn is_supported_language(language_id: i32) -> bool {
    languages::ALL.contains(&language_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert!(is_supported_language(languages::PYTHON));
        assert!(is_supported_language(languages::C));
        assert!(!is_supported_language(0));
        assert!(!is_supported_language(9999));
    }

    #[test]
    fn test_ordered_test_cases() {
        let exercise_id = Uuid::new_v4();
        let tc = |order: i32| TestCase {
            id: Uuid::new_v4(),
            exercise_id,
            input: None,
            expected_output: String::new(),
            is_hidden: false,
            points: 10,
            sort_order: order,
        };

        let bundle = ExerciseWithTests {
            exercise: Exercise {
                id: exercise_id,
                title: "Sum".to_string(),
                difficulty: Difficulty::Beginner,
                points: 100,
                time_limit_minutes: None,
                language_id: languages::PYTHON,
                starter_code: None,
                solution_code: None,
                objectives: vec![],
                constraints: vec![],
                hints: vec![],
                content: None,
            },
            test_cases: vec![tc(2), tc(0), tc(1)],
        };

        let ordered = bundle.ordered_test_cases();
        assert_eq!(
            ordered.iter().map(|t| t.sort_order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_difficulty_serde() {
        let d: Difficulty = serde_json::from_str("\"intermediate\"").unwrap();
        assert_eq!(d, Difficulty::Intermediate);
        assert_eq!(d.as_str(), "intermediate");
    }
}
