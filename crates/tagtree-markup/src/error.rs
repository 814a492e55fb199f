//! Errors returned by strict parsing.

use thiserror::Error;

use crate::issue::ParseIssue;

/// Strict parsing failed.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The markup produced one or more error-severity issues. All of them
    /// are carried, in the order they were recorded.
    #[error("markup contains {} parse error(s), first: {}", .0.len(), first_issue(.0))]
    Issues(Vec<ParseIssue>),
}

impl ParseError {
    /// The issues that caused the failure.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        match self {
            Self::Issues(issues) => issues,
        }
    }
}

/// Fail with every error-severity issue in `issues`, if there are any.
///
/// Warnings are ignored. This is the check strict parsing applies.
///
/// # Errors
///
/// Returns [`ParseError::Issues`] carrying the error-severity issues in the
/// order they were recorded.
pub fn ensure_no_errors(issues: &[ParseIssue]) -> Result<(), ParseError> {
    let errors: Vec<ParseIssue> = issues.iter().filter(|issue| issue.is_error()).cloned().collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ParseError::Issues(errors))
    }
}

fn first_issue(issues: &[ParseIssue]) -> String {
    issues
        .first()
        .map_or_else(|| "none".to_string(), ToString::to_string)
}
