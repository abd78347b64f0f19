use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input JSON did not match the protocol domain shape.
    #[error("invalid protocol domain at JSON path {path}: {message}")]
    Schema { path: String, message: String },

    /// Strict validation found problems in a generated tree.
    #[error("{} issue(s) found in generated declarations:\n{}", .issues.len(), format_issues(.issues))]
    Invalid { issues: Vec<Issue> },

    /// The output sink rejected a write.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("duplicate name `{name}` declared in `{scope}`")]
    NameCollision { scope: String, name: String },

    #[error("`{name}` referenced from `{scope}` does not resolve to any declaration")]
    DanglingReference { scope: String, name: String },
}

fn format_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}
