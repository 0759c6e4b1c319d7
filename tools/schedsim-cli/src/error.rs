use schedsim::SchedError;

/// All errors produced by the CLI.
///
/// Variants split into two categories:
/// - **Input errors** (exit code 2): the simulation was never run
/// - **Operational errors** (exit code 1): emission failed after the
///   simulation completed
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Sched(#[from] SchedError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map each error variant to its raw process exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Sched(_) => 2,
            CliError::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_exit_with_two() {
        let err = CliError::from(SchedError::InvalidQuantum(0));
        assert_eq!(err.exit_code(), 2);
        let err = CliError::from(SchedError::EmptyTaskSet);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn sched_error_message_passes_through() {
        let err = CliError::from(SchedError::EmptyTaskSet);
        assert_eq!(err.to_string(), "cannot schedule an empty task set");
    }
}
