/// ProgressReporter port for user-facing feedback
///
/// The graph engine never logs; the use case and CLI route every status
/// line through this port so stdout stays reserved for the document.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of `total` steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total expected steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
