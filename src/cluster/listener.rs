use super::page::Page;
use crate::error::Result;

/// Observer of a running fit
///
/// Callbacks run synchronously on the fitting thread. A fit produces zero or
/// more `updated` calls followed by exactly one `finished`. Pages are only
/// borrowed for the duration of the call.
///
/// Returning an error from either callback aborts the fit and the error is
/// returned from [`Fitter::fit`](super::fitter::Fitter::fit).
pub trait FitListener {
    /// Called with the current pages after a refinement pass
    ///
    /// Pages arrive in creation order, except for the final update which
    /// carries the sorted result.
    fn updated(&mut self, pages: &[Page]) -> Result<()>;

    /// Called once after the final update
    fn finished(&mut self) -> Result<()>;
}
