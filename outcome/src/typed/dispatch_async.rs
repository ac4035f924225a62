//! Asynchronous branching on an [`OutcomeOf`].
//!
//! None of these combinators spawn tasks or block. They only await the future
//! returned by the caller's continuation, so cancellation and timeouts remain
//! the continuation's responsibility.

use std::future::Future;

use super::OutcomeOf;
use crate::Error;

impl<T> OutcomeOf<T> {
    /// Await `action` with the value if the outcome succeeded; otherwise
    /// resolve immediately.
    pub async fn if_successful_async<'a, F, Fut>(&'a self, action: F)
    where
        F: FnOnce(&'a T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(value) = &self.value {
            action(value).await;
        }
    }

    /// Await exactly one branch: `on_success` with the value, or `on_failure`
    /// with every recorded error.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::OutcomeOf;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    /// # runtime.block_on(async {
    /// let outcome = OutcomeOf::success(2_usize);
    /// let doubled = outcome
    ///     .match_async(
    ///         |value| async move { value * 2 },
    ///         |errors| async move { errors.len() },
    ///     )
    ///     .await;
    /// assert_eq!(doubled, 4);
    /// # });
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub async fn match_async<'a, R, S, SFut, F, FFut>(&'a self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(&'a T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(&'a [Error]) -> FFut,
        FFut: Future<Output = R>,
    {
        match &self.value {
            Some(value) => on_success(value).await,
            None => on_failure(self.errors.as_slice()).await,
        }
    }

    /// Call `on_failure` immediately with the errors, or return a future that
    /// awaits `on_success` with the value.
    ///
    /// The failure handler runs before this method returns, so only the
    /// success branch suspends. Prefer [`OutcomeOf::match_async`] unless the
    /// failure handler is known to be synchronous.
    pub fn match_success_async<'a, S, SFut, F>(
        &'a self,
        on_success: S,
        on_failure: F,
    ) -> impl Future<Output = ()>
    where
        S: FnOnce(&'a T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(&'a [Error]),
    {
        let pending = match &self.value {
            Some(value) => Some(on_success(value)),
            None => {
                on_failure(self.errors.as_slice());
                None
            }
        };
        async move {
            if let Some(continuation) = pending {
                continuation.await;
            }
        }
    }
}
