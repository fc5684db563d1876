//! Keeps the displayed collection in step with the record store.
//!
//! Every successful mutation is followed by a full reload of the
//! collection; a failed one leaves the displayed collection untouched.

use std::future::Future;

use yew::Callback;

use crate::services::api::ApiError;

/// Await `mutation`, and on success fire `invalidate` so the collection is
/// fetched again. The mutation's result is handed back either way.
pub async fn mutate_then_reload<T, F>(mutation: F, invalidate: &Callback<()>) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let result = mutation.await;
    if result.is_ok() {
        invalidate.emit(());
    }
    result
}

/// Orders overlapping collection loads: only the most recently started
/// load may apply its response.
#[derive(Debug, Default)]
pub struct LoadSequence {
    latest: u64,
}

impl LoadSequence {
    /// Start a load and get its ticket
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_callback() -> (Callback<()>, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (callback, count)
    }

    #[test]
    fn test_success_triggers_reload() {
        let (invalidate, count) = counting_callback();

        let result = futures::executor::block_on(mutate_then_reload(async { Ok(7) }, &invalidate));

        assert_eq!(result, Ok(7));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_failure_leaves_collection_alone() {
        let (invalidate, count) = counting_callback();

        let result: Result<(), ApiError> = futures::executor::block_on(mutate_then_reload(
            async { Err(ApiError::Validation("Full name must not be empty".to_string())) },
            &invalidate,
        ));

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_older_load_is_superseded() {
        let mut sequence = LoadSequence::default();

        let initial = sequence.begin();
        let after_mutation = sequence.begin();

        // The initial load answers last; its collection is stale
        assert!(!sequence.is_latest(initial));
        assert!(sequence.is_latest(after_mutation));
    }
}
