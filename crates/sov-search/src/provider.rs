use std::future::Future;

use crate::error::SearchError;
use crate::types::SearchResultItem;

/// Anything that can turn a query into an ordered list of result items.
///
/// The order of the returned items is the provider's rank order; the first
/// item is rank 1.
pub trait SearchProvider {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchResultItem>, SearchError>> + Send;
}
