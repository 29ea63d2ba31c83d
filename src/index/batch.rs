//! Fixed-size batching for index uploads.

/// Records sent to the index per request.
pub const INDEX_BATCH_SIZE: usize = 1000;

/// Iterator adapter yielding items in chunks of at most `size`.
///
/// Only the last batch may be shorter; no empty batch is ever produced.
#[derive(Debug, Clone)]
pub struct Batches<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Batches<I> {
    /// Wrap an iterator. A size of zero is treated as one.
    pub fn new(inner: I, size: usize) -> Self {
        Self {
            inner,
            size: size.max(1),
        }
    }

    /// Batch size in use.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}

/// Group an iterator into batches of [`INDEX_BATCH_SIZE`].
pub fn batched<I: IntoIterator>(items: I) -> Batches<I::IntoIter> {
    Batches::new(items.into_iter(), INDEX_BATCH_SIZE)
}
