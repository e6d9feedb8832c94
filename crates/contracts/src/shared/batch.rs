//! Client-side batching for bulk actions.
//!
//! Selected rows are split into fixed-size batches. The calls of one batch
//! run together, batches run one after another with a pause in between so the
//! backend never sees more than one batch of concurrent requests.

use super::fetch_state::{Notice, NoticeLevel};

pub const DEFAULT_BATCH_SIZE: usize = 25;
pub const DEFAULT_BATCH_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchPlan<T> {
    batches: Vec<Vec<T>>,
    pub delay_ms: u32,
}

impl<T> BatchPlan<T> {
    /// A batch size of zero is treated as one
    pub fn new(items: Vec<T>, batch_size: usize, delay_ms: u32) -> Self {
        let size = batch_size.max(1);
        let mut batches = Vec::with_capacity(items.len().div_ceil(size));
        let mut current = Vec::with_capacity(size);
        for item in items {
            current.push(item);
            if current.len() == size {
                batches.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
            }
        }
        if !current.is_empty() {
            batches.push(current);
        }
        Self { batches, delay_ms }
    }

    pub fn with_defaults(items: Vec<T>) -> Self {
        Self::new(items, DEFAULT_BATCH_SIZE, DEFAULT_BATCH_DELAY_MS)
    }

    pub fn total_batches(&self) -> usize {
        self.batches.len()
    }

    pub fn total_items(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn batches(&self) -> &[Vec<T>] {
        &self.batches
    }

    pub fn into_batches(self) -> Vec<Vec<T>> {
        self.batches
    }

    /// Pause after batch `index` (0-based); none after the last one
    pub fn delay_after(&self, index: usize) -> Option<u32> {
        if index + 1 < self.batches.len() && self.delay_ms > 0 {
            Some(self.delay_ms)
        } else {
            None
        }
    }
}

/// Progress shown on the overlay while a bulk action runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchProgress {
    pub processed: usize,
    pub success: usize,
    pub failed: usize,
    /// 1-based, 0 before the first batch starts
    pub current_batch: usize,
    pub total_batches: usize,
    pub total_items: usize,
}

impl BatchProgress {
    pub fn for_plan<T>(plan: &BatchPlan<T>) -> Self {
        Self {
            total_batches: plan.total_batches(),
            total_items: plan.total_items(),
            ..Self::default()
        }
    }

    pub fn start_batch(&mut self, index: usize) {
        self.current_batch = index + 1;
    }

    pub fn record(&mut self, ok: bool) {
        self.processed += 1;
        if ok {
            self.success += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.processed >= self.total_items
    }

    pub fn percent(&self) -> u32 {
        if self.total_items == 0 {
            return 100;
        }
        ((self.processed * 100) / self.total_items) as u32
    }

    pub fn label(&self) -> String {
        format!(
            "Batch {}/{}: {}/{} processed ({} ok, {} failed)",
            self.current_batch,
            self.total_batches,
            self.processed,
            self.total_items,
            self.success,
            self.failed
        )
    }

    /// Summary notification once every batch has finished
    pub fn summary(&self, action: &str) -> Notice {
        let level = match (self.success, self.failed) {
            (_, 0) => NoticeLevel::Success,
            (0, _) => NoticeLevel::Error,
            _ => NoticeLevel::Warning,
        };
        Notice::new(
            level,
            format!("{action} finished"),
            format!(
                "{} of {} succeeded, {} failed",
                self.success, self.total_items, self.failed
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_chunks_by_size() {
        let plan = BatchPlan::with_defaults((0..60).collect::<Vec<_>>());
        assert_eq!(plan.total_batches(), 3);
        let sizes: Vec<_> = plan.batches().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![25, 25, 10]);
        assert_eq!(plan.delay_after(0), Some(1000));
        assert_eq!(plan.delay_after(2), None);
    }

    #[test]
    fn test_zero_batch_size_and_empty_input() {
        let plan = BatchPlan::new(vec!["a", "b"], 0, 0);
        assert_eq!(plan.total_batches(), 2);
        assert_eq!(plan.delay_after(0), None);

        let empty: BatchPlan<u8> = BatchPlan::with_defaults(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(BatchProgress::for_plan(&empty).percent(), 100);
    }

    #[test]
    fn test_progress_and_summary() {
        let plan = BatchPlan::new((0..3).collect::<Vec<_>>(), 2, 1000);
        let mut progress = BatchProgress::for_plan(&plan);
        progress.start_batch(0);
        progress.record(true);
        progress.record(false);
        assert_eq!(progress.current_batch, 1);
        assert!(!progress.is_complete());
        progress.start_batch(1);
        progress.record(true);
        assert!(progress.is_complete());

        let notice = progress.summary("Resubmit");
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "2 of 3 succeeded, 1 failed");
        assert_eq!(progress.label(), "Batch 2/2: 3/3 processed (2 ok, 1 failed)");
    }
}
