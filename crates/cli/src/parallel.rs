//! Parallel file processing utilities.

use anyhow::{Result, bail};
use log::warn;
use rayon::prelude::*;

/// What happened to a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Converted,
    Skipped,
}

/// Result of a parallel batch operation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchResult {
    /// Count outcomes, logging every failure, and print a summary line.
    pub fn summarize(label: &str, results: &[Result<Outcome>]) -> Self {
        let mut result = BatchResult::default();
        for r in results {
            match r {
                Ok(Outcome::Converted) => result.succeeded += 1,
                Ok(Outcome::Skipped) => result.skipped += 1,
                Err(e) => {
                    warn!("{e:#}");
                    result.failed += 1;
                }
            }
        }

        println!(
            "{label}: {} succeeded, {} skipped, {} failed",
            result.succeeded, result.skipped, result.failed
        );
        result
    }

    pub fn ok_or_bail(&self, operation: &str) -> Result<()> {
        if self.failed > 0 {
            bail!("{operation} failed: {} succeeded, {} failed", self.succeeded, self.failed);
        }
        Ok(())
    }
}

/// Run `op` on every item in parallel. Results keep the order of `items`.
pub fn collect_parallel<T, R, F>(items: &[T], op: F) -> Vec<Result<R>>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R> + Sync + Send,
{
    items.par_iter().map(op).collect()
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_failures_do_not_stop_batch() {
        let items: Vec<u32> = (0..10).collect();
        let results = collect_parallel(&items, |&i| match i % 5 {
            0 => Err(anyhow!("item {i} failed")),
            1 => Ok(Outcome::Skipped),
            _ => Ok(Outcome::Converted),
        });
        let result = BatchResult::summarize("test", &results);
        assert_eq!(result, BatchResult { succeeded: 6, skipped: 2, failed: 2 });
        assert!(result.ok_or_bail("test").is_err());
    }

    #[test]
    fn test_results_keep_item_order() {
        let items: Vec<u32> = (0..100).collect();
        let results = collect_parallel(&items, |&i| Ok(i * 2));
        let values: Vec<u32> = results.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(values, (0..100).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_batch() {
        let result = BatchResult::summarize("empty", &[]);
        assert_eq!(result, BatchResult::default());
        assert!(result.ok_or_bail("empty").is_ok());
    }
}
