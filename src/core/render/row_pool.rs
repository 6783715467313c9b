use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Runs `task` once per row of `buffer` on a fixed pool of scoped worker
/// threads.
///
/// The buffer is partitioned into disjoint `row_len`-sized slices, so each
/// row has exactly one writer and no locking is needed on the writes
/// themselves; the only shared state is the queue handing out the next
/// unclaimed row. At most `worker_count` rows are in flight at any time.
/// Blocks until every row is done or a task has failed; on failure the
/// first error is returned and remaining rows are abandoned.
pub fn for_each_row<T, E, F>(
    buffer: &mut [T],
    row_len: NonZeroUsize,
    worker_count: NonZeroUsize,
    task: F,
) -> Result<(), E>
where
    T: Send,
    E: Send,
    F: Fn(usize, &mut [T]) -> Result<(), E> + Sync,
{
    let queue = Mutex::new(buffer.chunks_mut(row_len.get()).enumerate());
    let failed = AtomicBool::new(false);
    let failure = Mutex::new(None);

    thread::scope(|scope| {
        for _ in 0..worker_count.get() {
            scope.spawn(|| {
                loop {
                    if failed.load(Ordering::Acquire) {
                        break;
                    }

                    let next = queue.lock().unwrap().next();
                    let Some((row_index, row)) = next else {
                        break;
                    };

                    if let Err(err) = task(row_index, row) {
                        failed.store(true, Ordering::Release);
                        *failure.lock().unwrap() = Some(err);
                        break;
                    }
                }
            });
        }
    });

    match failure.into_inner().unwrap() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
