// Copyright 2024-2025 Irreducible Inc.

use std::sync::OnceLock;

use crate::env::parsed_env_var;

/// Thread count override read by rayon when it builds the global pool.
pub const NUM_THREADS_ENV: &str = "RAYON_NUM_THREADS";

/// Prepares the global rayon pool before any parallel layer touches it.
///
/// When [`NUM_THREADS_ENV`] asks for a single thread, the global pool is built with
/// `use_current_thread`, so a single-threaded run keeps every span and stack frame on the calling
/// thread. Otherwise the pool is left for rayon to build lazily.
///
/// Rayon builds the global pool at most once, so call this at the top of `main`, before any
/// transform runs. Later calls return the first outcome.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static POOL_INIT: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	POOL_INIT.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the global pool, so read the env directly.
		if !runs_on_current_thread(parsed_env_var(NUM_THREADS_ENV)) {
			return Ok(());
		}
		tracing::debug!("building a single-threaded global pool on the current thread");
		rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global()
	})
}

fn runs_on_current_thread(num_threads: Option<usize>) -> bool {
	num_threads == Some(1)
}

/// Returns the base-2 logarithm of the number of threads that should be used for the task
pub fn get_log_max_threads() -> usize {
	(2 * rayon::current_num_threads() - 1).ilog2() as _
}

/// Splits `n_items` work items into tasks so that each thread gets roughly `tasks_per_thread`
/// tasks, and returns the number of items per task. Never returns zero.
pub fn items_per_task(n_items: usize, tasks_per_thread: usize) -> usize {
	let n_tasks = (tasks_per_thread << get_log_max_threads()).max(1);
	n_items.div_ceil(n_tasks).max(1)
}
