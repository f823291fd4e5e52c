use crate::constants::{CHUNKS_PER_THREAD, DEFAULT_TRACER_SPACING};
use crate::error::LbResult;
use core_affinity::{get_core_ids, set_for_current};
use std::num::NonZeroUsize;

/// Execution settings of a [`Lattice`](crate::flow::Lattice).
#[derive(Debug, Clone)]
pub struct Config {
    pub number_of_threads: NonZeroUsize,
    pub core_affinity: bool,
    pub tracer_spacing: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            number_of_threads: NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN),
            core_affinity: false,
            tracer_spacing: DEFAULT_TRACER_SPACING,
        }
    }
}

impl Config {
    pub fn with_threads(number_of_threads: NonZeroUsize) -> Self {
        Config {
            number_of_threads,
            ..Default::default()
        }
    }

    pub fn get_number_of_threads(&self) -> usize {
        usize::from(self.number_of_threads)
    }

    /// Number of items handed to each worker chunk when `len` items are split.
    ///
    /// # Examples
    /// ```
    /// # use std::num::NonZeroUsize;
    /// # use lbfoil::Config;
    /// let config = Config::with_threads(NonZeroUsize::new(2).unwrap());
    ///
    /// assert_eq!(config.get_chunk_len(600), 100);
    /// assert_eq!(config.get_chunk_len(4), 1);
    /// assert_eq!(config.get_chunk_len(0), 1);
    /// ```
    pub fn get_chunk_len(&self, len: usize) -> usize {
        (len / (CHUNKS_PER_THREAD * self.get_number_of_threads())).max(1)
    }

    pub fn build_thread_pool(&self) -> LbResult<rayon::ThreadPool> {
        let builder = rayon::ThreadPoolBuilder::new()
            .num_threads(self.get_number_of_threads())
            .thread_name(|idx| format!("lbfoil-worker-{idx}"));
        let cores = if self.core_affinity {
            get_core_ids().unwrap_or_default()
        } else {
            Vec::new()
        };
        let pool = if cores.is_empty() {
            builder.build()?
        } else {
            builder
                .start_handler(move |idx| {
                    let core = cores[idx % cores.len()];
                    let _ = set_for_current(core);
                })
                .build()?
        };
        Ok(pool)
    }
}
