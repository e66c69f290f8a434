//! Per-line layout computation and the epoch-guarded layout cache.
//!
//! Layout for a whole song is computed once per parameter set, not per frame.
//! [`compute_line_layout`] runs the full measure, wrap, and position pipeline
//! for one line; [`LayoutCache`] memoizes the results by line index and
//! [`populate_cache`] fills it across a thread pool ahead of playback.
//!
//! Invalidation is by epoch. Bumping the epoch clears the map, and any
//! in-flight computation started under an older epoch is refused at insert
//! time, so a resize during precompute can never publish stale geometry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::breaker::break_line;
use crate::layout::positioner::{PositionedRow, position_lines};
use crate::measure::backend::{TextMeasurer, TextStyle};
use crate::measure::script::line_direction;
use crate::measure::syllable::{measure_line, measure_synced};
use crate::model::line::{LineVariant, LyricLine};

/// Everything layout depends on besides the lyric itself.
///
/// Two equal parameter sets always produce identical layouts, which is what
/// makes caching by line index sound.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Usable width for text, in pixels.
    pub viewport_width: f64,
    /// Vertical pitch between row tops, in pixels.
    pub row_height: f64,
    /// Font parameters for measurement.
    pub style: TextStyle,
}

/// Complete positioned layout of one lyric line.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LineLayout {
    /// Display rows, top to bottom.
    pub rows: Vec<PositionedRow>,
}

impl LineLayout {
    /// Number of display rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the line produced no visible rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Runs the full layout pipeline for one line.
///
/// Total over all inputs: a line that is empty or all whitespace yields an
/// empty layout, never an error, so a renderer can skip it and keep drawing
/// the rest of the song.
pub fn compute_line_layout<M: TextMeasurer + ?Sized>(
    line: &LyricLine,
    params: &LayoutParams,
    measurer: &M,
) -> LineLayout {
    let layouts = match &line.variant {
        LineVariant::Karaoke(k) => {
            measure_line(&k.syllables, &params.style, measurer, line.accompaniment)
        }
        LineVariant::Synced(s) => measure_synced(&s.text, s.timing, &params.style, measurer),
    };
    let wrapped = break_line(&layouts, params.viewport_width, &params.style, measurer);
    let rows = position_lines(
        &wrapped,
        line.alignment,
        line_direction(line),
        params.viewport_width,
        params.row_height,
    );
    LineLayout { rows }
}

/// Thread-safe, epoch-guarded map from line index to computed layout.
#[derive(Debug, Default)]
pub struct LayoutCache {
    epoch: AtomicU64,
    entries: Mutex<HashMap<usize, Arc<LineLayout>>>,
}

impl LayoutCache {
    /// Creates an empty cache at epoch zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves the map itself intact, so poison
    // is absorbed rather than propagated.
    fn entries(&self) -> MutexGuard<'_, HashMap<usize, Arc<LineLayout>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current epoch. Captured before starting an async computation and
    /// passed back to [`insert_if_current`](Self::insert_if_current).
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Clears all entries and advances the epoch, refusing any computation
    /// still in flight. Returns the new epoch.
    pub fn invalidate(&self) -> u64 {
        let mut entries = self.entries();
        entries.clear();
        self.epoch.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Layout for `index`, if already computed.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Arc<LineLayout>> {
        self.entries().get(&index).cloned()
    }

    /// Publishes a layout computed under `epoch`. Returns false, dropping the
    /// layout, if the cache has been invalidated since that epoch was read.
    pub fn insert_if_current(&self, epoch: u64, index: usize, layout: Arc<LineLayout>) -> bool {
        let mut entries = self.entries();
        // epoch is checked under the entries lock: invalidate clears and
        // bumps under the same lock, so a stale insert can never follow the
        // clear it missed
        if self.epoch.load(Ordering::Acquire) != epoch {
            return false;
        }
        entries.insert(index, layout);
        true
    }

    /// Returns the cached layout for `index`, computing it on the caller's
    /// thread on a miss.
    ///
    /// This is the synchronous fallback for frames rendered before
    /// precompute reaches a line. The freshly computed layout is returned
    /// even when an invalidation raced the computation; only the caching of
    /// it is skipped.
    pub fn get_or_compute<F>(&self, index: usize, compute: F) -> Arc<LineLayout>
    where
        F: FnOnce() -> LineLayout,
    {
        if let Some(hit) = self.get(index) {
            return hit;
        }
        let epoch = self.epoch();
        let layout = Arc::new(compute());
        self.insert_if_current(epoch, index, Arc::clone(&layout));
        layout
    }

    /// True when `index` has a published layout.
    #[must_use]
    pub fn is_ready(&self, index: usize) -> bool {
        self.entries().contains_key(&index)
    }

    /// Number of published layouts.
    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.entries().len()
    }
}

/// Computes layout for every line across the rayon thread pool.
///
/// The epoch is sampled once up front; if the cache is invalidated while
/// population runs, remaining work is skipped cheaply and finished results
/// are refused at insert, leaving the cache consistent with the new epoch.
#[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn populate_cache<M>(cache: &LayoutCache, lines: &[LyricLine], params: &LayoutParams, measurer: &M)
where
    M: TextMeasurer + Sync + ?Sized,
{
    let epoch = cache.epoch();
    lines.par_iter().enumerate().for_each(|(index, line)| {
        if cache.epoch() != epoch {
            return;
        }
        let layout = Arc::new(compute_line_layout(line, params, measurer));
        if cache.insert_if_current(epoch, index, layout) {
            debug!(index, "line layout ready");
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
