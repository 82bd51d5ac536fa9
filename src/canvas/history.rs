//! Linear, truncating undo/redo history of raster snapshots.

use super::surface::RasterSnapshot;

/// Ordered stack of full-surface snapshots with a movable cursor.
///
/// The cursor points at the snapshot currently displayed; `None` means the
/// floor state before any commit. Pushing after an undo discards every
/// snapshot past the cursor (standard linear truncation), so a discarded
/// future is never reachable again.
///
/// A depth cap keeps memory bounded for long sessions: when the stack
/// overflows, the oldest snapshot is evicted into the floor baseline, so
/// undoing all the way down still lands on a well-defined state.
pub struct SnapshotHistory {
    /// State restored when undoing past the oldest retained snapshot.
    /// Starts blank; eviction folds old snapshots into it.
    baseline: RasterSnapshot,
    /// Retained snapshots, oldest first
    snapshots: Vec<RasterSnapshot>,
    /// Index of the displayed snapshot, `None` = at the baseline floor
    cursor: Option<usize>,
    /// Maximum retained snapshots (0 = unbounded)
    max_depth: usize,
}

impl SnapshotHistory {
    /// Creates an empty history whose floor restores to `baseline`.
    pub fn new(baseline: RasterSnapshot, max_depth: usize) -> Self {
        Self {
            baseline,
            snapshots: Vec::new(),
            cursor: None,
            max_depth,
        }
    }

    /// Pushes a snapshot of a freshly committed state.
    ///
    /// Truncates any redo tail first, then appends and moves the cursor to
    /// the new end. Evicts the oldest snapshot into the baseline when the
    /// depth cap is exceeded.
    pub fn push(&mut self, snapshot: RasterSnapshot) {
        match self.cursor {
            Some(index) => self.snapshots.truncate(index + 1),
            None => self.snapshots.clear(),
        }

        self.snapshots.push(snapshot);

        if self.max_depth > 0 && self.snapshots.len() > self.max_depth {
            let evicted = self.snapshots.remove(0);
            self.baseline = evicted;
            log::debug!(
                "history depth cap {} reached, folding oldest snapshot into baseline",
                self.max_depth
            );
        }

        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Moves the cursor one step back and returns the snapshot to repaint.
    ///
    /// Returns `None` (leaving the cursor untouched) when already at the
    /// floor. Stepping back from the oldest snapshot lands on the baseline.
    pub fn step_back(&mut self) -> Option<&RasterSnapshot> {
        match self.cursor {
            None => None,
            Some(0) => {
                self.cursor = None;
                Some(&self.baseline)
            }
            Some(index) => {
                self.cursor = Some(index - 1);
                Some(&self.snapshots[index - 1])
            }
        }
    }

    /// Moves the cursor one step forward and returns the snapshot to repaint.
    ///
    /// Returns `None` (leaving the cursor untouched) when already at the
    /// newest snapshot or when the history is empty.
    pub fn step_forward(&mut self) -> Option<&RasterSnapshot> {
        match self.cursor {
            None if self.snapshots.is_empty() => None,
            None => {
                self.cursor = Some(0);
                Some(&self.snapshots[0])
            }
            Some(index) if index + 1 < self.snapshots.len() => {
                self.cursor = Some(index + 1);
                Some(&self.snapshots[index + 1])
            }
            Some(_) => None,
        }
    }

    /// Number of retained snapshots.
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Current cursor position (`None` = at the floor).
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// True if a step back would change the displayed state.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// True if a step forward would change the displayed state.
    pub fn can_redo(&self) -> bool {
        match self.cursor {
            None => !self.snapshots.is_empty(),
            Some(index) => index + 1 < self.snapshots.len(),
        }
    }
}
