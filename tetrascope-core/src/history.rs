use crate::ViewState;

/// LIFO stack of view snapshots supporting zoom-out as the exact inverse of
/// the last zoom-in.
///
/// The stack is seeded with the initial view and never shrinks below that
/// base entry: popping at the root is a defined no-op, so the explorer can
/// always return to where it started.
#[derive(Clone, Debug)]
pub struct ViewHistory {
    stack: Vec<ViewState>,
}

impl ViewHistory {
    pub fn new(base: ViewState) -> Self {
        Self { stack: vec![base] }
    }

    pub fn push(&mut self, view: ViewState) {
        self.stack.push(view);
    }

    /// Pop the most recent snapshot, or None when only the base entry
    /// remains.
    pub fn pop(&mut self) -> Option<ViewState> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        // Invariant: the base entry is never removed.
        false
    }

    /// True when only the base entry remains.
    pub fn at_base(&self) -> bool {
        self.stack.len() == 1
    }
}
