const INITIAL_CAPACITY: usize = 10;

/// Saved program positions that `]` and `}` jump back to.
#[derive(Debug, Clone, Default)]
pub struct WaypointStack {
    items: Vec<usize>,
}

impl WaypointStack {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn push(&mut self, position: usize) {
        self.items.push(position);
    }

    /// Most recent waypoint, or `None` when no loop is open.
    pub fn pop(&mut self) -> Option<usize> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
