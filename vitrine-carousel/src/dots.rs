//! Page indicator bookkeeping.

/// What the view has to do to bring its dots in line with the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotSync {
    /// Page count changed (or first render): drop every dot and build
    /// `count` new ones with `active` marked.
    Rebuild { count: usize, active: usize },
    /// Same dots, only the active marker moves.
    MoveActive(usize),
}

/// Remembers how many dots the view currently renders so unchanged dot
/// elements are kept across slides.
#[derive(Debug, Clone, Default)]
pub struct DotStrip {
    rendered: Option<usize>,
}

impl DotStrip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, page_count: usize, active: usize) -> DotSync {
        if self.rendered == Some(page_count) {
            return DotSync::MoveActive(active);
        }
        self.rendered = Some(page_count);
        DotSync::Rebuild {
            count: page_count,
            active,
        }
    }
}
