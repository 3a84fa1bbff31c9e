/// Set of finalized vertices for one shortest-path run
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    marks: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    /// Creates an empty set over vertices `0..vertices`
    pub fn new(vertices: usize) -> Self {
        VisitedSet {
            marks: vec![false; vertices],
            count: 0,
        }
    }

    /// Marks a vertex as finalized; returns false if it already was
    pub fn insert(&mut self, vertex: usize) -> bool {
        if self.marks[vertex] {
            return false;
        }
        self.marks[vertex] = true;
        self.count += 1;
        true
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.marks.get(vertex).copied().unwrap_or(false)
    }

    /// Number of finalized vertices
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
