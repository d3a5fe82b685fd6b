/// A search request tagged with the query that spawned it.
///
/// `id` increases monotonically per controller so workers can skip requests
/// that were superseded before they started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

/// Direction of a keyboard navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}
