//! State marker trait.

/// Marker for reducer-owned state.
///
/// `Default` gives the initial value, `PartialEq` lets tests and the
/// renderer compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
