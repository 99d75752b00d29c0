/// A published status value.
///
/// Statuses are cloned into a `watch` channel and read from other tasks,
/// so they must be `Send + Sync`. `Default` is the status before the first
/// intent; `PartialEq` lets watchers skip unchanged publications.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
