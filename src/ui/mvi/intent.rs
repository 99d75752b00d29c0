/// An event a session or reducer consumes.
///
/// Session intents come from the renderer (interactions, edited values),
/// from navigation calls and from finished fetches. Status intents are
/// what the session derives from them for its reducer. Both cross task
/// boundaries, hence `Send`.
pub trait Intent: Send + 'static {}
