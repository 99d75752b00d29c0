/// One-shot signal delivered to the session's observer.
///
/// Effects are not state: each is delivered exactly once, in the order the
/// actions that produced it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The observer should issue `LoadLayout` for `target`.
    Navigate { target: String },
    /// Human-readable notice (unhandled action, authoring defect).
    ShowMessage { message: String },
}
