//! Hook pair that brackets dispatched calls.

/// Implemented by any type that wants its calls bracketed by
/// [`invoke_with_hooks`](super::invoke_with_hooks). The dispatcher never
/// names a concrete delegate type.
pub trait Hookable {
    /// Called immediately before the wrapped call. Side effect only;
    /// `label` names the operation being invoked.
    fn before_hook(&self, label: &str);

    /// Called immediately after the wrapped call returns, even when the
    /// result carries an application error.
    fn after_hook(&self);
}
