use crate::hooks::contract::Hookable;

/// Runs `call` against `hookable`, bracketed by the hook pair.
///
/// Sequence: `before_hook(label)`, the call itself, `after_hook()`. The
/// call's result is returned unaltered whether it is unit, a `Result`, or
/// a value/error pair. An application error inside the result does not
/// skip the after-hook. Only a panic in the call does, and a panic here
/// means the call site itself is defective.
pub fn invoke_with_hooks<H, R>(hookable: &H, label: &str, call: impl FnOnce(&H) -> R) -> R
where
    H: Hookable,
{
    hookable.before_hook(label);
    let result = call(hookable);
    hookable.after_hook();
    result
}
