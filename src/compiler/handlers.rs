//! Custom operator handlers.

use crate::ast::Operand;
use crate::compiler::Compiler;
use crate::error::SiftResult;

/// A custom operator in the compile chain.
///
/// Handlers are consulted in registration order, before the built-in
/// operator table; the chain terminates in `UnknownOperator` when nothing
/// claims a tag. Return `Ok(Some(sql))` to claim the node, `Ok(None)` to
/// defer to the next handler and finally the built-ins.
///
/// The [`Compiler`] context exposes [`Compiler::condition`] and
/// [`Compiler::argument`], so a handler can recurse into sub-conditions and
/// stay dialect-correct:
///
/// ```ignore
/// let like = |tag: &str, args: &[Operand], cx: &mut Compiler<'_>| {
///     if tag != "like" {
///         return Ok(None);
///     }
///     let lhs = cx.argument(&args[0])?;
///     let rhs = cx.argument(&args[1])?;
///     Ok(Some(format!("{lhs} LIKE {rhs}")))
/// };
/// let select = SqlSelect::new(dialect, fields).handler(like);
/// ```
pub trait OperatorHandler: Send + Sync {
    fn compile(
        &self,
        tag: &str,
        args: &[Operand],
        cx: &mut Compiler<'_>,
    ) -> SiftResult<Option<String>>;
}

impl<F> OperatorHandler for F
where
    F: Fn(&str, &[Operand], &mut Compiler<'_>) -> SiftResult<Option<String>> + Send + Sync,
{
    fn compile(
        &self,
        tag: &str,
        args: &[Operand],
        cx: &mut Compiler<'_>,
    ) -> SiftResult<Option<String>> {
        self(tag, args, cx)
    }
}
