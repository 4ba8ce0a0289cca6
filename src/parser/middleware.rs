use crate::api::Args;
use crate::parser::interface::UserInterface;
use crate::parser::printer::ErrorContext;

/// Construct [`Args`], reporting any failure through the `user_interface`.
///
/// Construction errors are displayed followed, for token errors, by the tokens with a caret under the point of failure.
/// Returns `Err(1)` on failure.
pub(crate) fn invoke<S: AsRef<str>>(
    schema: &str,
    tokens: &[S],
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<Args, i32> {
    match Args::construct(schema, tokens) {
        Ok(args) => Ok(args),
        Err((offset, error)) => {
            user_interface.print_error(error);

            if let Some(offset) = offset {
                user_interface.print_error_context(ErrorContext::new(offset, tokens));
            }

            Err(1)
        }
    }
}
