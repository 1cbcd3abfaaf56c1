use crate::application::error::{ApplicationError, ApplicationResult};

/// Fails with `MissingFields` when any of `values` is absent or blank.
pub(crate) fn require_present<'a>(
    values: impl IntoIterator<Item = Option<&'a str>>,
) -> ApplicationResult<()> {
    if values
        .into_iter()
        .any(|value| value.is_none_or(|v| v.trim().is_empty()))
    {
        return Err(ApplicationError::missing_fields());
    }
    Ok(())
}
