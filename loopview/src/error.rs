use crate::TemplateId;

/// Failures surfaced by render updates.
///
/// None of these abort an update: the offending item is skipped and the error is reported in
/// [`crate::UpdateReport::failures`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The data source could not resolve a template for a visible item.
    #[error("no template resolved for item {index}")]
    UnresolvedTemplate { index: usize },

    /// Nothing idle in either pool and the host has no factory for the template.
    #[error("no factory registered for template {template}")]
    MissingFactory { template: TemplateId },

    /// The data source's binder failed for an item.
    #[error("binding item {index} failed: {source}")]
    Bind { index: usize, source: BindError },
}

/// Error returned by [`crate::DataSource::bind`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BindError {
    message: String,
}

impl BindError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
