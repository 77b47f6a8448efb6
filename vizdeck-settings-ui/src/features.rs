//! Experimental feature flags listed on the Experimental Features tab.

/// An opt-in feature whose enabled state is stored under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentalFeature {
    /// Configuration key holding the enabled flag
    pub key: String,
    /// Translation key of the feature name
    pub name_key: String,
    /// Translation key of the feature description
    pub description_key: String,
    /// Listed only in development builds
    pub development_only: bool,
}

impl ExperimentalFeature {
    pub fn new(
        key: impl Into<String>,
        name_key: impl Into<String>,
        description_key: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name_key: name_key.into(),
            description_key: description_key.into(),
            development_only: false,
        }
    }

    pub fn development_only(mut self) -> Self {
        self.development_only = true;
        self
    }
}

/// Features shipped with the application.
pub fn default_features() -> Vec<ExperimentalFeature> {
    vec![
        ExperimentalFeature::new(
            "experimental.memory-use-indicator",
            "memoryUseIndicator",
            "memoryUseIndicatorDescription",
        )
        .development_only(),
        ExperimentalFeature::new(
            "experimental.message-prefetch",
            "messagePrefetch",
            "messagePrefetchDescription",
        ),
    ]
}

/// Features to list for a build.
pub fn visible_features(
    features: &[ExperimentalFeature],
    is_development: bool,
) -> impl Iterator<Item = &ExperimentalFeature> {
    features
        .iter()
        .filter(move |f| is_development || !f.development_only)
}
