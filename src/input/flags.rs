//! Named feature flags.

use std::collections::HashMap;

/// Flag that permits editing the canvas surface.
pub const ENABLE_SURFACE: &str = "enable_surface";

/// Read-only view of the document's feature flags.
pub trait FeatureFlags {
    fn is_enabled(&self, name: &str) -> bool;
}

/// In-memory flag table. Unknown flags read as disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: HashMap<String, bool>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.flags.insert(name.into(), enabled);
    }

    pub fn with(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.set(name, enabled);
        self
    }
}

impl FeatureFlags for FlagSet {
    fn is_enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_flags_are_disabled() {
        let flags = FlagSet::new();
        assert!(!flags.is_enabled(ENABLE_SURFACE));
    }

    #[test]
    fn set_overrides_previous_value() {
        let mut flags = FlagSet::new().with(ENABLE_SURFACE, true);
        assert!(flags.is_enabled(ENABLE_SURFACE));
        flags.set(ENABLE_SURFACE, false);
        assert!(!flags.is_enabled(ENABLE_SURFACE));
    }
}
