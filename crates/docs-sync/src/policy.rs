/// Decides whether a file that already exists locally gets overwritten.
///
/// Exactly two behaviors exist and nothing extends them at runtime, so this
/// is a closed enum with pure decision functions rather than a trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Leave existing files alone unless the force flag is set.
    Normal,
    /// Re-download unconditionally.
    Forced,
}

impl OverwritePolicy {
    pub fn for_force_flag(force: bool) -> Self {
        if force { Self::Forced } else { Self::Normal }
    }

    pub fn should_sync(self, exists: bool, force: bool) -> bool {
        match self {
            Self::Normal => !exists || force,
            Self::Forced => true,
        }
    }

    /// Human status for a completed download. Identical for both variants.
    pub fn status_label(self, existed: bool) -> &'static str {
        if existed { "updated" } else { "downloaded" }
    }
}
