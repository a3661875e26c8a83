use std::fmt;

/// Position of the version component to increment; lower is more significant.
pub type BumpIndex = usize;

/// Human-readable name for a bump index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpAlias {
    Major,
    Minor,
    Patch,
    Build,
}

impl BumpAlias {
    /// Every alias, ordered by index
    pub const ALL: [BumpAlias; 4] = [
        BumpAlias::Major,
        BumpAlias::Minor,
        BumpAlias::Patch,
        BumpAlias::Build,
    ];

    /// Look up an alias by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alias| alias.name() == name)
    }

    pub fn from_index(index: BumpIndex) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BumpAlias::Major => "major",
            BumpAlias::Minor => "minor",
            BumpAlias::Patch => "patch",
            BumpAlias::Build => "build",
        }
    }

    pub fn index(&self) -> BumpIndex {
        *self as BumpIndex
    }
}

impl fmt::Display for BumpAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Describe a bump index for display, using its alias when one exists
pub fn describe_index(index: BumpIndex) -> String {
    match BumpAlias::from_index(index) {
        Some(alias) => format!("{} ({})", alias, index),
        None => format!("component {}", index),
    }
}
