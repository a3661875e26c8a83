//! Domain logic - pure business rules independent of git operations

pub mod bump;
pub mod commit;
pub mod tag;
pub mod version;

pub use bump::{BumpAlias, BumpIndex};
pub use commit::LabelVote;
pub use tag::{parse_describe, DescribedTag, Tag};
pub use version::{parse_component, Version};
