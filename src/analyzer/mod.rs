//! Analysis engine for turning commit subjects into a release decision

pub mod commit_classifier;

pub use commit_classifier::{CommitClassifier, CommitDecision};
