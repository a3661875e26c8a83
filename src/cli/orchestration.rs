//! Release workflow orchestration
//!
//! Wires version inference to the git and step-output collaborators. The
//! binary only parses arguments and settings, then calls [`run_release`].

use crate::analyzer::CommitClassifier;
use crate::boundary::BoundaryWarning;
use crate::ci::{StepOutput, VERSION_TAG_OUTPUT};
use crate::config::PolicyConfig;
use crate::domain::{parse_describe, DescribedTag, Version};
use crate::error::Result;
use crate::git::Repository;
use crate::policy::{initial_version, next_version};
use crate::ui;

/// Arguments for the release workflow that do not come from [`PolicyConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseArgs {
    /// Remote to push the new tag to
    pub remote: String,

    /// Compute and report the next version without side effects
    pub dry_run: bool,
}

impl Default for ReleaseArgs {
    fn default() -> Self {
        ReleaseArgs {
            remote: "origin".to_string(),
            dry_run: false,
        }
    }
}

/// What the repository history says about the next release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    /// Nearest version tag, if any
    pub current: Option<DescribedTag>,

    /// Version to release, or `None` when no release is triggered
    pub next: Option<Version>,
}

/// Result of a release workflow run
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// A version was released
    Released {
        tag: String,
        created: bool,
        pushed: bool,
    },
    /// Dry run: the version that would have been released
    DryRun { tag: String },
    /// Nothing triggered a release
    NotReleased,
}

/// Works out the next version from the repository history.
///
/// Without a reachable version tag the initial version is released as is.
/// Otherwise the subjects of the commits since that tag are classified and the
/// policy applied.
pub fn plan_release<R: Repository + ?Sized>(
    repo: &R,
    config: &PolicyConfig,
) -> Result<ReleasePlan> {
    let described = repo.describe()?;
    ui::display_status(&format!("Git describe output: {}", described));

    let current = match parse_describe(&described)? {
        Some(current) => current,
        None => {
            let initial = initial_version(config);
            ui::display_boundary_warning(&BoundaryWarning::NoPriorTag {
                initial_version: initial.to_string(),
            });
            return Ok(ReleasePlan {
                current: None,
                next: Some(initial),
            });
        }
    };

    ui::display_status(&format!(
        "Current version: {} (from tag {})",
        current.version, current.tag
    ));

    if current.version.len() != config.num_components {
        ui::display_boundary_warning(&BoundaryWarning::ComponentCountMismatch {
            tag: current.tag.to_string(),
            found: current.version.len(),
            expected: config.num_components,
        });
    }

    let subjects = repo.log_subjects_since(current.tag.as_str())?;
    if subjects.iter().all(|subject| subject.is_empty()) {
        ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
            latest_tag: current.tag.to_string(),
        });
    } else {
        ui::display_commit_analysis(&subjects, current.tag.as_str());
    }

    let decision = CommitClassifier::from_config(config).classify(&subjects);
    ui::display_decision(&decision);

    let next = next_version(config, &current.version, &decision)?;

    Ok(ReleasePlan {
        current: Some(current),
        next,
    })
}

/// Publishes `version`: step output first, then tag, then push.
///
/// Tagging and pushing follow `do_tag` and `do_push`; a push is only attempted
/// for a tag created in this run.
pub fn apply_version<R, O>(
    repo: &R,
    output: &mut O,
    config: &PolicyConfig,
    args: &ReleaseArgs,
    version: &Version,
) -> Result<ReleaseOutcome>
where
    R: Repository + ?Sized,
    O: StepOutput + ?Sized,
{
    let tag = version.to_string();

    if args.dry_run {
        ui::display_status(&format!("Dry run: would release {}", tag));
        return Ok(ReleaseOutcome::DryRun { tag });
    }

    ui::display_status(&format!("Applying version {}", tag));
    output.set_output(VERSION_TAG_OUTPUT, &tag)?;

    if !config.do_tag {
        if config.do_push {
            ui::display_boundary_warning(&BoundaryWarning::PushWithoutTag { tag: tag.clone() });
        }
        return Ok(ReleaseOutcome::Released {
            tag,
            created: false,
            pushed: false,
        });
    }

    repo.create_tag(&tag)?;
    ui::display_success(&format!("Created tag: {}", tag));

    let pushed = if config.do_push {
        ui::display_status(&format!("Pushing tag {} to {}", tag, args.remote));
        repo.push_tag(&args.remote, &tag)?;
        ui::display_success(&format!("Pushed tag: {} to {}", tag, args.remote));
        true
    } else {
        false
    };

    Ok(ReleaseOutcome::Released {
        tag,
        created: true,
        pushed,
    })
}

/// Main release workflow
///
/// 1. Describe HEAD and parse the nearest version tag
/// 2. Classify commit subjects since that tag
/// 3. Compute the next version under the policy
/// 4. Emit the step output, then tag and push as configured
///
/// Nothing is written to the repository before the next version is known.
pub fn run_release<R, O>(
    repo: &R,
    output: &mut O,
    config: &PolicyConfig,
    args: &ReleaseArgs,
) -> Result<ReleaseOutcome>
where
    R: Repository + ?Sized,
    O: StepOutput + ?Sized,
{
    let plan = plan_release(repo, config)?;

    let Some(next) = plan.next else {
        ui::display_status("No version release triggered");
        return Ok(ReleaseOutcome::NotReleased);
    };

    let previous = plan.current.as_ref().map(|current| current.tag.as_str());
    ui::display_proposed_tag(previous, &next.to_string());

    apply_version(repo, output, config, args, &next)
}
