//! The `next` pipeline: resolve the baseline tag, collect and classify the
//! commit range, pick a bump severity, and export the rendered versions.
//!
//! Stages run strictly in order; each consumes the prior stage's complete
//! output. A policy that stops the run (warn/silent) exports nothing beyond
//! `current`.

use color_eyre::eyre::eyre;
use log::*;

use crate::{
    analyzer::{
        bump::{self, Bump, BumpOutcome},
        classifier::{ClassifiedCommits, Classifier},
        version,
    },
    baseline::{self, Baseline},
    changelog,
    cli::Args,
    commits,
    forge::{github::Github, traits::Forge},
    output::ActionOutputs,
    result::Result,
};

/// Entry point wired to the real forge and the runner environment.
pub async fn execute(args: &Args) -> Result<()> {
    let remote = args.get_remote()?;
    let forge = Github::new(remote)?;
    let outputs = ActionOutputs::from_env();
    run(args, &forge, &outputs).await
}

/// The pipeline proper, parameterized over the forge and output boundary.
pub async fn run(
    args: &Args,
    forge: &dyn Forge,
    outputs: &ActionOutputs,
) -> Result<()> {
    let baseline = baseline::resolve(forge, &args.baseline_config()?).await?;

    let current = format!("{}{}", args.prefix, baseline.version);
    outputs.set("current", &current)?;

    let mut range =
        commits::fetch_range(forge, &compare_ref(args, &baseline), &args.branch)
            .await?;
    commits::append_additional(&mut range, &args.additional_commit_messages());

    if range.is_empty() {
        let Some(bump) =
            settle(bump::no_commits_outcome(args.no_new_commit_behavior))?
        else {
            return Ok(());
        };
        return export(args, outputs, &baseline, bump, &ClassifiedCommits::default());
    }

    let classifier = Classifier::new(args.classification(), args.scopes());
    let classified = classifier.classify(&range);

    let Some(bump) = settle(bump::resolve_with_policy(
        &classified.changes,
        args.no_version_bump_behavior,
    ))?
    else {
        return Ok(());
    };

    export(args, outputs, &baseline, bump, &classified)
}

/// Compare base: the tag's target commit when the baseline came from a real
/// tag, the prefixed version string when it came from the fallback value.
fn compare_ref(args: &Args, baseline: &Baseline) -> String {
    baseline
        .sha
        .clone()
        .unwrap_or_else(|| format!("{}{}", args.prefix, baseline.version))
}

/// Reduce a policy outcome to how the run continues: a bump to apply, the
/// baseline unchanged (`Some(None)`), or a clean stop (`None`). The fail
/// policy terminates with an error.
fn settle(outcome: BumpOutcome) -> Result<Option<Option<Bump>>> {
    match outcome {
        BumpOutcome::Proceed(bump) => Ok(Some(Some(bump))),
        BumpOutcome::EmitUnchanged => Ok(Some(None)),
        BumpOutcome::Warn(message) => {
            warn!("{message}");
            Ok(None)
        }
        BumpOutcome::Silent(message) => {
            info!("{message}");
            Ok(None)
        }
        BumpOutcome::Fail(message) => Err(eyre!(message)),
    }
}

fn export(
    args: &Args,
    outputs: &ActionOutputs,
    baseline: &Baseline,
    bump: Option<Bump>,
    classified: &ClassifiedCommits,
) -> Result<()> {
    let mut rendered = version::compose(&args.prefix, &baseline.version, bump);

    if args.with_changelog {
        rendered.changelog = changelog::render(
            &args.changelog_config(),
            &classified.changes,
            &classified.contributors,
        )?;
    }

    outputs.set("bump", &rendered.bump)?;
    outputs.set("next", &rendered.next)?;
    outputs.set("nextStrict", &rendered.next_strict)?;
    outputs.set("nextMajor", &rendered.next_major)?;
    outputs.set("nextMajorStrict", &rendered.next_major_strict)?;

    if let Some(changelog) = &rendered.changelog {
        outputs.set("changeLog", changelog)?;
    }

    Ok(())
}
