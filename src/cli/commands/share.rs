//! Share command implementation
//!
//! Publishes one commit on a throwaway branch and returns to where the
//! user started.

use crate::cli::context::ShareContext;
use crate::cli::output::Output;
use crate::core::share::{
    short_id, SharePlan, ShareProgress, ShareRequest, ShareWorkflow, SilentProgress, Step,
};
use crate::core::ShareError;
use crate::git::VersionControl;

/// Narrates workflow steps on the console.
pub struct ConsoleProgress;

impl ShareProgress for ConsoleProgress {
    fn step(&mut self, _step: Step, detail: &str) {
        Output::info(detail);
    }

    fn skipped(&mut self, _step: Step, reason: &str) {
        Output::subheader(&format!("{}, not creating it", reason));
    }
}

/// Run the share command
pub fn run_share(ctx: &ShareContext, request: &ShareRequest, dry_run: bool) -> anyhow::Result<()> {
    let workflow = ShareWorkflow::new(&ctx.git, &ctx.config);

    if dry_run {
        let plan = workflow.plan(request)?;
        print_plan(request, &plan);
        return Ok(());
    }

    if !ctx.quiet {
        Output::header(&format!(
            "Sharing {} as {}",
            request.revision,
            Output::branch_name(&request.branch)
        ));
    }

    let result = if ctx.quiet {
        workflow.run(request, &mut SilentProgress)
    } else {
        workflow.run(request, &mut ConsoleProgress)
    };

    match result {
        Ok(session) => {
            if !ctx.quiet {
                Output::success(&format!(
                    "Pushed {} to {}/{}",
                    Output::commit_id(short_id(&session.revision)),
                    ctx.config.remote,
                    Output::branch_name(&request.branch)
                ));
            }
            Ok(())
        }
        Err(err) => {
            explain_failure(&ctx.git, request, &err);
            Err(err.into())
        }
    }
}

/// Tell the user what state the repository was left in.
fn explain_failure<V: VersionControl + ?Sized>(vcs: &V, request: &ShareRequest, err: &ShareError) {
    match err.step() {
        Some(Step::CherryPick) if vcs.cherry_pick_in_progress().unwrap_or(false) => {
            Output::warning(&format!(
                "Cherry-pick stopped on {}. Resolve the conflicts and run \
                 'git cherry-pick --continue', or 'git cherry-pick --abort'.",
                Output::branch_name(&request.branch)
            ));
        }
        Some(Step::CherryPick | Step::Push | Step::Restore) => {
            Output::warning(&format!(
                "Nothing was rolled back: {} is still checked out.",
                Output::branch_name(&request.branch)
            ));
        }
        Some(Step::Cleanup) => {
            Output::warning(&format!(
                "Local branch {} was left in place; delete it with 'git branch -D {}'.",
                Output::branch_name(&request.branch),
                request.branch
            ));
        }
        _ => {}
    }
}

fn print_plan(request: &ShareRequest, plan: &SharePlan) {
    Output::header("Dry run: no changes will be made");
    Output::kv("branch", &Output::branch_name(&request.branch));
    Output::kv(
        "commit",
        &format!(
            "{} ({})",
            Output::commit_id(short_id(&plan.session.revision)),
            request.revision
        ),
    );
    Output::kv("return to", &Output::branch_name(&plan.session.original_branch));
    println!();
    for (i, planned) in plan.steps.iter().enumerate() {
        Output::numbered_item(i + 1, &planned.command);
    }
}
