//! Wires the execution context to the GitHub forge and Actions reporter and
//! runs a single classification.
use log::*;
use std::rc::Rc;

use crate::{
    classifier::{Classifier, ReleaseDecision},
    cli::Args,
    error::Result,
    forge::github::Github,
    reporter::ActionsReporter,
};

/// Classify the configured commit and publish the decision.
pub async fn execute(args: &Args) -> Result<ReleaseDecision> {
    let ctx = args.resolve()?;

    debug!("using github api: {}", ctx.remote.api_url);

    let forge = Github::new(ctx.remote)?;
    let reporter = ActionsReporter::new(ctx.output_file, ctx.workflow_commands);
    let classifier = Classifier::new(Box::new(forge), Rc::new(reporter));

    let decision = classifier.run(&ctx.commit).await?;

    info!(
        "release decision for {}: release={}, release-kind={}",
        ctx.commit,
        decision.release(),
        decision.kind()
    );

    Ok(decision)
}
