//! Test helpers shared across unit tests.
use std::cell::RefCell;

use crate::{
    error::{ClassifierError, Result},
    forge::request::PullRequest,
    reporter::Reporter,
};

/// Reporter that records everything in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub outputs: RefCell<Vec<(String, String)>>,
    pub warnings: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
    /// Makes every `set_output` call fail when set.
    pub fail_outputs: bool,
}

impl MemoryReporter {
    pub fn output(&self, name: &str) -> Option<String> {
        self.outputs
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

impl Reporter for MemoryReporter {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        if self.fail_outputs {
            return Err(ClassifierError::invalid_output("outputs disabled"));
        }
        self.outputs
            .borrow_mut()
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Builds a pull request carrying the given labels in order.
pub fn pull_request(number: u64, labels: &[&str]) -> PullRequest {
    PullRequest {
        number,
        title: Some(format!("pull request {number}")),
        labels: labels.iter().map(|l| l.to_string()).collect(),
    }
}
