//! A listener narrating the search through the [log] facade.

use crate::db::keys::ClauseId;
use crate::dispatch::SolverListener;
use crate::misc::log::targets;
use crate::structures::literal::RawLiteral;

/// Logs each search event at debug level under the `listener` target.
#[derive(Default)]
pub struct LoggingListener;

impl SolverListener for LoggingListener {
    fn init(&mut self) {
        log::debug!(target: targets::LISTENER, "Solve started.");
    }

    fn on_decide(&mut self, literal: RawLiteral) {
        log::debug!(target: targets::LISTENER, "Decision: {literal}");
    }

    fn on_propagate(&mut self, literal: RawLiteral, clause: Option<ClauseId>) {
        match clause {
            Some(clause) => {
                log::debug!(target: targets::LISTENER, "Propagation: {literal} via clause {clause}")
            }
            None => log::debug!(target: targets::LISTENER, "Propagation: {literal}"),
        }
    }

    fn on_assert(&mut self, literal: RawLiteral) {
        log::debug!(target: targets::LISTENER, "Assertion: {literal}");
    }

    fn on_conflict(&mut self, clause: ClauseId) {
        log::debug!(target: targets::LISTENER, "Conflict: clause {clause}");
    }

    fn on_backtrack(&mut self, literal: RawLiteral) {
        log::debug!(target: targets::LISTENER, "Backtrack: {literal}");
    }

    fn cleanup(&mut self) {
        log::debug!(target: targets::LISTENER, "Solve finished.");
    }
}
