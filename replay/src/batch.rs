//! Parallel parsing of many independent logs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tally_battle::{BattleParser, LogError, ParsedBattle, ParserTables};

use crate::BatchError;
use crate::classify::TeamClassifier;
use crate::log::ReplayLog;

/// Worker pool settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOptions {
    /// Number of worker threads; `None` uses one per logical CPU
    pub workers: Option<usize>,
}

/// Result for one log of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct LogOutcome {
    pub id: String,
    pub status: LogStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogStatus {
    Parsed(ParsedBattle),
    Failed(LogError),
    /// Not started because the batch was cancelled
    Skipped,
}

/// Outcomes of a batch, in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchReport {
    pub outcomes: Vec<LogOutcome>,
}

impl BatchReport {
    pub fn parsed(&self) -> impl Iterator<Item = (&str, &ParsedBattle)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            LogStatus::Parsed(battle) => Some((o.id.as_str(), battle)),
            _ => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &LogError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            LogStatus::Failed(err) => Some((o.id.as_str(), err)),
            _ => None,
        })
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == LogStatus::Skipped)
            .count()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Cancels the batch it was taken from.
///
/// Logs already being parsed finish; logs not yet started are skipped.
/// Cancellation is sticky for the lifetime of the parser.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Parses independent logs on a bounded rayon pool
#[derive(Debug)]
pub struct BatchParser {
    pool: ThreadPool,
    tables: ParserTables,
    cancelled: Arc<AtomicBool>,
}

impl BatchParser {
    pub fn new(options: BatchOptions) -> Result<Self, BatchError> {
        Self::with_tables(options, ParserTables::STANDARD)
    }

    pub fn with_tables(options: BatchOptions, tables: ParserTables) -> Result<Self, BatchError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(options.workers.unwrap_or(0))
            .thread_name(|i| format!("tally-worker-{i}"))
            .build()?;

        Ok(Self {
            pool,
            tables,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn parse_all(&self, logs: &[ReplayLog]) -> BatchReport {
        self.run(logs, None)
    }

    /// Like [`parse_all`](Self::parse_all), then label every parsed team with `classifier`
    pub fn parse_all_classified(&self, logs: &[ReplayLog], classifier: &dyn TeamClassifier) -> BatchReport {
        self.run(logs, Some(classifier))
    }

    fn run(&self, logs: &[ReplayLog], classifier: Option<&dyn TeamClassifier>) -> BatchReport {
        let outcomes: Vec<LogOutcome> = self.pool.install(|| {
            logs.par_iter()
                .map(|log| self.parse_one(log, classifier))
                .collect()
        });
        let report = BatchReport { outcomes };

        tracing::info!(
            logs = report.len(),
            parsed = report.parsed().count(),
            failed = report.failures().count(),
            skipped = report.skipped(),
            "batch finished"
        );
        report
    }

    fn parse_one(&self, log: &ReplayLog, classifier: Option<&dyn TeamClassifier>) -> LogOutcome {
        if self.cancelled.load(Ordering::Acquire) {
            return LogOutcome {
                id: log.id.clone(),
                status: LogStatus::Skipped,
            };
        }

        let status = match BattleParser::with_tables(self.tables).parse(&log.text) {
            Ok(mut battle) => {
                if let Some(classifier) = classifier {
                    for team in &mut battle.teams {
                        team.archetype = classifier.classify(team);
                    }
                }
                if !battle.is_clean() {
                    tracing::debug!(id = %log.id, anomalies = battle.diagnostics.len(), "parsed with anomalies");
                }
                LogStatus::Parsed(battle)
            }
            Err(err) => {
                tracing::warn!(id = %log.id, error = %err, "log skipped");
                LogStatus::Failed(err)
            }
        };

        LogOutcome {
            id: log.id.clone(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_battle::{BattleResult, Player, Team};

    fn battle(winner: &str, lead: &str) -> String {
        format!(
            "|player|p1|Alice|1|\n\
             |player|p2|Bob|2|\n\
             |poke|p1|{lead}|\n\
             |poke|p2|Mew|\n\
             |start\n\
             |switch|p1a: {lead}|{lead}|100/100\n\
             |switch|p2a: Mew|Mew|100/100\n\
             |turn|1\n\
             |win|{winner}"
        )
    }

    fn logs() -> Vec<ReplayLog> {
        vec![
            ReplayLog::new("a", battle("Alice", "Pelipper")),
            ReplayLog::new("b", ""),
            ReplayLog::new("c", battle("Bob", "Toxapex")),
        ]
    }

    fn single_worker() -> BatchParser {
        BatchParser::new(BatchOptions { workers: Some(1) }).unwrap()
    }

    #[test]
    fn test_outcomes_keep_input_order() {
        let parser = BatchParser::new(BatchOptions { workers: Some(2) }).unwrap();
        assert_eq!(parser.workers(), 2);

        let report = parser.parse_all(&logs());

        let ids: Vec<_> = report.outcomes.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_failed_log_does_not_affect_others() {
        let report = single_worker().parse_all(&logs());

        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures, vec![("b", &LogError::Empty)]);

        let parsed: Vec<_> = report.parsed().collect();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].1.winner(), Some(Player::P1));
        assert_eq!(parsed[1].1.winner(), Some(Player::P2));
        assert_eq!(parsed[1].1.team(Player::P1).result, BattleResult::Loss);
    }

    #[test]
    fn test_cancelled_before_start() {
        let parser = single_worker();
        parser.cancel_handle().cancel();

        let report = parser.parse_all(&logs());

        assert_eq!(report.skipped(), 3);
        assert_eq!(report.parsed().count(), 0);
    }

    #[test]
    fn test_cancel_between_logs() {
        let parser = single_worker();
        let handle = parser.cancel_handle();
        let cancel_after_first = |_: &Team| -> Option<String> {
            handle.cancel();
            None
        };

        let report = parser.parse_all_classified(&logs(), &cancel_after_first);

        assert!(matches!(report.outcomes[0].status, LogStatus::Parsed(_)));
        assert_eq!(report.skipped(), 2);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_classifier_sets_archetype() {
        let rain = |team: &Team| team.species().any(|s| s == "Pelipper").then(|| "Rain".to_string());

        let report = single_worker().parse_all_classified(&logs(), &rain);
        let parsed: Vec<_> = report.parsed().collect();

        assert_eq!(parsed[0].1.team(Player::P1).archetype.as_deref(), Some("Rain"));
        assert_eq!(parsed[0].1.team(Player::P2).archetype, None);
        assert_eq!(parsed[1].1.team(Player::P1).archetype, None);
    }

    #[test]
    fn test_empty_batch() {
        let report = single_worker().parse_all(&[]);
        assert!(report.is_empty());
    }
}
