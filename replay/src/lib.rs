//! Batch parsing of Pokemon Showdown replay logs.
//!
//! Logs are independent, so a batch is spread over a bounded rayon pool.
//! Every log yields its own [`LogOutcome`]; one unreadable log never stops
//! the others.
//!
//! ```no_run
//! use tally_replay::{BatchOptions, BatchParser, ReplayLog};
//!
//! let logs = vec![ReplayLog::read("gen8ou-1234.log")?];
//! let parser = BatchParser::new(BatchOptions::default())?;
//!
//! for (id, battle) in parser.parse_all(&logs).parsed() {
//!     println!("{id}: {:?}", battle.winner());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod batch;
mod classify;
mod log;

use thiserror::Error;

pub use batch::{BatchOptions, BatchParser, BatchReport, CancelHandle, LogOutcome, LogStatus};
pub use classify::TeamClassifier;
pub use log::ReplayLog;

pub use tally_battle::{LogError, ParsedBattle};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to start worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
