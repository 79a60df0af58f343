//! Team reconstruction from battle log lines

mod battle;
mod cursor;
mod diagnostics;
mod identity;
mod moves;
mod reveal;
mod updater;

pub use battle::{BattleParser, ParsedBattle, ParserTables};
pub use cursor::{Line, LineCursor};
pub use diagnostics::{Anomaly, AnomalyKind};
pub use identity::{IdentityResolver, MERGE_EXCLUSIONS, Resolution};
pub use moves::{COPY_EFFECTS, MoveOutcome, MoveRules, SkipReason};
pub use reveal::{ASH_GRENINJA, GRENINJA, greninja_form};
