pub mod board;
pub mod eval;
pub mod parse;

pub use board::{Piece, Side, Sq};
pub use eval::{Phase, Score, S};
pub use eval::material::MaterialTable;
pub use eval::params::{BonusTable, EvalParams};
pub use eval::psqt::{init, psqt, score, Psqt};


/// Evaluates a boolean expression:
/// * Where `true` returns `Ok(())`
/// * Where `false` returns `Err(&'static str)` describing the failure.
///
/// In practice, it's useful as a recoverable `assert!` alternative.
#[macro_export]
macro_rules! as_result {
    ($cond:expr) => {
        bool::then_some($cond, ()).ok_or(
            concat!(
                "assertion failed: `",
                stringify!($cond),
                "`"
            )
        )
    };
}
