/*!
`dda_sim` — an offline simulator for a sliding-window dynamic difficulty
adjustment (DDA) estimator.

What it does
- A player has a fixed, hidden actual level. The system keeps an estimate: the
  mean of the last 5 temporary levels.
- Each round closes one loop:
  `estimate → challenge → outcome → update`.
  * challenge: floor or ceiling of the estimate, by a fair coin
  * outcome: lose with chance `-0.1464 * (actual - challenge) + 0.5` (unclamped)
  * update: only surprising outcomes move the window
    (hard win pushes `challenge + 1`, easy loss pushes `challenge - 1`)
- A run returns one `RoundRecord` per round, for studying how fast and how
  steadily the estimate approaches the actual level.

How to use (call surface only)
- `run_simulation(actual_level, initial_temporary_level, rounds, seed)` for a
  seeded run with the default selector.
- `run(&mut model, &selector, &mut rng, rounds)` to bring your own generator
  (any `rand_core::RngCore`) or selector.
- `report::write_csv` / `report::ConvergenceSummary` to consume the records.

What it does NOT do
- No I/O in the core, no shared generator between runs, no tuning of the
  curve or the window size.
*/

pub mod challenge;
pub mod config;
pub mod error;
pub mod mechanics;
pub mod player;
pub mod report;
pub mod simulation;

pub use challenge::{AlternatingSelector, ChallengeSelector, select_challenge};
pub use error::{DdaError, DdaResult};
pub use mechanics::Adjustment;
pub use player::{ChallengeOutcome, PlayerModel, WINDOW_SIZE};
pub use simulation::{RoundRecord, Scenario, ScenarioRun, run, run_scenarios, run_simulation};
