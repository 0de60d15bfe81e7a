//! Simulation driver.
//!
//! One run is a strict sequence of rounds; round `i + 1` sees only the window
//! left by round `i`. Per round the generator is consumed in a fixed order:
//! the selector's coin, then the outcome sample.

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::challenge::{AlternatingSelector, ChallengeSelector};
use crate::error::DdaResult;
use crate::player::PlayerModel;

/// One round, as observed after its update.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundRecord {
    pub challenge_level: i32,
    pub difference: i32,
    pub difficulty: f64,
    pub random_value: f64,
    pub won: bool,
    pub estimated_level_before: f64,
    pub estimated_level_after: f64,
    /// Window after this round's update, oldest first.
    pub temporary_levels: Vec<i32>,
}

/// Run `rounds` rounds against `model`, drawing from `rng`.
pub fn run<S, R>(
    model: &mut PlayerModel,
    selector: &S,
    rng: &mut R,
    rounds: usize,
) -> DdaResult<Vec<RoundRecord>>
where
    S: ChallengeSelector,
    R: RngCore + ?Sized,
{
    let mut records = Vec::with_capacity(rounds);
    for round in 0..rounds {
        let estimated_level_before = model.estimated_level()?;
        let challenge_level = selector.select_challenge(estimated_level_before, rng);
        let outcome = model.resolve_challenge(challenge_level, rng);
        let adjustment = model.update_estimate(challenge_level, outcome.won)?;
        let estimated_level_after = model.estimated_level()?;

        trace!(
            round,
            challenge_level,
            won = outcome.won,
            ?adjustment,
            estimated_level_before,
            estimated_level_after,
            "round resolved"
        );

        records.push(RoundRecord {
            challenge_level,
            difference: outcome.difference,
            difficulty: outcome.difficulty,
            random_value: outcome.random_value,
            won: outcome.won,
            estimated_level_before,
            estimated_level_after,
            temporary_levels: model.window_snapshot(),
        });
    }
    Ok(records)
}

/// Fresh seeded model, fresh generator, alternating selector.
pub fn run_simulation(
    actual_level: i32,
    initial_temporary_level: i32,
    rounds: usize,
    seed: u64,
) -> DdaResult<Vec<RoundRecord>> {
    debug!(actual_level, initial_temporary_level, rounds, seed, "simulation started");
    let mut model = PlayerModel::seeded(actual_level, initial_temporary_level);
    let mut rng = WyRand::from_seed(seed.to_le_bytes());
    let records = run(&mut model, &AlternatingSelector, &mut rng, rounds)?;
    debug!(
        actual_level,
        initial_temporary_level,
        rounds,
        seed,
        final_estimate = records.last().map(|r| r.estimated_level_after),
        "simulation finished"
    );
    Ok(records)
}

/// Parameters of one independent run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub actual_level: i32,
    pub initial_temporary_level: i32,
    pub rounds: usize,
    pub seed: u64,
}

impl Scenario {
    pub fn run(&self) -> DdaResult<Vec<RoundRecord>> {
        run_simulation(self.actual_level, self.initial_temporary_level, self.rounds, self.seed)
    }
}

/// A scenario together with the records it produced.
#[derive(Clone, Debug)]
pub struct ScenarioRun {
    pub scenario: Scenario,
    pub records: Vec<RoundRecord>,
}

/// Run each scenario on its own model and generator; stops at the first error.
pub fn run_scenarios<I>(scenarios: I) -> DdaResult<Vec<ScenarioRun>>
where
    I: IntoIterator<Item = Scenario>,
{
    let scenarios = scenarios.into_iter();
    let mut runs = Vec::with_capacity(scenarios.size_hint().0);
    for scenario in scenarios {
        let records = scenario.run()?;
        runs.push(ScenarioRun { scenario, records });
    }
    Ok(runs)
}
