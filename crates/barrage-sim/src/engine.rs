//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns every piece of round state, processes player
//! commands at tick boundaries, runs the systems in a fixed order, and
//! produces `RoundSnapshot`s. Completely headless, which makes full
//! rounds deterministically testable.

use std::collections::VecDeque;

use barrage_core::commands::PlayerCommand;
use barrage_core::config::{ConfigError, RoundConfig};
use barrage_core::entities::Projectile;
use barrage_core::enums::{RoundOutcome, RoundPhase};
use barrage_core::events::GameEvent;
use barrage_core::state::RoundSnapshot;
use barrage_core::types::SimTime;
use barrage_terrain::TerrainField;

use crate::roster::TankRoster;
use crate::round_setup;
use crate::systems;
use crate::systems::explosion::ExplosionQueue;
use crate::systems::turns::TurnState;

/// The simulation engine. Owns terrain, roster, shell, explosion queue,
/// and turn state for exactly one round; start a new round by
/// constructing a new engine.
pub struct SimulationEngine {
    terrain: TerrainField,
    roster: TankRoster,
    projectile: Option<Projectile>,
    explosions: ExplosionQueue,
    turn: TurnState,
    time: SimTime,
    phase: RoundPhase,
    outcome: Option<RoundOutcome>,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Validate the config, generate terrain, and seat the roster.
    /// Bad configuration is the one thing this core refuses outright.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let terrain = TerrainField::generate(
            config.seed,
            config.terrain.width,
            config.terrain.min_height,
            config.terrain.max_height,
        );
        let roster = round_setup::build_roster(&config, &terrain);
        log::info!(
            "round start: seed={} terrain={}x[{},{}] players={}",
            config.seed,
            config.terrain.width,
            config.terrain.min_height,
            config.terrain.max_height,
            roster.len()
        );

        let mut engine = Self {
            terrain,
            roster,
            projectile: None,
            explosions: ExplosionQueue::new(),
            turn: TurnState::new(),
            time: SimTime::default(),
            phase: RoundPhase::Playing,
            outcome: None,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        };
        engine.events.push(GameEvent::TurnStarted {
            tank: engine.turn.active,
        });
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> RoundSnapshot {
        self.process_commands();

        if self.phase == RoundPhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.terrain,
            &self.roster,
            &self.projectile,
            &self.explosions,
            &self.turn,
            &self.time,
            self.phase,
            self.outcome,
            events,
        )
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Roster index of the tank holding the turn.
    pub fn active_tank(&self) -> usize {
        self.turn.active
    }

    pub fn terrain(&self) -> &TerrainField {
        &self.terrain
    }

    pub fn roster(&self) -> &TankRoster {
        &self.roster
    }

    pub fn projectile(&self) -> Option<&Projectile> {
        self.projectile.as_ref()
    }

    /// Mutable roster access for scripting test scenarios.
    #[cfg(test)]
    pub fn roster_mut(&mut self) -> &mut TankRoster {
        &mut self.roster
    }

    /// Mutable terrain access for scripting test scenarios.
    #[cfg(test)]
    pub fn terrain_mut(&mut self) -> &mut TerrainField {
        &mut self.terrain
    }

    /// Place a shell directly, bypassing the fire path (tests).
    #[cfg(test)]
    pub fn set_test_projectile(&mut self, projectile: Projectile) {
        self.projectile = Some(projectile);
    }

    #[cfg(test)]
    pub fn explosions(&self) -> &ExplosionQueue {
        &self.explosions
    }

    /// Process all queued commands. Abort works in any phase; the rest
    /// only act while the round is live.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::Abort => self.abort(),
                other => {
                    if self.phase == RoundPhase::Playing {
                        systems::input::apply(
                            &other,
                            &mut self.roster,
                            &self.terrain,
                            &mut self.projectile,
                            self.turn.active,
                            &mut self.events,
                        );
                    }
                }
            }
        }
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self) {
        // 1. Tanks settle onto (possibly freshly carved) terrain.
        systems::settle::run(&mut self.roster, &self.terrain);

        // 2. Shell flight with sub-stepped collision.
        if let Some(impact) =
            systems::flight::run(&mut self.projectile, &self.terrain, &self.roster, &mut self.events)
        {
            // 3. Terminal outcome: detonate if anything was hit, then
            //    hand the turn over either way.
            if impact.outcome.detonates() {
                systems::explosion::spawn_shell_burst(
                    &mut self.explosions,
                    &mut self.roster,
                    &impact,
                    &mut self.events,
                );
            }
            systems::turns::advance(&mut self.turn, &self.roster, &mut self.events);
        }

        // 4. Explosion display timers: carve craters, cascade death
        //    blasts.
        systems::explosion::run(
            &mut self.explosions,
            &mut self.terrain,
            &mut self.roster,
            &mut self.events,
        );

        // 5. Banner countdown and end-of-round detection.
        systems::turns::tick_banner(&mut self.turn);
        self.check_round_over();
    }

    /// The round ends once at most one tank survives and every queued
    /// detonation has resolved — a chain in flight can still change the
    /// result.
    fn check_round_over(&mut self) {
        if self.phase != RoundPhase::Playing {
            return;
        }
        if self.roster.active_count() > 1 || !self.explosions.is_empty() {
            return;
        }

        let outcome = match self.roster.last_active() {
            Some(index) => RoundOutcome::Winner { tank: index },
            None => RoundOutcome::Draw,
        };
        self.finish(outcome);
    }

    /// External cancellation, honored at the next tick boundary.
    fn abort(&mut self) {
        if self.phase == RoundPhase::Playing {
            self.finish(RoundOutcome::Aborted);
        }
    }

    fn finish(&mut self, outcome: RoundOutcome) {
        self.phase = RoundPhase::GameOver;
        self.outcome = Some(outcome);
        self.events.push(GameEvent::RoundOver { outcome });
        log::info!("round over: {outcome:?}");
    }
}
