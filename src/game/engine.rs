use std::mem;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::net::protocol::{
    AdminCheats, ArenaMap, ControlCode, ControlSet, Controls, GameEvent, GameState, MatchPhase,
    MirrorUpdate, PlayerId, Tank,
};

use super::ballistics::advance_projectile;
use super::combat::{self, HitOutcome};
use super::movement::drive_tank;
use super::powerups::{apply_power_up, check_pickup, spawn_power_up};
use super::stats::resolve_stats;
use super::tuning::{
    DEFAULT_ROUNDS_TO_WIN, MAX_POWERUPS, POWERUP_ARENA_EXPIRY, POWERUP_SPAWN_INTERVAL,
    ROUND_RESET_DELAY, ROUND_WIN_SCORE,
};

// --- SETUP ---

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub map: ArenaMap,
    pub rounds_to_win: u8,
    /// Seed for power-up kinds, placements and teleports. Equal seeds and
    /// equal inputs replay the exact same match.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            map: ArenaMap::ClassicArena,
            rounds_to_win: DEFAULT_ROUNDS_TO_WIN,
            seed: 0,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchSetupError {
    #[error("rounds to win must be at least one")]
    NoRoundsToWin,
}

impl Controls {
    /// Default host-side bindings: WASD plus space, arrows plus enter.
    pub fn for_player(player: PlayerId) -> Self {
        match player {
            PlayerId::One => Controls {
                forward: ControlCode("w".into()),
                reverse: ControlCode("s".into()),
                left: ControlCode("a".into()),
                right: ControlCode("d".into()),
                fire: ControlCode(" ".into()),
            },
            PlayerId::Two => Controls {
                forward: ControlCode("ArrowUp".into()),
                reverse: ControlCode("ArrowDown".into()),
                left: ControlCode("ArrowLeft".into()),
                right: ControlCode("ArrowRight".into()),
                fire: ControlCode("Enter".into()),
            },
        }
    }
}

impl GameState {
    pub fn game_over(&self) -> bool {
        matches!(self.phase, MatchPhase::MatchOver { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            MatchPhase::MatchOver { winner } => Some(winner),
            _ => None,
        }
    }
}

// --- ENGINE ---

/// Owns the authoritative match state and advances it tick by tick.
///
/// All timing lives on the engine's own clock, which only moves inside
/// [`GameEngine::tick`]. Callers feed in the held control codes and optional
/// admin overrides each tick and get back the one-shot events it produced.
pub struct GameEngine {
    state: GameState,
    controls: [Controls; 2],
    rng: StdRng,
    clock: f64,
    next_projectile_id: u64,
    next_power_up_id: u64,
    next_power_up_spawn_at: f64,
    pending_events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(config: MatchConfig) -> Result<Self, MatchSetupError> {
        if config.rounds_to_win == 0 {
            return Err(MatchSetupError::NoRoundsToWin);
        }
        let state = GameState {
            tanks: [Tank::spawn(PlayerId::One), Tank::spawn(PlayerId::Two)],
            projectiles: Vec::new(),
            walls: config.map.walls(),
            power_ups: Vec::new(),
            scores: [0, 0],
            round_wins: [0, 0],
            round: 1,
            rounds_to_win: config.rounds_to_win,
            map: config.map,
            paused: false,
            phase: MatchPhase::Active,
        };
        Ok(GameEngine {
            state,
            controls: [
                Controls::for_player(PlayerId::One),
                Controls::for_player(PlayerId::Two),
            ],
            rng: StdRng::seed_from_u64(config.seed),
            clock: 0.0,
            next_projectile_id: 0,
            next_power_up_id: 0,
            next_power_up_spawn_at: f64::from(POWERUP_SPAWN_INTERVAL),
            pending_events: Vec::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    pub fn controls(&self, player: PlayerId) -> &Controls {
        &self.controls[player.index()]
    }

    pub fn set_controls(&mut self, player: PlayerId, controls: Controls) {
        self.controls[player.index()] = controls;
    }

    /// Shared world objects for the remote peer. The local tank record
    /// travels separately via [`crate::net::codec::encode_tank`].
    pub fn mirror_update(&self) -> MirrorUpdate {
        MirrorUpdate {
            projectiles: self.state.projectiles.clone(),
            power_ups: self.state.power_ups.clone(),
            walls: self.state.walls.clone(),
            paused: self.state.paused,
        }
    }

    /// Installs the peer's authoritative record of its own tank.
    pub fn apply_remote_tank(&mut self, tank: Tank) {
        let seat = tank.id.index();
        self.state.tanks[seat] = tank;
    }

    /// Advances the simulation by one tick of `dt` seconds.
    ///
    /// A paused or finished match does not move at all, not even its clock.
    /// `held` is the full set of control codes currently down for both
    /// players; `cheats` applies for this tick only and is never stored.
    pub fn tick(
        &mut self,
        dt: f32,
        held: &ControlSet,
        cheats: Option<&AdminCheats>,
    ) -> Vec<GameEvent> {
        if self.state.paused || self.state.game_over() {
            return Vec::new();
        }
        // Negative host frames count as zero time everywhere, countdowns
        // included.
        let dt = dt.max(0.0);
        self.clock += f64::from(dt);
        let now = self.clock;

        if let MatchPhase::RoundTransition { resolve_at } = self.state.phase {
            if now >= resolve_at {
                self.reset_round();
            }
        }

        // Respawn countdowns and effect expiry, then one stat resolution
        // per tank that holds for the whole tick.
        for player in PlayerId::BOTH {
            let tank = &mut self.state.tanks[player.index()];
            if tank.alive {
                tank.refresh_effects(now);
            } else {
                tank.respawn_timer -= dt;
                if tank.respawn_timer <= 0.0 {
                    tank.respawn();
                }
            }
        }
        let stats = [
            resolve_stats(&self.state.tanks[0], cheats),
            resolve_stats(&self.state.tanks[1], cheats),
        ];

        // Both tanks resolve against the opponent's pre-movement snapshot,
        // so the processing order cannot favor either seat.
        let shadows = self.state.tanks.clone();
        for player in PlayerId::BOTH {
            let i = player.index();
            drive_tank(
                &mut self.state.tanks[i],
                held,
                &self.controls[i],
                &stats[i],
                &self.state.walls,
                &shadows[player.opponent().index()],
            );
        }

        self.run_power_up_cycle(now);

        for player in PlayerId::BOTH {
            let i = player.index();
            if !held.contains(&self.controls[i].fire) {
                continue;
            }
            let shot = combat::try_fire(
                &mut self.state.tanks[i],
                &stats[i],
                now,
                self.next_projectile_id,
            );
            if let Some(projectile) = shot {
                self.next_projectile_id += 1;
                self.state.projectiles.push(projectile);
            }
        }

        // Flight and wall response. A bounce past the cap vanishes without
        // crediting the wall.
        let mut in_flight = mem::take(&mut self.state.projectiles);
        let mut surviving = Vec::with_capacity(in_flight.len());
        for mut projectile in in_flight.drain(..) {
            let unlimited = stats[projectile.owner.index()].unlimited_bounces;
            let step = advance_projectile(&mut projectile, &self.state.walls, now, unlimited);
            if let Some(index) = step.wall_hit {
                let wall = &mut self.state.walls[index];
                if wall.destructible && wall.health > 0 {
                    wall.health -= 1;
                    self.pending_events.push(GameEvent::WallDamaged {
                        wall: index,
                        health_left: wall.health,
                    });
                }
            }
            if !step.expired {
                surviving.push(projectile);
            }
        }

        // Impacts, in projectile insertion order. Any contact consumes the
        // projectile.
        let mut kept = Vec::with_capacity(surviving.len());
        'projectiles: for projectile in surviving.drain(..) {
            for player in PlayerId::BOTH {
                let i = player.index();
                let Some(outcome) =
                    combat::strike(&projectile, &mut self.state.tanks[i], stats[i].god_mode)
                else {
                    continue;
                };
                match outcome {
                    HitOutcome::Blocked => {}
                    HitOutcome::Absorbed => {
                        self.pending_events.push(GameEvent::ShieldAbsorbed { player });
                    }
                    HitOutcome::Destroyed => {
                        self.pending_events.push(GameEvent::TankDestroyed {
                            victim: player,
                            by: projectile.owner,
                        });
                        self.award_kill(projectile.owner);
                    }
                }
                continue 'projectiles;
            }
            kept.push(projectile);
        }
        self.state.projectiles = kept;
        if self.state.game_over() {
            self.state.projectiles.clear();
        }

        mem::take(&mut self.pending_events)
    }

    // --- TICK PIECES ---

    fn run_power_up_cycle(&mut self, now: f64) {
        // The spawn cycle is consumed even when no clear spot is found.
        if now >= self.next_power_up_spawn_at {
            if self.state.power_ups.len() < MAX_POWERUPS {
                let spawned = spawn_power_up(
                    &self.state.walls,
                    &self.state.tanks,
                    &self.state.power_ups,
                    now,
                    &mut self.rng,
                    self.next_power_up_id,
                );
                if let Some(power_up) = spawned {
                    self.next_power_up_id += 1;
                    self.state.power_ups.push(power_up);
                }
            }
            self.next_power_up_spawn_at = now + f64::from(POWERUP_SPAWN_INTERVAL);
        }

        self.state
            .power_ups
            .retain(|power_up| now - power_up.spawned_at < f64::from(POWERUP_ARENA_EXPIRY));

        for player in PlayerId::BOTH {
            let i = player.index();
            loop {
                let tank = &self.state.tanks[i];
                let found = self
                    .state
                    .power_ups
                    .iter()
                    .position(|power_up| check_pickup(tank, power_up));
                let Some(slot) = found else { break };
                let power_up = self.state.power_ups.remove(slot);
                apply_power_up(
                    &mut self.state.tanks[i],
                    power_up.kind,
                    now,
                    &mut self.rng,
                );
                self.pending_events.push(GameEvent::PowerUpCollected {
                    player,
                    kind: power_up.kind,
                });
            }
        }
    }

    /// Scores a kill for the shooter. Outside an active round this is a
    /// no-op; the kill itself has already happened.
    fn award_kill(&mut self, shooter: PlayerId) {
        if !matches!(self.state.phase, MatchPhase::Active) {
            return;
        }
        let i = shooter.index();
        self.state.scores[i] += 1;
        self.pending_events.push(GameEvent::ScoreChanged {
            scores: self.state.scores,
        });
        if self.state.scores[i] < ROUND_WIN_SCORE {
            return;
        }

        self.state.round_wins[i] += 1;
        self.pending_events.push(GameEvent::RoundWon {
            player: shooter,
            wins: self.state.round_wins[i],
        });
        if self.state.round_wins[i] >= self.state.rounds_to_win {
            self.state.phase = MatchPhase::MatchOver { winner: shooter };
            self.pending_events.push(GameEvent::MatchOver { winner: shooter });
        } else {
            self.state.phase = MatchPhase::RoundTransition {
                resolve_at: self.clock + f64::from(ROUND_RESET_DELAY),
            };
        }
    }

    fn reset_round(&mut self) {
        self.state.tanks = [Tank::spawn(PlayerId::One), Tank::spawn(PlayerId::Two)];
        self.state.projectiles.clear();
        self.state.power_ups.clear();
        self.state.walls = self.state.map.walls();
        self.state.scores = [0, 0];
        self.state.round = self.state.round.saturating_add(1);
        self.state.phase = MatchPhase::Active;
        self.next_power_up_spawn_at = self.clock + f64::from(POWERUP_SPAWN_INTERVAL);
        self.pending_events.push(GameEvent::RoundStarted {
            round: self.state.round,
        });
        self.pending_events.push(GameEvent::ScoreChanged {
            scores: self.state.scores,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::tuning::{
        ADMIN_SUPER_SPEED, BASE_DAMAGE, DEFAULT_BOUNCE_CAP, RESPAWN_DELAY, TANK_SPEED,
    };
    use crate::net::protocol::{ActivePowerUp, PowerUpKind, Projectile};
    use assert_approx_eq::assert_approx_eq;
    use glam::Vec2;

    const DT: f32 = 0.05;

    fn engine() -> GameEngine {
        GameEngine::new(MatchConfig {
            map: ArenaMap::OpenField,
            rounds_to_win: 2,
            seed: 7,
        })
        .unwrap()
    }

    fn held(codes: &[&str]) -> ControlSet {
        codes.iter().map(|c| ControlCode(c.to_string())).collect()
    }

    fn cheats_for(player: PlayerId) -> AdminCheats {
        AdminCheats {
            enabled: true,
            player,
            god_mode: false,
            instant_kill: false,
            unlimited_bounces: false,
            super_speed: false,
            rapid_fire: false,
        }
    }

    /// A motionless projectile already overlapping the given tank. Bounced
    /// once so self-immunity cannot apply.
    fn planted_shot(engine: &GameEngine, owner: PlayerId, target: PlayerId) -> Projectile {
        Projectile {
            id: 999,
            owner,
            position: engine.state.tanks[target.index()].position,
            velocity: Vec2::ZERO,
            bounces: 1,
            max_bounces: DEFAULT_BOUNCE_CAP,
            spawned_at: engine.clock,
            damage: BASE_DAMAGE,
        }
    }

    #[test]
    fn zero_rounds_to_win_is_rejected() {
        let config = MatchConfig {
            rounds_to_win: 0,
            ..MatchConfig::default()
        };
        assert_eq!(
            GameEngine::new(config).err(),
            Some(MatchSetupError::NoRoundsToWin)
        );
    }

    #[test]
    fn pausing_freezes_the_clock_and_the_world() {
        let mut engine = engine();
        engine.set_paused(true);
        let before = engine.state.clone();

        let events = engine.tick(DT, &held(&["w", "ArrowUp"]), None);
        assert!(events.is_empty());
        assert_eq!(engine.clock(), 0.0);
        assert_eq!(*engine.state(), before);

        engine.set_paused(false);
        engine.tick(DT, &held(&[]), None);
        assert_approx_eq!(engine.clock(), f64::from(DT));
    }

    #[test]
    fn both_players_drive_with_their_own_bindings() {
        let mut engine = engine();
        engine.tick(DT, &held(&["w", "ArrowUp"]), None);

        let [one, two] = &engine.state().tanks;
        // Facing each other, so both advance toward the middle.
        assert_approx_eq!(one.position.x, 100.0 + TANK_SPEED);
        assert_approx_eq!(two.position.x, 900.0 - TANK_SPEED);
    }

    #[test]
    fn holding_fire_respects_the_cooldown() {
        let mut engine = engine();
        engine.tick(DT, &held(&[" "]), None);
        engine.tick(DT, &held(&[" "]), None);
        assert_eq!(engine.state().projectiles.len(), 1);
        assert_eq!(engine.state().projectiles[0].owner, PlayerId::One);
    }

    #[test]
    fn projectile_ids_keep_counting_across_shots() {
        let mut engine = engine();
        engine.tick(DT, &held(&[" ", "Enter"]), None);
        let ids: Vec<u64> = engine.state().projectiles.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn power_ups_appear_on_schedule_and_stay_capped() {
        let mut engine = engine();
        let mut seen_any = false;
        while engine.clock() < 60.0 {
            engine.tick(DT, &held(&[]), None);
            assert!(engine.state().power_ups.len() <= MAX_POWERUPS);
            seen_any |= !engine.state().power_ups.is_empty();
        }
        assert!(seen_any, "no power-up spawned in a full minute");
    }

    #[test]
    fn a_kill_scores_and_respawns_the_victim() {
        let mut engine = engine();
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        let events = engine.tick(DT, &held(&[]), None);
        assert!(events.contains(&GameEvent::TankDestroyed {
            victim: PlayerId::Two,
            by: PlayerId::One,
        }));
        assert!(events.contains(&GameEvent::ScoreChanged { scores: [1, 0] }));
        assert_eq!(engine.state().scores, [1, 0]);
        assert!(!engine.state().tanks[1].alive);
        assert!(engine.state().projectiles.is_empty());

        // The countdown runs on the engine clock and brings the tank back.
        engine.tick(1.0, &held(&[]), None);
        assert!(!engine.state().tanks[1].alive);
        engine.tick(1.1, &held(&[]), None);
        assert!(engine.state().tanks[1].alive);
        assert_eq!(engine.state().tanks[1].health, engine.state().tanks[1].max_health);
    }

    #[test]
    fn a_negative_frame_time_advances_nothing() {
        let mut engine = engine();
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);
        engine.tick(DT, &held(&[]), None);
        let clock = engine.clock();
        assert_approx_eq!(engine.state().tanks[1].respawn_timer, RESPAWN_DELAY);

        // A backwards host frame must not stretch the respawn countdown.
        engine.tick(-1.0, &held(&[]), None);
        assert_eq!(engine.clock(), clock);
        assert_approx_eq!(engine.state().tanks[1].respawn_timer, RESPAWN_DELAY);
        assert!(!engine.state().tanks[1].alive);
    }

    #[test]
    fn the_fifth_kill_wins_the_round_and_schedules_the_reset() {
        let mut engine = engine();
        engine.state.scores = [ROUND_WIN_SCORE - 1, 0];
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        let events = engine.tick(DT, &held(&[]), None);
        assert!(events.contains(&GameEvent::RoundWon {
            player: PlayerId::One,
            wins: 1,
        }));
        assert!(matches!(
            engine.state().phase,
            MatchPhase::RoundTransition { .. }
        ));

        // Reset applies on the first tick past the transition delay.
        engine.tick(ROUND_RESET_DELAY + 0.1, &held(&[]), None);
        let state = engine.state();
        assert_eq!(state.round, 2);
        assert_eq!(state.scores, [0, 0]);
        assert_eq!(state.round_wins, [1, 0]);
        assert!(matches!(state.phase, MatchPhase::Active));
        assert!(state.tanks.iter().all(|t| t.alive));
    }

    #[test]
    fn fire_wears_the_center_wall_down_and_the_reset_rebuilds_it() {
        let mut engine = engine();
        let wall = engine
            .state()
            .walls
            .iter()
            .position(|w| w.destructible && w.min.y < 300.0 && w.max.y > 300.0)
            .expect("the open field has a breakable block on the firing line");
        assert_eq!(engine.state().walls[wall].health, 2);

        // Hold fire until the block on the firing line is worn down.
        let mut damage_events = Vec::new();
        for _ in 0..200 {
            let events = engine.tick(DT, &held(&[" "]), None);
            damage_events
                .extend(events.into_iter().filter(|e| matches!(e, GameEvent::WallDamaged { .. })));
            let health = engine.state().walls[wall].health;
            assert!(health >= 0, "wall health may never drop below zero");
            if health == 0 {
                break;
            }
        }
        assert_eq!(
            damage_events,
            vec![
                GameEvent::WallDamaged { wall, health_left: 1 },
                GameEvent::WallDamaged { wall, health_left: 0 },
            ]
        );
        assert!(
            engine.state().walls[..4].iter().all(|w| w.health == -1),
            "the border ring never takes damage"
        );

        // The ruin stays down until a round win rebuilds the map.
        engine.state.scores = [ROUND_WIN_SCORE - 1, 0];
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);
        engine.tick(DT, &held(&[]), None);
        engine.tick(ROUND_RESET_DELAY + 0.1, &held(&[]), None);
        assert_eq!(engine.state().round, 2);
        assert_eq!(engine.state().walls, ArenaMap::OpenField.walls());
    }

    #[test]
    fn the_round_counter_saturates_instead_of_wrapping() {
        let mut engine = engine();
        engine.state.round = u8::MAX;
        engine.state.scores = [ROUND_WIN_SCORE - 1, 0];
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        engine.tick(DT, &held(&[]), None);
        engine.tick(ROUND_RESET_DELAY + 0.1, &held(&[]), None);
        assert_eq!(engine.state().round, u8::MAX);
        assert!(matches!(engine.state().phase, MatchPhase::Active));
    }

    #[test]
    fn kills_during_the_transition_do_not_score() {
        let mut engine = engine();
        engine.state.phase = MatchPhase::RoundTransition { resolve_at: 1000.0 };
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        let events = engine.tick(DT, &held(&[]), None);
        assert!(events.iter().any(|e| matches!(e, GameEvent::TankDestroyed { .. })));
        assert!(!events.iter().any(|e| matches!(e, GameEvent::ScoreChanged { .. })));
        assert_eq!(engine.state().scores, [0, 0]);
        assert!(!engine.state().tanks[1].alive);
    }

    #[test]
    fn the_last_round_win_ends_the_match_for_good() {
        let mut engine = engine();
        engine.state.round_wins = [1, 0];
        engine.state.scores = [ROUND_WIN_SCORE - 1, 0];
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        let events = engine.tick(DT, &held(&[]), None);
        assert!(events.contains(&GameEvent::MatchOver {
            winner: PlayerId::One,
        }));
        assert_eq!(engine.state().winner(), Some(PlayerId::One));
        assert!(engine.state().projectiles.is_empty());

        // Nothing moves after the match is decided.
        let clock = engine.clock();
        let events = engine.tick(DT, &held(&["w", " "]), None);
        assert!(events.is_empty());
        assert_eq!(engine.clock(), clock);
        assert!(engine.state().projectiles.is_empty());
    }

    #[test]
    fn a_shield_absorbs_only_the_first_of_two_hits_in_one_tick() {
        let mut engine = engine();
        engine.state.tanks[1].shielded = true;
        engine.state.tanks[1].active_effects.push(ActivePowerUp {
            kind: PowerUpKind::Shield,
            expires_at: 1000.0,
        });
        let first = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        let mut second = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        second.id = 1000;
        engine.state.projectiles.push(first);
        engine.state.projectiles.push(second);

        let events = engine.tick(DT, &held(&[]), None);
        assert!(events.contains(&GameEvent::ShieldAbsorbed {
            player: PlayerId::Two,
        }));
        assert!(events.contains(&GameEvent::TankDestroyed {
            victim: PlayerId::Two,
            by: PlayerId::One,
        }));
        assert!(!engine.state().tanks[1].alive);
        assert_eq!(engine.state().scores, [1, 0]);
    }

    #[test]
    fn god_mode_swallows_the_projectile_without_a_kill() {
        let mut engine = engine();
        let mut cheats = cheats_for(PlayerId::Two);
        cheats.god_mode = true;
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        let events = engine.tick(DT, &held(&[]), Some(&cheats));
        assert!(events.is_empty());
        assert!(engine.state().tanks[1].alive);
        assert!(engine.state().projectiles.is_empty());
    }

    #[test]
    fn super_speed_triples_the_step() {
        let mut engine = engine();
        let mut cheats = cheats_for(PlayerId::One);
        cheats.super_speed = true;

        engine.tick(DT, &held(&["w"]), Some(&cheats));
        assert_approx_eq!(
            engine.state().tanks[0].position.x,
            100.0 + TANK_SPEED * ADMIN_SUPER_SPEED
        );
    }

    #[test]
    fn cheats_apply_only_for_the_ticks_they_are_passed() {
        let mut engine = engine();
        let mut cheats = cheats_for(PlayerId::One);
        cheats.super_speed = true;

        engine.tick(DT, &held(&["w"]), Some(&cheats));
        engine.tick(DT, &held(&["w"]), None);
        assert_approx_eq!(
            engine.state().tanks[0].position.x,
            100.0 + TANK_SPEED * ADMIN_SUPER_SPEED + TANK_SPEED
        );
    }

    #[test]
    fn events_are_delivered_exactly_once() {
        let mut engine = engine();
        let shot = planted_shot(&engine, PlayerId::One, PlayerId::Two);
        engine.state.projectiles.push(shot);

        let events = engine.tick(DT, &held(&[]), None);
        assert!(!events.is_empty());
        let events = engine.tick(DT, &held(&[]), None);
        assert!(events.is_empty());
    }

    #[test]
    fn equal_seeds_and_inputs_replay_the_same_match() {
        let config = MatchConfig {
            map: ArenaMap::Fortress,
            rounds_to_win: 3,
            seed: 42,
        };
        let mut left = GameEngine::new(config.clone()).unwrap();
        let mut right = GameEngine::new(config).unwrap();

        let script = [
            held(&["w", " ", "ArrowUp"]),
            held(&["w", "d", "ArrowLeft", "Enter"]),
            held(&["s", "ArrowUp", "ArrowRight"]),
            held(&[" ", "Enter"]),
        ];
        for step in 0..400 {
            let input = &script[step % script.len()];
            let a = left.tick(DT, input, None);
            let b = right.tick(DT, input, None);
            assert_eq!(a, b);
        }
        assert_eq!(left.state(), right.state());
        assert_eq!(left.clock(), right.clock());
    }

    #[test]
    fn remote_tank_records_replace_the_local_seat() {
        let mut engine = engine();
        let mut remote = Tank::spawn(PlayerId::Two);
        remote.position = Vec2::new(444.0, 222.0);
        remote.rotation = 1.5;

        engine.apply_remote_tank(remote.clone());
        assert_eq!(engine.state().tanks[1], remote);
        assert_eq!(engine.state().tanks[0].id, PlayerId::One);
    }

    #[test]
    fn the_mirror_update_carries_the_shared_world() {
        let mut engine = engine();
        engine.tick(DT, &held(&[" "]), None);
        engine.set_paused(true);

        let mirror = engine.mirror_update();
        assert_eq!(mirror.projectiles, engine.state().projectiles);
        assert_eq!(mirror.walls, engine.state().walls);
        assert!(mirror.paused);
    }
}
