//! Whole-run behaviour through the public API

use ai_raid::GameConfig;
use ai_raid::sim::autopilot;
use ai_raid::sim::{
    Category, GameEvent, GamePhase, GameState, LevelDef, LossReason, Presenter, Snapshot,
    TickInput, run_frame, tick, tick_idle,
};
use glam::Vec2;
use proptest::prelude::*;

fn boss_only() -> GameConfig {
    let boss = LevelDef::campaign()
        .into_iter()
        .find(LevelDef::is_boss)
        .unwrap();
    GameConfig {
        levels: vec![boss],
        ..GameConfig::default()
    }
}

#[test]
fn autopilot_run_keeps_invariants() {
    let mut state = GameState::new(GameConfig::default(), 77);
    let max_fuel = state.config.max_fuel;
    let mut last_score = 0;

    for _ in 0..20_000 {
        let ticks_before = state.time_ticks;
        let was_running = state.phase.is_running();
        tick_idle(&mut state);

        assert!(state.player.fuel >= 0.0 && state.player.fuel <= max_fuel);
        assert!(state.player.pos.x >= 20.0 && state.player.pos.x <= 580.0);
        assert!(state.score >= last_score);
        if was_running {
            assert_eq!(state.time_ticks, ticks_before + 1);
        } else {
            assert_eq!(state.time_ticks, ticks_before);
        }
        last_score = state.score;

        if state.phase.is_terminal() {
            break;
        }
    }
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut state = GameState::new(GameConfig::default(), seed);
        for _ in 0..3_000 {
            tick_idle(&mut state);
        }
        serde_json::to_string(&state.snapshot()).unwrap()
    };
    assert_eq!(run(9), run(9));
}

#[test]
fn clearing_a_level_transitions_and_refuels() {
    let mut state = GameState::new(GameConfig::default(), 5);
    state.player.fuel = 30.0;
    state.award(1500);
    tick(&mut state, &TickInput::default());

    assert!(matches!(state.phase, GamePhase::Transitioning { to_level: 1, .. }));
    assert!(state.events.contains(&GameEvent::LevelCleared { level: 0 }));
    let snap = state.snapshot();
    assert!(snap.transitioning);
    assert!(snap.enemies.is_empty() && snap.bullets.is_empty());

    // Held fire during the pause does nothing
    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    while !state.phase.is_running() {
        tick(&mut state, &fire);
        assert!(state.bullets.is_empty());
    }
    assert_eq!(state.level_index, 1);
    assert_eq!(state.level_score, 0);
    assert_eq!(state.score, 1500);
    assert_eq!(state.player.fuel, state.config.max_fuel);
    assert_eq!(state.level().target, Category::Video);
}

#[test]
fn shooting_the_boss_down_wins() {
    let mut state = GameState::new(boss_only(), 5);
    let hp = state.boss.as_ref().unwrap().hp;

    let mut won = false;
    for _ in 0..hp {
        let boss_pos = state.boss.as_ref().unwrap().pos;
        state.spawn_bullet(boss_pos + Vec2::new(0.0, 20.0));
        tick(&mut state, &TickInput::default());
        if state.events.contains(&GameEvent::GameWon) {
            won = true;
        }
    }

    assert!(won);
    assert_eq!(state.phase, GamePhase::Won);
    assert!(state.boss.is_none());
    assert!(state.snapshot().won);
}

#[test]
fn terminal_run_still_presents_frames() {
    #[derive(Default)]
    struct Count(Vec<bool>);
    impl Presenter for Count {
        fn present(&mut self, snapshot: &Snapshot, _events: &[GameEvent]) {
            self.0.push(snapshot.lost);
        }
    }

    let mut state = GameState::new(GameConfig::default(), 5);
    let pos = state.player.pos;
    state.spawn_enemy(Category::Video, "Sora", pos);
    state.spawn_enemy(Category::Video, "Veo", pos);
    state.penalty_streak = true;

    let mut presenter = Count::default();
    for _ in 0..3 {
        run_frame(&mut state, &TickInput::default(), &mut presenter);
    }
    assert_eq!(
        state.phase,
        GamePhase::Lost {
            reason: LossReason::BurnedOut
        }
    );
    assert_eq!(presenter.0, vec![true, true, true]);
}

#[test]
fn config_json_drives_the_run() {
    let config = GameConfig::from_json(r#"{ "max_fuel": 50.0, "fuel_per_tick": 1.0 }"#).unwrap();
    let mut state = GameState::new(config, 1);
    for _ in 0..49 {
        tick(&mut state, &TickInput::default());
    }
    assert!(state.phase.is_running());
    tick(&mut state, &TickInput::default());
    assert_eq!(
        state.phase,
        GamePhase::Lost {
            reason: LossReason::OutOfFuel
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn boss_hp_never_recovers(
        seed in any::<u64>(),
        inputs in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 1..400),
    ) {
        let mut state = GameState::new(boss_only(), seed);
        let mut last_hp = state.boss.as_ref().map(|b| b.hp);

        for (left, right, fire) in inputs {
            tick(&mut state, &TickInput { left, right, fire });
            let hp = state.boss.as_ref().map(|b| b.hp);
            match (last_hp, hp) {
                (Some(before), Some(after)) => prop_assert!(after <= before),
                (None, Some(_)) => prop_assert!(false, "boss came back"),
                (Some(_), None) => prop_assert_eq!(state.phase, GamePhase::Won),
                (None, None) => {}
            }
            last_hp = hp;
        }
    }

    #[test]
    fn autopilot_never_leaves_the_river(seed in any::<u64>()) {
        let mut state = GameState::new(GameConfig::default(), seed);
        for _ in 0..600 {
            let input = autopilot::suggest_input(&state);
            prop_assert!(!(input.left && input.right));
            tick(&mut state, &input);
            prop_assert!(state.player.pos.x >= 20.0 && state.player.pos.x <= 580.0);
        }
    }
}
