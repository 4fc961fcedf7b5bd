use invaderers_common::input::InputState;
use invaderers_common::key::Key;

use super::*;
use crate::config::Rules;
use crate::pickup::PICKUP_POINTS;
use crate::sprite::PARK_OFFSET;

fn table() -> PickupTable {
    PickupTable::from_points([(1.0, 2.0); PICKUP_POINTS])
}

/// Seeded, and bombs stay quiet unless a test asks for them.
fn quiet() -> GameConfig {
    GameConfig::builder()
        .seed(7)
        .bomb_initial_cooldown(u32::MAX)
        .build()
}

fn game_with(config: GameConfig) -> Game {
    Game::new(config, SpriteTextures::default(), table())
}

fn idle() -> InputState {
    InputState::new()
}

fn tap(key: Key) -> InputState {
    let mut input = InputState::new();
    input.handle_key_event(key, true);
    input
}

fn hold(key: Key) -> InputState {
    let mut input = tap(key);
    input.end_frame();
    input
}

fn clear_invaders(game: &mut Game) {
    for invader in game.invaders.iter_mut().filter(|i| i.is_enabled()) {
        invader.park();
    }
}

/// Leave a single live invader centred at (`x`, `y`).
fn lone_invader(game: &mut Game, x: f32, y: f32) {
    clear_invaders(game);
    if let Some(invader) = game.invaders.get_mut(0) {
        invader.init(TextureId::NONE, x, y, INVADER_SIZE, INVADER_SIZE);
    }
    game.scoreboard.live_invaders = 1;
}

fn drop_bomb_from(game: &mut Game, x: f32, y: f32) {
    let anchor = Sprite::new(TextureId::NONE, x, y - BOMB_OFFSET, INVADER_SIZE, INVADER_SIZE);
    assert!(game.bombs.spawn_relative(&anchor, 0.0, BOMB_OFFSET).is_some());
}

/// Step until `event` shows up, returning the 1-based frame it happened on.
fn frames_until(
    game: &mut Game,
    input: &InputState,
    event: GameEvent,
    limit: usize,
) -> Option<usize> {
    (1..=limit).find(|_| {
        game.step(input);
        game.events().contains(&event)
    })
}

#[test]
fn new_game_matches_the_starting_layout() {
    let game = game_with(quiet());
    let board = game.scoreboard();

    assert_eq!(board.lives, 5);
    assert_eq!(board.score, 0);
    assert_eq!(board.live_invaders as usize, game.config().invader_capacity() - 7);
    assert_eq!(game.invaders().enabled_count(), 84);
    assert_eq!(game.invaders().capacity(), 91);
    assert_eq!(game.missiles().capacity(), 2);
    assert_eq!(game.bombs().capacity(), 7);
    assert_eq!(game.missiles().enabled_count(), 0);
    assert_eq!(game.bombs().enabled_count(), 0);
    assert_eq!(game.round(), RoundState::Playing);
    assert_eq!(game.sky(), Sky::Day);
    assert_eq!(game.ship().position(), (0.0, -2.75));
    assert_eq!(game.pickup().position(), (0.0, 0.0));

    let (x, y) = game.invaders().get(0).map(|s| s.position()).unwrap();
    assert!((x + 2.6).abs() < 1e-5);
    assert!((y - 2.75).abs() < 1e-5);
    // slots past the formation stay free
    assert!(game.invaders().iter().skip(84).all(|s| !s.is_enabled()));
}

#[test]
fn quiet_frames_leave_the_counters_alone() {
    let mut game = game_with(quiet());
    let before = game.scoreboard();
    for _ in 0..100 {
        game.step(&idle());
    }
    assert_eq!(game.scoreboard(), before);
    assert_eq!(game.invaders().enabled_count(), 84);
}

#[test]
fn missile_from_the_ship_hits_the_invader_above() {
    let mut game = game_with(quiet());
    lone_invader(&mut game, 0.0, 0.5);

    game.step(&tap(Key::Space));
    assert_eq!(game.events(), &[GameEvent::MissileFired]);
    assert_eq!(game.missiles().enabled_count(), 1);

    let hit_frame = frames_until(&mut game, &idle(), GameEvent::InvaderHit, 30);
    // fired on frame 1, travelling 0.3 per frame from y = -2.25
    assert_eq!(hit_frame, Some(8));

    assert_eq!(game.missiles().enabled_count(), 0);
    assert!(!game.invaders().get(0).unwrap().is_enabled());
    assert_eq!(game.scoreboard().score, 1);
    assert_eq!(game.scoreboard().live_invaders, 0);
    assert_eq!(game.round(), RoundState::RoundOver { loss: false });
    assert!(game.events().contains(&GameEvent::WaveCleared));
}

#[test]
fn one_hit_scores_one_and_takes_one_invader() {
    let mut game = game_with(quiet());
    // line the ship up with the column right of centre
    game.ship.translate(0.2, 0.0);

    game.step(&tap(Key::Space));
    let hit = frames_until(&mut game, &idle(), GameEvent::InvaderHit, 30);
    assert!(hit.is_some());

    let board = game.scoreboard();
    assert_eq!(board.score, 1);
    assert_eq!(board.live_invaders, 83);
    assert_eq!(game.invaders().enabled_count(), 83);
    // bottom row, eighth column
    assert!(!game.invaders().get(7 + 5 * 14).unwrap().is_enabled());
    assert_eq!(game.round(), RoundState::Playing);
}

#[test]
fn missile_leaving_the_top_is_disabled() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);

    game.step(&tap(Key::Space));
    for _ in 0..30 {
        game.step(&idle());
    }
    assert_eq!(game.missiles().enabled_count(), 0);
    let (x, _) = game.missiles().get(0).unwrap().position();
    assert!(x >= PARK_OFFSET);
    assert_eq!(game.scoreboard().score, 0);
}

#[test]
fn missile_cooldown_spaces_out_shots() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);

    let fired: Vec<usize> = (1..=7)
        .filter(|_| {
            game.step(&tap(Key::Space));
            game.events().contains(&GameEvent::MissileFired)
        })
        .collect();
    assert_eq!(fired, vec![1, 7]);
}

#[test]
fn holding_fire_does_not_autofire() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);
    for _ in 0..20 {
        game.step(&hold(Key::Space));
    }
    assert_eq!(game.missiles().enabled_count(), 0);
}

#[test]
fn full_missile_pool_is_a_silent_no_op() {
    let mut game = game_with(GameConfig::builder().seed(7).missile_cooldown(0).build());
    clear_invaders(&mut game);
    game.bomb_cooldown = u32::MAX;

    let fired = (0..3)
        .filter(|_| {
            game.step(&tap(Key::Space));
            game.events().contains(&GameEvent::MissileFired)
        })
        .count();
    assert_eq!(fired, 2);
    assert_eq!(game.missiles().enabled_count(), 2);
}

#[test]
fn classic_rules_only_fire_on_odd_lives() {
    let classic = |lives| {
        GameConfig::builder()
            .seed(7)
            .bomb_initial_cooldown(u32::MAX)
            .starting_lives(lives)
            .rules(Rules::classic())
            .build()
    };

    let mut night = game_with(classic(4));
    night.step(&tap(Key::Space));
    assert_eq!(night.missiles().enabled_count(), 0);

    let mut day = game_with(classic(5));
    day.step(&tap(Key::Space));
    assert_eq!(day.missiles().enabled_count(), 1);
}

#[test]
fn bomb_reaches_the_ship_in_the_expected_frame() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);
    drop_bomb_from(&mut game, 0.0, 1.0);

    let ship_y = game.ship().position().1;
    let half_heights = game.ship().half_extents().1 + PROJECTILE_HEIGHT * 0.5;
    let expected = ((1.0 - ship_y - half_heights) / game.config().bomb_speed).ceil() as usize;
    assert_eq!(expected, 18);

    let hit = frames_until(&mut game, &idle(), GameEvent::ShipHit, 40);
    assert_eq!(hit, Some(expected));
    assert_eq!(game.scoreboard().lives, 4);
    assert_eq!(game.bombs().enabled_count(), 0);
    assert_eq!(game.bomb_cooldown, game.config().bomb_hit_cooldown);
    assert_eq!(game.sky(), Sky::Night);
}

#[test]
fn bomb_missing_the_ship_stops_at_the_bottom() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);
    drop_bomb_from(&mut game, 1.5, 1.0);

    for _ in 0..40 {
        game.step(&idle());
    }
    assert_eq!(game.bombs().enabled_count(), 0);
    assert_eq!(game.scoreboard().lives, 5);
}

#[test]
fn losing_the_last_life_waits_for_restart() {
    let mut game = game_with(
        GameConfig::builder()
            .seed(7)
            .bomb_initial_cooldown(u32::MAX)
            .starting_lives(1)
            .build(),
    );
    drop_bomb_from(&mut game, 0.0, 1.0);

    assert!(frames_until(&mut game, &idle(), GameEvent::GameLost, 40).is_some());
    assert_eq!(game.round(), RoundState::RoundOver { loss: true });
    assert_eq!(game.scoreboard().lives, 0);
    assert_eq!(game.draw_list().count(), 108);

    // continue does nothing after a loss
    for _ in 0..10 {
        game.step(&hold(Key::Y));
        assert_eq!(game.round(), RoundState::RoundOver { loss: true });
    }

    game.step(&hold(Key::R));
    assert_eq!(game.events(), &[GameEvent::Restarted]);
    assert_eq!(game.round(), RoundState::Playing);
    assert_eq!(game.scoreboard().lives, 1);
    assert_eq!(game.scoreboard().score, 0);
    assert_eq!(game.scoreboard().live_invaders, 84);
    assert_eq!(game.bombs().enabled_count(), 0);
    assert_eq!(game.draw_list().count(), 106);
}

#[test]
fn cleared_wave_continues_with_a_full_formation() {
    let mut game = game_with(quiet());
    lone_invader(&mut game, 0.0, 0.5);
    game.step(&tap(Key::Space));
    assert!(frames_until(&mut game, &idle(), GameEvent::WaveCleared, 30).is_some());

    // the round is frozen until the player continues
    let ship = game.ship().position();
    for _ in 0..5 {
        game.step(&hold(Key::Left));
    }
    assert_eq!(game.ship().position(), ship);
    assert_eq!(game.round(), RoundState::RoundOver { loss: false });

    game.step(&hold(Key::Y));
    assert_eq!(game.events(), &[GameEvent::WaveStarted]);
    assert_eq!(game.round(), RoundState::Playing);
    let capacity = game.config().invader_capacity();
    assert_eq!(game.invaders().enabled_count(), capacity - 7);
    assert_eq!(game.scoreboard().live_invaders as usize, capacity - 7);
    assert_eq!(game.scoreboard().score, 1);
}

#[test]
fn uniform_bomber_is_above_the_ship() {
    let mut game = game_with(GameConfig::builder().seed(11).bomb_initial_cooldown(0).build());
    game.step(&idle());
    assert_eq!(game.events(), &[GameEvent::BombDropped]);

    let bomb = *game.bombs().get(0).unwrap();
    let (bx, by) = bomb.position();
    // the bomb has already moved one step down
    let bomber_y = by + game.config().bomb_speed - BOMB_OFFSET;
    let bomber = game
        .invaders()
        .iter()
        .find(|i| {
            let (x, y) = i.position();
            x == bx && (y - bomber_y).abs() < 1e-4
        })
        .expect("bomb should sit under a live invader");
    assert!(bomber.is_enabled());
    assert!(bomber.is_above(game.ship(), game.config().bomber_margin));
}

#[test]
fn no_bomb_without_a_qualifying_invader() {
    let mut game = game_with(GameConfig::builder().seed(3).bomb_initial_cooldown(0).build());
    clear_invaders(&mut game);
    for _ in 0..10 {
        game.step(&idle());
    }
    assert_eq!(game.bombs().enabled_count(), 0);
}

fn tail_scan_drops(qualifying_slot: usize, frames: usize) -> usize {
    let mut game = game_with(
        GameConfig::builder()
            .seed(5)
            .bomb_initial_cooldown(0)
            .rules(Rules::classic())
            .build(),
    );
    clear_invaders(&mut game);
    if let Some(invader) = game.invaders.get_mut(qualifying_slot) {
        invader.init(TextureId::NONE, 0.0, 2.0, INVADER_SIZE, INVADER_SIZE);
    }
    (0..frames)
        .filter(|_| {
            game.bombs.park_all();
            game.step(&idle());
            game.events().contains(&GameEvent::BombDropped)
        })
        .count()
}

#[test]
fn tail_scan_always_reaches_the_last_slot() {
    assert_eq!(tail_scan_drops(90, 50), 50);
}

#[test]
fn tail_scan_rarely_reaches_the_first_slot() {
    // only a start index of 0 can find slot 0
    assert!(tail_scan_drops(0, 50) < 50);
}

#[test]
fn pickup_grants_a_life_and_moves() {
    let mut game = game_with(quiet());
    game.ship.translate(0.0, 2.75);

    game.step(&idle());
    assert_eq!(game.events(), &[GameEvent::PickupCollected]);
    assert_eq!(game.scoreboard().lives, 6);
    assert_eq!(game.sky(), Sky::Night);

    let (x, y) = game.pickup().position();
    assert_eq!((x.abs(), y.abs()), (1.0, 2.0));
    assert!(game.pickup().is_enabled());
}

#[test]
fn pickup_respawning_under_the_ship_retriggers() {
    let mut game = Game::new(
        quiet(),
        SpriteTextures::default(),
        PickupTable::from_points([(0.0, 0.0); PICKUP_POINTS]),
    );
    game.ship.translate(0.0, 2.75);
    for _ in 0..3 {
        game.step(&idle());
    }
    assert_eq!(game.scoreboard().lives, 8);
}

#[test]
fn ship_stays_inside_the_walls() {
    let mut game = game_with(quiet());
    for _ in 0..200 {
        game.step(&hold(Key::Left));
    }
    let left = *game.borders.get(Wall::Left);
    assert!(!game.ship().collides_with(&left));
    assert!(game.ship().position().0 < -2.6);

    // already resting above the bottom wall
    game.step(&hold(Key::Down));
    assert!((game.ship().position().1 + 2.75).abs() < 1e-5);

    game.step(&hold(Key::Up));
    assert!(game.ship().position().1 > -2.75);
}

#[test]
fn missile_takes_only_the_first_overlapping_invader() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);
    // both sit where a fresh missile lands on its first frame
    for slot in [3, 5] {
        if let Some(invader) = game.invaders.get_mut(slot) {
            invader.init(TextureId::NONE, 0.0, -1.95, INVADER_SIZE, INVADER_SIZE);
        }
    }
    game.scoreboard.live_invaders = 2;

    game.step(&tap(Key::Space));
    assert_eq!(game.events(), &[GameEvent::MissileFired, GameEvent::InvaderHit]);
    assert!(!game.invaders().get(3).unwrap().is_enabled());
    assert!(game.invaders().get(5).unwrap().is_enabled());
    assert_eq!(game.scoreboard().score, 1);
    assert_eq!(game.scoreboard().live_invaders, 1);
    assert_eq!(game.missiles().enabled_count(), 0);
    assert_eq!(game.round(), RoundState::Playing);
}

#[test]
fn full_bomb_pool_is_a_silent_no_op() {
    let mut game = game_with(GameConfig::builder().seed(7).bomb_initial_cooldown(0).build());
    let capacity = game.bombs().capacity();
    for _ in 0..capacity {
        drop_bomb_from(&mut game, 2.5, 2.0);
    }
    assert_eq!(game.bombs().enabled_count(), 7);

    game.step(&idle());
    assert!(!game.events().contains(&GameEvent::BombDropped));
    assert_eq!(game.bombs().enabled_count(), 7);
    assert_eq!(game.scoreboard().lives, 5);
}

#[test]
fn loss_beats_a_win_in_the_same_frame() {
    let mut game = game_with(
        GameConfig::builder()
            .seed(7)
            .bomb_initial_cooldown(u32::MAX)
            .starting_lives(1)
            .build(),
    );
    lone_invader(&mut game, 0.0, -1.95);
    // lands on the ship after one step down
    drop_bomb_from(&mut game, 0.0, -2.55);

    game.step(&tap(Key::Space));
    assert_eq!(
        game.events(),
        &[
            GameEvent::MissileFired,
            GameEvent::InvaderHit,
            GameEvent::WaveCleared,
            GameEvent::ShipHit,
            GameEvent::GameLost,
        ]
    );
    assert_eq!(game.round(), RoundState::RoundOver { loss: true });
    assert_eq!(game.scoreboard().lives, 0);
    assert_eq!(game.scoreboard().live_invaders, 0);

    game.step(&hold(Key::Y));
    assert_eq!(game.round(), RoundState::RoundOver { loss: true });
}

#[test]
fn bomb_touching_ship_and_floor_counts_once() {
    let mut game = game_with(quiet());
    clear_invaders(&mut game);

    // where the bomb ends up after one step down
    let landed = Sprite::new(TextureId::NONE, 0.0, -2.85, PROJECTILE_WIDTH, PROJECTILE_HEIGHT);
    assert!(landed.collides_with(game.ship()));
    assert!(landed.collides_with(game.borders.get(Wall::Bottom)));

    drop_bomb_from(&mut game, 0.0, -2.65);
    game.step(&idle());
    assert_eq!(game.events(), &[GameEvent::ShipHit]);
    assert_eq!(game.scoreboard().lives, 4);
    assert_eq!(game.bombs().enabled_count(), 0);

    for _ in 0..5 {
        game.step(&idle());
    }
    assert_eq!(game.scoreboard().lives, 4);
}

#[test]
fn empty_wave_config_still_starts_with_an_invader() {
    let mut game = game_with(
        GameConfig::builder()
            .seed(7)
            .bomb_initial_cooldown(u32::MAX)
            .wave_rows(0)
            .wave_cols(0)
            .build(),
    );
    assert_eq!(game.round(), RoundState::Playing);
    assert_eq!(game.scoreboard().live_invaders, 1);
    assert_eq!(game.invaders().enabled_count(), 1);

    game.step(&idle());
    assert_eq!(game.round(), RoundState::Playing);
}
