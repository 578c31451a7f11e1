//! Headless level demo
//!
//! Drives the coordinator with a fixed-step loop and a scripted "AI"
//! standing in for real input: the player runs at the nearest hostile and
//! drops the bomb once it is inside blast range. Run with
//! `RUST_LOG=debug` to watch the level transitions.

use minigame_core::prelude::*;

const STEP: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();

    let config = LevelConfig::standard();
    let player_speed = config.player.speed;
    let bomb_range = config.bomb.range;

    log::info!("starting level demo ({} fps fixed step)", 60);
    let mut level = UnitManager::new(config);

    let mut frames = 0u32;
    while frames < MAX_FRAMES && !level.is_level_won() && !level.is_level_lost() {
        let input = steer_player(&mut level, player_speed, bomb_range);
        level.tick(STEP, &input);
        frames += 1;
    }

    let outcome = if level.is_level_won() {
        "won"
    } else if level.is_level_lost() {
        "lost"
    } else {
        "undecided (frame cap reached)"
    };
    log::info!(
        "level {outcome} after {frames} frames; {} visible units remain",
        level.iter_visible().count()
    );

    level.dispose();
}

/// Point the player at the nearest hostile and decide whether to drop the
/// bomb this frame.
fn steer_player(level: &mut UnitManager, player_speed: f32, bomb_range: f32) -> TickInput {
    let Some(player_pos) = level.player().map(Player::position) else {
        return TickInput::none();
    };

    let target = nearest_hostile(level, player_pos);
    let Some(target_pos) = target else {
        return TickInput::none();
    };

    if let Some(player) = level.player_mut() {
        let to_target = target_pos - player_pos;
        let dist = to_target.magnitude();
        if dist > f32::EPSILON {
            player.set_velocity(to_target / dist * player_speed);
        } else {
            player.set_velocity(Vec2::zeros());
        }
    }

    // Drop the bomb a little inside the blast radius so the target cannot
    // walk out before the fuse runs down.
    if distance(player_pos, target_pos) <= bomb_range * 0.5 {
        TickInput::deploy()
    } else {
        TickInput::none()
    }
}

/// Position of the hostile closest to `from`, boss included.
fn nearest_hostile(level: &UnitManager, from: Vec2) -> Option<Vec2> {
    level
        .boss()
        .iter()
        .map(|boss| boss.position())
        .chain(level.enemies().iter().map(Hostile::position))
        .min_by(|a, b| {
            distance(from, *a)
                .partial_cmp(&distance(from, *b))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
