use invaders::compute::init_state;
use invaders::config::Config;
use invaders::entities::*;
use invaders::geometry::Rect;

#[test]
fn status_clone_and_eq() {
    // The status enum derives PartialEq — equality comparisons must work
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::Won);
    assert_ne!(GameStatus::Won, GameStatus::Lost);

    let status = GameStatus::Lost;
    assert_eq!(status, GameStatus::Lost);
}

#[test]
fn entity_rects_mirror_fields() {
    let inv = Invader {
        x: 3,
        y: 7,
        direction: -1,
        width: 30,
        height: 20,
        bomb_counter: 0.81,
    };
    assert_eq!(inv.rect(), Rect { x: 3, y: 7, width: 30, height: 20 });

    let bomb = Bomb { x: 1, y: 2, width: 8, height: 14 };
    assert_eq!(bomb.rect(), Rect { x: 1, y: 2, width: 8, height: 14 });

    let missile = Missile { x: 5, y: 6, width: 4, height: 12 };
    assert_eq!(missile.rect(), Rect { x: 5, y: 6, width: 4, height: 12 });
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Config::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.defender.x = 99;
    cloned.score = 999;
    cloned.invaders.push(Invader {
        x: 5,
        y: 5,
        direction: 1,
        width: 30,
        height: 20,
        bomb_counter: 0.8,
    });

    assert_eq!(original.score, 0);
    assert!(original.invaders.is_empty());
    assert_ne!(original.defender.x, 99);
}
