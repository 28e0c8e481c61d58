//! Snake movement, growth and sessions through the facade crate.

mod common;

use common::Offscreen;
use console_games::core::snake::{OverReason, SnakeConfig, SnakeGame, SnakeStatus, Tick};
use console_games::engine::{run, ScriptedInput, SnakeSession};
use console_games::term::SnakeView;
use console_games::types::{Direction, Point, SnakeCommand, SNAKE_INITIAL_LENGTH};
use proptest::prelude::*;

fn corridor(food: Option<Point>) -> SnakeGame {
    SnakeGame::from_parts(
        SnakeConfig::default().with_size(10, 5),
        [Point::new(3, 2), Point::new(2, 2), Point::new(1, 2)],
        Direction::Right,
        food,
        7,
    )
}

#[test]
fn test_new_game_layout() {
    let game = SnakeGame::new(SnakeConfig::default(), 3);
    assert_eq!(game.len(), SNAKE_INITIAL_LENGTH as usize);
    assert_eq!(game.direction(), Direction::Right);
    assert_eq!(game.status(), SnakeStatus::Running);
    let food = game.food().unwrap();
    assert!(!game.occupies(food));
}

#[test]
fn test_same_seed_same_food() {
    let a = SnakeGame::new(SnakeConfig::default(), 1234);
    let b = SnakeGame::new(SnakeConfig::default(), 1234);
    assert_eq!(a.food(), b.food());
}

#[test]
fn test_eating_grows_by_one_and_moves_food() {
    let mut game = corridor(Some(Point::new(4, 2)));
    assert_eq!(game.advance(), Tick::AteFood);
    assert_eq!(game.len(), 4);
    assert_eq!(game.score(), 10);
    let food = game.food().unwrap();
    assert_ne!(food, Point::new(4, 2));
    assert!(!game.occupies(food));
}

#[test]
fn test_wall_collision_leaves_snake_in_place() {
    let mut game = corridor(None);
    for _ in 0..6 {
        assert_eq!(game.advance(), Tick::Continue);
    }
    assert_eq!(game.head(), Some(Point::new(9, 2)));
    assert_eq!(game.advance(), Tick::Collided(OverReason::WallHit));
    assert_eq!(game.head(), Some(Point::new(9, 2)));
    assert_eq!(game.advance(), Tick::Halted);
}

#[test]
fn test_scripted_session_runs_into_the_wall() {
    let mut session = SnakeSession::new(corridor(None));
    let commands = [
        SnakeCommand::Turn(Direction::Up),
        SnakeCommand::Step,
        SnakeCommand::Step,
        SnakeCommand::Step,
    ];
    let mut input = ScriptedInput::new(commands);
    let mut screen = Offscreen::new(SnakeView::default());

    let outcome = run(&mut session, &mut input, &mut screen).unwrap();
    assert_eq!(outcome.reason, OverReason::WallHit);
    assert_eq!(outcome.length, 3);
    assert_eq!(input.remaining(), 1);
    assert!(screen.last_frame().contains("GAME OVER! You hit the wall."));
}

#[test]
fn test_quit_command_and_drained_input() {
    let mut session = SnakeSession::new(corridor(None));
    let mut input = ScriptedInput::new([SnakeCommand::Step, SnakeCommand::Quit, SnakeCommand::Step]);
    let mut screen = Offscreen::new(SnakeView::default());
    let outcome = run(&mut session, &mut input, &mut screen).unwrap();
    assert_eq!(outcome.reason, OverReason::Quit);
    assert_eq!(input.remaining(), 1);

    let mut session = SnakeSession::new(corridor(None));
    let mut input = ScriptedInput::new([SnakeCommand::Step]);
    let outcome = run(&mut session, &mut input, &mut screen).unwrap();
    assert_eq!(outcome.reason, OverReason::Quit);
    assert_eq!(session.game().head(), Some(Point::new(4, 2)));
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn same_axis_requests_never_change_heading(dir in arb_direction()) {
        let mut game = corridor(None);
        let before = game.direction();
        let changed = game.set_direction(dir);
        prop_assert_eq!(changed, dir.is_horizontal() != before.is_horizontal());
        if !changed {
            prop_assert_eq!(game.direction(), before);
        }
    }

    #[test]
    fn random_walks_keep_the_snake_consistent(
        seed in any::<u32>(),
        turns in proptest::collection::vec(arb_direction(), 1..200),
    ) {
        let mut game = SnakeGame::new(SnakeConfig::default().with_size(8, 6), seed);
        for dir in turns {
            game.set_direction(dir);
            let len_before = game.len();
            match game.advance() {
                Tick::Continue => prop_assert_eq!(game.len(), len_before),
                Tick::AteFood => {
                    prop_assert_eq!(game.len(), len_before + 1);
                    if let Some(food) = game.food() {
                        prop_assert!(!game.occupies(food));
                    }
                }
                Tick::Collided(_) | Tick::Halted => {
                    prop_assert!(game.is_over());
                    break;
                }
            }
            let body: Vec<Point> = game.body().collect();
            for (i, p) in body.iter().enumerate() {
                prop_assert!(p.x >= 0 && p.x < 8 && p.y >= 0 && p.y < 6);
                prop_assert!(!body[i + 1..].contains(p));
            }
        }
    }
}
