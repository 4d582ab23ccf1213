use std::time::Duration;

use tile_snake::config::GameConfig;
use tile_snake::game::{Game, GameState, ResetCause, StepEvent};
use tile_snake::input::Direction;
use tile_snake::snake::{Cell, Snake};

fn default_body() -> Vec<Cell> {
    vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
}

fn body(game: &Game) -> Vec<Cell> {
    game.state().snake.segments().copied().collect()
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let state = GameState {
        snake: Snake::from_segments(vec![Cell::new(1, 0), Cell::new(0, 0)])
            .expect("snake should be valid"),
        food: Cell::new(3, 0),
        direction: Direction::Right,
        score: 40,
        speed_ms: 200,
        tile_count: 20,
    };
    let mut game = Game::with_state(&GameConfig::default(), state, 42).expect("valid config");

    assert_eq!(game.step().expect("step").event, StepEvent::Moved);
    assert_eq!(game.state().snake.head(), Cell::new(2, 0));
    assert_eq!(game.state().snake.len(), 2);

    let outcome = game.step().expect("step");
    assert_eq!(
        outcome.event,
        StepEvent::Ate {
            speed_changed: true
        }
    );
    assert_eq!(outcome.reschedule, Some(Duration::from_millis(180)));
    assert_eq!(game.state().score, 50);
    assert_eq!(game.state().snake.len(), 3);
    assert_eq!(game.state().snake.head(), Cell::new(3, 0));

    assert!(game.steer(Direction::Up));
    let outcome = game.step().expect("step");
    assert_eq!(
        outcome.event,
        StepEvent::Reset {
            cause: ResetCause::WallCollision
        }
    );
    assert_eq!(outcome.reschedule, Some(Duration::from_millis(200)));
    assert_eq!(body(&game), default_body());
    assert_eq!(game.state().score, 0);
    assert_eq!(game.best_score(), 50);
}

#[test]
fn default_session_walks_right_after_first_input() {
    let mut game = Game::new_with_seed(&GameConfig::default(), 5).expect("valid config");
    assert_eq!(game.set_direction(1, 0), Ok(true));

    // The seeded food may sit right in front of the head.
    let food = game.state().food;
    let outcome = game.step().expect("step");

    if food == Cell::new(11, 10) {
        assert!(matches!(outcome.event, StepEvent::Ate { .. }));
    } else {
        assert_eq!(outcome.event, StepEvent::Moved);
        assert_eq!(
            body(&game),
            vec![Cell::new(11, 10), Cell::new(10, 10), Cell::new(9, 10)]
        );
    }
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let script = [
        Some(Direction::Up),
        None,
        Some(Direction::Left),
        None,
        None,
        Some(Direction::Down),
        Some(Direction::Right),
        None,
        Some(Direction::Up),
    ];

    let run = |seed| {
        let mut game = Game::new_with_seed(&GameConfig::default(), seed).expect("valid config");
        let mut trace = Vec::new();
        for _ in 0..20 {
            for input in script {
                if let Some(direction) = input {
                    game.steer(direction);
                }
                let outcome = game.step().expect("step");
                trace.push((outcome.event, game.state().clone()));
            }
        }
        trace
    };

    assert_eq!(run(77), run(77));
}

#[test]
fn commands_from_another_thread_are_applied_on_the_next_tick() {
    let mut game = Game::new_with_seed(&GameConfig::default(), 9).expect("valid config");
    let sender = game.sender();

    std::thread::spawn(move || {
        sender.steer(Direction::Down);
    })
    .join()
    .expect("input thread should not panic");

    assert_eq!(game.state().direction, Direction::Idle);
    game.step().expect("step");

    assert_eq!(game.state().direction, Direction::Down);
    assert_eq!(game.state().snake.segments().next(), Some(&Cell::new(10, 11)));
}
