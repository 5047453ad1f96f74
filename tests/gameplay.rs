use grid_snake::config::{self, GridSize};
use grid_snake::engine::GameEngine;
use grid_snake::input::Direction;
use grid_snake::score::MemoryScoreStore;
use grid_snake::snake::Position;

#[test]
fn stepwise_apple_collection_and_wall_collision() {
    let mut engine = GameEngine::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        Box::new(MemoryScoreStore::default()),
        42,
    );

    engine.reset(
        vec![Position { x: 1, y: 1 }, Position { x: 0, y: 1 }],
        Position { x: 2, y: 1 },
        Direction::Right,
    );

    engine.step();
    assert!(!engine.game_over);
    assert_eq!(engine.score, 1);
    assert_eq!(engine.snake.len(), 3);
    assert_eq!(engine.snake.head(), Position { x: 2, y: 1 });
    assert!(!engine.snake.occupies(engine.apple));

    // Park the apple out of the way so the remaining steps are pure moves.
    engine.apple = Position { x: 0, y: 3 };

    engine.set_direction(Direction::Up);
    engine.step();
    assert!(!engine.game_over);
    assert_eq!(engine.snake.head(), Position { x: 2, y: 0 });
    assert_eq!(engine.snake.len(), 3);

    engine.step();
    assert!(engine.game_over);
    assert_eq!(engine.snake.head(), Position { x: 2, y: -1 });
    assert_eq!(engine.high_score(), 1);

    // The engine is frozen until reset.
    let length_at_death = engine.snake.len();
    engine.step();
    assert_eq!(engine.snake.len(), length_at_death);
    assert_eq!(engine.snake.head(), Position { x: 2, y: -1 });
}

#[test]
fn default_layout_game_and_replay_keep_high_score() {
    let mut engine = GameEngine::new_with_seed(
        config::DEFAULT_GRID,
        Box::new(MemoryScoreStore::default()),
        7,
    );

    // Ten steps to the right reach the starting apple at (14, 10).
    for _ in 0..10 {
        engine.step();
    }
    assert!(!engine.game_over);
    assert_eq!(engine.score, 1);
    assert_eq!(engine.snake.len(), 3);
    assert_eq!(engine.snake.head(), Position { x: 14, y: 10 });

    // Keep going right until the wall ends the game.
    engine.apple = Position { x: 0, y: 0 };
    for _ in 0..6 {
        engine.step();
    }
    assert!(engine.game_over);
    assert_eq!(engine.snake.head(), Position { x: 20, y: 10 });
    assert_eq!(engine.high_score(), 1);

    // Replay: fresh session, high score survives, a worse run leaves it.
    engine.reset(
        config::initial_snake(),
        config::INITIAL_APPLE,
        config::INITIAL_DIRECTION,
    );
    assert!(!engine.game_over);
    assert_eq!(engine.score, 0);

    engine.set_direction(Direction::Up);
    for _ in 0..11 {
        engine.step();
    }
    assert!(engine.game_over);
    assert_eq!(engine.snake.head(), Position { x: 4, y: -1 });
    assert_eq!(engine.high_score(), 1);
}
