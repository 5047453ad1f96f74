use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell the snake does not occupy.
///
/// Scans the grid once, keeping each free cell with probability `1/seen`
/// (reservoir sampling), so no candidate list is allocated. Panics when the
/// snake covers the entire board; callers keep it strictly smaller.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    let mut chosen = None;
    let mut seen: u32 = 0;

    for x in 0..i32::from(bounds.width) {
        for y in 0..i32::from(bounds.height) {
            let cell = Position { x, y };
            if snake.occupies(cell) {
                continue;
            }

            seen += 1;
            if rng.gen_range(0..seen) == 0 {
                chosen = Some(cell);
            }
        }
    }

    chosen.unwrap_or_else(|| {
        panic!(
            "apple placement requires a free cell, but the snake fills the {}x{} grid",
            bounds.width, bounds.height
        )
    })
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::{Position, Snake};

    use super::spawn_position;

    #[test]
    fn apple_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);

        for _ in 0..100 {
            let apple = spawn_position(
                &mut rng,
                GridSize {
                    width: 8,
                    height: 6,
                },
                &snake,
            );
            assert!(!snake.occupies(apple));
        }
    }

    #[test]
    fn apple_spawn_lands_on_the_single_free_cell() {
        // With one free cell the reservoir always selects it, whatever the
        // rng draws.
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
        ]);

        let apple = spawn_position(
            &mut rng,
            GridSize {
                width: 2,
                height: 2,
            },
            &snake,
        );

        assert_eq!(apple, Position { x: 0, y: 1 });
    }
}
