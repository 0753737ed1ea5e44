//! Turn resolution: how a roll and a movement option move a player.

use crate::board::{BOARD_END, Position};
use crate::dice::{DieRoll, MovementOption};

/// Compute the position after playing `roll` with `option` from `position`.
///
/// - `NoPlay` leaves the position unchanged.
/// - `Ladder` advances by the roll, but a move past the goal is void and the
///   player stays where they are. Landing exactly on the goal wins.
/// - `Snake` moves back by the roll, stopping at square 0.
pub fn resolve(position: Position, roll: DieRoll, option: MovementOption) -> Position {
    let square = position.value();
    let step = roll.value();
    match option {
        MovementOption::NoPlay => position,
        MovementOption::Ladder => match square.checked_add(step) {
            Some(target) if target <= BOARD_END => Position::from_square(target),
            _ => position,
        },
        MovementOption::Snake => Position::from_square(square.saturating_sub(step)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pos(square: u8) -> Position {
        Position::new(square).unwrap()
    }

    fn roll(value: u8) -> DieRoll {
        DieRoll::new(value).unwrap()
    }

    #[test]
    fn ladder_advances() {
        assert_eq!(resolve(pos(0), roll(3), MovementOption::Ladder), pos(3));
        assert_eq!(resolve(pos(50), roll(6), MovementOption::Ladder), pos(56));
    }

    #[test]
    fn ladder_overshoot_is_void() {
        assert_eq!(resolve(pos(98), roll(3), MovementOption::Ladder), pos(98));
        assert_eq!(resolve(pos(99), roll(6), MovementOption::Ladder), pos(99));
    }

    #[test]
    fn ladder_exact_finish() {
        let end = resolve(pos(98), roll(2), MovementOption::Ladder);
        assert_eq!(end, Position::GOAL);
        assert!(end.is_goal());
    }

    #[test]
    fn snake_moves_back() {
        assert_eq!(resolve(pos(10), roll(4), MovementOption::Snake), pos(6));
        assert_eq!(resolve(pos(6), roll(6), MovementOption::Snake), pos(0));
    }

    #[test]
    fn snake_floor() {
        assert_eq!(resolve(pos(3), roll(6), MovementOption::Snake), Position::START);
        assert_eq!(resolve(pos(0), roll(1), MovementOption::Snake), Position::START);
    }

    fn any_option() -> impl Strategy<Value = MovementOption> {
        prop_oneof![
            Just(MovementOption::NoPlay),
            Just(MovementOption::Ladder),
            Just(MovementOption::Snake),
        ]
    }

    proptest! {
        #[test]
        fn stays_on_board(square in 0u8..=100, value in 1u8..=6, option in any_option()) {
            let next = resolve(pos(square), roll(value), option);
            prop_assert!(next.value() <= BOARD_END);
        }

        #[test]
        fn no_play_is_identity(square in 0u8..=100, value in 1u8..=6) {
            prop_assert_eq!(resolve(pos(square), roll(value), MovementOption::NoPlay), pos(square));
        }

    }

    proptest! {
        // Only ~3.5% of generated inputs overshoot, so allow enough rejects.
        #![proptest_config(ProptestConfig {
            max_global_rejects: 65_536,
            ..ProptestConfig::default()
        })]

        #[test]
        fn overshoot_never_moves(square in 0u8..=100, value in 1u8..=6) {
            prop_assume!(square + value > BOARD_END);
            prop_assert_eq!(resolve(pos(square), roll(value), MovementOption::Ladder), pos(square));
        }
    }

    proptest! {

        #[test]
        fn ladder_in_range_adds(square in 0u8..=100, value in 1u8..=6) {
            prop_assume!(square + value <= BOARD_END);
            prop_assert_eq!(
                resolve(pos(square), roll(value), MovementOption::Ladder).value(),
                square + value
            );
        }

        #[test]
        fn snake_never_negative(square in 0u8..=100, value in 1u8..=6) {
            let expected = square.saturating_sub(value);
            prop_assert_eq!(resolve(pos(square), roll(value), MovementOption::Snake).value(), expected);
        }
    }
}
