//! Banner messages shown after a point

use crate::components::Side;
use crate::resources::RandomSource;

/// Shown when the opponent (right) takes a point
pub const LOSING_TAUNTS: [&str; 10] = [
    "I remember the first time I played pong",
    "Does your paddle have a hole in it?",
    "Let me know when you start trying",
    "Your mom is cheering for me",
    "Maybe you should reevaluate your life",
    "You can do better than that",
    "You better pick it up",
    "Don't let Dr. Matta down",
    "I've seen better swings in a backyard",
    "Can you even see the ball?",
];

/// Shown when the player (left) takes a point
pub const WINNING_TAUNTS: [&str; 10] = [
    "Nice swing",
    "This game will be over in no time",
    "Keep it up",
    "You're a professional",
    "Good work",
    "Great point",
    "Comin' in hot!",
    "Dr. Matta would be proud",
    "Serena Williams in the house",
    "You got this",
];

pub fn taunts_for(scorer: Side) -> &'static [&'static str; 10] {
    match scorer {
        Side::Left => &WINNING_TAUNTS,
        Side::Right => &LOSING_TAUNTS,
    }
}

/// Pick one message for the side that just scored
pub fn pick_taunt<R: RandomSource + ?Sized>(scorer: Side, rng: &mut R) -> &'static str {
    let table = taunts_for(scorer);
    table[rng.roll(table.len() as u32) as usize % table.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn roll(&mut self, _sides: u32) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_right_point_uses_losing_table() {
        assert_eq!(
            pick_taunt(Side::Right, &mut Fixed(1)),
            "Does your paddle have a hole in it?"
        );
    }

    #[test]
    fn test_left_point_uses_winning_table() {
        assert_eq!(pick_taunt(Side::Left, &mut Fixed(9)), "You got this");
    }

    #[test]
    fn test_seeded_picks_stay_in_table() {
        let mut rng = crate::GameRng::new(99);
        for _ in 0..50 {
            let taunt = pick_taunt(Side::Right, &mut rng);
            assert!(LOSING_TAUNTS.contains(&taunt));
        }
    }
}
