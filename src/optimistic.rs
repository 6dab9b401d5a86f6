//! Optimistic Like Toggling
//!
//! The flag and counter change before the request is issued; a failed
//! request reverts exactly the delta it applied. Reverts are
//! delta-scoped rather than snapshot-scoped, so overlapping toggles on
//! the same entity cannot compound.

/// Delta applied by one optimistic toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LikeDelta {
    count_delta: i64,
}

impl LikeDelta {
    /// The toggle switched the flag on (a like, not an unlike).
    pub fn is_like(&self) -> bool {
        self.count_delta > 0
    }
}

/// Flip `liked` and move `count` by ±1, returning the applied delta.
pub fn toggle(liked: &mut bool, count: &mut i64) -> LikeDelta {
    *liked = !*liked;
    let count_delta = if *liked { 1 } else { -1 };
    *count += count_delta;
    LikeDelta { count_delta }
}

/// Undo exactly one prior [`toggle`].
pub fn revert(liked: &mut bool, count: &mut i64, delta: LikeDelta) {
    *liked = !*liked;
    *count -= delta.count_delta;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_like_nets_zero() {
        let mut liked = false;
        let mut count = 4;

        let delta = toggle(&mut liked, &mut count);
        assert!(liked);
        assert_eq!(count, 5);
        assert!(delta.is_like());

        revert(&mut liked, &mut count, delta);
        assert!(!liked);
        assert_eq!(count, 4);
    }

    #[test]
    fn successful_like_nets_plus_one() {
        let mut liked = false;
        let mut count = 4;
        toggle(&mut liked, &mut count);
        assert!(liked);
        assert_eq!(count, 5);
    }

    #[test]
    fn unlike_moves_the_counter_down() {
        let mut liked = true;
        let mut count = 9;
        let delta = toggle(&mut liked, &mut count);
        assert!(!liked);
        assert_eq!(count, 8);
        assert!(!delta.is_like());
    }

    #[test]
    fn racing_reverts_only_undo_their_own_delta() {
        let mut liked = false;
        let mut count = 0;

        // Like, then unlike, both in flight at once.
        let like_delta = toggle(&mut liked, &mut count);
        let unlike_delta = toggle(&mut liked, &mut count);
        assert_eq!(count, 0);

        // The unlike fails after the like already resolved.
        revert(&mut liked, &mut count, unlike_delta);
        assert!(liked);
        assert_eq!(count, 1);

        // A late failure of the like undoes only its own +1.
        revert(&mut liked, &mut count, like_delta);
        assert!(!liked);
        assert_eq!(count, 0);
    }
}
