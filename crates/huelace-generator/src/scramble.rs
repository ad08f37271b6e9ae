//! Board scrambling by rejection sampling.

use huelace_core::{BoardState, ColorCount, ColorIndex, Topology};
use log::{debug, warn};
use rand::Rng;
use rand::RngExt;

/// Tuning for the scramble rejection loop.
///
/// # Example
///
/// ```
/// use huelace_generator::ScrambleOptions;
///
/// let options = ScrambleOptions::default().max_attempts(50);
/// ```
#[derive(Debug, Clone)]
pub struct ScrambleOptions {
    max_attempts: usize,
}

impl ScrambleOptions {
    /// Sets the number of candidates to draw before the acceptance policy is
    /// abandoned and the next candidate is taken as-is.
    ///
    /// The rejection loop terminates with near-certainty long before the
    /// default cap of 1,000; the cap exists so the call is total even for
    /// adversarial inputs.
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self { max_attempts: 1_000 }
    }
}

/// Regenerates both patterns of a board into a fresh scrambled position.
///
/// Each candidate is built in three steps: the target pattern gets an
/// independent uniformly random color per active cell; the current pattern
/// starts as an exact copy; then every region's transform is applied to the
/// current pattern with an independent uniformly random magnitude in
/// `[0, count)`. The current pattern is therefore always reachable from the
/// target by legal moves.
///
/// A candidate is accepted when it leaves the board visibly unsolved:
///
/// - if the board was matched before the call, the new patterns must differ
///   somewhere;
/// - if it was not, the new patterns must differ somewhere *and* at least one
///   side must have changed from its pre-scramble contents, so a scramble
///   never looks like nothing happened.
///
/// After [`ScrambleOptions::max_attempts`] rejected candidates the policy is
/// abandoned and the next candidate is kept unconditionally, with a warning.
///
/// # Panics
///
/// Panics if `board`'s slot layout does not match `topology` (wrong buffer
/// length or activity mask).
pub fn scramble<R: Rng + ?Sized>(
    board: &mut BoardState,
    topology: &Topology,
    count: ColorCount,
    rng: &mut R,
    options: &ScrambleOptions,
) {
    let was_matched = board.is_matched();
    let previous = board.clone();
    let regions: Vec<usize> = topology.regions().collect();

    let mut attempts: usize = 0;
    loop {
        for &index in &regions {
            let color = ColorIndex::new(rng.random_range(0..count.get()));
            board.target_mut().set_color(index, color);
        }
        board.copy_target_to_current();
        for &region in &regions {
            let magnitude = rng.random_range(0..count.get());
            topology
                .apply(region, board.current_mut(), magnitude, count)
                .expect("region comes from the topology");
        }

        attempts += 1;
        if accepts(board, was_matched, &previous) {
            debug!("scramble accepted after {attempts} candidate(s)");
            return;
        }
        if attempts > options.max_attempts {
            warn!(
                "scramble policy not satisfied after {attempts} candidates; \
                 keeping the last one"
            );
            return;
        }
    }
}

/// The acceptance policy described on [`scramble()`].
fn accepts(board: &BoardState, was_matched: bool, previous: &BoardState) -> bool {
    if board.is_matched() {
        return false;
    }
    if was_matched {
        return true;
    }
    board.target() != previous.target() || board.current() != previous.current()
}
