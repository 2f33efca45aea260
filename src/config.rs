/// Row letters from the bottom edge (`A`) to the top edge (`I`).
pub const ROWS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
/// Diagonal digits from the left edge (`1`) to the right edge (`9`).
pub const DIAGONALS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];
/// Number of spaces in each row, `A` through `I`.
pub const ROW_LENGTHS: [usize; 9] = [5, 6, 7, 8, 9, 8, 7, 6, 5];
/// Total number of spaces on the hexagonal board.
pub const NUM_SPACES: usize = 61;
/// Marbles each player may lose before the game is over. Scores in a log
/// count down from here.
pub const STARTING_SCORE: u32 = 6;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "ABALONE_REPLAY_LOG";

/// Dense index of the first space of every row.
pub const ROW_OFFSETS: [usize; 9] = {
    let mut offsets = [0usize; 9];
    let mut i = 1;
    while i < 9 {
        offsets[i] = offsets[i - 1] + ROW_LENGTHS[i - 1];
        i += 1;
    }
    offsets
};
