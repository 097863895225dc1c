//! Key bindings for the dashboard's user commands.

pub const QUIT: char = 'q';
pub const START_MONITORING: char = 's';
pub const STOP_MONITORING: char = 'x';
pub const CHECK_FOR_CHANGES: char = 'c';
pub const EDIT_INSTRUCTIONS: char = 'i';
pub const TEST_PROGRAM: char = '1';
pub const TEST_VIDEO: char = '2';
pub const TEST_WORK_ORDER: char = '3';
pub const TEST_FEED: char = '4';

/// One-line hint rendered at the bottom of the screen.
pub const HINTS: &str =
    "s start  x stop  c check  i instructions  1-4 test hooks  q quit";
