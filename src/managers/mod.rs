// Scout state managers
// Managers handle stateful operations: the search history log and the
// private mode gate.

pub mod history_store;
pub mod private_mode;
