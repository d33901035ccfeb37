mod signal;

pub use signal::{setup_signal_handler, wait_for_signal};
