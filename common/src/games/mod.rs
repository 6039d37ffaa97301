mod session_rng;

pub mod n_in_a_row;

pub use session_rng::SessionRng;
