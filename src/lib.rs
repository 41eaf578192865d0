//! A seedable Lehmer / Park-Miller pseudo-random number generator with
//! MINSTD parameters (n = 2^31 - 1, g = 16807).
//!
//! ```
//! use lehmer::Random;
//!
//! let mut rnd = Random::new(1.0);
//! assert_eq!(16807, rnd.next());
//! assert_eq!(16807, rnd.state());
//! let roll = rnd.next_bounded_int(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//! ```

mod random;
mod util;

pub use random::{Random, MODULUS, MULTIPLIER};
pub use util::{Error, Result};
