//! Prints one value from the clock-seeded legacy generator. Not for security use.

use securerand::legacy::LegacyRng;

fn main() {
    env_logger::init();

    let mut rng = LegacyRng::from_clock();
    log::warn!("legacy generator is not cryptographically secure");
    println!("result : {}", rng.next_value());
}
