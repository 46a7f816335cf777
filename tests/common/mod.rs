#![allow(dead_code)]

extern crate env_logger;

/// Tests hash at the minimum bcrypt cost; the default cost takes ~100ms per
/// call even with the optimized test profile.
pub const TEST_COST: u32 = 4;

pub fn init_test() {
    let _ = self::env_logger::builder().is_test(true).try_init();
}
