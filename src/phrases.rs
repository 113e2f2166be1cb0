//! Static phrase pools for the holding page.
//!
//! All copy lives here as immutable `'static` tables (greetings, subtitle
//! lines, modal prompts per step, button text pairs). Entries may contain a
//! `${platform}` placeholder which is substituted at render time; selection is
//! always uniform over the pool.

use rand::Rng;

pub mod buttons;
pub mod prompts;

/// Placeholder token replaced by the platform name at render time.
pub const PLATFORM_SLOT: &str = "${platform}";

/// Substitute every `${platform}` occurrence in a template.
pub fn fill_platform(template: &str, platform: &str) -> String {
    template.replace(PLATFORM_SLOT, platform)
}

/// Uniform random pick from a non-empty pool.
pub fn pick<'a, T>(pool: &'a [T], rng: &mut impl Rng) -> &'a T {
    &pool[rng.gen_range(0..pool.len())]
}

/// Pick a template and substitute the platform in one step.
pub fn pick_filled(pool: &[&str], platform: &str, rng: &mut impl Rng) -> String {
    fill_platform(*pick(pool, rng), platform)
}
