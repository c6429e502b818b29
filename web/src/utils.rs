/// Seed for a new engine from JavaScript's `Math.random`, 32 bits per call.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let half = || (random() * 4_294_967_296.0) as u64;
    (half() << 32) | half()
}
