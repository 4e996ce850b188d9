/// Linearly re-map `v` from `[in_lo, in_hi]` onto `[out_lo, out_hi]` (no clamping).
#[inline]
pub fn map_range(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (v - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

#[inline]
pub fn random_in<R: rand::Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    if range[1] > range[0] {
        rng.gen_range(range[0]..range[1])
    } else {
        range[0]
    }
}
