//! Seedable layered value noise used to jitter halftone dot sizes.
//!
//! A lattice of random values is blended with a cosine ease and summed over
//! a few octaves. Output stays in \[0, 1) and is coherent: nearby inputs give
//! nearby outputs.

use rand::Rng;

const TABLE_BITS: u32 = 12;
const TABLE_MASK: usize = (1 << TABLE_BITS) - 1;
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: usize = 1 << Y_WRAP_BITS;

pub const DEFAULT_OCTAVES: u32 = 4;
pub const DEFAULT_FALLOFF: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct ValueNoise {
    table: Vec<f32>,
    octaves: u32,
    falloff: f32,
}

impl ValueNoise {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let table = (0..=TABLE_MASK).map(|_| rng.gen::<f32>()).collect();
        Self {
            table,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }

    /// Upper bound (exclusive) of [`ValueNoise::sample`] for this detail level.
    pub fn max_value(&self) -> f32 {
        let mut amp = 0.5;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amp;
            amp *= self.falloff;
        }
        total
    }

    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let (x, y) = (x.abs(), y.abs());
        let mut xi = x.floor() as usize;
        let mut yi = y.floor() as usize;
        let mut xf = x.fract();
        let mut yf = y.fract();

        let mut out = 0.0;
        let mut amp = 0.5;
        for _ in 0..self.octaves {
            let base = xi.wrapping_add(yi << Y_WRAP_BITS);
            let ex = ease(xf);
            let ey = ease(yf);

            let top = lerp(self.at(base), self.at(base.wrapping_add(1)), ex);
            let bottom = lerp(
                self.at(base.wrapping_add(Y_WRAP)),
                self.at(base.wrapping_add(Y_WRAP + 1)),
                ex,
            );
            out += lerp(top, bottom, ey) * amp;
            amp *= self.falloff;

            xi <<= 1;
            xf *= 2.0;
            yi <<= 1;
            yf *= 2.0;
            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
        }
        out
    }

    #[inline]
    fn at(&self, i: usize) -> f32 {
        self.table[i & TABLE_MASK]
    }
}

#[inline]
fn ease(t: f32) -> f32 {
    0.5 * (1.0 - (t * std::f32::consts::PI).cos())
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
