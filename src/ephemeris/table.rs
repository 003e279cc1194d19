//! Binary ephemeris tables sampled by cubic Hermite interpolation.
//!
//! Layout (little-endian): magic, version, body id, step seconds, start time,
//! sample count, reserved word, then `count` samples of six `f64`
//! (x, y, z in AU; vx, vy, vz in AU/day), barycentric J2000 ecliptic.

use bevy::math::DVec3;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use wide::f64x4;

use crate::types::SECONDS_PER_DAY;

/// Binary ephemeris table file format constants.
pub const MAGIC: &[u8; 8] = b"PLNEPH1\0";
pub const VERSION: u32 = 1;

/// Header size in bytes: magic + version + body id + step + start + count + reserved.
const HEADER_LEN: usize = 8 + 4 + 4 + 8 + 8 + 4 + 4;
/// Bytes per sample: six f64 values.
const SAMPLE_LEN: usize = 6 * 8;

#[derive(Clone, Debug)]
pub struct EphemerisTable {
    pub body_id: u32,
    pub step_seconds: f64,
    pub start_t0: f64,
    pub samples: Vec<State3>,
}

/// Position (AU) and velocity (AU/day) at one table node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct State3 {
    pub pos: DVec3,
    pub vel: DVec3,
}

#[derive(thiserror::Error, Debug)]
pub enum EphemerisTableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid magic header")]
    BadMagic,

    #[error("unsupported ephemeris table version {0}")]
    UnsupportedVersion(u32),

    #[error("ephemeris table body id mismatch (expected {expected}, got {got})")]
    BodyIdMismatch { expected: u32, got: u32 },

    #[error("invalid ephemeris table (empty samples)")]
    Empty,

    #[error("invalid step size: {0} (must be positive)")]
    InvalidStepSize(f64),

    #[error("truncated ephemeris table: need {needed} bytes, have {available}")]
    Truncated { needed: usize, available: usize },

    #[error("requested time {time} outside table range [{start}, {end}]")]
    OutOfRange { time: f64, start: f64, end: f64 },
}

impl EphemerisTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EphemerisTableError> {
        let mut f = File::open(path)?;
        let mut buf = Vec::new();
        f.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EphemerisTableError> {
        if bytes.len() < HEADER_LEN {
            return Err(EphemerisTableError::Truncated {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }

        let mut r = Cursor::new(bytes);

        if r.take::<8>() != *MAGIC {
            return Err(EphemerisTableError::BadMagic);
        }

        let version = r.read_u32_le();
        if version != VERSION {
            return Err(EphemerisTableError::UnsupportedVersion(version));
        }

        let body_id = r.read_u32_le();
        let step_seconds = r.read_f64_le();
        let start_t0 = r.read_f64_le();
        let count = r.read_u32_le() as usize;
        let _reserved = r.read_u32_le();

        // Validate step size to prevent division by zero
        if step_seconds <= 0.0 || !step_seconds.is_finite() {
            return Err(EphemerisTableError::InvalidStepSize(step_seconds));
        }

        if count == 0 {
            return Err(EphemerisTableError::Empty);
        }

        let needed = HEADER_LEN + count * SAMPLE_LEN;
        if bytes.len() < needed {
            return Err(EphemerisTableError::Truncated {
                needed,
                available: bytes.len(),
            });
        }

        let samples = (0..count)
            .map(|_| {
                let pos = DVec3::new(r.read_f64_le(), r.read_f64_le(), r.read_f64_le());
                let vel = DVec3::new(r.read_f64_le(), r.read_f64_le(), r.read_f64_le());
                State3 { pos, vel }
            })
            .collect();

        Ok(Self {
            body_id,
            step_seconds,
            start_t0,
            samples,
        })
    }

    /// Serialize into the on-disk layout read by [`EphemerisTable::from_bytes`].
    #[cfg(test)]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.samples.len() * SAMPLE_LEN);
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&self.body_id.to_le_bytes());
        out.extend_from_slice(&self.step_seconds.to_le_bytes());
        out.extend_from_slice(&self.start_t0.to_le_bytes());
        out.extend_from_slice(&(self.samples.len() as u32).to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        for s in &self.samples {
            for v in [s.pos.x, s.pos.y, s.pos.z, s.vel.x, s.vel.y, s.vel.z] {
                out.extend_from_slice(&v.to_le_bytes());
            }
        }
        out
    }

    pub fn start_time(&self) -> f64 {
        self.start_t0
    }

    pub fn end_time(&self) -> f64 {
        self.start_t0 + self.step_seconds * (self.samples.len() as f64 - 1.0)
    }

    /// Whether `t` lies inside the table's coverage.
    pub fn covers(&self, t: f64) -> bool {
        t >= self.start_time() && t <= self.end_time()
    }

    /// Get the segment index for a given time.
    ///
    /// Returns (index, interpolation parameter s) where s is in [0, 1].
    /// A single-sample table yields index 0 with s = 0.
    #[inline]
    fn segment(&self, t: f64) -> Result<(usize, f64), EphemerisTableError> {
        if !self.covers(t) {
            return Err(EphemerisTableError::OutOfRange {
                time: t,
                start: self.start_time(),
                end: self.end_time(),
            });
        }
        if self.samples.len() == 1 {
            return Ok((0, 0.0));
        }

        let u = (t - self.start_t0) / self.step_seconds;
        let i0 = (u.floor().max(0.0) as usize).min(self.samples.len() - 2);
        let t0 = self.start_t0 + self.step_seconds * i0 as f64;
        Ok((i0, (t - t0) / self.step_seconds))
    }

    /// Interpolate position at `t` with SIMD cubic Hermite interpolation.
    ///
    /// Each f64x4 lane holds one axis (x, y, z, unused), so the four
    /// Hermite terms are combined for all three axes at once.
    pub fn sample_position(&self, t: f64) -> Result<DVec3, EphemerisTableError> {
        let (i0, s) = self.segment(t)?;
        if self.samples.len() == 1 {
            return Ok(self.samples[0].pos);
        }

        let s0 = &self.samples[i0];
        let s1 = &self.samples[i0 + 1];

        // Tangents are velocities (AU/day) scaled to the step length in days.
        let step_days = self.step_seconds / SECONDS_PER_DAY;

        let p0 = lanes(s0.pos);
        let p1 = lanes(s1.pos);
        let m0 = lanes(s0.vel) * f64x4::splat(step_days);
        let m1 = lanes(s1.vel) * f64x4::splat(step_days);

        // Hermite basis functions
        let s2 = s * s;
        let s3 = s2 * s;
        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        let result = p0 * f64x4::splat(h00)
            + m0 * f64x4::splat(h10)
            + p1 * f64x4::splat(h01)
            + m1 * f64x4::splat(h11);

        let r = result.to_array();
        Ok(DVec3::new(r[0], r[1], r[2]))
    }
}

#[inline]
fn lanes(v: DVec3) -> f64x4 {
    f64x4::new([v.x, v.y, v.z, 0.0])
}

/// Reader over a buffer whose length was checked up front.
struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
        self.offset += N;
        out
    }

    fn read_u32_le(&mut self) -> u32 {
        u32::from_le_bytes(self.take::<4>())
    }

    fn read_f64_le(&mut self) -> f64 {
        f64::from_le_bytes(self.take::<8>())
    }
}
