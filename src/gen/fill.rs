use crate::params::{ParamSequencer, VoiceParams};

/// Element types a destination region can store.
///
/// The waveform is always computed in f64; the trait only fixes how the
/// computed value lands in storage. Integral targets truncate toward zero
/// (plain `as` cast), float targets keep the cast's precision.
pub trait Sample: Copy {
    fn from_value(value: f64) -> Self;
}

impl Sample for f64 {
    fn from_value(value: f64) -> Self {
        value
    }
}

impl Sample for f32 {
    fn from_value(value: f64) -> Self {
        value as f32
    }
}

impl Sample for i32 {
    fn from_value(value: f64) -> Self {
        value as i32
    }
}

/// Two-voice sample for index `i`: a slow fundamental plus a second sine
/// scaled, sped up, and phase-shifted by the tuple.
fn sample_at(p: VoiceParams, i: usize) -> f64 {
    let t = i as f64 / 100.0;
    p.a * 15.0 * t.sin() + p.b * 10.0 * (p.c * 1.7 * t + p.d * 0.6).sin()
}

/// Fill `region` with one voice of the waveform.
///
/// Consumes exactly one tuple from `seq` per call, so back-to-back fills get
/// different voices. The slice length is the only bound; capacity is the
/// caller's business and no allocation happens here.
pub fn fill<T: Sample>(region: &mut [T], seq: &mut ParamSequencer) {
    let p = seq.next();
    log::trace!("filling {} elements with {:?}", region.len(), p);

    for (i, slot) in region.iter_mut().enumerate() {
        *slot = T::from_value(sample_at(p, i));
    }
}
