/// Fixed table the sequencer draws every parameter from. The length (11) is
/// deliberately not a multiple of 4, so consecutive tuples drift across the
/// table boundary and repeat only every 11 requests.
pub const PARAM_TABLE: [f64; 11] = [1.0, 1.5, 0.7, 1.2, 0.3, 1.1, 1.6, 0.2, 0.8, 1.4, 0.7];

/// One voice of the waveform: `a` and `b` are amplitudes, `c` is a frequency
/// multiplier, `d` is a phase offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoiceParams {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Cyclic generator of [`VoiceParams`] tuples.
///
/// Holds its own cursor instead of a process-wide counter, so callers decide
/// how sequencer state is shared. Each request reads four consecutive table
/// positions (modulo per field) and advances the cursor by 4; successive
/// requests are phase-shifted windows into the same repeating table.
#[derive(Debug, Default)]
pub struct ParamSequencer {
    cursor: usize,
}

impl ParamSequencer {
    /// Create a sequencer with the cursor at the start of the table
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    fn take(&mut self) -> f64 {
        let value = PARAM_TABLE[self.cursor % PARAM_TABLE.len()];
        self.cursor += 1;
        value
    }

    /// Produce the next tuple and advance the cursor.
    ///
    /// Fields are taken in order a, b, c, d, each with its own modulo lookup.
    /// Keeping the per-field wraparound (rather than snapping the window to a
    /// tuple boundary) is what gives repeated calls their variety.
    pub fn next(&mut self) -> VoiceParams {
        VoiceParams {
            a: self.take(),
            b: self.take(),
            c: self.take(),
            d: self.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_sequencer_yields_known_tuples() {
        let mut seq = ParamSequencer::new();

        assert_eq!(
            seq.next(),
            VoiceParams {
                a: 1.0,
                b: 1.5,
                c: 0.7,
                d: 1.2
            }
        );
        assert_eq!(
            seq.next(),
            VoiceParams {
                a: 0.3,
                b: 1.1,
                c: 1.6,
                d: 0.2
            }
        );
        // Third tuple wraps into the table's start: d comes from index 0.
        assert_eq!(
            seq.next(),
            VoiceParams {
                a: 0.8,
                b: 1.4,
                c: 0.7,
                d: 1.0
            }
        );
    }

    #[test]
    fn sequence_repeats_after_eleven_requests() {
        let mut seq = ParamSequencer::new();
        let first: Vec<VoiceParams> = (0..11).map(|_| seq.next()).collect();
        let second: Vec<VoiceParams> = (0..11).map(|_| seq.next()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn consecutive_tuples_differ() {
        let mut seq = ParamSequencer::new();
        let one = seq.next();
        let two = seq.next();
        assert_ne!(one, two);
    }
}
