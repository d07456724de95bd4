use rand::Rng;

/// Source of uniformly distributed integers, bounds inclusive.
pub trait RandomSource {
    fn random_int(&mut self, low: u32, high: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn random_int(&mut self, low: u32, high: u32) -> u32 {
        (**self).random_int(low, high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn random_int(&mut self, low: u32, high: u32) -> u32 {
        (**self).random_int(low, high)
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn random_int(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values are clamped into the requested range so a replay can never hand
/// out something the caller did not ask for. An empty list yields `low`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<u32>,
    next: usize,
    calls: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
            calls: 0,
        }
    }

    /// How many values have been drawn so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RandomSource for SequenceSource {
    fn random_int(&mut self, low: u32, high: u32) -> u32 {
        self.calls += 1;
        let Some(&value) = self.values.get(self.next) else {
            return low;
        };
        self.next = (self.next + 1) % self.values.len();
        value.clamp(low, high)
    }
}
