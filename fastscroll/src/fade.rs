/// Fade animation phases controlling thumb/track opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FadeState {
    #[default]
    Out,
    FadingIn,
    In,
    FadingOut,
}

/// A small time-based fade tween.
///
/// Sampled at explicit `now_ms` timestamps, so the same animation runs against
/// a real-time clock or a deterministic test clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FadeAnimation {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl FadeAnimation {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }
}

/// The outcome of advancing the fader to a new timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FadeTick {
    /// No animation in flight.
    Idle,
    /// The animation advanced; the current value changed.
    Advanced,
    /// The animation ran to natural completion at this tick.
    Completed { faded_out: bool },
}

/// The two-direction fade state machine.
///
/// Starting a new animation replaces any in-flight one; the replaced run never
/// reports completion, so cancellation cannot corrupt the state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Fader {
    state: FadeState,
    value: f32,
    active: Option<FadeAnimation>,
}

impl Fader {
    pub(crate) fn state(&self) -> FadeState {
        self.state
    }

    /// Current interpolated value in `[0, 1]`.
    pub(crate) fn value(&self) -> f32 {
        self.value
    }

    /// Starts (or retargets) a fade toward fully visible.
    ///
    /// Only acts when currently `Out` or `FadingOut`; returns whether an
    /// animation was started.
    pub(crate) fn show(&mut self, now_ms: u64, duration_ms: u64) -> bool {
        match self.state {
            FadeState::Out | FadeState::FadingOut => {
                self.active = Some(FadeAnimation::new(self.value, 1.0, now_ms, duration_ms));
                self.state = FadeState::FadingIn;
                true
            }
            FadeState::FadingIn | FadeState::In => false,
        }
    }

    /// Starts (or retargets) a fade toward fully hidden.
    ///
    /// Only acts when currently `In` or `FadingIn`; returns whether an
    /// animation was started.
    pub(crate) fn hide(&mut self, now_ms: u64, duration_ms: u64) -> bool {
        match self.state {
            FadeState::In | FadeState::FadingIn => {
                self.active = Some(FadeAnimation::new(self.value, 0.0, now_ms, duration_ms));
                self.state = FadeState::FadingOut;
                true
            }
            FadeState::Out | FadeState::FadingOut => false,
        }
    }

    /// Advances the in-flight animation, if any.
    pub(crate) fn tick(&mut self, now_ms: u64) -> FadeTick {
        let Some(anim) = self.active else {
            return FadeTick::Idle;
        };
        self.value = anim.sample(now_ms);
        if anim.is_done(now_ms) {
            self.active = None;
            let faded_out = self.value <= 0.0;
            self.state = if faded_out {
                FadeState::Out
            } else {
                FadeState::In
            };
            FadeTick::Completed { faded_out }
        } else {
            FadeTick::Advanced
        }
    }

    /// Drops any in-flight animation, settling at its target without firing
    /// completion effects. Used on teardown.
    pub(crate) fn cancel(&mut self) {
        if self.active.take().is_none() {
            return;
        }
        match self.state {
            FadeState::FadingIn => {
                self.state = FadeState::In;
                self.value = 1.0;
            }
            FadeState::FadingOut => {
                self.state = FadeState::Out;
                self.value = 0.0;
            }
            FadeState::In | FadeState::Out => {}
        }
    }
}
