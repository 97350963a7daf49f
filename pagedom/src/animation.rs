//! Height collapse/expand transitions.
//!
//! The animator only tracks interpolation state. `Page` owns it and applies
//! interpolated heights to elements, because completions need `&mut Page`.

use std::collections::HashMap;
use std::time::Duration;

use crate::page::Page;
use crate::transitions::TransitionConfig;

/// Where a height transition is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightTarget {
    /// Animate to the element's natural content height.
    Expand,
    /// Animate to zero.
    Collapse,
}

/// How an animation ended, as seen by its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Reached its target height.
    Finished,
    /// Replaced by a newer animation on the same element before finishing.
    Superseded,
}

/// Identifies one started animation. A newer token on the same element
/// invalidates older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

/// Invoked exactly once when an animation finishes or is superseded.
pub type Completion = Box<dyn FnOnce(&mut Page, Settlement) + Send>;

struct ActiveAnimation {
    token: AnimationToken,
    from: u16,
    to: u16,
    start: Duration,
    config: TransitionConfig,
    completion: Option<Completion>,
}

impl ActiveAnimation {
    fn value_at(&self, now: Duration) -> u16 {
        let elapsed = now.saturating_sub(self.start);
        let progress = if self.config.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
        };
        lerp_u16(self.from, self.to, self.config.easing.apply(progress))
    }

    fn is_finished(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.config.duration
    }
}

/// Result of advancing the animator to a point in time.
pub(crate) struct Advance {
    /// Interpolated heights of animations still in flight.
    pub heights: Vec<(String, u16)>,
    /// Elements whose animation just finished, with their completions.
    pub finished: Vec<(String, Option<Completion>)>,
}

/// Per-element height animations keyed by element ID.
#[derive(Default)]
pub struct HeightAnimator {
    active: HashMap<String, ActiveAnimation>,
    next_token: u64,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl std::fmt::Debug for HeightAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeightAnimator")
            .field("active", &self.active.keys().collect::<Vec<_>>())
            .field("reduced_motion", &self.reduced_motion)
            .finish()
    }
}

impl HeightAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, all transitions complete instantly.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true if any transition is currently active.
    pub fn has_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_animating(&self, element_id: &str) -> bool {
        self.active.contains_key(element_id)
    }

    pub fn token_for(&self, element_id: &str) -> Option<AnimationToken> {
        self.active.get(element_id).map(|a| a.token)
    }

    /// Interpolated height of an in-flight animation.
    pub fn current_height(&self, element_id: &str, now: Duration) -> Option<u16> {
        self.active.get(element_id).map(|a| a.value_at(now))
    }

    pub(crate) fn next_token(&mut self) -> AnimationToken {
        self.next_token += 1;
        AnimationToken(self.next_token)
    }

    /// Drop the in-flight animation for `element_id`, handing back its
    /// completion so the caller can report `Superseded`.
    pub(crate) fn cancel(&mut self, element_id: &str) -> Option<Completion> {
        self.active.remove(element_id).and_then(|a| a.completion)
    }

    pub(crate) fn start(
        &mut self,
        element_id: &str,
        token: AnimationToken,
        from: u16,
        to: u16,
        now: Duration,
        config: TransitionConfig,
        completion: Completion,
    ) {
        self.active.insert(
            element_id.to_string(),
            ActiveAnimation {
                token,
                from,
                to,
                start: now,
                config,
                completion: Some(completion),
            },
        );
    }

    /// Advance every animation to `now`. Finished animations are removed and
    /// returned in the order they were started.
    pub(crate) fn advance(&mut self, now: Duration) -> Advance {
        let mut heights = Vec::new();
        let mut done: Vec<(AnimationToken, String)> = Vec::new();

        for (id, animation) in &self.active {
            if animation.is_finished(now) {
                done.push((animation.token, id.clone()));
            } else {
                heights.push((id.clone(), animation.value_at(now)));
            }
        }
        done.sort();

        let finished = done
            .into_iter()
            .filter_map(|(_, id)| {
                let completion = self.active.remove(&id)?.completion;
                Some((id, completion))
            })
            .collect();

        Advance { heights, finished }
    }
}

/// Linear interpolation for u16 values.
pub fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t).round().clamp(0.0, f32::from(u16::MAX)) as u16
}
