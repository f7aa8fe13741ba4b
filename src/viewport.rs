//! Viewport Sinks
//!
//! A [`ViewportSink`] is anything a host can show a [`Pose`] on. The library
//! never stores sinks: callers pass them in for the duration of a call.
//!
//! [`ViewportSync`] mirrors one viewport's camera onto others, e.g. a plan
//! view following the main 3D view. Only poses coming from the leader are
//! mirrored, so followers that report their own camera changes back cannot
//! start a feedback loop.

use smallvec::SmallVec;

use crate::pose::Pose;

/// Host-assigned viewport identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewportId(pub u32);

/// A rendering surface that accepts camera poses.
pub trait ViewportSink {
    fn id(&self) -> ViewportId;

    fn apply_pose(&mut self, pose: &Pose);
}

/// Leader/follower link between viewports.
#[derive(Debug, Clone, Default)]
pub struct ViewportSync {
    leader: Option<ViewportId>,
    followers: SmallVec<[ViewportId; 4]>,
}

impl ViewportSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `leader` drive `followers`, replacing any previous link.
    /// The leader is never its own follower.
    pub fn connect(&mut self, leader: ViewportId, followers: impl IntoIterator<Item = ViewportId>) {
        self.followers.clear();
        for follower in followers {
            if follower != leader && !self.followers.contains(&follower) {
                self.followers.push(follower);
            }
        }
        self.leader = Some(leader);
        log::debug!("Viewport {leader:?} now drives {:?}", self.followers.as_slice());
    }

    pub fn disconnect(&mut self) {
        if self.leader.take().is_some() {
            log::debug!("Viewports disconnected");
        }
        self.followers.clear();
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.leader.is_some()
    }

    #[must_use]
    pub fn leader(&self) -> Option<ViewportId> {
        self.leader
    }

    #[must_use]
    pub fn followers(&self) -> &[ViewportId] {
        &self.followers
    }

    /// Mirrors `pose` from `source` onto every connected follower in `sinks`.
    ///
    /// Returns how many sinks received the pose. Poses from anything other
    /// than the leader are ignored.
    pub fn propagate(
        &self,
        source: ViewportId,
        pose: &Pose,
        sinks: &mut [&mut dyn ViewportSink],
    ) -> usize {
        if self.leader != Some(source) {
            return 0;
        }

        let mut applied = 0;
        for sink in sinks.iter_mut() {
            if self.followers.contains(&sink.id()) {
                sink.apply_pose(pose);
                applied += 1;
            }
        }
        applied
    }
}
