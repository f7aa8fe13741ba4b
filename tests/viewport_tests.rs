//! Viewport Tests
//!
//! Tests for:
//! - ViewportSync leader → follower mirroring
//! - Feedback suppression for poses reported by followers
//! - Driving sinks from a playing controller
//! - Pose helpers (target, view matrix)

use glam::Vec3;

use pathcam::path::{ControlPoint, PathLibrary};
use pathcam::{PathAnimationController, Pose, ViewportId, ViewportSink, ViewportSync};

#[derive(Debug)]
struct RecordingViewport {
    id: ViewportId,
    received: Vec<Pose>,
}

impl RecordingViewport {
    fn new(id: u32) -> Self {
        Self {
            id: ViewportId(id),
            received: Vec::new(),
        }
    }
}

impl ViewportSink for RecordingViewport {
    fn id(&self) -> ViewportId {
        self.id
    }

    fn apply_pose(&mut self, pose: &Pose) {
        self.received.push(*pose);
    }
}

fn pose_at(x: f32) -> Pose {
    Pose::new(Vec3::new(x, 0.0, 0.0), Vec3::X, Vec3::Z)
}

#[test]
fn leader_pose_reaches_followers_only() {
    let mut main = RecordingViewport::new(1);
    let mut plan = RecordingViewport::new(2);
    let mut other = RecordingViewport::new(3);

    let mut sync = ViewportSync::new();
    sync.connect(main.id, [plan.id]);
    assert!(sync.is_connected());

    let applied = sync.propagate(main.id, &pose_at(1.0), &mut [&mut main, &mut plan, &mut other]);
    assert_eq!(applied, 1);
    assert_eq!(plan.received, vec![pose_at(1.0)]);
    assert!(main.received.is_empty());
    assert!(other.received.is_empty());
}

#[test]
fn follower_poses_are_not_mirrored_back() {
    let mut main = RecordingViewport::new(1);
    let mut plan = RecordingViewport::new(2);

    let mut sync = ViewportSync::new();
    sync.connect(main.id, [plan.id]);

    let applied = sync.propagate(plan.id, &pose_at(2.0), &mut [&mut main, &mut plan]);
    assert_eq!(applied, 0);
    assert!(main.received.is_empty());
    assert!(plan.received.is_empty());
}

#[test]
fn connect_ignores_leader_and_duplicate_followers() {
    let mut sync = ViewportSync::new();
    sync.connect(ViewportId(1), [ViewportId(1), ViewportId(2), ViewportId(2), ViewportId(3)]);
    assert_eq!(sync.leader(), Some(ViewportId(1)));
    assert_eq!(sync.followers(), &[ViewportId(2), ViewportId(3)]);
}

#[test]
fn disconnect_stops_mirroring() {
    let mut main = RecordingViewport::new(1);
    let mut plan = RecordingViewport::new(2);

    let mut sync = ViewportSync::new();
    sync.connect(main.id, [plan.id]);
    sync.disconnect();
    assert!(!sync.is_connected());
    assert!(sync.followers().is_empty());

    let applied = sync.propagate(main.id, &pose_at(3.0), &mut [&mut main, &mut plan]);
    assert_eq!(applied, 0);
    assert!(plan.received.is_empty());
}

#[test]
fn controller_drives_synced_viewports() {
    let mut library = PathLibrary::new();
    library.insert(
        "Line",
        vec![
            ControlPoint::new(0.0, Vec3::ZERO, Vec3::X, Vec3::Z),
            ControlPoint::new(1.0, Vec3::new(20.0, 0.0, 0.0), Vec3::X, Vec3::Z),
        ],
    );

    let mut controller = PathAnimationController::new();
    controller.load_path(&library, "Line").unwrap();
    controller.set_speed(10.0).unwrap();
    controller.play().unwrap();

    let mut main = RecordingViewport::new(1);
    let mut plan = RecordingViewport::new(2);
    let mut sync = ViewportSync::new();
    sync.connect(main.id, [plan.id]);

    while controller.state().is_playing {
        let pose = controller.advance(0.5).unwrap();
        main.apply_pose(&pose);
        sync.propagate(main.id, &pose, &mut [&mut plan]);
    }

    assert_eq!(main.received.len(), 4);
    assert_eq!(main.received, plan.received);
    assert_eq!(plan.received.last().unwrap().position, Vec3::new(20.0, 0.0, 0.0));
}

#[test]
fn pose_target_and_view_matrix() {
    let pose = Pose::new(Vec3::new(1.0, 2.0, 3.0), Vec3::NEG_Z, Vec3::Y);
    assert_eq!(pose.target(), Vec3::new(1.0, 2.0, 2.0));

    // The camera position maps to the view-space origin.
    let origin = pose.view_matrix().transform_point3(pose.position);
    assert!(origin.length() < 1e-5);
    // The look target lies straight ahead (-Z in view space).
    let ahead = pose.view_matrix().transform_point3(pose.target());
    assert!((ahead - Vec3::NEG_Z).length() < 1e-5);
}
