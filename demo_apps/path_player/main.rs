//! Headless path player.
//!
//! Plays one of the bundled camera paths in real time and logs the poses a
//! viewer would receive. A second "plan" viewport mirrors the main one.
//!
//! ```text
//! RUST_LOG=info cargo run -p path_player -- [PATH_ID] [SPEED]
//! RUST_LOG=debug cargo run -p path_player -- FlyoverPath "150 Mph: Airplane"
//! ```

use std::thread;
use std::time::Duration;

use anyhow::Context;
use pathcam::{
    FrameClock, PathAnimationController, PathInput, PathLibrary, Pose, SpeedPreset, ViewportId,
    ViewportSink, ViewportSync,
};

const PATHS: &str = include_str!("paths.json");
const FRAME_TIME: Duration = Duration::from_millis(16);

struct LogViewport {
    id: ViewportId,
    name: &'static str,
    frames: u64,
}

impl LogViewport {
    fn new(id: u32, name: &'static str) -> Self {
        Self {
            id: ViewportId(id),
            name,
            frames: 0,
        }
    }
}

impl ViewportSink for LogViewport {
    fn id(&self) -> ViewportId {
        self.id
    }

    fn apply_pose(&mut self, pose: &Pose) {
        if self.frames % 30 == 0 {
            log::info!(
                "[{}] eye {:>7.2} {:>7.2} {:>7.2}  look {:>5.2} {:>5.2} {:>5.2}",
                self.name,
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.look_direction.x,
                pose.look_direction.y,
                pose.look_direction.z,
            );
        }
        self.frames += 1;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path_id = args.next().unwrap_or_else(|| "TrainPath".to_string());
    let preset: SpeedPreset = args
        .next()
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(SpeedPreset::Car);

    let library = PathLibrary::from_json_str(PATHS).context("bundled paths.json is invalid")?;
    log::info!("Available paths: {}", library.ids().join(", "));

    let mut controller = PathAnimationController::new();
    controller
        .load_path(&library, &path_id)
        .with_context(|| format!("cannot play '{path_id}'"))?;
    controller.set_speed_preset(preset);
    log::info!("Playing '{path_id}' at {preset}");

    let mut main_view = LogViewport::new(1, "main");
    let mut plan_view = LogViewport::new(2, "plan");
    let mut sync = ViewportSync::new();
    sync.connect(main_view.id, [plan_view.id]);

    let mut clock = FrameClock::new();
    controller.play()?;
    while controller.state().is_playing {
        let pose = controller.advance(clock.tick())?;
        main_view.apply_pose(&pose);
        sync.propagate(main_view.id, &pose, &mut [&mut plan_view]);
        thread::sleep(FRAME_TIME);
    }
    log::info!(
        "Finished after {:.2}s ({} frames)",
        clock.elapsed.as_secs_f32(),
        clock.tick_count
    );

    // Scroll back a little, the way a mouse wheel would.
    for _ in 0..10 {
        controller.apply_input(PathInput::Wheel(-1.0))?;
    }
    let pose = controller.current_pose()?;
    main_view.frames = 0;
    main_view.apply_pose(&pose);
    log::info!("Wheel rewound to progress {:.3}", controller.progress());

    Ok(())
}
