//! Flappy Sim entry point
//!
//! Native: headless attract mode. The autopilot plays for a number of frames
//! and the final frame is printed as JSON.
//! Web: the `WebGame` binding in the library is the entry point.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_sim::GameConfig;
    use flappy_sim::platform::{FlapLatch, FrameClock, run_frame};
    use flappy_sim::sim::{GameEvent, GamePhase, GameState, autopilot, snapshot};

    env_logger::init();
    log::info!("Flappy Sim (native) starting...");

    let options = Options::parse(std::env::args().skip(1));
    let config_json = options.config_path.as_ref().and_then(|path| {
        std::fs::read_to_string(path)
            .map_err(|e| log::warn!("Could not read {}: {}", path, e))
            .ok()
    });
    let config = GameConfig::load_or_default(config_json.as_deref());
    let seed = options.seed.unwrap_or_else(rand::random);

    let mut state = GameState::new(800.0, 600.0, config, seed);
    let mut latch = FlapLatch::default();
    let mut clock = FrameClock::new(config.fixed_step);
    log::info!("Game initialized with seed: {}", seed);

    // Frames to linger on the game-over screen before restarting
    const RESTART_DELAY: u32 = 60;
    let mut runs = 0u32;
    let mut best = 0u32;
    let mut over_for = 0u32;

    for frame in 0..options.frames {
        if state.phase == GamePhase::GameOver {
            over_for += 1;
            if over_for >= RESTART_DELAY {
                latch.press();
                over_for = 0;
            }
        } else if autopilot::should_flap(&state) {
            latch.press();
        }

        let now_ms = frame as f64 * 1000.0 / 60.0;
        run_frame(&mut state, &mut latch, &mut clock, now_ms);

        for event in state.drain_events() {
            match event {
                GameEvent::Started => runs += 1,
                GameEvent::Scored { score } => best = best.max(score),
                GameEvent::Crashed { cause } => {
                    log::info!("Run {} ended: {:?}, score {}", runs, cause, state.score)
                }
                GameEvent::Flapped | GameEvent::Reset => {}
            }
        }
    }

    log::info!("{} runs, best score {}", runs, best);
    match serde_json::to_string_pretty(&snapshot(&state)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}

/// Command line options
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
struct Options {
    frames: u32,
    seed: Option<u64>,
    config_path: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Options {
    const DEFAULT_FRAMES: u32 = 60 * 60;

    /// `[--frames N] [--seed N] [config.json]`
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        let mut options = Self {
            frames: Self::DEFAULT_FRAMES,
            seed: None,
            config_path: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--frames" => match args.next().map(|v| v.parse()) {
                    Some(Ok(frames)) => options.frames = frames,
                    _ => log::warn!("--frames needs a number, using {}", options.frames),
                },
                "--seed" => match args.next().map(|v| v.parse()) {
                    Some(Ok(seed)) => options.seed = Some(seed),
                    _ => log::warn!("--seed needs a number, using a random seed"),
                },
                _ => options.config_path = Some(arg),
            }
        }

        options
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is flappy_sim::platform::web::WebGame, this is just to satisfy the compiler
}
