use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use glam::Vec2;
use seekship_common::{FrameInput, SimConfig};
use seekship_input::{Action, Button, InputState, MouseButton};
use seekship_kernel::{InputTape, World, run_until_close};
use seekship_render::{DebugTextRenderer, RenderView, Renderer};
use seekship_tools::{FrameBudget, FrameTimer, Tweak, TweakPanel, WorldInspector};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seekship-cli", about = "Headless driver for the seekship simulation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON simulation config; defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the effective configuration
    Info,
    /// Simulate a scripted stretch of frames
    Run(RunArgs),
    /// Replay a recorded input tape and check it is deterministic
    Replay {
        /// Tape file written by `run --record`
        tape: PathBuf,
        /// Print the final frame
        #[arg(long)]
        render: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Number of frames to simulate
    #[arg(short, long, default_value = "144")]
    frames: u64,
    /// Seconds per frame
    #[arg(short, long, default_value_t = 1.0 / 144.0)]
    delta: f32,
    /// Pointer position as X Y in screen space
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pointer: Option<Vec<f32>>,
    /// Hold fire for the whole run
    #[arg(long)]
    fire: bool,
    /// Movement keys to hold, by name (e.g. w, a, s, d)
    #[arg(long = "hold", value_name = "KEY")]
    hold: Vec<String>,
    /// Signal window close at this frame
    #[arg(long)]
    close_at: Option<u64>,
    /// Max speed slider value
    #[arg(long)]
    max_speed: Option<f32>,
    /// Rotation speed slider value
    #[arg(long)]
    rotation_speed: Option<f32>,
    /// Rate of fire slider value
    #[arg(long)]
    fire_rate: Option<f32>,
    /// Print overlay telemetry every N frames (0 disables)
    #[arg(long, default_value = "0")]
    report_every: u64,
    /// Save the generated inputs as a tape
    #[arg(long)]
    record: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("seekship-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "screen: {}x{}  friction: {} ({:?})  arrival radius: {}",
                config.width, config.height, config.friction, config.friction_mode, config.arrival_radius
            );
            println!(
                "agent: max_speed={} rotation_speed={} fire_rate={}",
                config.agent.max_speed, config.agent.rotation_speed, config.agent.fire_rate
            );
            println!(
                "projectile: max_speed={} damage={}",
                config.projectile.max_speed, config.projectile.damage
            );
        }
        Commands::Run(args) => run(&config, args)?,
        Commands::Replay { tape, render } => {
            let tape = InputTape::load(&tape)
                .with_context(|| format!("loading tape {}", tape.display()))?;
            println!("Replaying {} frames", tape.len());

            let first = tape.replay(&config);
            let second = tape.replay(&config);
            println!(
                "Run 1: tick={} hash={:#x} projectiles={}",
                first.tick(),
                first.state_hash(),
                first.projectile_count()
            );
            println!(
                "Run 2: tick={} hash={:#x} projectiles={}",
                second.tick(),
                second.state_hash(),
                second.projectile_count()
            );
            let mut matched = first.state_hash() == second.state_hash();
            if let Some(recorded) = tape.final_hash() {
                println!("Recorded: hash={recorded:#x}");
                matched &= recorded == first.state_hash();
            }
            println!("Match: {}", if matched { "OK" } else { "MISMATCH" });
            if render {
                print!("{}", DebugTextRenderer::new().render(&first, &RenderView::default()));
            }
            if !matched {
                anyhow::bail!("replay diverged");
            }
        }
    }

    Ok(())
}

fn run(config: &SimConfig, args: RunArgs) -> anyhow::Result<()> {
    let mut input = InputState::default();
    for name in &args.hold {
        let button: Button = name.parse()?;
        input.press(button);
    }
    if args.fire {
        input.press(Button::Mouse(MouseButton::Left));
    }
    if input.is_active(Action::Close) {
        tracing::warn!("a held key is bound to close; the run will stop immediately");
    }
    if let Some(p) = &args.pointer {
        input.move_pointer(Vec2::new(p[0], p[1]));
    }

    let mut world = World::new(config);
    apply_tweaks(&mut world, &args);

    let mut tape = InputTape::for_agent(world.agent().tuning());
    for frame in 0..args.frames {
        if args.close_at == Some(frame) {
            input.window_closed();
        }
        tape.record(input.frame(args.delta));
    }

    let budget = FrameBudget::from_config(config);
    let mut timer = FrameTimer::new(120);
    let mut overruns = 0u64;
    let report_every = args.report_every;

    let (world, summary) = run_until_close(
        world,
        config,
        tape.frames().iter().copied(),
        |world: &World, frame: &FrameInput, _report| {
            if budget.check(frame.delta) {
                overruns += 1;
            }
            timer.record(frame.delta);
            if report_every > 0 && world.tick() % report_every == 0 {
                println!("{}", WorldInspector::telemetry(world, frame));
            }
        },
    );

    println!(
        "Simulated {} frames ({}), budget overruns: {}, avg frame {:.2}ms ({:.1} fps), slowest {:.2}ms",
        summary.frames,
        if summary.closed { "closed" } else { "input exhausted" },
        overruns,
        timer.mean_delta() * 1000.0,
        timer.mean_fps(),
        timer.slowest() * 1000.0
    );
    print!("{}", DebugTextRenderer::with_projectile_limit(10).render(&world, &RenderView::default()));

    if let Some(path) = &args.record {
        tape.set_final_hash(world.state_hash());
        tape.save(path)
            .with_context(|| format!("saving tape {}", path.display()))?;
        println!("Tape saved to {} ({} frames)", path.display(), tape.len());
    }

    Ok(())
}

fn apply_tweaks(world: &mut World, args: &RunArgs) {
    let agent = world.agent_mut();
    for (tweak, value) in [
        (Tweak::MaxSpeed, args.max_speed),
        (Tweak::RotationSpeed, args.rotation_speed),
        (Tweak::RateOfFire, args.fire_rate),
    ] {
        if let Some(value) = value {
            let stored = TweakPanel::set(agent, tweak, value);
            tracing::info!("{} = {}", tweak.label(), stored);
        }
    }
}
