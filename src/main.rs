use anyhow::{bail, Context, Result};
use bezier_circle::animation::Ticker;
use bezier_circle::color_utils::{parse_color, parse_color_list};
use bezier_circle::export::{control_point_report, format_report, log_control_points};
use bezier_circle::utils::save_text;
use bezier_circle::{generate_svg, render_to_png, Config, DragController, RenderOptions, Scene, TouchEvent};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "bezier-circle")]
#[command(about = "Draw, drag and animate a circle made of four cubic Bezier arcs", long_about = None)]
struct Cli {
    #[command(flatten)]
    display: DisplayArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct DisplayArgs {
    /// Display width in pixels; the radius is a quarter of it
    #[arg(long, global = true, default_value_t = bezier_circle::config::DEFAULT_WIDTH_PX)]
    width_px: u32,

    /// Display height in pixels
    #[arg(long, global = true, default_value_t = bezier_circle::config::DEFAULT_HEIGHT_PX)]
    height_px: u32,

    /// Pixels per density-independent pixel
    #[arg(long, global = true, default_value_t = bezier_circle::config::DEFAULT_DENSITY)]
    density: f32,

    /// Control point distance as a fraction of the radius
    #[arg(long, global = true, default_value_t = bezier_circle::config::DEFAULT_RATIO)]
    ratio: f32,

    /// Stroke colors, one circle per color (e.g. "#1296db,#ff8800")
    #[arg(long, global = true, default_value = "#1296db,#1296db,#1296db")]
    colors: String,
}

impl DisplayArgs {
    fn config(&self) -> Config {
        Config {
            width_px: self.width_px,
            height_px: self.height_px,
            density: self.density,
            ratio: self.ratio,
            ..Config::default()
        }
    }

    fn scene(&self, config: &Config) -> Result<Scene> {
        let colors = parse_color_list(&self.colors).context("Invalid --colors")?;
        Scene::from_config(config, &colors).context("Failed to build circles")
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the control points of a fresh circle in dp
    Points {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Draw the circles to an .svg or .png file
    Render {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Draw one randomized frame instead of the resting layout
        #[arg(long)]
        randomize: bool,

        /// Seed for --randomize
        #[arg(long)]
        seed: Option<u64>,

        /// Draw control polygon and point markers
        #[arg(long)]
        help_lines: bool,

        /// Background color, transparent when omitted
        #[arg(long)]
        background: Option<String>,
    },

    /// Drag a point of the first circle, in device coordinates
    Drag {
        #[arg(long, value_parser = parse_xy)]
        from: (f32, f32),

        #[arg(long, value_parser = parse_xy)]
        to: (f32, f32),

        /// Number of move events between the two positions
        #[arg(long, default_value_t = 10)]
        steps: u32,

        /// Also draw the result to this file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Randomize every circle on a timer, like the "play" button
    Play {
        /// Number of frames to produce
        #[arg(long, default_value_t = 25)]
        ticks: u64,

        #[arg(long, default_value_t = bezier_circle::config::DEFAULT_PLAY_INTERVAL_MS)]
        interval_ms: u64,

        #[arg(long)]
        seed: Option<u64>,

        /// Write frame_NNNN.svg files here
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

fn parse_xy(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad Y: {e}"))?;
    Ok((x, y))
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn write_scene(scene: &Scene, options: &RenderOptions, output: &Path) -> Result<()> {
    let extension = output
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match extension.to_lowercase().as_str() {
        "svg" => save_text(&generate_svg(scene, options), output)
            .with_context(|| format!("Failed to write SVG file: {output:?}"))?,
        _ => render_to_png(scene, options, output)
            .with_context(|| format!("Failed to render PNG: {output:?}"))?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = cli.display.config();
    let mut scene = cli.display.scene(&config)?;
    log::debug!("config: {config:?}");

    match cli.command {
        Command::Points { json } => {
            let Some(first) = scene.get(0) else {
                bail!("no circles configured");
            };
            let report = control_point_report(&first.model, config.density);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", format_report(&report));
                println!("max radial error: {:.3} px", report.max_radial_error_px);
            }
        }
        Command::Render {
            output,
            randomize,
            seed,
            help_lines,
            background,
        } => {
            if randomize {
                scene.randomize_all(&mut seeded_rng(seed));
            }
            let mut options = RenderOptions::new(config.width_px, config.height_px);
            options.help_lines = help_lines;
            options.background = background
                .as_deref()
                .map(parse_color)
                .transpose()
                .context("Invalid --background")?;
            write_scene(&scene, &options, &output)?;
            println!("Wrote {}", output.display());
        }
        Command::Drag {
            from,
            to,
            steps,
            output,
        } => {
            let Some(first) = scene.get_mut(0) else {
                bail!("no circles configured");
            };
            let mut drag = DragController::new(config.width_px as f32, config.height_px as f32);
            drag.handle(&mut first.model, TouchEvent::Down { x: from.0, y: from.1 });
            match first.model.selected() {
                Some(index) => log::info!("picked point {index}"),
                None => log::warn!("no point under ({}, {})", from.0, from.1),
            }

            let steps = steps.max(1);
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                drag.handle(
                    &mut first.model,
                    TouchEvent::Move {
                        x: from.0 + (to.0 - from.0) * t,
                        y: from.1 + (to.1 - from.1) * t,
                    },
                );
            }
            drag.handle(&mut first.model, TouchEvent::Up);

            let report = control_point_report(&first.model, config.density);
            println!("{}", format_report(&report));

            if let Some(output) = output {
                let mut options = RenderOptions::new(config.width_px, config.height_px);
                options.help_lines = true;
                write_scene(&scene, &options, &output)?;
                println!("Wrote {}", output.display());
            }
        }
        Command::Play {
            ticks,
            interval_ms,
            seed,
            out_dir,
        } => {
            let mut rng = seeded_rng(seed);
            let config = Config {
                play_interval_ms: interval_ms,
                ..config
            };
            let options = RenderOptions::new(config.width_px, config.height_px);
            let ticker = Ticker::start(config.play_interval());

            let mut frames = 0u64;
            let mut idle = 0u32;
            while frames < ticks {
                let Some(tick) = ticker.next_tick(ticker.interval() * 4) else {
                    idle += 1;
                    if idle > 10 {
                        bail!("ticker stopped delivering ticks");
                    }
                    continue;
                };
                idle = 0;
                scene.randomize_all(&mut rng);
                if let Some(dir) = &out_dir {
                    let path = dir.join(format!("frame_{frames:04}.svg"));
                    save_text(&generate_svg(&scene, &options), &path)?;
                }
                log::debug!("frame {frames} from tick {}", tick.seq);
                frames += 1;
            }

            let dropped = ticker.stop();
            println!("Played {frames} frames, {dropped} ticks skipped");
            if let Some(first) = scene.get(0) {
                log_control_points(&first.model, config.density);
            }
        }
    }

    Ok(())
}
