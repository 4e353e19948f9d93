use anyhow::{Context, Result};
use clap::Parser;

use sierpinski::animation::{FrameClock, RenderState};
use sierpinski::cli::Cli;
use sierpinski::config::SceneConfig;
use sierpinski::export;
use sierpinski::input::{Controller, ScriptedController};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    let config = cli.apply(config);
    config.validate()?;
    log::debug!("Scene config: {:?}", config);

    let mut clock = FrameClock::new();
    let generator = config.generator();
    let buffer = generator
        .generate_new(&config.seed_triangle(), config.depth)
        .context("Failed to generate triangles")?;
    let gen_time = clock.tick();

    // depth was validated by the generator
    let depth = config.depth.unsigned_abs();

    log::info!(
        "{} depth {}: {} triangles, {} vertices in {:.3} ms",
        config.policy.name(),
        depth,
        buffer.triangle_count(),
        buffer.len(),
        gen_time * 1000.0
    );
    if !cli.quiet {
        println!(
            "Generated {} triangles ({} vertices, {} bytes) with {} policy at depth {}",
            buffer.triangle_count(),
            buffer.len(),
            buffer.as_bytes().len(),
            config.policy.name(),
            depth
        );
    }

    if let Some(path) = &cli.output {
        export::write_to_path(path, cli.format, &buffer, config.policy, depth)?;
        if !cli.quiet {
            println!("Vertex buffer written to {:?}", path);
        }
    }

    let mut state = RenderState::new(config.saturation, config.value);
    let mut controller = ScriptedController::new(config.key_script.clone());

    for frame in 0..config.frames {
        controller.seek(frame);
        if !controller.down_buttons().is_empty() {
            log::debug!("frame {}: held {:?}", frame, controller.down_buttons());
        }
        let elapsed = frame as f32 * config.frame_dt;
        let uniforms = state.step(&controller, elapsed);

        log::debug!(
            "frame {}: t={:.3} hue={:.1} color={:?} blend={:.2}",
            frame,
            elapsed,
            uniforms.hue,
            uniforms.color,
            uniforms.blend
        );
        if !cli.quiet {
            println!(
                "frame {:>4}  hue {:>6.1}  rgb [{:.3}, {:.3}, {:.3}]  blend {:.2}",
                frame,
                uniforms.hue,
                uniforms.color[0],
                uniforms.color[1],
                uniforms.color[2],
                uniforms.blend
            );
        }

        if state.close_requested {
            log::info!("Close requested on frame {}", frame);
            break;
        }
    }

    log::info!("Finished in {:.3} s", clock.elapsed());
    Ok(())
}
