//! Offline texture baker.
//!
//! Loads an sRGB-encoded PNG, runs the diffuse fragment stage over it
//! (decode to linear light, apply a tint), and writes the result back out.
//! The default export path re-encodes to sRGB; `--linear-out` keeps the
//! payload linear, which bands in dark tones at 8 bits.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use shamash_shade::color::Rgba;
use shamash_shade::logging::{init_logging, LoggingConfig};
use shamash_shade::stage::{self, DiffuseStage};
use shamash_shade::target::ColorAttachment;
use shamash_shade::texture::{Sampler, Texture2d, WrapMode};

#[derive(Parser)]
#[command(
    name = "shamash-bake",
    about = "Bakes an sRGB texture into linear light with a tint applied"
)]
struct App {
    /// Tint color as `r,g,b,a`, applied in linear space
    #[arg(short, long, default_value = "1,1,1,1", value_parser = parse_tint)]
    tint: Rgba,
    /// Wrap mode used when sampling (repeat | clamp)
    #[arg(short, long, default_value = "repeat", value_parser = parse_wrap)]
    wrap: WrapMode,
    /// Skip re-encoding: write the linear-light result directly
    #[arg(long)]
    linear_out: bool,
    /// Input PNG, assumed sRGB-encoded with linear alpha
    input: PathBuf,
    /// Output PNG path
    output: PathBuf,
}

fn parse_tint(s: &str) -> Result<Rgba, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("expected 4 comma-separated components, got {}", parts.len()));
    }
    let mut channels = [0.0f32; 4];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|e| format!("bad tint component {part:?}: {e}"))?;
    }
    Ok(Rgba::new(channels[0], channels[1], channels[2], channels[3]))
}

fn parse_wrap(s: &str) -> Result<WrapMode, String> {
    match s {
        "repeat" => Ok(WrapMode::Repeat),
        "clamp" => Ok(WrapMode::ClampToEdge),
        other => Err(format!("unknown wrap mode {other:?} (expected repeat | clamp)")),
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let args = App::parse();

    if !args.tint.is_finite() {
        bail!("tint must be finite");
    }

    let image = image::open(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let texture = Texture2d::from_srgb8(width, height, image.as_raw())?;
    log::info!("loaded {} ({width}x{height})", args.input.display());

    let stage = DiffuseStage::new(&texture, Sampler::new(args.wrap), args.tint);
    let mut attachment = ColorAttachment::new(width, height);
    stage::run(&stage, &mut attachment);

    let bytes = if args.linear_out {
        log::warn!("writing linear-light payload; expect banding in dark tones");
        attachment.to_linear8()
    } else {
        attachment.to_srgb8()
    };

    image::save_buffer(
        &args.output,
        &bytes,
        width,
        height,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("baked {}", args.output.display());

    Ok(())
}
