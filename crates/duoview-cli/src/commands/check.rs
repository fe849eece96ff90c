use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use duoview_core::geometry::Size;
use duoview_core::io::image_io::probe_size;
use duoview_core::viewport::fit_scale_for;

use crate::summary::{print_check_summary, ImageReport};

#[derive(Args)]
pub struct CheckArgs {
    /// First image
    pub first: PathBuf,
    /// Second image
    pub second: PathBuf,
    /// Viewport size used to compute fit scales, as WIDTHxHEIGHT
    #[arg(long, default_value = "800x600", value_parser = parse_viewport)]
    pub viewport: Size,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let first = report(&args.first, args.viewport)?;
    let second = report(&args.second, args.viewport)?;
    let matched = first.size == second.size;

    print_check_summary(&first, &second, args.viewport, matched);

    if !matched {
        bail!("image sizes differ: {} vs {}", first.size, second.size);
    }
    Ok(())
}

fn report(path: &Path, viewport: Size) -> Result<ImageReport> {
    let size =
        probe_size(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let (orientation, fit_scale) = fit_scale_for(size, viewport);
    tracing::debug!("{}: {size}, {orientation}, fit {fit_scale:.4}", path.display());
    Ok(ImageReport {
        path: path.to_path_buf(),
        size,
        orientation,
        fit_scale,
    })
}

fn parse_viewport(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f64 = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let height: f64 = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("viewport must be positive, got '{s}'"));
    }
    Ok(Size::new(width, height))
}
