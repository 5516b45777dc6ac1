// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the Prism bar chart screen to an SVG file.
mod config;
mod screen;
mod svg;
mod theme;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use kurbo::Point;
use prism_core::CommandList;
use prism_text::HeuristicTextMeasurer;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::screen::Screen;
use crate::svg::SvgScene;

#[derive(Parser, Debug)]
#[command(name = "prism_demo", version, about = "Render the pseudo-3D bar chart screen to SVG")]
struct Cli {
    /// TOML file overriding the title, screen metrics, or entries
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the SVG
    #[arg(short, long, default_value = "prism_demo.svg")]
    out: PathBuf,

    /// Start with the description toggle switched on
    #[arg(long)]
    show_description: bool,

    /// Tap the screen at X,Y (frame pixels) before rendering; repeatable
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    tap: Vec<Point>,

    /// Increase log verbosity (-v, -vv, -vvv); `RUST_LOG` takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let mut screen = Screen::from_config(&config)?;
    if cli.show_description {
        screen.set_show_description(true);
    }

    let measurer = HeuristicTextMeasurer;
    for at in &cli.tap {
        let hit = screen.tap(*at, &measurer)?;
        tracing::debug!(x = at.x, y = at.y, hit, "tap");
    }
    let mut commands = CommandList::new();
    let layout = screen
        .render(&mut commands, &measurer)
        .context("cannot lay out the chart")?;
    tracing::debug!(
        chart = ?layout.chart,
        switch = ?layout.switch,
        commands = commands.len(),
        "screen layout"
    );

    let mut svg = SvgScene::new(screen.frame());
    commands.replay(&mut svg);

    std::fs::write(&cli.out, svg.to_svg_string())
        .with_context(|| format!("write {}", cli.out.display()))?;
    tracing::info!(
        path = %cli.out.display(),
        show_description = screen.show_description(),
        "wrote screen"
    );
    println!("wrote {}", cli.out.display());
    Ok(())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|err| format!("bad coordinate {v:?}: {err}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn taps_parse_as_points() {
        let cli = Cli::parse_from(["prism_demo", "--tap", "10,20", "--tap", " 1.5 , 2 "]);
        assert_eq!(cli.tap, [Point::new(10.0, 20.0), Point::new(1.5, 2.0)]);
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,1").is_err());
    }
}
