// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Opens a window for a few seconds, cycling its title.
//!
//! ```text
//! cargo run -p sdl3 --example window -- --library /opt/sdl3/lib/libSDL3.so
//! ```

mod common;

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use sdl3::{InitFlags, Window, WindowFlags};
use sdl3_sys::config::{self, LibraryConfig};
use tracing::info;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Path of the SDL3 shared library. Defaults to the platform's `SDL3` library name.
    #[arg(long)]
    library: Option<PathBuf>,

    /// Window width.
    #[arg(long, default_value_t = 640)]
    width: i32,

    /// Window height.
    #[arg(long, default_value_t = 480)]
    height: i32,

    /// How many seconds to keep the window open.
    #[arg(long, default_value_t = 3)]
    seconds: u32,
}

fn main() -> Result<(), sdl3::Error> {
    common::setup_logging();
    let opts = Opts::parse();

    if let Some(path) = opts.library {
        config::configure(LibraryConfig::with_path(path))?;
    }

    sdl3::init(InitFlags::VIDEO)?;
    info!(
        version = %sdl3::get_version()?,
        revision = %sdl3::get_revision()?,
        platform = %sdl3::get_platform()?,
        "SDL initialized"
    );

    let mut window = Window::new("sdl3 window", opts.width, opts.height, WindowFlags::RESIZABLE)?;
    info!(id = window.id()?, "Window created");

    for second in 1..=opts.seconds {
        sdl3::delay(Duration::from_secs(1))?;
        window.set_title(&format!("sdl3 window: {second}s"))?;
        info!(title = %window.title()?, elapsed = ?sdl3::get_ticks()?, "Tick");
    }

    window.destroy()?;
    sdl3::quit()
}
