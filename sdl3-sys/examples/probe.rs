// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Opens a native library and reports where its exports resolve.
//!
//! ```text
//! cargo run -p sdl3-sys --example probe -- SDL_Init SDL_GetError SDL_Missing
//! cargo run -p sdl3-sys --example probe -- --library /opt/sdl/lib/libSDL3.so.0 SDL_Init
//! ```

use std::path::PathBuf;

use clap::Parser;
use sdl3_sys::{Library, config};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Library to open. Defaults to the platform name of SDL3.
    #[arg(long, short)]
    library: Option<PathBuf>,

    /// Also read the library's last-error message after probing.
    #[arg(long)]
    last_error: bool,

    /// Exports to resolve.
    #[arg(required = true)]
    symbols: Vec<String>,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<(), sdl3_sys::Error> {
    setup_logging();
    let opts = Opts::parse();

    let path = opts.library.unwrap_or_else(config::default_library_path);
    let library = Library::open(&path)?;
    info!("Opened \"{}\"", library.name());

    let mut missing = 0;
    for symbol in &opts.symbols {
        match library.resolve(symbol) {
            Ok(address) => info!("{symbol} -> {address:p}"),
            Err(error) => {
                missing += 1;
                warn!("{error}");
            }
        }
    }
    info!(
        "{} of {} export(s) resolved",
        opts.symbols.len() - missing,
        opts.symbols.len()
    );

    if opts.last_error {
        info!("Last error: \"{}\"", library.last_error()?);
    }

    library.close()
}
