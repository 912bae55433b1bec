//! Showcase - the full window, live in your terminal
//!
//! Demonstrates:
//! - Building a window from a validated config
//! - Icon slots (three filled, one left blank)
//! - Action buttons logging their 1-based index
//! - Link buttons opening real URLs in your browser
//!
//! Click with the mouse; press q, Escape, or Ctrl+C to quit.
//! Button clicks go to the log sink: RUST_LOG=debug to see them
//! (stderr, so redirect with 2>showcase.log while the UI runs).
//!
//! Run with: cargo run --example showcase

use std::process;

use casement::{build_window, App, Icon, Rgba, Services, Stage, WindowConfig};

fn main() {
    env_logger::init();

    let icons = vec![
        Some(Icon {
            glyph: '♫',
            color: Rgba::rgb(220, 120, 40),
        }),
        Some(Icon {
            glyph: '☼',
            color: Rgba::rgb(240, 200, 60),
        }),
        None,
        Some(Icon {
            glyph: '♥',
            color: Rgba::rgb(200, 50, 70),
        }),
    ];

    let config = match WindowConfig::new(
        "Responsive Window",
        vec!["Play".into(), "Settings".into(), "About".into()],
        vec!["Docs".into(), "Crates".into(), "Source".into()],
        vec![
            "https://docs.rs".into(),
            "https://crates.io".into(),
            "https://github.com".into(),
        ],
        icons,
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad window config: {err}");
            process::exit(1);
        }
    };

    let mut stage = Stage::new();
    build_window(&mut stage, &config, &Services::system());

    let mut app = match App::mount(stage) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("failed to mount: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = app.run() {
        eprintln!("event loop error: {err}");
    }
    if let Err(err) = app.unmount() {
        eprintln!("failed to restore terminal: {err}");
    }
}
