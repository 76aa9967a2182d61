//! Header Session Demo
//!
//! Replays a short scroll session against a collapsing header and a
//! show/hide-on-scroll toolbar:
//! - Content frame positions flow through `ContentGeometry` into the header
//! - A tokio settle loop snaps the header once scrolling pauses
//! - Pan velocities toggle the toolbar
//!
//! Run with: RUST_LOG=scrollplus=debug cargo run -p scrollplus --example header_session

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use scrollplus::prelude::*;
use scrollplus::SettleDriver;
use tracing_subscriber::EnvFilter;

const CONTENT_HEIGHT: f32 = 2400.0;
const VIEWPORT_HEIGHT: f32 = 800.0;
const SAFE_TOP: f32 = 44.0;
const FRAME: Duration = Duration::from_millis(16);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ScrollPlusConfig::from_toml_str(
        r#"
        [header]
        settle_delay_ms = 200

        [visibility]
        hide_velocity = 300.0
        show_velocity = 200.0
        "#,
    )?;

    let mut header = HeaderScrollController::with_config(config.header.clone())?;
    let mut header_geometry = HeaderGeometry::new();
    if let Some(height) = header_geometry.measure(56.0, SAFE_TOP) {
        header.on_header_height_measured(height);
    }
    header.on_change(|state| {
        tracing::debug!(
            "header offset {:.1}, opacity {:.2}, {:?}",
            state.header_offset,
            state.opacity,
            state.phase
        );
    });

    let controller = Arc::new(Mutex::new(header));
    let (handle, driver) = SettleDriver::new(controller.clone());
    let settle_loop = tokio::spawn(driver.run());

    let mut toolbar = VisibilityState::new(
        VisibilityVelocityController::from_config(&config.visibility)?,
        Visibility::Visible,
    );
    toolbar.on_change(|visibility| tracing::info!("toolbar now {:?}", visibility));

    // Flick down the list, drift back up a little, then rest
    let mut geometry = ContentGeometry::new();
    let mut last_raw = 0.0;
    let frames = (0..=30)
        .map(|i| -(i as f32) * 12.0)
        .chain((1..=8).map(|i| -360.0 + i as f32 * 20.0));

    for min_y in frames {
        let change = geometry.update(min_y, CONTENT_HEIGHT, VIEWPORT_HEIGHT);
        if let Some((old, new)) = change.clamped {
            let mut header = controller
                .lock()
                .map_err(|_| anyhow::anyhow!("header controller poisoned"))?;
            header.on_scroll(old, new, SAFE_TOP);
        }
        if let Some(raw) = change.raw {
            handle.feed(raw);
            // Content moving up means the finger pans up (negative velocity)
            let pan_velocity = -(raw - last_raw) / FRAME.as_secs_f32();
            toolbar.on_velocity_sample(pan_velocity);
            last_raw = raw;
        }
        tokio::time::sleep(FRAME).await;
    }

    {
        let header = controller
            .lock()
            .map_err(|_| anyhow::anyhow!("header controller poisoned"))?;
        tracing::info!(
            "scrolling paused with header offset {:.1} of {:.1}",
            header.header_offset(),
            header.header_height()
        );
    }

    // Let the settle loop fire, then run the snap animation
    tokio::time::sleep(Duration::from_millis(300)).await;
    loop {
        let animating = {
            let mut header = controller
                .lock()
                .map_err(|_| anyhow::anyhow!("header controller poisoned"))?;
            header.tick(FRAME.as_secs_f32())
        };
        if !animating {
            break;
        }
        tokio::time::sleep(FRAME).await;
    }

    {
        let header = controller
            .lock()
            .map_err(|_| anyhow::anyhow!("header controller poisoned"))?;
        tracing::info!(
            "settled {} time(s): header offset {:.1}, presented {:.1}, opacity {:.2}",
            handle.settle_count(),
            header.header_offset(),
            header.presented_offset(),
            header.opacity()
        );
    }
    tracing::info!("toolbar ended {:?}", toolbar.visibility());

    drop(handle);
    settle_loop.await?;
    Ok(())
}
