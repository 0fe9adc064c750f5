//! CoalOS entry point.
//!
//! Loads `coalos.toml` (or `$COALOS_CONFIG`), wires the content store, audio
//! output and platform services into a session on the real terminal, and
//! runs it until logout or end of input.

use anyhow::{Context, Result};

use coal_audio::{Notifier, SilentNotifier};
use coal_content::{ContentProvider, DirContent, MemoryContent};
use coal_platform::{DesktopPlatform, ProcessLauncher};
use coal_terminal::{Session, SessionEnd, StdConsole};
use coal_types::config::CoalConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = CoalConfig::discover().context("loading configuration")?;
    log::info!(
        "Starting CoalOS (pacing x{}, policy {:?}, dispatch {:?})",
        config.pacing.scale,
        config.auth.policy,
        config.dispatch.mode,
    );

    let content: Box<dyn ContentProvider> = match &config.content.dir {
        Some(dir) => {
            log::info!("Content from {}", dir.display());
            Box::new(DirContent::new(dir).with_fallback(MemoryContent::builtin()))
        },
        None => Box::new(MemoryContent::builtin()),
    };

    let notifier = open_notifier(&config);

    let platform = DesktopPlatform::new();
    let launcher = ProcessLauncher;
    let mut console = StdConsole::stdio(config.pacing.scale);

    let end = Session::new(
        &mut console,
        content.as_ref(),
        notifier.as_ref(),
        &platform,
        &launcher,
    )
    .configure(&config)
    .run()?;

    match end {
        SessionEnd::Logout => log::info!("Session ended by logout"),
        SessionEnd::EndOfInput => log::info!("Session ended at end of input"),
    }
    Ok(())
}

#[cfg(feature = "audio")]
fn open_notifier(config: &CoalConfig) -> Box<dyn Notifier> {
    if !config.audio.enabled {
        return Box::new(SilentNotifier);
    }
    match coal_audio::RodioNotifier::open(&config.audio.sound_dir) {
        Ok(notifier) => Box::new(notifier),
        Err(e) => {
            log::warn!("Audio disabled: {e}");
            Box::new(SilentNotifier)
        },
    }
}

#[cfg(not(feature = "audio"))]
fn open_notifier(_config: &CoalConfig) -> Box<dyn Notifier> {
    log::info!("Built without audio");
    Box::new(SilentNotifier)
}
