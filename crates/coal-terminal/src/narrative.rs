//! Narrative sequencer.
//!
//! Plays a `Script` beat by beat. Once started a narrative always runs to
//! the end: a missing text resource is logged and skipped. Only a failing
//! console stops it.

use std::time::Duration;

use coal_audio::Notifier;
use coal_content::ContentProvider;
use coal_types::error::Result;

use crate::console::Console;
use crate::pacer::ProgressBar;
use crate::script::{Beat, Script};

/// Values substituted into a script's text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrativeContext {
    /// Address under attack.
    pub ip: String,
    /// MAC address or ESSID, depending on the tool.
    pub target: String,
    /// Secret revealed at the end, if any.
    pub secret: Option<String>,
}

impl NarrativeContext {
    pub fn new(ip: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            target: target.into(),
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Fill `{ip}`, `{target}` and `{secret}` in `template`.
    pub fn interpolate(&self, template: &str) -> String {
        template
            .replace("{ip}", &self.ip)
            .replace("{target}", &self.target)
            .replace("{secret}", self.secret.as_deref().unwrap_or(""))
    }
}

/// Borrowed services a narrative plays through.
pub struct Sequencer<'a> {
    console: &'a mut dyn Console,
    content: &'a dyn ContentProvider,
    notifier: &'a dyn Notifier,
}

impl<'a> Sequencer<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        content: &'a dyn ContentProvider,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            console,
            content,
            notifier,
        }
    }

    /// Play every beat of `script`, then its reveal line when `ctx` holds a
    /// secret.
    pub fn run(&mut self, script: &Script, ctx: &NarrativeContext) -> Result<()> {
        log::debug!("narrative '{}' started", script.name);
        play(&mut *self.console, self.content, self.notifier, script.beats, ctx)?;
        if let Some(reveal) = script.reveal
            && ctx.secret.is_some()
        {
            self.console.write_line("")?;
            self.console.write_line(&ctx.interpolate(reveal))?;
            self.console.write_line("")?;
        }
        log::debug!("narrative '{}' finished", script.name);
        Ok(())
    }
}

fn play(
    console: &mut dyn Console,
    content: &dyn ContentProvider,
    notifier: &dyn Notifier,
    beats: &[Beat],
    ctx: &NarrativeContext,
) -> Result<()> {
    for beat in beats {
        match *beat {
            Beat::Say(text) => console.write_line(&ctx.interpolate(text))?,
            Beat::Blank => console.write_line("")?,
            Beat::Pause(ms) => console.pause(Duration::from_millis(ms)),
            Beat::Clear => console.clear()?,
            Beat::Render(key) => match content.load(key) {
                Ok(text) => {
                    for line in text.lines() {
                        console.write_line(line)?;
                    }
                },
                Err(e) => log::warn!("Skipping {key}: {e}"),
            },
            Beat::Cue(cue, playback) => notifier.notify(cue, playback),
            Beat::Seq(beats) => play(console, content, notifier, beats, ctx)?,
            Beat::Repeat { times, beats } => {
                for _ in 0..times {
                    play(console, content, notifier, beats, ctx)?;
                }
            },
            Beat::Progress {
                label,
                width,
                steps,
                step_ms,
                redraw,
            } => {
                let bar = ProgressBar::new(label, width, steps);
                bar.drive(console, |console, _| {
                    console.pause(Duration::from_millis(step_ms));
                    play(console, content, notifier, redraw, ctx)
                })?;
            },
        }
    }
    Ok(())
}
