//! Event loop tying stdin, the battle screen and the text renderer together.
use std::io::{self, BufRead, Stderr, Stdout, Write};
use std::thread;

use anyhow::{Context, Result};
use async_trait::async_trait;
use client_frontend_core::{BattleScreen, Frontend, FrontendConfig, QuitOutcome};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::bridge::StdioBridge;
use crate::config::CliConfig;
use crate::input::{Gesture, HostLine, parse_line};
use crate::render::TextRenderer;

/// Lines buffered between the reader thread and the event loop.
const LINE_BUFFER: usize = 64;

/// Stdio host adapter.
///
/// Host input is read on a dedicated thread and forwarded over a channel, so
/// the event loop never owns a pending blocking read. Pushes and gestures
/// reach one [`BattleScreen`] in arrival order. The loop ends on end of
/// input, Ctrl-C, or when the host closes the screen.
pub struct CliFrontend<O, E> {
    lines: mpsc::Receiver<io::Result<String>>,
    screen: BattleScreen<StdioBridge<O>, TextRenderer<E>>,
}

impl CliFrontend<Stdout, Stderr> {
    /// Adapter bound to the process stdin, stdout and stderr.
    pub fn stdio(frontend_config: FrontendConfig, cli_config: &CliConfig) -> Result<Self> {
        Self::new(
            io::BufReader::new(io::stdin()),
            io::stdout(),
            io::stderr(),
            frontend_config,
            cli_config,
        )
    }
}

impl<O, E> CliFrontend<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    pub fn new<I>(
        input: I,
        output: O,
        view_output: E,
        frontend_config: FrontendConfig,
        cli_config: &CliConfig,
    ) -> Result<Self>
    where
        I: BufRead + Send + 'static,
    {
        let lines = spawn_line_reader(input)?;
        let bridge = StdioBridge::new(output, cli_config.host.supports_close);
        let renderer = TextRenderer::new(view_output);
        Ok(Self {
            lines,
            screen: BattleScreen::new(frontend_config, bridge, renderer),
        })
    }

    pub fn screen(&self) -> &BattleScreen<StdioBridge<O>, TextRenderer<E>> {
        &self.screen
    }

    /// Handles one input line. Returns false once the session should end.
    pub fn handle_line(&mut self, line: &str) -> bool {
        match parse_line(line) {
            Ok(HostLine::Blank) => {}
            Ok(HostLine::Push(value)) => {
                let outcome = self.screen.push(&value);
                debug!(scope = ?outcome.scope, refresh = outcome.refresh, "push handled");
            }
            Ok(HostLine::Gesture(gesture)) => self.handle_gesture(gesture),
            Err(error) => warn!(%error, line, "ignoring input line"),
        }

        !self.screen.bridge().is_closed()
    }

    fn handle_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::HeroPanel => {
                self.screen.tap_hero_panel();
            }
            Gesture::Next => {
                self.screen.navigate(1);
            }
            Gesture::Prev => {
                self.screen.navigate(-1);
            }
            Gesture::Swipe { start_x, end_x } => {
                self.screen.swipe(start_x, end_x);
            }
            Gesture::Tap(unit_id) => {
                self.screen.tap_enemy(&unit_id);
            }
            Gesture::Quit => match self.screen.quit() {
                QuitOutcome::Locked => debug!("quit already pending"),
                QuitOutcome::Failed => warn!("quit failed, try again"),
                outcome => info!(?outcome, "quit requested"),
            },
        }
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                line = self.lines.recv() => {
                    let Some(line) = line else {
                        info!("host input closed");
                        break;
                    };
                    let line = line.context("Failed to read host input")?;
                    if !self.handle_line(&line) {
                        info!("screen closed by host");
                        break;
                    }
                }
                signal = tokio::signal::ctrl_c() => {
                    signal.context("Failed to listen for Ctrl-C")?;
                    info!("interrupted");
                    break;
                }
            }
        }

        Ok(())
    }
}

/// Forwards `input` line by line from a detached thread.
///
/// The thread stops after the first read error, at end of input, or once the
/// receiver is gone. A read still blocked when the loop exits does not hold
/// up shutdown.
fn spawn_line_reader<I>(input: I) -> Result<mpsc::Receiver<io::Result<String>>>
where
    I: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    thread::Builder::new()
        .name("host-input".into())
        .spawn(move || {
            for line in input.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        })
        .context("Failed to spawn host input reader")?;
    Ok(rx)
}

#[async_trait]
impl<O, E> Frontend for CliFrontend<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    async fn run(&mut self) -> Result<()> {
        info!("battle screen starting");
        self.event_loop().await?;
        info!("battle screen exiting");
        Ok(())
    }
}
