//! Glue code tying the roster, the selection machine and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{FrontendApp, FrontendConfig, Notice, NoticeConsumer, NoticeLog};
use select_core::{Changes, Roster, SelectionMachine, SelectionState};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend for one select-screen session.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    roster: Roster,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig, roster: Roster) -> Self {
        Self {
            frontend_config,
            cli_config,
            roster,
        }
    }

    pub async fn execute(self) -> Result<()> {
        let CliFrontend {
            frontend_config,
            cli_config,
            roster,
        } = self;

        tracing::info!(
            "CLI client starting: {} fighters, {} columns, {:?} policy",
            roster.len(),
            frontend_config.selection.columns,
            frontend_config.selection.policy
        );

        let mut machine = SelectionMachine::for_roster(&roster, frontend_config.selection.into())?;
        machine.subscribe(|state: &SelectionState, changes: Changes| {
            tracing::debug!(
                highlighted = state.highlighted,
                selected = state.selected,
                confirmed = state.confirmed,
                "Selection changed: {:?}",
                changes
            );
        });

        let mut notices = NoticeLog::new(frontend_config.notices.capacity);
        notices.push(Notice::info(
            "Choose your fighter",
            "Move with the arrows, pick with Enter, confirm with C.",
        ));

        let event_loop = EventLoop::new(
            roster,
            machine,
            NoticeConsumer::new(notices),
            frontend_config.confirm.delay,
            cli_config,
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!(
            "CLI client exiting with {} notices",
            consumer.into_notices().len()
        );

        Ok(())
    }
}

#[async_trait]
impl FrontendApp for CliFrontend {
    async fn run(self) -> Result<()> {
        self.execute().await
    }
}
