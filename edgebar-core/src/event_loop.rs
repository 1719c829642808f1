use crate::config::Settings;
use crate::errors::Result;
use crate::models::Handle;
use crate::{DisplayServer, Panel};
use tokio::signal::unix::{signal, SignalKind};
use tokio::time::Instant;

impl<H, S, SERVER> Panel<H, S, SERVER>
where
    H: Handle,
    S: Settings,
    SERVER: DisplayServer<H>,
{
    /// Show the panel and process events until asked to quit or the process
    /// is told to terminate. A pending settings write is flushed on the way
    /// out.
    ///
    /// # Errors
    /// Fails when the termination signal handler can't be installed.
    pub async fn start_event_loop(mut self) -> Result<()> {
        self.run().await
    }

    pub(crate) async fn run(&mut self) -> Result<()> {
        let mut terminate = signal(SignalKind::terminate())?;
        let mut interrupt = signal(SignalKind::interrupt())?;

        self.show();

        //main event loop
        let mut event_buffer = vec![];
        loop {
            //preform any actions requested by the handlers
            self.execute_actions(&mut event_buffer);
            self.display_server.flush();

            let mut needs_realign = false;
            let save_deadline = self.delayed_save.deadline();
            tokio::select! {
                () = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                () = sleep_until(save_deadline), if event_buffer.is_empty() && save_deadline.is_some() => {
                    if self.delayed_save.take_if_due(Instant::now()) {
                        self.save_settings(false);
                    }
                }
                _ = terminate.recv(), if event_buffer.is_empty() => {
                    tracing::info!("Received SIGTERM, shutting down");
                    self.quit();
                }
                _ = interrupt.recv(), if event_buffer.is_empty() => {
                    tracing::info!("Received SIGINT, shutting down");
                    self.quit();
                }
                else => {
                    event_buffer
                        .drain(..)
                        .for_each(|event| needs_realign = self.display_event_handler(event) || needs_realign);
                }
            }

            if needs_realign {
                self.realign();
            }

            if self.exit_requested {
                break;
            }
        }

        if self.delayed_save.is_pending() {
            self.save_settings(false);
        }
        self.hide();
        self.execute_actions(&mut event_buffer);
        self.display_server.flush();
        Ok(())
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => futures::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::tests::TestSettings;
    use crate::panel::tests::TestPanel;

    #[tokio::test(start_paused = true)]
    async fn pending_save_is_flushed_when_the_loop_stops() {
        let mut panel = TestPanel::new_test(TestSettings::default());
        panel.save_settings(true);
        panel.quit();
        // The loop shows the panel, sees the exit request after the first
        // timer tick and writes the pending settings.
        assert!(panel.run().await.is_ok());
        assert_eq!(panel.settings.syncs, 1);
        assert!(!panel.is_visible());
    }
}
