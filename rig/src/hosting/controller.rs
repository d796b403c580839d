//! Hosting lifecycle controller
//!
//! Keeps one run state per process kind and drives the hosting service on
//! behalf of the developer. Every toggle is a full transition: the kind is
//! reset to [`RunState::None`] and marked pending, exactly one control call
//! is made, and the result (or the failure message) settles the state.
//!
//! A kind has at most one toggle in flight; a second request for the same
//! kind is rejected until the first settles. The two kinds never affect
//! each other.

use rig_core::ProcessKind;
use thiserror::Error;
use tokio::sync::watch;

use super::{HostingError, HostingService, RunState, resolve_frontend_port};
use crate::project::Project;

/// Run state of one process kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindState {
    pub run_state: RunState,
    /// A toggle for this kind is in flight.
    pub pending: bool,
}

/// Both kinds' state at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostingSnapshot {
    pub backend: KindState,
    pub frontend: KindState,
}

impl HostingSnapshot {
    pub fn get(&self, kind: ProcessKind) -> &KindState {
        match kind {
            ProcessKind::Backend => &self.backend,
            ProcessKind::Frontend => &self.frontend,
        }
    }

    fn get_mut(&mut self, kind: ProcessKind) -> &mut KindState {
        match kind {
            ProcessKind::Backend => &mut self.backend,
            ProcessKind::Frontend => &mut self.frontend,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Nothing is configured for the kind; no call was made.
    NotConfigured,
    /// The operation finished and the kind settled on this state.
    Settled(RunState),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("A {0} toggle is already in progress")]
    InProgress(ProcessKind),
}

pub struct LifecycleController<S> {
    services: S,
    state: watch::Sender<HostingSnapshot>,
}

impl<S> LifecycleController<S>
where
    S: HostingService,
{
    /// Create a controller for `project` and probe the current hosting status.
    ///
    /// The controller is only returned once the probe has settled, so a toggle
    /// can never act on the pre-probe state. A failed probe leaves both kinds
    /// at [`RunState::None`].
    pub async fn connect(services: S, project: &Project) -> Self {
        let controller = Self {
            services,
            state: watch::Sender::new(HostingSnapshot::default()),
        };
        controller.probe(project).await;
        controller
    }

    async fn probe(&self, project: &Project) {
        match self.services.fetch_hosting_status().await {
            Ok(status) => {
                tracing::debug!(
                    backend = status.backend_running,
                    frontend = status.frontend_running,
                    "hosting status probed"
                );
                self.state.send_modify(|snapshot| {
                    for kind in ProcessKind::ALL {
                        snapshot.get_mut(kind).run_state = RunState::from_probe(
                            project.is_configured(kind),
                            status.is_running(kind),
                        );
                    }
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "hosting status probe failed");
            }
        }
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    pub fn snapshot(&self) -> HostingSnapshot {
        self.state.borrow().clone()
    }

    pub fn run_state(&self, kind: ProcessKind) -> RunState {
        self.state.borrow().get(kind).run_state.clone()
    }

    /// Watch state transitions. The receiver sees every reset and settle.
    pub fn subscribe(&self) -> watch::Receiver<HostingSnapshot> {
        self.state.subscribe()
    }

    /// Start `kind` if it is not running, stop it if it is.
    ///
    /// Failures do not surface as `Err`: they settle the kind in
    /// [`RunState::Error`] with the failure's message. `Err` only means the
    /// request was refused because the kind is busy.
    pub async fn toggle(
        &self,
        kind: ProcessKind,
        project: &Project,
    ) -> Result<ToggleOutcome, ToggleError> {
        if !project.is_configured(kind) {
            tracing::debug!(kind = %kind, "toggle ignored, nothing configured");
            return Ok(ToggleOutcome::NotConfigured);
        }

        let mut busy = false;
        let mut was_running = false;
        self.state.send_if_modified(|snapshot| {
            let slot = snapshot.get_mut(kind);
            if slot.pending {
                busy = true;
                return false;
            }
            was_running = slot.run_state.is_running();
            slot.run_state = RunState::None;
            slot.pending = true;
            true
        });
        if busy {
            return Err(ToggleError::InProgress(kind));
        }

        let pending = PendingGuard::new(&self.state, kind);

        let next = match self.run_toggle(kind, was_running, project).await {
            Ok(next) => {
                tracing::info!(kind = %kind, state = %next, "hosting toggle settled");
                next
            }
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "hosting toggle failed");
                RunState::Error(e.to_string())
            }
        };

        pending.settle(next.clone());
        Ok(ToggleOutcome::Settled(next))
    }

    async fn run_toggle(
        &self,
        kind: ProcessKind,
        was_running: bool,
        project: &Project,
    ) -> Result<RunState, HostingError> {
        if was_running {
            let result = self.services.stop_hosting(kind).await?;
            if result.kind != kind {
                return Err(HostingError::MismatchedStop {
                    expected: kind,
                    got: result.kind,
                });
            }
            return Ok(RunState::from_label(&result.label));
        }

        match kind {
            ProcessKind::Backend => {
                self.services
                    .start_backend(&project.backend_command, &project.project_folder_path)
                    .await?;
                Ok(RunState::Running)
            }
            ProcessKind::Frontend => {
                let port = resolve_frontend_port(&project.manifest)?;
                self.services
                    .start_frontend(
                        &project.frontend_folder_name,
                        project.is_local,
                        port,
                        &project.project_folder_path,
                    )
                    .await?;
                Ok(RunState::Started)
            }
        }
    }
}

/// Clears the pending flag of a kind, also when the toggle future is dropped
/// before it settles. In that case the kind keeps its reset state.
struct PendingGuard<'a> {
    state: &'a watch::Sender<HostingSnapshot>,
    kind: ProcessKind,
    settled: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a watch::Sender<HostingSnapshot>, kind: ProcessKind) -> Self {
        Self {
            state,
            kind,
            settled: false,
        }
    }

    /// Publish the settled state and clear the flag in one update.
    fn settle(mut self, run_state: RunState) {
        self.state.send_modify(|snapshot| {
            let slot = snapshot.get_mut(self.kind);
            slot.run_state = run_state;
            slot.pending = false;
        });
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let kind = self.kind;
        self.state.send_modify(|snapshot| {
            snapshot.get_mut(kind).pending = false;
        });
    }
}
