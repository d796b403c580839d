use rig_core::ProcessKind;

/// Status of one hosted process as shown to the developer.
///
/// Besides the known labels it can carry an arbitrary message, which is how
/// failed operations and unrecognized service labels are displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RunState {
    /// Nothing to show: not configured, not probed yet, or an operation is pending.
    #[default]
    None,
    NotRunning,
    Started,
    Running,
    Exited,
    Error(String),
}

impl RunState {
    pub fn label(&self) -> &str {
        match self {
            RunState::None => "",
            RunState::NotRunning => "not running",
            RunState::Started => "started",
            RunState::Running => "running",
            RunState::Exited => "exited",
            RunState::Error(message) => message,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "" => RunState::None,
            "not running" => RunState::NotRunning,
            "started" => RunState::Started,
            "running" => RunState::Running,
            "exited" => RunState::Exited,
            other => RunState::Error(other.to_string()),
        }
    }

    /// State after the initial status probe. An unconfigured process is
    /// inapplicable rather than "not running".
    pub fn from_probe(configured: bool, running: bool) -> Self {
        match (configured, running) {
            (false, _) => RunState::None,
            (true, true) => RunState::Running,
            (true, false) => RunState::NotRunning,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Started | RunState::Running)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RunState::Error(_))
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Verb for the action a toggle of `kind` would perform from `state`.
pub fn toggle_label(kind: ProcessKind, state: &RunState) -> &'static str {
    match (kind, state.is_running()) {
        (ProcessKind::Frontend, true) => "Stop Hosting",
        (ProcessKind::Frontend, false) => "Host with Rig",
        (ProcessKind::Backend, true) => "Deactivate",
        (ProcessKind::Backend, false) => "Activate",
    }
}
