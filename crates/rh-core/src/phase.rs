//! The four transitions of a train's operating cycle.

/// Which life-cycle transition an event triggers when it fires.
///
/// The cycle is closed: every variant hands over to [`PhaseKind::next`] and
/// trains never leave it until the horizon cuts the run off.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseKind {
    /// Empty travel from a port to a terminal has completed.
    ArrivedAtTerminal,
    /// Loading at the terminal has completed.
    FinishedLoading,
    /// Loaded travel from a terminal to a port has completed.
    ArrivedAtPort,
    /// Unloading at the port has completed; one cycle is delivered.
    FinishedUnloading,
}

impl PhaseKind {
    /// All phases in cycle order.
    pub const ALL: [PhaseKind; 4] = [
        PhaseKind::ArrivedAtTerminal,
        PhaseKind::FinishedLoading,
        PhaseKind::ArrivedAtPort,
        PhaseKind::FinishedUnloading,
    ];

    /// The transition that the handler for `self` schedules.
    #[inline]
    pub fn next(self) -> PhaseKind {
        match self {
            PhaseKind::ArrivedAtTerminal => PhaseKind::FinishedLoading,
            PhaseKind::FinishedLoading   => PhaseKind::ArrivedAtPort,
            PhaseKind::ArrivedAtPort     => PhaseKind::FinishedUnloading,
            PhaseKind::FinishedUnloading => PhaseKind::ArrivedAtTerminal,
        }
    }

    /// Position in [`PhaseKind::ALL`], useful for per-phase counters.
    #[inline]
    pub fn ordinal(self) -> usize {
        match self {
            PhaseKind::ArrivedAtTerminal => 0,
            PhaseKind::FinishedLoading   => 1,
            PhaseKind::ArrivedAtPort     => 2,
            PhaseKind::FinishedUnloading => 3,
        }
    }

    /// Human-readable label, useful for CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseKind::ArrivedAtTerminal => "arrived_at_terminal",
            PhaseKind::FinishedLoading   => "finished_loading",
            PhaseKind::ArrivedAtPort     => "arrived_at_port",
            PhaseKind::FinishedUnloading => "finished_unloading",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
