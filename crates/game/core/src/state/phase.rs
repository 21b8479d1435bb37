/// Round scheduler state machine.
///
/// `Idle → RoundInProgress → RoundComplete → (RoundInProgress | Terminal)`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SchedulerPhase {
    #[default]
    Idle,
    RoundInProgress { round: u32 },
    RoundComplete { round: u32 },
    Terminal,
}

impl SchedulerPhase {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether `next` is a legal successor of this phase.
    pub fn can_advance_to(&self, next: SchedulerPhase) -> bool {
        use SchedulerPhase::*;
        match (*self, next) {
            (Idle, RoundInProgress { round }) => round == 1,
            (Idle, Terminal) => true,
            (RoundInProgress { round: a }, RoundComplete { round: b }) => a == b,
            (RoundComplete { round: a }, RoundInProgress { round: b }) => b == a + 1,
            (RoundComplete { .. }, Terminal) => true,
            _ => false,
        }
    }

    /// Number of the round in flight or last completed.
    pub fn round(&self) -> Option<u32> {
        match self {
            Self::RoundInProgress { round } | Self::RoundComplete { round } => Some(*round),
            Self::Idle | Self::Terminal => None,
        }
    }
}
