/// Per-battle counters, cleared on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    /// Sequence number of the battle (1-based, 0 when idle).
    pub battle: u64,
    pub rounds: u32,
    pub attacks_landed: u32,
    /// Attacks cancelled because attacker or target left the roster first.
    pub stale_attacks: u32,
    pub revivals: u32,
    pub eliminations: u32,
}

impl BattleStats {
    pub fn new(battle: u64) -> Self {
        Self {
            battle,
            ..Self::default()
        }
    }
}
