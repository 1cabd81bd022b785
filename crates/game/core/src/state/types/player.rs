use super::Position;

/// Consumable tool counts carried by the player. Never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub hammers: u32,
    pub swords: u32,
}

impl Inventory {
    pub fn new(hammers: u32, swords: u32) -> Self {
        Self { hammers, swords }
    }
}

/// Initial per-attempt player resources, as loaded with the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSetup {
    pub moves: i32,
    pub health: i32,
    pub inventory: Inventory,
}

/// Mutable player state for one level attempt.
///
/// Resource counters are only mutated through the methods here, which keep
/// the invariants: moves/health clamp at zero, inventory never underflows,
/// and `gems_remaining + gems_collected` stays constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    inventory: Inventory,
    moves_remaining: i32,
    health_remaining: i32,
    gems_remaining: u32,
    gems_collected: u32,
    items_found: u32,
    enemies_killed: u32,
}

impl PlayerState {
    pub fn new(position: Position, setup: PlayerSetup, gems_total: u32) -> Self {
        Self {
            position,
            inventory: setup.inventory,
            moves_remaining: setup.moves.max(0),
            health_remaining: setup.health.max(0),
            gems_remaining: gems_total,
            gems_collected: 0,
            items_found: 0,
            enemies_killed: 0,
        }
    }

    pub fn inventory(&self) -> Inventory {
        self.inventory
    }

    pub fn moves_remaining(&self) -> i32 {
        self.moves_remaining
    }

    pub fn health_remaining(&self) -> i32 {
        self.health_remaining
    }

    pub fn gems_remaining(&self) -> u32 {
        self.gems_remaining
    }

    pub fn gems_collected(&self) -> u32 {
        self.gems_collected
    }

    pub fn items_found(&self) -> u32 {
        self.items_found
    }

    pub fn enemies_killed(&self) -> u32 {
        self.enemies_killed
    }

    /// Deducts `cost` moves, clamping at zero.
    pub fn spend_moves(&mut self, cost: i32) {
        debug_assert!(cost >= 0);
        self.moves_remaining = (self.moves_remaining - cost).max(0);
    }

    /// Deducts `amount` health, clamping at zero.
    pub fn lose_health(&mut self, amount: i32) {
        debug_assert!(amount >= 0);
        self.health_remaining = (self.health_remaining - amount).max(0);
    }

    /// Instant-death terrain zeroes health regardless of the current value.
    pub fn kill(&mut self) {
        self.health_remaining = 0;
    }

    pub fn gain_health(&mut self, amount: i32) {
        debug_assert!(amount >= 0);
        self.health_remaining += amount;
    }

    /// Moves one gem from remaining to collected.
    pub fn collect_gem(&mut self) {
        debug_assert!(self.gems_remaining > 0);
        self.gems_remaining = self.gems_remaining.saturating_sub(1);
        self.gems_collected += 1;
    }

    pub fn add_hammer(&mut self) {
        self.inventory.hammers += 1;
    }

    pub fn add_sword(&mut self) {
        self.inventory.swords += 1;
    }

    /// Consumes one hammer. Callers gate on `inventory().hammers > 0`.
    pub fn use_hammer(&mut self) {
        debug_assert!(self.inventory.hammers > 0);
        self.inventory.hammers = self.inventory.hammers.saturating_sub(1);
    }

    /// Consumes one sword. Callers gate on `inventory().swords > 0`.
    pub fn use_sword(&mut self) {
        debug_assert!(self.inventory.swords > 0);
        self.inventory.swords = self.inventory.swords.saturating_sub(1);
        self.enemies_killed += 1;
    }

    pub fn record_item_found(&mut self) {
        self.items_found += 1;
    }

    pub fn is_out_of_moves(&self) -> bool {
        self.moves_remaining <= 0
    }

    pub fn is_dead(&self) -> bool {
        self.health_remaining <= 0
    }
}
