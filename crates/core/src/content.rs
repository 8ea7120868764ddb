use crate::types::{CollectibleKind, HazardKind};

pub const FLOOR_VARIANTS: u8 = 8;
pub const BOUNDARY_VARIANTS: u8 = 3;
pub const OBSTACLE_VARIANTS: u8 = 8;

pub const OBSTACLE_HIT_POINTS: i32 = 3;

pub const COLLECTIBLES: [CollectibleKind; 2] = [CollectibleKind::Food, CollectibleKind::Soda];
pub const HAZARDS: [HazardKind; 2] = [HazardKind::Stalker, HazardKind::Brute];

pub struct HazardStats {
    pub damage: i32,
}

pub fn hazard_stats(kind: HazardKind) -> HazardStats {
    match kind {
        HazardKind::Stalker => HazardStats { damage: 10 },
        HazardKind::Brute => HazardStats { damage: 20 },
    }
}

pub fn collectible_points(kind: CollectibleKind) -> i32 {
    match kind {
        CollectibleKind::Food => 10,
        CollectibleKind::Soda => 20,
    }
}

pub fn collectible_variant(kind: CollectibleKind) -> u8 {
    match kind {
        CollectibleKind::Food => 0,
        CollectibleKind::Soda => 1,
    }
}

pub fn hazard_variant(kind: HazardKind) -> u8 {
    match kind {
        HazardKind::Stalker => 0,
        HazardKind::Brute => 1,
    }
}
