use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(pub u8);

impl BlockId {
    pub const STONE: Self = Self(1);
    pub const GRASS: Self = Self(2);
    pub const DIRT: Self = Self(3);
    pub const COBBLESTONE: Self = Self(4);
    pub const WOOD: Self = Self(5);
    pub const SAPLING: Self = Self(6);
    pub const SAND: Self = Self(12);
    pub const LOG: Self = Self(17);
    pub const LEAVES: Self = Self(18);
    pub const BRICK: Self = Self(45);

    /// The default hotbar of a fresh session.
    pub const DEFAULT_HOTBAR: [Self; 9] = [
        Self::STONE,
        Self::COBBLESTONE,
        Self::BRICK,
        Self::DIRT,
        Self::WOOD,
        Self::LOG,
        Self::LEAVES,
        Self::GRASS,
        Self::SAND,
    ];
}
