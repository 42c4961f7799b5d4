//! Game mode selection.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Game mode: who sits across from the local player.
///
/// Selected explicitly by the caller and passed around as plain data.
/// The evaluator and selector never look at it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Local player against the heuristic selector.
    #[default]
    SinglePlayer,
    /// Two players sharing one device.
    LocalMultiplayer,
    /// Local player against someone in a remote room.
    OnlineMultiplayer,
}

/// Who supplies the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// A person at this device.
    Local,
    /// The heuristic move selector.
    Computer,
    /// A person in a remote room; moves arrive through synchronization.
    Remote,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &'static str {
        match self {
            GameMode::SinglePlayer => "Single player",
            GameMode::LocalMultiplayer => "Local multiplayer",
            GameMode::OnlineMultiplayer => "Online multiplayer",
        }
    }

    /// Who drives `player` when the local person plays `local`.
    pub fn controller(self, player: Player, local: Player) -> Controller {
        if player == local {
            return Controller::Local;
        }
        match self {
            GameMode::SinglePlayer => Controller::Computer,
            GameMode::LocalMultiplayer => Controller::Local,
            GameMode::OnlineMultiplayer => Controller::Remote,
        }
    }
}
