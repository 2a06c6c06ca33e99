//! Line commands accepted by the driver.
//!
//! Each input line is either a short command (`select h`, `react`, `buy
//! energy_pack`) or a raw JSON [`Intent`] as the browser would send it.

use alchemy_types::{ElementId, Intent, ShopItemId};

use crate::error::EngineError;

/// Usage lines printed by `help`.
pub const HELP: [&str; 12] = [
    "select <element>   put an owned element into the furnace",
    "remove <slot>      take the element out of slot <slot> (0-based)",
    "clear              empty the furnace",
    "react              start a reaction",
    "buy <item>         buy a shop item",
    "catalyst           cycle the active catalyst",
    "accessory          cycle the equipped accessory",
    "wait               wait for the running reaction and apply it",
    "state              print the game state",
    "shop               print the shop listing",
    "help               print this help",
    "quit               cancel any running reaction and exit",
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit an intent to the session.
    Intent(Intent),
    /// Block until the running reaction settles.
    Wait,
    /// Print the current state.
    State,
    /// Print the shop listing.
    Shop,
    /// Print usage.
    Help,
    /// Exit the loop.
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, EngineError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        if line.starts_with('{') {
            return serde_json::from_str::<Intent>(line)
                .map(|intent| Some(Self::Intent(intent)))
                .map_err(|e| EngineError::Command {
                    message: format!("invalid intent JSON: {e}"),
                });
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(EngineError::Command {
                message: format!("unexpected argument `{extra}`"),
            });
        }

        let command = match verb.as_str() {
            "select" | "s" => Self::Intent(Intent::SelectInput {
                element: ElementId::new(required(&verb, arg)?),
            }),
            "remove" | "rm" => {
                let slot = required(&verb, arg)?;
                Self::Intent(Intent::RemoveInput {
                    slot: slot.parse().map_err(|e| EngineError::Command {
                        message: format!("invalid slot `{slot}`: {e}"),
                    })?,
                })
            }
            "clear" => Self::Intent(Intent::ClearInputs),
            "react" | "r" => Self::Intent(Intent::React),
            "buy" => Self::Intent(Intent::Purchase {
                item: ShopItemId::new(required(&verb, arg)?),
            }),
            "catalyst" => Self::Intent(Intent::ToggleCatalyst),
            "accessory" => Self::Intent(Intent::ToggleAccessory),
            "wait" => Self::Wait,
            "state" => Self::State,
            "shop" => Self::Shop,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(EngineError::Command {
                    message: format!("unknown command `{other}` (try `help`)"),
                });
            }
        };
        Ok(Some(command))
    }
}

fn required<'a>(verb: &str, arg: Option<&'a str>) -> Result<&'a str, EngineError> {
    arg.ok_or_else(|| EngineError::Command {
        message: format!("`{verb}` needs an argument"),
    })
}
