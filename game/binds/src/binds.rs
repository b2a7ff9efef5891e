use anyhow::anyhow;
use game_config::config::ConfigHudBinds;
pub use input_binds::binds::{BindKey, Binds, KeyCode, MouseButton, PhysicalKey};

pub const HOTBAR_SLOT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BindActionsHud {
    ShowPlayerList,
    ActivateChatInput,
    ActivateCommandInput,
    SelectSlot(u8),
}

pub fn bind_keys_str_to_bind_keys(bind_keys_str: &str) -> anyhow::Result<Vec<BindKey>> {
    let mut bind_keys: Vec<BindKey> = Vec::new();
    for bind_key_str in bind_keys_str.split('+') {
        let mut cap_bind_key_str = bind_key_str.trim().to_string();
        cap_bind_key_str.make_ascii_lowercase();
        cap_bind_key_str = {
            let str_len = cap_bind_key_str.chars().count();
            let mut last_was_upper = false;
            let mut res: Vec<_> = cap_bind_key_str
                .chars()
                .enumerate()
                .collect::<Vec<(usize, char)>>()
                .windows(2)
                .flat_map(|arg| {
                    let [(_, c1), (c2_index, c2)] = [arg[0], arg[1]];
                    if last_was_upper {
                        last_was_upper = false;
                        if str_len - 1 == c2_index {
                            vec![c2]
                        } else {
                            vec![]
                        }
                    } else if c1 == '_' {
                        last_was_upper = true;
                        vec![c2.to_ascii_uppercase()]
                    } else if str_len - 1 == c2_index {
                        vec![c1, c2]
                    } else {
                        vec![c1]
                    }
                })
                .collect();
            if res.is_empty() {
                cap_bind_key_str.to_ascii_uppercase()
            } else {
                res[0] = res[0].to_ascii_uppercase();
                res.into_iter().collect()
            }
        };
        let bind_key_str = format!("\"{cap_bind_key_str}\"");
        if let Ok(key_code) = serde_json::from_str::<KeyCode>(&bind_key_str) {
            bind_keys.push(BindKey::Key(PhysicalKey::Code(key_code)));
        } else if let Ok(key_code) = serde_json::from_str::<_>(&bind_key_str) {
            bind_keys.push(BindKey::Mouse(key_code));
        } else if let Ok(key_code) = serde_json::from_str::<_>(&bind_key_str) {
            bind_keys.push(BindKey::Extra(key_code));
        } else if let Ok(key_code) =
            serde_json::from_str::<KeyCode>(&format!("\"Key{cap_bind_key_str}\""))
        {
            bind_keys.push(BindKey::Key(PhysicalKey::Code(key_code)));
        } else if let Ok(key_code) =
            serde_json::from_str::<KeyCode>(&format!("\"Digit{cap_bind_key_str}\""))
        {
            bind_keys.push(BindKey::Key(PhysicalKey::Code(key_code)));
        } else {
            log::info!(target: "binds", "ignored unknown key \"{bind_key_str}\" in {bind_keys_str}");
        }
    }
    anyhow::ensure!(
        !bind_keys.is_empty(),
        "no keys in bind found: {bind_keys_str}"
    );
    Ok(bind_keys)
}

pub fn bind_keys_to_str(bind_keys: &[BindKey]) -> String {
    fn replace_inner_upper_with_underscore(s: &str) -> String {
        s.chars()
            .enumerate()
            .flat_map(|(index, c)| {
                if index != 0 && c.is_ascii_uppercase() {
                    vec!['_', c]
                } else {
                    vec![c]
                }
            })
            .collect()
    }
    fn to_json_name(val: &impl serde::Serialize) -> String {
        serde_json::to_string(val)
            .unwrap_or_default()
            .replace('"', "")
    }

    bind_keys
        .iter()
        .filter_map(|bind_key| match bind_key {
            BindKey::Key(PhysicalKey::Code(key)) => {
                let name = to_json_name(key);
                let name = name
                    .strip_prefix("Key")
                    .or_else(|| name.strip_prefix("Digit"))
                    .unwrap_or(&name);
                Some(replace_inner_upper_with_underscore(name).to_lowercase())
            }
            // ignore
            BindKey::Key(PhysicalKey::Unidentified(_)) => None,
            BindKey::Mouse(btn) => {
                Some(replace_inner_upper_with_underscore(&to_json_name(btn)).to_lowercase())
            }
            BindKey::Extra(ext) => {
                Some(replace_inner_upper_with_underscore(&to_json_name(ext)).to_lowercase())
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

/// A bind's key chain, e.g. `control_left+t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChain {
    keys: Vec<BindKey>,
}

impl KeyChain {
    pub fn new(keys: Vec<BindKey>) -> Self {
        Self { keys }
    }

    pub fn parse(bind_keys_str: &str) -> anyhow::Result<Self> {
        Ok(Self::new(bind_keys_str_to_bind_keys(bind_keys_str)?))
    }

    pub fn keys(&self) -> &[BindKey] {
        &self.keys
    }
}

impl std::fmt::Display for KeyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", bind_keys_to_str(&self.keys))
    }
}

/// The resolved key chains of all HUD binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudKeyMapping {
    pub player_list: KeyChain,
    pub chat: KeyChain,
    pub command: KeyChain,
}

impl HudKeyMapping {
    pub fn from_config(binds: &ConfigHudBinds) -> anyhow::Result<Self> {
        let parse = |name: &str, keys: &str| {
            KeyChain::parse(keys).map_err(|err| anyhow!("bind {name} is invalid: {err}"))
        };
        Ok(Self {
            player_list: parse("player_list", &binds.player_list)?,
            chat: parse("chat", &binds.chat)?,
            command: parse("command", &binds.command)?,
        })
    }

    /// Registers all HUD actions, including the fixed hotbar slot keys.
    pub fn register_binds(&self, binds: &mut Binds<BindActionsHud>) {
        binds.register_bind(self.player_list.keys(), BindActionsHud::ShowPlayerList);
        binds.register_bind(self.chat.keys(), BindActionsHud::ActivateChatInput);
        binds.register_bind(self.command.keys(), BindActionsHud::ActivateCommandInput);
        for (slot, code) in HOTBAR_SLOT_KEYS.into_iter().enumerate() {
            binds.register_bind(&[code.into()], BindActionsHud::SelectSlot(slot as u8));
        }
    }
}

impl Default for HudKeyMapping {
    fn default() -> Self {
        Self {
            player_list: KeyChain::new(vec![KeyCode::Tab.into()]),
            chat: KeyChain::new(vec![KeyCode::KeyT.into()]),
            command: KeyChain::new(vec![KeyCode::Slash.into()]),
        }
    }
}
