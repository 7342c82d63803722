//! Key mapping from key codes to game commands.
//!
//! [`KeyMap`] is generic over the host's key type so the same table works for
//! crossterm [`KeyCode`]s and for hosts that report numeric key codes.

use std::collections::HashMap;
use std::hash::Hash;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::bindings::KeyBindings;
use crate::types::Command;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown key name {0:?}")]
    UnknownKey(String),
    #[error("key {key:?} is bound to both {first} and {second}")]
    Conflict {
        key: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Lookup table from host keys to commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap<K: Eq + Hash> {
    bindings: HashMap<K, Command>,
}

impl<K: Eq + Hash> KeyMap<K> {
    /// Empty map
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key`, returning the command it was previously bound to.
    pub fn bind(&mut self, key: K, command: Command) -> Option<Command> {
        self.bindings.insert(key, command)
    }

    pub fn with(mut self, key: K, command: Command) -> Self {
        self.bind(key, command);
        self
    }

    pub fn unbind(&mut self, key: &K) -> Option<Command> {
        self.bindings.remove(key)
    }

    pub fn command_for(&self, key: &K) -> Option<Command> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Eq + Hash> Default for KeyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Browser `keyCode` values for the arrow keys.
pub const KEY_CODE_LEFT: u32 = 37;
pub const KEY_CODE_UP: u32 = 38;
pub const KEY_CODE_RIGHT: u32 = 39;
pub const KEY_CODE_DOWN: u32 = 40;

impl KeyMap<u32> {
    /// Arrow keys by numeric key code: left/right move, down drops, up rotates.
    pub fn key_code_arrows() -> Self {
        Self::new()
            .with(KEY_CODE_LEFT, Command::MoveLeft)
            .with(KEY_CODE_UP, Command::Rotate)
            .with(KEY_CODE_RIGHT, Command::MoveRight)
            .with(KEY_CODE_DOWN, Command::MoveDown)
    }
}

impl KeyMap<KeyCode> {
    /// Arrow keys only
    pub fn arrows() -> Self {
        Self::new()
            .with(KeyCode::Left, Command::MoveLeft)
            .with(KeyCode::Up, Command::Rotate)
            .with(KeyCode::Right, Command::MoveRight)
            .with(KeyCode::Down, Command::MoveDown)
    }

    /// Map a terminal key event. Letters match regardless of case.
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Command> {
        if let Some(command) = self.command_for(&key.code) {
            return Some(command);
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let flipped = if c.is_ascii_uppercase() {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                };
                self.command_for(&KeyCode::Char(flipped))
            }
            _ => None,
        }
    }
}

/// Parse a key name from configuration.
pub fn parse_key_name(name: &str) -> Result<KeyCode, InputError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    let lower = trimmed.to_ascii_lowercase();
    let code = match lower.as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(InputError::UnknownKey(name.to_string())),
        },
    };
    Ok(code)
}

/// Command keys plus quit keys, built from [`KeyBindings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub commands: KeyMap<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl Controls {
    pub fn from_bindings(bindings: &KeyBindings) -> Result<Self, InputError> {
        let groups: [(&[String], Command); 5] = [
            (bindings.move_left.as_slice(), Command::MoveLeft),
            (bindings.move_right.as_slice(), Command::MoveRight),
            (bindings.move_down.as_slice(), Command::MoveDown),
            (bindings.rotate.as_slice(), Command::Rotate),
            (bindings.restart.as_slice(), Command::Restart),
        ];

        let mut commands = KeyMap::new();
        for (names, command) in groups {
            for name in names {
                let code = parse_key_name(name)?;
                if let Some(previous) = commands.bind(code, command) {
                    if previous != command {
                        return Err(InputError::Conflict {
                            key: name.clone(),
                            first: previous.as_str(),
                            second: command.as_str(),
                        });
                    }
                }
            }
        }

        let mut quit = Vec::with_capacity(bindings.quit.len());
        for name in &bindings.quit {
            let code = parse_key_name(name)?;
            if let Some(command) = commands.command_for(&code) {
                return Err(InputError::Conflict {
                    key: name.clone(),
                    first: command.as_str(),
                    second: "quit",
                });
            }
            quit.push(code);
        }

        Ok(Self { commands, quit })
    }

    pub fn command_for(&self, key: KeyEvent) -> Option<Command> {
        self.commands.handle_key_event(key)
    }

    /// Quit keys, plus Ctrl+C which always quits.
    pub fn should_quit(&self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        self.quit.contains(&code)
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            commands: KeyMap::arrows(),
            quit: vec![KeyCode::Char('q'), KeyCode::Esc],
        }
    }
}
