//! Serializable key bindings.
//!
//! Each command lists key names understood by [`crate::parse_key_name`]:
//! `left`, `right`, `up`, `down`, `space`, `enter`, `esc`, `tab`, `backspace`,
//! `f1`..`f12`, or a single character.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub move_down: Vec<String>,
    pub rotate: Vec<String>,
    pub restart: Vec<String>,
    pub quit: Vec<String>,
}

fn names(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: names(&["left", "a"]),
            move_right: names(&["right", "d"]),
            move_down: names(&["down", "s"]),
            rotate: names(&["up", "w"]),
            restart: names(&["r"]),
            quit: names(&["q", "esc"]),
        }
    }
}
