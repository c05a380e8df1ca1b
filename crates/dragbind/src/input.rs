use crate::error::{Error, Result};
use itertools::Itertools;
use std::str::FromStr;

bitflags::bitflags! {
    /// Modifier state as X reports it in `KeyButMask`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        const MOD1 = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const MOD4 = 1 << 6;
        const MOD5 = 1 << 7;
        const ANY = 1 << 15;
    }
}

impl ModMask {
    /// Modifiers that take part in matching. Pointer button bits of `KeyButMask` are not in it.
    const RELEVANT: ModMask = ModMask::SHIFT
        .union(ModMask::LOCK)
        .union(ModMask::CONTROL)
        .union(ModMask::MOD1)
        .union(ModMask::MOD2)
        .union(ModMask::MOD3)
        .union(ModMask::MOD4)
        .union(ModMask::MOD5);

    /// CapsLock and NumLock (usually Mod2).
    pub const IGNORED: ModMask = ModMask::LOCK.union(ModMask::MOD2);

    fn parse_modifier(name: &str) -> Option<Self> {
        let mask = match name.to_ascii_lowercase().as_str() {
            "shift" => ModMask::SHIFT,
            "lock" => ModMask::LOCK,
            "control" | "ctrl" => ModMask::CONTROL,
            "mod1" => ModMask::MOD1,
            "mod2" => ModMask::MOD2,
            "mod3" => ModMask::MOD3,
            "mod4" => ModMask::MOD4,
            "mod5" => ModMask::MOD5,
            "any" => ModMask::ANY,
            _ => return None,
        };
        Some(mask)
    }
}

/// Pointer button number. `0` is X's `AnyButton`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Button(pub u8);

impl Button {
    pub const ANY: Button = Button(0);
    pub const LEFT: Button = Button(1);
    pub const MIDDLE: Button = Button(2);
    pub const RIGHT: Button = Button(3);

    pub fn raw(&self) -> u8 {
        self.0
    }
}

/// A button with the modifiers that must be held, e.g. "Mod4-1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonSpec {
    mods: ModMask,
    button: Button,
}

impl ButtonSpec {
    pub fn new(mods: ModMask, button: Button) -> Self {
        Self { mods, button }
    }

    pub fn mods(&self) -> ModMask {
        self.mods
    }

    pub fn button(&self) -> Button {
        self.button
    }

    fn ignored(&self) -> ModMask {
        ModMask::IGNORED.difference(self.mods)
    }

    pub fn matches(&self, button: Button, state: ModMask) -> bool {
        if self.button != Button::ANY && self.button != button {
            return false;
        }
        if self.mods.contains(ModMask::ANY) {
            return true;
        }

        let held = state.intersection(ModMask::RELEVANT).difference(self.ignored());
        held == self.mods
    }

    /// Modifier sets a passive grab has to be installed for so that the binding still fires with CapsLock or NumLock on.
    pub fn ignore_mask_combinations(&self) -> Vec<ModMask> {
        if self.mods.contains(ModMask::ANY) {
            return vec![self.mods];
        }

        self.ignored()
            .iter()
            .powerset()
            .map(|subset| {
                subset
                    .into_iter()
                    .fold(self.mods, |acc, m| acc.union(m))
            })
            .collect()
    }
}

impl FromStr for ButtonSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidButtonSpec {
            spec: s.to_string(),
            reason,
        };

        let mut parts = s.split('-').collect_vec();
        let button = parts.pop().ok_or_else(|| invalid("empty"))?;
        let button = if button.eq_ignore_ascii_case("any") {
            Button::ANY
        } else if button.is_empty() || !button.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("button must be 1-255 or \"any\""));
        } else {
            match button.parse::<u8>() {
                Ok(0) | Err(_) => return Err(invalid("button must be 1-255 or \"any\"")),
                Ok(b) => Button(b),
            }
        };

        let mut mods = ModMask::empty();
        for part in parts {
            if part.is_empty() {
                return Err(invalid("empty modifier"));
            }
            let m = ModMask::parse_modifier(part).ok_or_else(|| invalid("unknown modifier"))?;
            mods |= m;
        }

        Ok(ButtonSpec { mods, button })
    }
}
