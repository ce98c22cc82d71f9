use bitflags::bitflags;
use serde::{de::Visitor, Deserialize, Serialize};

bitflags! {
    /// State of the modifier keys, laid out like the X11 core protocol key mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

impl ModMask {
    /// Drop the lock style modifiers so that bindings fire regardless of Caps or Num Lock.
    #[must_use]
    pub fn clean(self) -> Self {
        self.intersection(
            Self::Shift | Self::Control | Self::Alt | Self::Mod3 | Self::Super | Self::Mod5,
        )
    }
}

/// A pointer button as reported by the display server.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Main button (left click for right-handed)
    Left,
    /// Pressing the scroll wheel
    Middle,
    /// Secondary button (right click for right-handed)
    Right,
    ScrollUp,
    ScrollDown,
    Other(u8),
}

impl From<u32> for Button {
    fn from(detail: u32) -> Self {
        match detail {
            1 => Self::Left,
            2 => Self::Middle,
            3 => Self::Right,
            4 => Self::ScrollUp,
            5 => Self::ScrollDown,
            other => Self::Other(u8::try_from(other).unwrap_or(u8::MAX)),
        }
    }
}

impl From<Button> for u32 {
    fn from(button: Button) -> Self {
        match button {
            Button::Left => 1,
            Button::Middle => 2,
            Button::Right => 3,
            Button::ScrollUp => 4,
            Button::ScrollDown => 5,
            Button::Other(other) => Self::from(other),
        }
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    keys.iter()
        .fold(ModMask::Zero, |mask, key| mask | into_mod(key))
        .clean()
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" | "Ctrl" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        // Num Lock is never part of a binding, see `ModMask::clean`.
        "Mod3" => ModMask::Mod3,
        "Mod4" | "Super" => ModMask::Super,
        "Mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

/// Whether `key` names a modifier `into_mod` understands.
#[must_use]
pub fn is_modifier(key: &str) -> bool {
    into_mod(key) != ModMask::Zero
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModmaskVisitor;

        impl<'de> Visitor<'de> for ModmaskVisitor {
            type Value = ModMask;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a modifier bitfield")
            }

            fn visit_u16<E>(self, v: u16) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ModMask::from_bits_retain(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u16::try_from(v)
                    .map(ModMask::from_bits_retain)
                    .map_err(|_| E::custom("modifier mask out of range"))
            }
        }

        deserializer.deserialize_u16(ModmaskVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_names_combine_into_one_mask() {
        let mask = into_modmask(&["Mod4".to_owned(), "Shift".to_owned()]);
        assert_eq!(mask, ModMask::Super | ModMask::Shift);
    }

    #[test]
    fn lock_modifiers_are_ignored_when_matching() {
        let raw = ModMask::Super | ModMask::NumLock | ModMask::Lock;
        assert_eq!(raw.clean(), ModMask::Super);
    }

    #[test]
    fn unknown_modifier_names_add_nothing() {
        assert_eq!(into_modmask(&["Hyper".to_owned()]), ModMask::Zero);
        assert!(!is_modifier("Hyper"));
        assert!(is_modifier("Alt"));
    }

    #[test]
    fn x_button_numbers_round_trip() {
        for detail in 1..=9_u32 {
            assert_eq!(u32::from(Button::from(detail)), detail);
        }
        assert_eq!(Button::from(3), Button::Right);
    }
}
