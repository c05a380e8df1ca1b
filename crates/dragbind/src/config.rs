use crate::cursor::CursorGlyph;
use crate::envvar::EnvVar;
use crate::input::ButtonSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragbindConfig {
    pub button: ButtonSpec,
    /// Install a passive button grab to receive the initial press.
    pub grab: bool,
    pub cursor: CursorGlyph,
}

impl DragbindConfig {
    pub fn from_envvar(envvar: &EnvVar) -> crate::Result<Self> {
        let button = envvar.dragbind.button.parse()?;
        let cursor = envvar.dragbind.cursor.parse()?;
        Ok(Self {
            button,
            grab: envvar.dragbind.grab,
            cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Button, ModMask};
    use big_s::S;

    #[test]
    fn test_default_config() {
        let envvar = EnvVar::from_vars(vec![]).unwrap();
        let config = DragbindConfig::from_envvar(&envvar).unwrap();
        assert_eq!(config.button, ButtonSpec::new(ModMask::MOD4, Button(1)));
        assert!(config.grab);
        assert_eq!(config.cursor, CursorGlyph::Fleur);
    }

    #[test]
    fn test_invalid_button() {
        let envvar = EnvVar::from_vars(vec![(S("DRAGBIND_BUTTON"), S("Hyper-1"))]).unwrap();
        assert!(matches!(
            DragbindConfig::from_envvar(&envvar),
            Err(crate::Error::InvalidButtonSpec { .. })
        ));
    }

    #[test]
    fn test_invalid_cursor() {
        let envvar = EnvVar::from_vars(vec![(S("DRAGBIND_CURSOR"), S("pirate"))]).unwrap();
        assert!(matches!(
            DragbindConfig::from_envvar(&envvar),
            Err(crate::Error::UnknownCursorGlyph(_))
        ));
    }
}
