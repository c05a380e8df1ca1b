use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GenericEnvVar {
    pub display: Option<String>,
}

/// `DRAGBIND_*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DragbindEnvVar {
    #[serde(default = "default_button")]
    pub button: String,
    #[serde(default = "default_grab")]
    pub grab: bool,
    #[serde(default = "default_cursor")]
    pub cursor: String,
}

fn default_button() -> String {
    "Mod4-1".to_string()
}

fn default_grab() -> bool {
    true
}

fn default_cursor() -> String {
    "fleur".to_string()
}

#[derive(Debug, Clone)]
pub struct EnvVar {
    pub generic: GenericEnvVar,
    pub dragbind: DragbindEnvVar,
}

impl EnvVar {
    pub fn load() -> crate::Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = vars.into_iter().collect::<Vec<_>>();
        let generic = envy::from_iter(vars.clone())?;
        let dragbind = envy::prefixed("DRAGBIND_").from_iter(vars)?;
        Ok(Self { generic, dragbind })
    }
}
