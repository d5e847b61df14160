//! Runtime configuration with TOML file support.
//!
//! Window geometry, camera, display, keybindings and shader location are
//! consolidated here. All sections use `#[serde(default)]` so a partial
//! TOML file (e.g. only overriding `[camera]`) works.

mod camera;
mod display;
mod keybindings;
mod shaders;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::{DisplayOptions, PolygonMode};
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use shaders::ShaderOptions;
pub use window::WindowOptions;

use crate::error::ViewportError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Initial window geometry and title.
    pub window: WindowOptions,
    /// Camera pose, projection and trackball sensitivity.
    pub camera: CameraOptions,
    /// Surface and rasterization settings.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
    /// Shader source location.
    pub shaders: ShaderOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::Io`] if the file cannot be read and
    /// [`ViewportError::OptionsParse`] if it is not valid options TOML or
    /// binds one key to several actions.
    pub fn load(path: &Path) -> Result<Self, ViewportError> {
        let content = std::fs::read_to_string(path).map_err(ViewportError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ViewportError::OptionsParse(e.to_string()))?;
        if let Some((key, actions)) =
            options.keybindings.conflicts().into_iter().next()
        {
            return Err(ViewportError::OptionsParse(format!(
                "key {key} is bound to several actions: {actions:?}"
            )));
        }
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), ViewportError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewportError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewportError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewportError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
drag_divisor = 4.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.drag_divisor, 4.0);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.window.width, 1280);
        assert_eq!(opts.display.msaa_samples, 4);
        assert_eq!(opts.display.polygon_mode, PolygonMode::Fill);
        assert!(opts.shaders.directory.is_none());
    }

    #[test]
    fn polygon_mode_parses_snake_case() {
        let opts: Options = toml::from_str(
            r#"
[display]
polygon_mode = "line"
clear_color = [0.0, 0.0, 0.0, 1.0]
"#,
        )
        .unwrap();
        assert_eq!(opts.display.polygon_mode, PolygonMode::Line);
        assert_eq!(opts.display.clear_color, Some([0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Close));
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::Wireframe));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn keybindings_load_from_toml() {
        let opts: Options = toml::from_str(
            r#"
[keybindings.bindings]
close = "KeyQ"
wireframe = "KeyL"
"#,
        )
        .unwrap();
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Close));
        assert_eq!(opts.keybindings.lookup("KeyL"), Some(KeyAction::Wireframe));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn rebinding_unbinds_previous_owner() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::Points, "KeyW");
        assert_eq!(bindings.lookup("KeyW"), Some(KeyAction::Points));
        assert_eq!(bindings.lookup("KeyP"), None);
        assert!(!bindings.bindings.contains_key(&KeyAction::Wireframe));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "viewport-samples-options-{}",
            std::process::id()
        ));
        let path = dir.join("preset.toml");

        let mut opts = Options::default();
        opts.window.title = Some("Preset".into());
        opts.camera.eye = [1.0, 2.0, 3.0];
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn default_bindings_have_no_conflicts() {
        assert!(KeybindingOptions::default().conflicts().is_empty());
    }

    #[test]
    fn load_rejects_a_key_bound_twice() {
        let dir = std::env::temp_dir().join(format!(
            "viewport-samples-dup-keys-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("dup.toml");
        std::fs::write(
            &path,
            "[keybindings.bindings]\nclose = \"KeyW\"\nwireframe = \"KeyW\"\n",
        )
        .unwrap();

        let err = Options::load(&path).unwrap_err();
        std::fs::remove_dir_all(&dir).unwrap();

        assert!(
            matches!(&err, ViewportError::OptionsParse(msg) if msg.contains("KeyW")),
            "{err}"
        );
    }

    #[test]
    fn conflicts_list_every_action_sharing_a_key() {
        let opts: Options = toml::from_str(
            r#"
[keybindings.bindings]
close = "KeyW"
wireframe = "KeyW"
fill = "KeyF"
"#,
        )
        .unwrap();
        assert_eq!(
            opts.keybindings.conflicts(),
            vec![("KeyW".to_owned(), vec![KeyAction::Close, KeyAction::Wireframe])]
        );
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir().join(format!(
            "viewport-samples-bad-options-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, ViewportError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
