use std::fmt;

use anyhow::Result;
use serde::Deserialize;

use crate::resources::ResourceDefault;
use crate::translate::{Text, Translate};
use crate::ui::bindings::{ToggleBinding, ValueBinding, MAIN_TOGGLES, MAIN_VALUES};
use crate::ui::commands::{self, CommandId};
use crate::ui::host::{Dialogs, Emulator, FileSelector};
use crate::ui::menu::TemplateEntry;
use crate::ui::registry::{CommandRegistry, RegistryError};
use crate::ui::template;

pub mod c128;
pub mod c64;
pub mod vsid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MachineClass {
    C64,
    #[value(name = "c64sc")]
    C64Sc,
    C128,
    Vsid,
}

impl MachineClass {
    pub const ALL: [MachineClass; 4] = [
        MachineClass::C64,
        MachineClass::C64Sc,
        MachineClass::C128,
        MachineClass::Vsid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MachineClass::C64 => "c64",
            MachineClass::C64Sc => "c64sc",
            MachineClass::C128 => "c128",
            MachineClass::Vsid => "vsid",
        }
    }
}

impl fmt::Display for MachineClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    Handled,
    Ignored,
}

/// What a machine hook may touch while handling a command.
pub struct HookContext<'a> {
    pub emulator: &'a mut dyn Emulator,
    pub dialogs: &'a mut dyn Dialogs,
    pub files: &'a mut FileSelector,
    pub translator: &'a dyn Translate,
    pub language: &'a str,
}

impl HookContext<'_> {
    pub fn text(&self, text: Text) -> String {
        self.translator.translate(text, self.language).into_owned()
    }
}

/// Machine-family commands, consulted before the shared command table.
pub trait MachineHook {
    fn handle(&mut self, id: CommandId, ctx: &mut HookContext<'_>) -> Result<HookOutcome>;
}

/// Everything the UI core needs to know about one machine family.
pub struct MachineProfile {
    pub class: MachineClass,
    pub template: Vec<TemplateEntry>,
    pub registry: CommandRegistry,
    pub defaults: Vec<ResourceDefault>,
    pub hook: Option<Box<dyn MachineHook>>,
}

impl fmt::Debug for MachineProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineProfile")
            .field("class", &self.class)
            .field("template", &self.template.len())
            .field("commands", &self.registry.len())
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl MachineProfile {
    pub fn for_class(class: MachineClass) -> Result<Self, RegistryError> {
        match class {
            MachineClass::C64 | MachineClass::C64Sc => c64::profile(class),
            MachineClass::C128 => c128::profile(),
            MachineClass::Vsid => vsid::profile(),
        }
    }
}

/// Machine additions layered on the shared emulator window.
struct MachineParts {
    options: &'static [TemplateEntry],
    settings: &'static [TemplateEntry],
    toggles: &'static [ToggleBinding],
    values: &'static [ValueBinding],
    defaults: &'static [ResourceDefault],
    hook: Box<dyn MachineHook>,
}

const MAIN_DEFAULTS: &[ResourceDefault] = &[
    ResourceDefault::int("Sound", 1),
    ResourceDefault::int("DriveTrueEmulation", 1),
    ResourceDefault::int("AutostartHandleTrueDriveEmulation", 0),
    ResourceDefault::int("WarpMode", 0),
    ResourceDefault::int("VirtualDevices", 1),
    ResourceDefault::int("SaveResourcesOnExit", 0),
    ResourceDefault::int("ConfirmOnExit", 1),
    ResourceDefault::int("FullScreenEnabled", 0),
    ResourceDefault::int("StatusbarEnabled", 1),
    ResourceDefault::int("KeySetEnable", 0),
    ResourceDefault::int("JoyOpposite", 0),
    ResourceDefault::int("RefreshRate", 0),
    ResourceDefault::int("Speed", 100),
    ResourceDefault::int("MachineVideoStandard", 1),
    ResourceDefault::int("EventStartMode", 0),
    ResourceDefault::string("EventStartSnapshot", ""),
    ResourceDefault::string("EventEndSnapshot", ""),
    ResourceDefault::string("SoundRecordDeviceName", ""),
    ResourceDefault::string("Language", "en"),
];

fn main_window(class: MachineClass, parts: MachineParts) -> Result<MachineProfile, RegistryError> {
    let template = [
        template::FILE_MENU,
        template::EDIT_MENU,
        template::SNAPSHOT_MENU,
        template::OPTIONS_MENU,
        parts.options,
        template::SETTINGS_HEAD,
        parts.settings,
        template::SETTINGS_TAIL,
        template::LANGUAGE_MENU,
        template::HELP_MENU,
    ]
    .concat();

    let mut registry = CommandRegistry::new();
    registry.add_commands(commands::builtin())?;
    registry.add_toggles(MAIN_TOGGLES)?;
    registry.add_toggles(parts.toggles)?;
    registry.add_values(MAIN_VALUES)?;
    registry.add_values(parts.values)?;

    Ok(MachineProfile {
        class,
        template,
        registry,
        defaults: [MAIN_DEFAULTS, parts.defaults].concat(),
        hook: Some(parts.hook),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_profile_builds() {
        for class in MachineClass::ALL {
            let profile = MachineProfile::for_class(class).unwrap();
            assert_eq!(profile.class, class);
            assert!(profile.hook.is_some());
            assert!(!profile.registry.is_empty());
        }
    }

    #[test]
    fn bound_resources_have_defaults() {
        for class in MachineClass::ALL {
            let profile = MachineProfile::for_class(class).unwrap();
            let names: HashSet<_> = profile.defaults.iter().map(|d| d.name).collect();
            for t in profile.registry.toggles() {
                assert!(names.contains(t.resource), "{class}: {}", t.resource);
            }
            for v in profile.registry.values() {
                assert!(names.contains(v.resource), "{class}: {}", v.resource);
            }
            assert!(names.contains("Language"));
        }
    }

    #[test]
    fn template_commands_are_known() {
        for class in MachineClass::ALL {
            let profile = MachineProfile::for_class(class).unwrap();
            let mut hook_ids = HashSet::new();
            for entry in &profile.template {
                if let Some(id) = entry.command {
                    if !profile.registry.contains(id) {
                        hook_ids.insert(id);
                    }
                }
            }
            // Whatever the registry does not know must be a machine command.
            assert!(hook_ids.iter().all(|id| *id >= 700), "{class}: {hook_ids:?}");
        }
    }

    #[test]
    fn class_names_parse_from_config() {
        let c: MachineClass = serde_json::from_str("\"c64sc\"").unwrap();
        assert_eq!(c, MachineClass::C64Sc);
        assert_eq!(MachineClass::C128.to_string(), "c128");
    }
}
