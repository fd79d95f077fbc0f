//! Audio-only PSID player window.

use anyhow::{Context, Result};

use super::{HookContext, HookOutcome, MachineClass, MachineHook, MachineProfile, MAIN_DEFAULTS};
use crate::resources::ResourceDefault;
use crate::translate::Text;
use crate::ui::bindings::{ToggleBinding, SPEED};
use crate::ui::commands::{self, *};
use crate::ui::host::{SelectorStyle, SettingsDialog};
use crate::ui::menu::TemplateEntry as E;
use crate::ui::registry::{CommandRegistry, RegistryError};
use crate::ui::template::LANGUAGE_MENU;

pub const CMD_LOAD_PSID: CommandId = 900;
pub const CMD_NEXT_TUNE: CommandId = 901;
pub const CMD_PREVIOUS_TUNE: CommandId = 902;
pub const CMD_PSID_OVERRIDE: CommandId = 903;
pub const CMD_SID_FILTERS: CommandId = 904;

const FILE_MENU: &[E] = &[
    E::title(Text::File),
    E::item(Text::LoadPsid, CMD_LOAD_PSID).key('L'),
    E::bar(),
    E::submenu(Text::Reset),
    E::sub(Text::ResetHard, CMD_RESET_HARD),
    E::sub(Text::ResetSoft, CMD_RESET_SOFT).key('R'),
    E::bar(),
    E::item(Text::Exit, CMD_EXIT).key('Q'),
];

const TUNE_MENU: &[E] = &[
    E::title(Text::Tune),
    E::item(Text::NextTune, CMD_NEXT_TUNE).key('N'),
    E::item(Text::PreviousTune, CMD_PREVIOUS_TUNE).key('P'),
];

const OPTIONS_MENU: &[E] = &[
    E::title(Text::Options),
    E::submenu(Text::MaximumSpeed),
    E::sub_radio(Text::Percent(200), CMD_SPEED_200),
    E::sub_radio(Text::Percent(100), CMD_SPEED_100),
    E::sub_radio(Text::Percent(50), CMD_SPEED_50),
    E::sub_radio(Text::Percent(20), CMD_SPEED_20),
    E::sub_radio(Text::Percent(10), CMD_SPEED_10),
    E::sub_radio(Text::SpeedNoLimit, CMD_SPEED_NO_LIMIT),
    E::sub_bar(),
    E::sub_radio(Text::SpeedCustom, CMD_SPEED_CUSTOM),
    E::check(Text::WarpMode, CMD_WARP_MODE).key('W'),
    E::bar(),
    E::check(Text::SoundPlayback, CMD_SOUND),
    E::check(Text::SidFilters, CMD_SID_FILTERS),
    E::check(Text::PsidOverride, CMD_PSID_OVERRIDE),
];

const SETTINGS_MENU: &[E] = &[
    E::title(Text::Settings),
    E::item(Text::SoundSettings, CMD_SOUND_SETTINGS),
    E::bar(),
    E::item(Text::SaveSettings, CMD_SETTINGS_SAVE),
    E::item(Text::LoadSettings, CMD_SETTINGS_LOAD),
    E::item(Text::SaveSettingsFile, CMD_SETTINGS_SAVE_FILE),
    E::item(Text::LoadSettingsFile, CMD_SETTINGS_LOAD_FILE),
    E::item(Text::RestoreDefaults, CMD_SETTINGS_DEFAULT),
    E::bar(),
    E::check(Text::SaveSettingsOnExit, CMD_SAVE_ON_EXIT),
    E::check(Text::ConfirmOnExit, CMD_CONFIRM_ON_EXIT),
];

const HELP_MENU: &[E] = &[
    E::title(Text::Help),
    E::item(Text::About, CMD_ABOUT),
    E::item(Text::CommandLineOptions, CMD_CMDLINE),
    E::item(Text::CompileFeatures, CMD_FEATURES),
    E::item(Text::Contributors, CMD_CONTRIBUTORS),
    E::item(Text::License, CMD_LICENSE),
    E::item(Text::NoWarranty, CMD_WARRANTY),
];

const TOGGLES: &[ToggleBinding] = &[
    ToggleBinding { resource: "Sound", command: CMD_SOUND },
    ToggleBinding { resource: "WarpMode", command: CMD_WARP_MODE },
    ToggleBinding { resource: "SaveResourcesOnExit", command: CMD_SAVE_ON_EXIT },
    ToggleBinding { resource: "ConfirmOnExit", command: CMD_CONFIRM_ON_EXIT },
    ToggleBinding { resource: "PSIDKeepEnv", command: CMD_PSID_OVERRIDE },
    ToggleBinding { resource: "SidFilters", command: CMD_SID_FILTERS },
];

const DEFAULTS: &[ResourceDefault] = &[
    ResourceDefault::int("PSIDKeepEnv", 0),
    ResourceDefault::int("SidFilters", 1),
];

pub(super) fn profile() -> Result<MachineProfile, RegistryError> {
    let mut registry = CommandRegistry::new();
    registry.add_commands(commands::common())?;
    registry.add_command(CMD_SPEED_CUSTOM, Command::Settings(SettingsDialog::CustomSpeed))?;
    registry.add_toggles(TOGGLES)?;
    registry.add_values(&[SPEED])?;

    Ok(MachineProfile {
        class: MachineClass::Vsid,
        template: [
            FILE_MENU,
            TUNE_MENU,
            OPTIONS_MENU,
            SETTINGS_MENU,
            LANGUAGE_MENU,
            HELP_MENU,
        ]
        .concat(),
        registry,
        defaults: [MAIN_DEFAULTS, DEFAULTS].concat(),
        hook: Some(Box::new(TuneHook::default())),
    })
}

/// Tracks the tunes of the loaded PSID file. Tune numbers start at 1.
#[derive(Debug, Default)]
struct TuneHook {
    current: u16,
    songs: u16,
}

impl TuneHook {
    fn step(&mut self, ctx: &mut HookContext<'_>, forward: bool) {
        let next = if forward {
            self.current.checked_add(1)
        } else {
            self.current.checked_sub(1)
        };
        if let Some(next) = next.filter(|n| (1..=self.songs).contains(n)) {
            self.current = next;
            ctx.emulator.set_tune(next);
            log::info!("playing tune {next}/{}", self.songs);
        }
    }

    fn load(&mut self, ctx: &mut HookContext<'_>) -> Result<()> {
        let title = ctx.text(Text::SelectPsid);
        let Some(path) = ctx.files.select(&mut *ctx.dialogs, title, SelectorStyle::Psid, false) else {
            return Ok(());
        };
        let info = ctx
            .emulator
            .load_psid(&path)
            .with_context(|| format!("load PSID {}", path.display()))?;
        self.songs = info.songs;
        if info.songs == 0 {
            self.current = 0;
            log::warn!("{} has no tunes", path.display());
            return Ok(());
        }
        self.current = info.default_song.clamp(1, info.songs);
        ctx.emulator.set_tune(self.current);
        Ok(())
    }
}

impl MachineHook for TuneHook {
    fn handle(&mut self, id: CommandId, ctx: &mut HookContext<'_>) -> Result<HookOutcome> {
        match id {
            CMD_NEXT_TUNE => self.step(ctx, true),
            CMD_PREVIOUS_TUNE => self.step(ctx, false),
            CMD_LOAD_PSID => self.load(ctx)?,
            _ => return Ok(HookOutcome::Ignored),
        }
        Ok(HookOutcome::Handled)
    }
}
