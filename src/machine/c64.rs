use anyhow::Result;

use super::{main_window, HookContext, HookOutcome, MachineClass, MachineHook, MachineParts, MachineProfile};
use crate::resources::ResourceDefault;
use crate::translate::Text;
use crate::ui::bindings::{PossibleValue, ToggleBinding, ValueBinding};
use crate::ui::commands::CommandId;
use crate::ui::host::SettingsDialog;
use crate::ui::menu::TemplateEntry as E;
use crate::ui::registry::RegistryError;

pub const CMD_MODEL_BASE: CommandId = 700;
pub const CMD_CUSTOM_MODEL: CommandId = 714;
pub const CMD_VICII_SETTINGS: CommandId = 720;
pub const CMD_SID_SETTINGS: CommandId = 721;
pub const CMD_CARTRIDGE_SETTINGS: CommandId = 722;
pub const CMD_VICII_DOUBLE_SIZE: CommandId = 730;
pub const CMD_VICII_DOUBLE_SCAN: CommandId = 731;
pub const CMD_VICII_AUDIO_LEAK: CommandId = 732;
pub const CMD_MOUSE: CommandId = 733;
pub const CMD_CARTRIDGE_RESET: CommandId = 734;
pub const CMD_SID_6581: CommandId = 735;
pub const CMD_SID_8580: CommandId = 736;

/// Model items in menu order, with the name handed to the emulator.
const MODELS: [(Text, &str); 14] = [
    (Text::C64Pal, "c64"),
    (Text::C64cPal, "c64c"),
    (Text::C64OldPal, "c64old"),
    (Text::C64Ntsc, "c64ntsc"),
    (Text::C64cNtsc, "c64cntsc"),
    (Text::C64OldNtsc, "c64oldntsc"),
    (Text::Drean, "drean"),
    (Text::C64sxPal, "c64sx"),
    (Text::C64sxNtsc, "c64sxntsc"),
    (Text::C64Jap, "c64jap"),
    (Text::C64Gs, "c64gs"),
    (Text::Pet64Pal, "pet64"),
    (Text::Pet64Ntsc, "pet64ntsc"),
    (Text::Ultimax, "ultimax"),
];

const fn model_item(index: usize) -> E {
    E::sub_radio(MODELS[index].0, CMD_MODEL_BASE + index as CommandId)
}

const OPTIONS: &[E] = &[
    E::bar(),
    E::check(Text::DoubleSize, CMD_VICII_DOUBLE_SIZE),
    E::check(Text::DoubleScan, CMD_VICII_DOUBLE_SCAN),
    E::check(Text::AudioLeak, CMD_VICII_AUDIO_LEAK),
    E::bar(),
    E::check(Text::Mouse, CMD_MOUSE),
    E::check(Text::CartridgeReset, CMD_CARTRIDGE_RESET),
    E::submenu(Text::SidModel),
    E::sub_radio(Text::Sid6581, CMD_SID_6581),
    E::sub_radio(Text::Sid8580, CMD_SID_8580),
];

const SETTINGS: &[E] = &[
    E::submenu(Text::C64ModelSettings),
    model_item(0),
    model_item(1),
    model_item(2),
    model_item(3),
    model_item(4),
    model_item(5),
    model_item(6),
    model_item(7),
    model_item(8),
    model_item(9),
    model_item(10),
    model_item(11),
    model_item(12),
    model_item(13),
    E::sub(Text::CustomC64Model, CMD_CUSTOM_MODEL),
    E::item(Text::ViciiSettings, CMD_VICII_SETTINGS),
    E::item(Text::SidSettings, CMD_SID_SETTINGS),
    E::item(Text::CartridgeSettings, CMD_CARTRIDGE_SETTINGS),
    E::bar(),
];

const TOGGLES: &[ToggleBinding] = &[
    ToggleBinding { resource: "VICIIDoubleSize", command: CMD_VICII_DOUBLE_SIZE },
    ToggleBinding { resource: "VICIIDoubleScan", command: CMD_VICII_DOUBLE_SCAN },
    ToggleBinding { resource: "VICIIAudioLeak", command: CMD_VICII_AUDIO_LEAK },
    ToggleBinding { resource: "Mouse", command: CMD_MOUSE },
    ToggleBinding { resource: "CartridgeReset", command: CMD_CARTRIDGE_RESET },
];

const SID_MODEL_VALUES: &[PossibleValue] = &[
    PossibleValue { value: 0, command: CMD_SID_6581 },
    PossibleValue { value: 1, command: CMD_SID_8580 },
];

const VALUES: &[ValueBinding] = &[ValueBinding {
    resource: "SidModel",
    values: SID_MODEL_VALUES,
    default: None,
}];

const DEFAULTS: &[ResourceDefault] = &[
    ResourceDefault::int("VICIIDoubleSize", 0),
    ResourceDefault::int("VICIIDoubleScan", 0),
    ResourceDefault::int("VICIIAudioLeak", 0),
    ResourceDefault::int("Mouse", 0),
    ResourceDefault::int("CartridgeReset", 1),
    ResourceDefault::int("SidModel", 0),
];

pub(super) fn profile(class: MachineClass) -> Result<MachineProfile, RegistryError> {
    main_window(
        class,
        MachineParts {
            options: OPTIONS,
            settings: SETTINGS,
            toggles: TOGGLES,
            values: VALUES,
            defaults: DEFAULTS,
            hook: Box::new(C64Hook),
        },
    )
}

fn model_for(id: CommandId) -> Option<&'static str> {
    let index = id.checked_sub(CMD_MODEL_BASE)? as usize;
    MODELS.get(index).map(|(_, name)| *name)
}

struct C64Hook;

impl MachineHook for C64Hook {
    fn handle(&mut self, id: CommandId, ctx: &mut HookContext<'_>) -> Result<HookOutcome> {
        if let Some(model) = model_for(id) {
            log::info!("switching to model {model}");
            ctx.emulator.set_model(model);
            return Ok(HookOutcome::Handled);
        }

        let dialog = match id {
            CMD_CUSTOM_MODEL => SettingsDialog::CustomC64Model,
            CMD_VICII_SETTINGS => SettingsDialog::Vicii,
            CMD_SID_SETTINGS => SettingsDialog::Sid,
            CMD_CARTRIDGE_SETTINGS => SettingsDialog::Cartridge,
            _ => return Ok(HookOutcome::Ignored),
        };
        ctx.dialogs.open_settings(dialog);
        Ok(HookOutcome::Handled)
    }
}
