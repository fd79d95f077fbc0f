use anyhow::Result;

use super::{main_window, HookContext, HookOutcome, MachineClass, MachineHook, MachineParts, MachineProfile};
use crate::resources::ResourceDefault;
use crate::translate::Text;
use crate::ui::bindings::{PossibleValue, ToggleBinding, ValueBinding};
use crate::ui::commands::CommandId;
use crate::ui::host::SettingsDialog;
use crate::ui::menu::TemplateEntry as E;
use crate::ui::registry::RegistryError;

pub const CMD_MODEL_PAL: CommandId = 800;
pub const CMD_MODEL_DCR_PAL: CommandId = 801;
pub const CMD_MODEL_NTSC: CommandId = 802;
pub const CMD_MODEL_DCR_NTSC: CommandId = 803;
pub const CMD_VDC_SETTINGS: CommandId = 810;
pub const CMD_VICII_SETTINGS: CommandId = 811;
pub const CMD_C128_SETTINGS: CommandId = 812;
pub const CMD_VDC_DOUBLE_SIZE: CommandId = 820;
pub const CMD_VDC_DOUBLE_SCAN: CommandId = 821;
pub const CMD_VDC_64KB: CommandId = 822;
pub const CMD_VICII_DOUBLE_SIZE: CommandId = 823;
pub const CMD_VICII_DOUBLE_SCAN: CommandId = 824;
pub const CMD_MOUSE: CommandId = 825;
pub const CMD_IEEE488: CommandId = 826;
pub const CMD_VDC_REV_0: CommandId = 830;
pub const CMD_VDC_REV_1: CommandId = 831;
pub const CMD_VDC_REV_2: CommandId = 832;

const OPTIONS: &[E] = &[
    E::bar(),
    E::check(Text::VdcDoubleSize, CMD_VDC_DOUBLE_SIZE),
    E::check(Text::VdcDoubleScan, CMD_VDC_DOUBLE_SCAN),
    E::check(Text::Vdc64kb, CMD_VDC_64KB),
    E::submenu(Text::VdcRevision),
    E::sub_radio(Text::VdcRev(0), CMD_VDC_REV_0),
    E::sub_radio(Text::VdcRev(1), CMD_VDC_REV_1),
    E::sub_radio(Text::VdcRev(2), CMD_VDC_REV_2),
    E::bar(),
    E::check(Text::DoubleSize, CMD_VICII_DOUBLE_SIZE),
    E::check(Text::DoubleScan, CMD_VICII_DOUBLE_SCAN),
    E::bar(),
    E::check(Text::Mouse, CMD_MOUSE),
    E::check(Text::Ieee488, CMD_IEEE488),
];

const SETTINGS: &[E] = &[
    E::submenu(Text::C128Model),
    E::sub_radio(Text::C128Pal, CMD_MODEL_PAL),
    E::sub_radio(Text::C128DcrPal, CMD_MODEL_DCR_PAL),
    E::sub_radio(Text::C128Ntsc, CMD_MODEL_NTSC),
    E::sub_radio(Text::C128DcrNtsc, CMD_MODEL_DCR_NTSC),
    E::item(Text::C128Settings, CMD_C128_SETTINGS),
    E::item(Text::VdcSettings, CMD_VDC_SETTINGS),
    E::item(Text::ViciiSettings, CMD_VICII_SETTINGS),
    E::bar(),
];

const TOGGLES: &[ToggleBinding] = &[
    ToggleBinding { resource: "VDCDoubleSize", command: CMD_VDC_DOUBLE_SIZE },
    ToggleBinding { resource: "VDCDoubleScan", command: CMD_VDC_DOUBLE_SCAN },
    ToggleBinding { resource: "VDC64KB", command: CMD_VDC_64KB },
    ToggleBinding { resource: "VICIIDoubleSize", command: CMD_VICII_DOUBLE_SIZE },
    ToggleBinding { resource: "VICIIDoubleScan", command: CMD_VICII_DOUBLE_SCAN },
    ToggleBinding { resource: "Mouse", command: CMD_MOUSE },
    ToggleBinding { resource: "IEEE488", command: CMD_IEEE488 },
];

const VDC_REVISION_VALUES: &[PossibleValue] = &[
    PossibleValue { value: 0, command: CMD_VDC_REV_0 },
    PossibleValue { value: 1, command: CMD_VDC_REV_1 },
    PossibleValue { value: 2, command: CMD_VDC_REV_2 },
];

const VALUES: &[ValueBinding] = &[ValueBinding {
    resource: "VDCRevision",
    values: VDC_REVISION_VALUES,
    default: None,
}];

const DEFAULTS: &[ResourceDefault] = &[
    ResourceDefault::int("VDCDoubleSize", 1),
    ResourceDefault::int("VDCDoubleScan", 1),
    ResourceDefault::int("VDC64KB", 1),
    ResourceDefault::int("VICIIDoubleSize", 0),
    ResourceDefault::int("VICIIDoubleScan", 0),
    ResourceDefault::int("Mouse", 0),
    ResourceDefault::int("IEEE488", 0),
    ResourceDefault::int("VDCRevision", 2),
];

pub(super) fn profile() -> Result<MachineProfile, RegistryError> {
    main_window(
        MachineClass::C128,
        MachineParts {
            options: OPTIONS,
            settings: SETTINGS,
            toggles: TOGGLES,
            values: VALUES,
            defaults: DEFAULTS,
            hook: Box::new(C128Hook),
        },
    )
}

struct C128Hook;

impl MachineHook for C128Hook {
    fn handle(&mut self, id: CommandId, ctx: &mut HookContext<'_>) -> Result<HookOutcome> {
        let model = match id {
            CMD_MODEL_PAL => Some("c128"),
            CMD_MODEL_DCR_PAL => Some("c128dcr"),
            CMD_MODEL_NTSC => Some("c128ntsc"),
            CMD_MODEL_DCR_NTSC => Some("c128dcrntsc"),
            _ => None,
        };
        if let Some(model) = model {
            log::info!("switching to model {model}");
            ctx.emulator.set_model(model);
            return Ok(HookOutcome::Handled);
        }

        let dialog = match id {
            CMD_C128_SETTINGS => SettingsDialog::C128,
            CMD_VDC_SETTINGS => SettingsDialog::Vdc,
            CMD_VICII_SETTINGS => SettingsDialog::Vicii,
            _ => return Ok(HookOutcome::Ignored),
        };
        ctx.dialogs.open_settings(dialog);
        Ok(HookOutcome::Handled)
    }
}
