//! Declarative resource bindings shared by every machine profile.

use crate::ui::commands::*;

/// The resource's truth value drives the item's checkmark; picking the
/// item toggles the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleBinding {
    pub resource: &'static str,
    pub command: CommandId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PossibleValue {
    pub value: i32,
    pub command: CommandId,
}

/// Radio group over a closed set of integer values. `default` is checked
/// when the stored value matches none of `values`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueBinding {
    pub resource: &'static str,
    pub values: &'static [PossibleValue],
    pub default: Option<CommandId>,
}

const fn toggle(resource: &'static str, command: CommandId) -> ToggleBinding {
    ToggleBinding { resource, command }
}

const fn pv(value: i32, command: CommandId) -> PossibleValue {
    PossibleValue { value, command }
}

pub const MAIN_TOGGLES: &[ToggleBinding] = &[
    toggle("Sound", CMD_SOUND),
    toggle("DriveTrueEmulation", CMD_TRUE_DRIVE_EMULATION),
    toggle("AutostartHandleTrueDriveEmulation", CMD_AUTOSTART_HANDLE_TDE),
    toggle("WarpMode", CMD_WARP_MODE),
    toggle("VirtualDevices", CMD_VIRTUAL_DEVICES),
    toggle("SaveResourcesOnExit", CMD_SAVE_ON_EXIT),
    toggle("ConfirmOnExit", CMD_CONFIRM_ON_EXIT),
    toggle("FullScreenEnabled", CMD_FULLSCREEN),
    toggle("StatusbarEnabled", CMD_STATUSBAR),
    toggle("KeySetEnable", CMD_JOYKEYS),
    toggle("JoyOpposite", CMD_JOY_OPPOSITE),
];

const REFRESH_RATE_VALUES: &[PossibleValue] = &[
    pv(0, CMD_REFRESH_AUTO),
    pv(1, CMD_REFRESH_1),
    pv(2, CMD_REFRESH_1 + 1),
    pv(3, CMD_REFRESH_1 + 2),
    pv(4, CMD_REFRESH_1 + 3),
    pv(5, CMD_REFRESH_1 + 4),
    pv(6, CMD_REFRESH_1 + 5),
    pv(7, CMD_REFRESH_1 + 6),
    pv(8, CMD_REFRESH_1 + 7),
    pv(9, CMD_REFRESH_1 + 8),
    pv(10, CMD_REFRESH_1 + 9),
];

pub const SPEED_VALUES: &[PossibleValue] = &[
    pv(0, CMD_SPEED_NO_LIMIT),
    pv(10, CMD_SPEED_10),
    pv(20, CMD_SPEED_20),
    pv(50, CMD_SPEED_50),
    pv(100, CMD_SPEED_100),
    pv(200, CMD_SPEED_200),
];

const VIDEO_STANDARD_VALUES: &[PossibleValue] = &[
    pv(1, CMD_VIDEO_PAL),
    pv(2, CMD_VIDEO_NTSC),
    pv(3, CMD_VIDEO_NTSC_OLD),
];

const EVENT_START_MODE_VALUES: &[PossibleValue] = &[
    pv(0, CMD_EVENT_START_SAVE),
    pv(1, CMD_EVENT_START_LOAD),
    pv(2, CMD_EVENT_START_RESET),
    pv(3, CMD_EVENT_START_PLAYBACK),
];

pub const SPEED: ValueBinding = ValueBinding {
    resource: "Speed",
    values: SPEED_VALUES,
    default: Some(CMD_SPEED_CUSTOM),
};

pub const MAIN_VALUES: &[ValueBinding] = &[
    ValueBinding {
        resource: "RefreshRate",
        values: REFRESH_RATE_VALUES,
        default: None,
    },
    SPEED,
    ValueBinding {
        resource: "MachineVideoStandard",
        values: VIDEO_STANDARD_VALUES,
        default: None,
    },
    ValueBinding {
        resource: "EventStartMode",
        values: EVENT_START_MODE_VALUES,
        default: None,
    },
];
