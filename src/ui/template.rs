//! Menu sections shared by the machine profiles.

use crate::translate::{Language, Text};
use crate::ui::commands::*;
use crate::ui::menu::TemplateEntry as E;

pub const FILE_MENU: &[E] = &[
    E::title(Text::File),
    E::item(Text::Autostart, CMD_AUTOSTART).key('A'),
    E::bar(),
    E::submenu(Text::AttachDiskImage),
    E::sub(Text::Drive(8), CMD_ATTACH_DISK_8).key('8'),
    E::sub(Text::Drive(9), CMD_ATTACH_DISK_9).key('9'),
    E::sub(Text::Drive(10), CMD_ATTACH_DISK_10),
    E::sub(Text::Drive(11), CMD_ATTACH_DISK_11),
    E::submenu(Text::DetachDiskImage),
    E::sub(Text::Drive(8), CMD_DETACH_DISK_8),
    E::sub(Text::Drive(9), CMD_DETACH_DISK_9),
    E::sub(Text::Drive(10), CMD_DETACH_DISK_10),
    E::sub(Text::Drive(11), CMD_DETACH_DISK_11),
    E::sub_bar(),
    E::sub(Text::AllDrives, CMD_DETACH_DISK_ALL),
    E::submenu(Text::FlipList),
    E::sub(Text::FlipAdd, CMD_FLIP_ADD).key('I'),
    E::sub(Text::FlipRemove, CMD_FLIP_REMOVE).key('K'),
    E::sub(Text::FlipNext, CMD_FLIP_NEXT).key('N'),
    E::sub(Text::FlipPrevious, CMD_FLIP_PREVIOUS).key('P'),
    E::sub_bar(),
    E::sub(Text::FlipLoad, CMD_FLIP_LOAD),
    E::sub(Text::FlipSave, CMD_FLIP_SAVE),
    E::bar(),
    E::item(Text::AttachTapeImage, CMD_ATTACH_TAPE).key('T'),
    E::item(Text::DetachTapeImage, CMD_DETACH_TAPE),
    E::submenu(Text::DatasetteControl),
    E::sub(Text::DatasetteStop, CMD_DATASETTE_STOP),
    E::sub(Text::DatasetteStart, CMD_DATASETTE_START),
    E::sub(Text::DatasetteForward, CMD_DATASETTE_FORWARD),
    E::sub(Text::DatasetteRewind, CMD_DATASETTE_REWIND),
    E::sub(Text::DatasetteRecord, CMD_DATASETTE_RECORD),
    E::sub(Text::DatasetteReset, CMD_DATASETTE_RESET),
    E::sub(Text::DatasetteResetCounter, CMD_DATASETTE_RESET_COUNTER),
    E::bar(),
    E::submenu(Text::Reset),
    E::sub(Text::ResetHard, CMD_RESET_HARD),
    E::sub(Text::ResetSoft, CMD_RESET_SOFT).key('R'),
    E::sub_bar(),
    E::sub(Text::Drive(8), CMD_RESET_DRIVE_8),
    E::sub(Text::Drive(9), CMD_RESET_DRIVE_9),
    E::sub(Text::Drive(10), CMD_RESET_DRIVE_10),
    E::sub(Text::Drive(11), CMD_RESET_DRIVE_11),
    E::bar(),
    E::item(Text::Exit, CMD_EXIT).key('Q'),
];

pub const EDIT_MENU: &[E] = &[
    E::title(Text::Edit),
    E::item(Text::Copy, CMD_COPY),
    E::item(Text::Paste, CMD_PASTE),
];

pub const SNAPSHOT_MENU: &[E] = &[
    E::title(Text::Snapshot),
    E::item(Text::LoadSnapshot, CMD_SNAPSHOT_LOAD).key('L'),
    E::item(Text::SaveSnapshot, CMD_SNAPSHOT_SAVE).key('S'),
    E::bar(),
    E::item(Text::StartStopRecording, CMD_EVENT_TOGGLE_RECORD),
    E::item(Text::StartStopPlayback, CMD_EVENT_TOGGLE_PLAYBACK),
    E::item(Text::SetMilestone, CMD_EVENT_SET_MILESTONE).key('G'),
    E::item(Text::ReturnToMilestone, CMD_EVENT_RESET_MILESTONE).key('H'),
    E::submenu(Text::RecordingStartMode),
    E::sub_radio(Text::StartModeSave, CMD_EVENT_START_SAVE),
    E::sub_radio(Text::StartModeLoad, CMD_EVENT_START_LOAD),
    E::sub_radio(Text::StartModeReset, CMD_EVENT_START_RESET),
    E::sub_radio(Text::StartModePlayback, CMD_EVENT_START_PLAYBACK),
    E::item(Text::SelectHistoryDirectory, CMD_EVENT_DIRECTORY),
    E::bar(),
    E::item(Text::SaveMediaFile, CMD_MEDIA_FILE),
    E::bar(),
    E::item(Text::SoundRecordStart, CMD_SOUND_RECORD_START),
    E::item(Text::SoundRecordStop, CMD_SOUND_RECORD_STOP),
];

pub const OPTIONS_MENU: &[E] = &[
    E::title(Text::Options),
    E::submenu(Text::RefreshRate),
    E::sub_radio(Text::RefreshAuto, CMD_REFRESH_AUTO),
    E::sub_radio(Text::Ratio(1), CMD_REFRESH_1),
    E::sub_radio(Text::Ratio(2), CMD_REFRESH_1 + 1),
    E::sub_radio(Text::Ratio(3), CMD_REFRESH_1 + 2),
    E::sub_radio(Text::Ratio(4), CMD_REFRESH_1 + 3),
    E::sub_radio(Text::Ratio(5), CMD_REFRESH_1 + 4),
    E::sub_radio(Text::Ratio(6), CMD_REFRESH_1 + 5),
    E::sub_radio(Text::Ratio(7), CMD_REFRESH_1 + 6),
    E::sub_radio(Text::Ratio(8), CMD_REFRESH_1 + 7),
    E::sub_radio(Text::Ratio(9), CMD_REFRESH_1 + 8),
    E::sub_radio(Text::Ratio(10), CMD_REFRESH_1 + 9),
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
    E::check(Text::Pause, CMD_PAUSE).key('Z'),
    E::item(Text::AdvanceFrame, CMD_ADVANCE_FRAME),
    E::bar(),
    E::check(Text::Fullscreen, CMD_FULLSCREEN).key('D'),
    E::check(Text::Statusbar, CMD_STATUSBAR),
    E::bar(),
    E::check(Text::TrueDriveEmulation, CMD_TRUE_DRIVE_EMULATION),
    E::check(Text::AutostartHandleTde, CMD_AUTOSTART_HANDLE_TDE),
    E::check(Text::VirtualDevices, CMD_VIRTUAL_DEVICES),
    E::bar(),
    E::check(Text::SoundPlayback, CMD_SOUND),
    E::bar(),
    E::check(Text::JoystickKeys, CMD_JOYKEYS),
    E::check(Text::AllowOppositeDirections, CMD_JOY_OPPOSITE),
    E::item(Text::SwapJoysticks, CMD_SWAP_JOYSTICKS).key('J'),
    E::item(Text::SwapUserportJoysticks, CMD_SWAP_USERPORT_JOYSTICKS),
];

/// Opens the settings menu. Machine sections follow it.
pub const SETTINGS_HEAD: &[E] = &[
    E::title(Text::Settings),
    E::submenu(Text::VideoStandard),
    E::sub_radio(Text::PalG, CMD_VIDEO_PAL),
    E::sub_radio(Text::NtscM, CMD_VIDEO_NTSC),
    E::sub_radio(Text::OldNtscM, CMD_VIDEO_NTSC_OLD),
    E::bar(),
];

pub const SETTINGS_TAIL: &[E] = &[
    E::item(Text::JoystickSettings, CMD_JOYSTICK_SETTINGS),
    E::item(Text::JamAction, CMD_JAM_ACTION),
    E::item(Text::DriveSound, CMD_DRIVE_SOUND),
    E::item(Text::ScreenshotSettings, CMD_SCREENSHOT_SETTINGS),
    E::item(Text::RamSettings, CMD_RAM_SETTINGS),
    E::item(Text::SoundSettings, CMD_SOUND_SETTINGS),
    E::item(Text::NetworkSettings, CMD_NETWORK_SETTINGS),
    E::item(Text::AutostartSettings, CMD_AUTOSTART_SETTINGS),
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

const fn language_item(lang: Language, index: u16) -> E {
    E::sub_radio(Text::LanguageName(lang), CMD_LANGUAGE_BASE + index)
}

/// Same order as [`Language::ALL`].
pub const LANGUAGE_MENU: &[E] = &[
    E::bar(),
    E::submenu(Text::LanguageMenu),
    language_item(Language::English, 0),
    language_item(Language::Danish, 1),
    language_item(Language::German, 2),
    language_item(Language::Spanish, 3),
    language_item(Language::French, 4),
    language_item(Language::Italian, 5),
    language_item(Language::Korean, 6),
    language_item(Language::Dutch, 7),
    language_item(Language::Polish, 8),
    language_item(Language::Hungarian, 9),
    language_item(Language::Russian, 10),
    language_item(Language::Swedish, 11),
    language_item(Language::Turkish, 12),
];

pub const HELP_MENU: &[E] = &[
    E::title(Text::Help),
    E::item(Text::Monitor, CMD_MONITOR).key('M'),
    E::bar(),
    E::item(Text::About, CMD_ABOUT),
    E::item(Text::CommandLineOptions, CMD_CMDLINE),
    E::item(Text::CompileFeatures, CMD_FEATURES),
    E::item(Text::Contributors, CMD_CONTRIBUTORS),
    E::item(Text::License, CMD_LICENSE),
    E::item(Text::NoWarranty, CMD_WARRANTY),
];
