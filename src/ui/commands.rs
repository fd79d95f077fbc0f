use crate::translate::Language;
use crate::ui::host::{DatasetteControl, FlipOp, InfoPage, ResetMode, SettingsDialog};

pub type CommandId = u16;

// File
pub const CMD_AUTOSTART: CommandId = 100;
pub const CMD_ATTACH_DISK_8: CommandId = 101;
pub const CMD_ATTACH_DISK_9: CommandId = 102;
pub const CMD_ATTACH_DISK_10: CommandId = 103;
pub const CMD_ATTACH_DISK_11: CommandId = 104;
pub const CMD_DETACH_DISK_8: CommandId = 105;
pub const CMD_DETACH_DISK_9: CommandId = 106;
pub const CMD_DETACH_DISK_10: CommandId = 107;
pub const CMD_DETACH_DISK_11: CommandId = 108;
pub const CMD_DETACH_DISK_ALL: CommandId = 109;
pub const CMD_FLIP_ADD: CommandId = 110;
pub const CMD_FLIP_REMOVE: CommandId = 111;
pub const CMD_FLIP_NEXT: CommandId = 112;
pub const CMD_FLIP_PREVIOUS: CommandId = 113;
pub const CMD_FLIP_LOAD: CommandId = 114;
pub const CMD_FLIP_SAVE: CommandId = 115;
pub const CMD_ATTACH_TAPE: CommandId = 116;
pub const CMD_DETACH_TAPE: CommandId = 117;
pub const CMD_DATASETTE_STOP: CommandId = 118;
pub const CMD_DATASETTE_START: CommandId = 119;
pub const CMD_DATASETTE_FORWARD: CommandId = 120;
pub const CMD_DATASETTE_REWIND: CommandId = 121;
pub const CMD_DATASETTE_RECORD: CommandId = 122;
pub const CMD_DATASETTE_RESET: CommandId = 123;
pub const CMD_DATASETTE_RESET_COUNTER: CommandId = 124;
pub const CMD_RESET_HARD: CommandId = 125;
pub const CMD_RESET_SOFT: CommandId = 126;
pub const CMD_RESET_DRIVE_8: CommandId = 127;
pub const CMD_RESET_DRIVE_9: CommandId = 128;
pub const CMD_RESET_DRIVE_10: CommandId = 129;
pub const CMD_RESET_DRIVE_11: CommandId = 130;
pub const CMD_EXIT: CommandId = 131;

// Edit
pub const CMD_COPY: CommandId = 200;
pub const CMD_PASTE: CommandId = 201;

// Snapshot
pub const CMD_SNAPSHOT_LOAD: CommandId = 300;
pub const CMD_SNAPSHOT_SAVE: CommandId = 301;
pub const CMD_EVENT_TOGGLE_RECORD: CommandId = 302;
pub const CMD_EVENT_TOGGLE_PLAYBACK: CommandId = 303;
pub const CMD_EVENT_SET_MILESTONE: CommandId = 304;
pub const CMD_EVENT_RESET_MILESTONE: CommandId = 305;
pub const CMD_EVENT_START_SAVE: CommandId = 306;
pub const CMD_EVENT_START_LOAD: CommandId = 307;
pub const CMD_EVENT_START_RESET: CommandId = 308;
pub const CMD_EVENT_START_PLAYBACK: CommandId = 309;
pub const CMD_EVENT_DIRECTORY: CommandId = 310;
pub const CMD_MEDIA_FILE: CommandId = 311;
pub const CMD_SOUND_RECORD_START: CommandId = 312;
pub const CMD_SOUND_RECORD_STOP: CommandId = 313;

// Options
pub const CMD_REFRESH_AUTO: CommandId = 400;
/// `CMD_REFRESH_1 + n - 1` selects a refresh rate of 1/n.
pub const CMD_REFRESH_1: CommandId = 401;
pub const CMD_SPEED_200: CommandId = 411;
pub const CMD_SPEED_100: CommandId = 412;
pub const CMD_SPEED_50: CommandId = 413;
pub const CMD_SPEED_20: CommandId = 414;
pub const CMD_SPEED_10: CommandId = 415;
pub const CMD_SPEED_NO_LIMIT: CommandId = 416;
pub const CMD_SPEED_CUSTOM: CommandId = 417;
pub const CMD_WARP_MODE: CommandId = 418;
pub const CMD_PAUSE: CommandId = 419;
pub const CMD_ADVANCE_FRAME: CommandId = 420;
pub const CMD_FULLSCREEN: CommandId = 421;
pub const CMD_STATUSBAR: CommandId = 422;
pub const CMD_TRUE_DRIVE_EMULATION: CommandId = 423;
pub const CMD_AUTOSTART_HANDLE_TDE: CommandId = 424;
pub const CMD_VIRTUAL_DEVICES: CommandId = 425;
pub const CMD_SOUND: CommandId = 426;
pub const CMD_JOYKEYS: CommandId = 427;
pub const CMD_JOY_OPPOSITE: CommandId = 428;
pub const CMD_SWAP_JOYSTICKS: CommandId = 429;
pub const CMD_SWAP_USERPORT_JOYSTICKS: CommandId = 430;

// Settings
pub const CMD_VIDEO_PAL: CommandId = 500;
pub const CMD_VIDEO_NTSC: CommandId = 501;
pub const CMD_VIDEO_NTSC_OLD: CommandId = 502;
pub const CMD_JAM_ACTION: CommandId = 510;
pub const CMD_DRIVE_SOUND: CommandId = 511;
pub const CMD_SCREENSHOT_SETTINGS: CommandId = 512;
pub const CMD_RAM_SETTINGS: CommandId = 513;
pub const CMD_SOUND_SETTINGS: CommandId = 514;
pub const CMD_NETWORK_SETTINGS: CommandId = 515;
pub const CMD_AUTOSTART_SETTINGS: CommandId = 516;
pub const CMD_JOYSTICK_SETTINGS: CommandId = 517;
pub const CMD_SETTINGS_SAVE: CommandId = 520;
pub const CMD_SETTINGS_LOAD: CommandId = 521;
pub const CMD_SETTINGS_SAVE_FILE: CommandId = 522;
pub const CMD_SETTINGS_LOAD_FILE: CommandId = 523;
pub const CMD_SETTINGS_DEFAULT: CommandId = 524;
pub const CMD_SAVE_ON_EXIT: CommandId = 525;
pub const CMD_CONFIRM_ON_EXIT: CommandId = 526;
/// Language items occupy `CMD_LANGUAGE_BASE..CMD_LANGUAGE_BASE + 13`, in
/// [`Language::ALL`] order.
pub const CMD_LANGUAGE_BASE: CommandId = 540;

// Help
pub const CMD_MONITOR: CommandId = 600;
pub const CMD_ABOUT: CommandId = 601;
pub const CMD_CONTRIBUTORS: CommandId = 602;
pub const CMD_LICENSE: CommandId = 603;
pub const CMD_WARRANTY: CommandId = 604;
pub const CMD_CMDLINE: CommandId = 605;
pub const CMD_FEATURES: CommandId = 606;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Autostart,
    AttachDisk(u8),
    DetachDisk(u8),
    DetachAllDisks,
    Fliplist(FlipOp),
    FliplistLoad,
    FliplistSave,
    AttachTape,
    DetachTape,
    Datasette(DatasetteControl),
    Reset(ResetMode),
    ResetDrive(u8),
    Exit,
    Copy,
    Paste,
    SnapshotLoad,
    SnapshotSave,
    EventToggleRecord,
    EventTogglePlayback,
    EventSetMilestone,
    EventResetMilestone,
    EventDirectory,
    SoundRecordStop,
    Pause,
    AdvanceFrame,
    SwapJoysticks,
    SwapUserportJoysticks,
    Settings(SettingsDialog),
    SettingsSave,
    SettingsLoad,
    SettingsSaveFile,
    SettingsLoadFile,
    SettingsDefault,
    Monitor,
    ShowInfo(InfoPage),
    Language(Language),
    /// Flips an integer resource between zero and one.
    Toggle(&'static str),
    /// Stores one value of an enumerated integer resource.
    Select {
        resource: &'static str,
        value: i32,
    },
}

pub fn language_command(language: Language) -> CommandId {
    let index = Language::ALL
        .iter()
        .position(|l| *l == language)
        .unwrap_or_default();
    CMD_LANGUAGE_BASE + index as CommandId
}

/// Commands shared by the full emulator windows.
pub fn builtin() -> Vec<(CommandId, Command)> {
    let mut table = vec![
        (CMD_AUTOSTART, Command::Autostart),
        (CMD_DETACH_DISK_ALL, Command::DetachAllDisks),
        (CMD_FLIP_ADD, Command::Fliplist(FlipOp::Add)),
        (CMD_FLIP_REMOVE, Command::Fliplist(FlipOp::Remove)),
        (CMD_FLIP_NEXT, Command::Fliplist(FlipOp::Next)),
        (CMD_FLIP_PREVIOUS, Command::Fliplist(FlipOp::Previous)),
        (CMD_FLIP_LOAD, Command::FliplistLoad),
        (CMD_FLIP_SAVE, Command::FliplistSave),
        (CMD_ATTACH_TAPE, Command::AttachTape),
        (CMD_DETACH_TAPE, Command::DetachTape),
        (CMD_DATASETTE_STOP, Command::Datasette(DatasetteControl::Stop)),
        (CMD_DATASETTE_START, Command::Datasette(DatasetteControl::Start)),
        (CMD_DATASETTE_FORWARD, Command::Datasette(DatasetteControl::Forward)),
        (CMD_DATASETTE_REWIND, Command::Datasette(DatasetteControl::Rewind)),
        (CMD_DATASETTE_RECORD, Command::Datasette(DatasetteControl::Record)),
        (CMD_DATASETTE_RESET, Command::Datasette(DatasetteControl::Reset)),
        (CMD_DATASETTE_RESET_COUNTER, Command::Datasette(DatasetteControl::ResetCounter)),
        (CMD_COPY, Command::Copy),
        (CMD_PASTE, Command::Paste),
        (CMD_SNAPSHOT_LOAD, Command::SnapshotLoad),
        (CMD_SNAPSHOT_SAVE, Command::SnapshotSave),
        (CMD_EVENT_TOGGLE_RECORD, Command::EventToggleRecord),
        (CMD_EVENT_TOGGLE_PLAYBACK, Command::EventTogglePlayback),
        (CMD_EVENT_SET_MILESTONE, Command::EventSetMilestone),
        (CMD_EVENT_RESET_MILESTONE, Command::EventResetMilestone),
        (CMD_EVENT_DIRECTORY, Command::EventDirectory),
        (CMD_MEDIA_FILE, Command::Settings(SettingsDialog::MediaFile)),
        (CMD_SOUND_RECORD_START, Command::Settings(SettingsDialog::SoundRecord)),
        (CMD_SOUND_RECORD_STOP, Command::SoundRecordStop),
        (CMD_PAUSE, Command::Pause),
        (CMD_ADVANCE_FRAME, Command::AdvanceFrame),
        (CMD_SWAP_JOYSTICKS, Command::SwapJoysticks),
        (CMD_SWAP_USERPORT_JOYSTICKS, Command::SwapUserportJoysticks),
        (CMD_SPEED_CUSTOM, Command::Settings(SettingsDialog::CustomSpeed)),
        (CMD_JAM_ACTION, Command::Settings(SettingsDialog::JamAction)),
        (CMD_DRIVE_SOUND, Command::Settings(SettingsDialog::DriveSound)),
        (CMD_SCREENSHOT_SETTINGS, Command::Settings(SettingsDialog::Screenshot)),
        (CMD_RAM_SETTINGS, Command::Settings(SettingsDialog::Ram)),
        (CMD_NETWORK_SETTINGS, Command::Settings(SettingsDialog::Network)),
        (CMD_AUTOSTART_SETTINGS, Command::Settings(SettingsDialog::Autostart)),
        (CMD_JOYSTICK_SETTINGS, Command::Settings(SettingsDialog::Joystick)),
        (CMD_MONITOR, Command::Monitor),
    ];

    for (i, unit) in (8..=11u8).enumerate() {
        let i = i as CommandId;
        table.push((CMD_ATTACH_DISK_8 + i, Command::AttachDisk(unit)));
        table.push((CMD_DETACH_DISK_8 + i, Command::DetachDisk(unit)));
        table.push((CMD_RESET_DRIVE_8 + i, Command::ResetDrive(unit)));
    }

    table.extend(common());
    table
}

/// Commands every window variant carries, the audio-only player included.
pub fn common() -> Vec<(CommandId, Command)> {
    let mut table = vec![
        (CMD_RESET_HARD, Command::Reset(ResetMode::Hard)),
        (CMD_RESET_SOFT, Command::Reset(ResetMode::Soft)),
        (CMD_EXIT, Command::Exit),
        (CMD_SOUND_SETTINGS, Command::Settings(SettingsDialog::Sound)),
        (CMD_SETTINGS_SAVE, Command::SettingsSave),
        (CMD_SETTINGS_LOAD, Command::SettingsLoad),
        (CMD_SETTINGS_SAVE_FILE, Command::SettingsSaveFile),
        (CMD_SETTINGS_LOAD_FILE, Command::SettingsLoadFile),
        (CMD_SETTINGS_DEFAULT, Command::SettingsDefault),
        (CMD_ABOUT, Command::ShowInfo(InfoPage::About)),
        (CMD_CONTRIBUTORS, Command::ShowInfo(InfoPage::Contributors)),
        (CMD_LICENSE, Command::ShowInfo(InfoPage::License)),
        (CMD_WARRANTY, Command::ShowInfo(InfoPage::Warranty)),
        (CMD_CMDLINE, Command::ShowInfo(InfoPage::CommandLine)),
        (CMD_FEATURES, Command::ShowInfo(InfoPage::Features)),
    ];
    table.extend(
        Language::ALL
            .into_iter()
            .map(|lang| (language_command(lang), Command::Language(lang))),
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_ids_are_unique() {
        let table = builtin();
        let ids: HashSet<_> = table.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids.len(), table.len());
    }

    #[test]
    fn drive_commands_cover_units_8_to_11() {
        let table = builtin();
        let find = |id| table.iter().find(|(i, _)| *i == id).map(|(_, c)| *c);
        assert_eq!(find(CMD_ATTACH_DISK_8), Some(Command::AttachDisk(8)));
        assert_eq!(find(CMD_DETACH_DISK_11), Some(Command::DetachDisk(11)));
        assert_eq!(find(CMD_RESET_DRIVE_10), Some(Command::ResetDrive(10)));
    }

    #[test]
    fn language_ids_follow_language_order() {
        assert_eq!(language_command(Language::English), CMD_LANGUAGE_BASE);
        assert_eq!(language_command(Language::Turkish), CMD_LANGUAGE_BASE + 12);
    }
}
