//! Menu and message strings for the supported UI languages.
//!
//! Only English is complete. Other languages override what they have and
//! fall back to English for the rest.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Danish,
    German,
    Spanish,
    French,
    Italian,
    Korean,
    Dutch,
    Polish,
    Hungarian,
    Russian,
    Swedish,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::English,
        Language::Danish,
        Language::German,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Korean,
        Language::Dutch,
        Language::Polish,
        Language::Hungarian,
        Language::Russian,
        Language::Swedish,
        Language::Turkish,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Danish => "da",
            Language::German => "de",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Korean => "ko",
            Language::Dutch => "nl",
            Language::Polish => "pl",
            Language::Hungarian => "hu",
            Language::Russian => "ru",
            Language::Swedish => "sv",
            Language::Turkish => "tr",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Danish => "Dansk",
            Language::German => "Deutsch",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::Italian => "Italiano",
            Language::Korean => "한국어",
            Language::Dutch => "Nederlands",
            Language::Polish => "Polski",
            Language::Hungarian => "Magyar",
            Language::Russian => "Русский",
            Language::Swedish => "Svenska",
            Language::Turkish => "Türkçe",
        }
    }
}

/// Translatable string id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    // Menu strip titles
    File,
    Edit,
    Snapshot,
    Options,
    Settings,
    Help,
    Tune,

    // File
    Autostart,
    AttachDiskImage,
    DetachDiskImage,
    Drive(u8),
    AllDrives,
    FlipList,
    FlipAdd,
    FlipRemove,
    FlipNext,
    FlipPrevious,
    FlipLoad,
    FlipSave,
    AttachTapeImage,
    DetachTapeImage,
    DatasetteControl,
    DatasetteStop,
    DatasetteStart,
    DatasetteForward,
    DatasetteRewind,
    DatasetteRecord,
    DatasetteReset,
    DatasetteResetCounter,
    Reset,
    ResetHard,
    ResetSoft,
    Exit,

    // Edit
    Copy,
    Paste,

    // Snapshot
    LoadSnapshot,
    SaveSnapshot,
    StartStopRecording,
    StartStopPlayback,
    SetMilestone,
    ReturnToMilestone,
    RecordingStartMode,
    StartModeSave,
    StartModeLoad,
    StartModeReset,
    StartModePlayback,
    SelectHistoryDirectory,
    SaveMediaFile,
    SoundRecordStart,
    SoundRecordStop,

    // Options
    RefreshRate,
    RefreshAuto,
    Ratio(u8),
    MaximumSpeed,
    Percent(u16),
    SpeedNoLimit,
    SpeedCustom,
    WarpMode,
    Pause,
    AdvanceFrame,
    Fullscreen,
    Statusbar,
    TrueDriveEmulation,
    AutostartHandleTde,
    VirtualDevices,
    SoundPlayback,
    JoystickKeys,
    AllowOppositeDirections,
    SwapJoysticks,
    SwapUserportJoysticks,
    DoubleSize,
    DoubleScan,
    AudioLeak,
    Mouse,
    CartridgeReset,
    Ieee488,

    // Settings
    VideoStandard,
    PalG,
    NtscM,
    OldNtscM,
    C64ModelSettings,
    C64Pal,
    C64cPal,
    C64OldPal,
    C64Ntsc,
    C64cNtsc,
    C64OldNtsc,
    Drean,
    C64sxPal,
    C64sxNtsc,
    C64Jap,
    C64Gs,
    Pet64Pal,
    Pet64Ntsc,
    Ultimax,
    CustomC64Model,
    SidModel,
    Sid6581,
    Sid8580,
    C128Model,
    C128Pal,
    C128DcrPal,
    C128Ntsc,
    C128DcrNtsc,
    VdcRevision,
    VdcRev(u8),
    VdcDoubleSize,
    VdcDoubleScan,
    Vdc64kb,
    ViciiSettings,
    VdcSettings,
    SidSettings,
    CartridgeSettings,
    JoystickSettings,
    C128Settings,
    JamAction,
    DriveSound,
    ScreenshotSettings,
    RamSettings,
    SoundSettings,
    NetworkSettings,
    AutostartSettings,
    SaveSettings,
    LoadSettings,
    SaveSettingsFile,
    LoadSettingsFile,
    RestoreDefaults,
    SaveSettingsOnExit,
    ConfirmOnExit,
    LanguageMenu,
    LanguageName(Language),

    // Help
    Monitor,
    About,
    Contributors,
    License,
    NoWarranty,
    CommandLineOptions,
    CompileFeatures,

    // Audio-only player
    LoadPsid,
    NextTune,
    PreviousTune,
    PsidOverride,
    SidFilters,

    // Requesters and messages
    ConfigFilenameSelect,
    SelectDiskImage,
    SelectTapeImage,
    SelectAutostartImage,
    SelectSnapshot,
    SelectFlipList,
    SelectPsid,
    SelectStartSnapshot,
    SelectEndSnapshot,
    CannotSaveSettings,
    SettingsSaved,
    CannotLoadSettings,
    SettingsLoaded,
    DefaultsRestored,
    SoundRecordingStopped,
    Question,
    ReallyExit,
    ContributorsIntro,
    WarrantyIntro,
    CommandLineIntro,
    FeaturesIntro,
}

impl Text {
    fn english(self) -> Cow<'static, str> {
        let s = match self {
            Text::File => "File",
            Text::Edit => "Edit",
            Text::Snapshot => "Snapshot",
            Text::Options => "Options",
            Text::Settings => "Settings",
            Text::Help => "Help",
            Text::Tune => "Tune",

            Text::Autostart => "Autostart disk/tape image...",
            Text::AttachDiskImage => "Attach disk image",
            Text::DetachDiskImage => "Detach disk image",
            Text::Drive(unit) => return Cow::Owned(format!("Drive {unit}")),
            Text::AllDrives => "All",
            Text::FlipList => "Flip list",
            Text::FlipAdd => "Add current image",
            Text::FlipRemove => "Remove current image",
            Text::FlipNext => "Attach next image",
            Text::FlipPrevious => "Attach previous image",
            Text::FlipLoad => "Load flip list...",
            Text::FlipSave => "Save flip list...",
            Text::AttachTapeImage => "Attach tape image...",
            Text::DetachTapeImage => "Detach tape image",
            Text::DatasetteControl => "Datasette control",
            Text::DatasetteStop => "Stop",
            Text::DatasetteStart => "Start",
            Text::DatasetteForward => "Forward",
            Text::DatasetteRewind => "Rewind",
            Text::DatasetteRecord => "Record",
            Text::DatasetteReset => "Reset",
            Text::DatasetteResetCounter => "Reset counter",
            Text::Reset => "Reset",
            Text::ResetHard => "Hard",
            Text::ResetSoft => "Soft",
            Text::Exit => "Exit",

            Text::Copy => "Copy",
            Text::Paste => "Paste",

            Text::LoadSnapshot => "Load snapshot image...",
            Text::SaveSnapshot => "Save snapshot image...",
            Text::StartStopRecording => "Start/Stop recording history",
            Text::StartStopPlayback => "Start/Stop playback history",
            Text::SetMilestone => "Set recording milestone",
            Text::ReturnToMilestone => "Return to milestone",
            Text::RecordingStartMode => "Recording start mode",
            Text::StartModeSave => "Save new snapshot",
            Text::StartModeLoad => "Load existing snapshot",
            Text::StartModeReset => "Start with reset",
            Text::StartModePlayback => "Overwrite playback",
            Text::SelectHistoryDirectory => "Select history files/directory",
            Text::SaveMediaFile => "Save media file...",
            Text::SoundRecordStart => "Start sound record...",
            Text::SoundRecordStop => "Stop sound record",

            Text::RefreshRate => "Refresh rate",
            Text::RefreshAuto => "Auto",
            Text::Ratio(n) => return Cow::Owned(format!("1/{n}")),
            Text::MaximumSpeed => "Maximum speed",
            Text::Percent(n) => return Cow::Owned(format!("{n}%")),
            Text::SpeedNoLimit => "No limit",
            Text::SpeedCustom => "Custom",
            Text::WarpMode => "Warp mode",
            Text::Pause => "Pause",
            Text::AdvanceFrame => "Single frame advance",
            Text::Fullscreen => "Fullscreen",
            Text::Statusbar => "Statusbar",
            Text::TrueDriveEmulation => "True drive emulation",
            Text::AutostartHandleTde => "Autostart handle true drive emulation",
            Text::VirtualDevices => "Virtual device traps",
            Text::SoundPlayback => "Sound playback",
            Text::JoystickKeys => "Allow keyset joystick",
            Text::AllowOppositeDirections => "Allow opposite joystick directions",
            Text::SwapJoysticks => "Swap joysticks",
            Text::SwapUserportJoysticks => "Swap userport joysticks",
            Text::DoubleSize => "Double size",
            Text::DoubleScan => "Double scan",
            Text::AudioLeak => "Audio leak emulation",
            Text::Mouse => "Grab mouse events",
            Text::CartridgeReset => "Reset on cartridge change",
            Text::Ieee488 => "IEEE488 interface emulation",

            Text::VideoStandard => "Video standard",
            Text::PalG => "PAL-G",
            Text::NtscM => "NTSC-M",
            Text::OldNtscM => "Old NTSC-M",
            Text::C64ModelSettings => "C64 model",
            Text::C64Pal => "C64 PAL",
            Text::C64cPal => "C64C PAL",
            Text::C64OldPal => "C64 old PAL",
            Text::C64Ntsc => "C64 NTSC",
            Text::C64cNtsc => "C64C NTSC",
            Text::C64OldNtsc => "C64 old NTSC",
            Text::Drean => "Drean",
            Text::C64sxPal => "C64SX PAL",
            Text::C64sxNtsc => "C64SX NTSC",
            Text::C64Jap => "Japanese",
            Text::C64Gs => "C64 GS",
            Text::Pet64Pal => "PET64 PAL",
            Text::Pet64Ntsc => "PET64 NTSC",
            Text::Ultimax => "MAX Machine",
            Text::CustomC64Model => "Custom...",
            Text::SidModel => "SID model",
            Text::Sid6581 => "6581",
            Text::Sid8580 => "8580",
            Text::C128Model => "C128 model",
            Text::C128Pal => "C128 PAL",
            Text::C128DcrPal => "C128DCR PAL",
            Text::C128Ntsc => "C128 NTSC",
            Text::C128DcrNtsc => "C128DCR NTSC",
            Text::VdcRevision => "VDC revision",
            Text::VdcRev(n) => return Cow::Owned(format!("Rev {n}")),
            Text::VdcDoubleSize => "VDC double size",
            Text::VdcDoubleScan => "VDC double scan",
            Text::Vdc64kb => "VDC 64KB video memory",
            Text::ViciiSettings => "VIC-II settings...",
            Text::VdcSettings => "VDC settings...",
            Text::SidSettings => "SID settings...",
            Text::CartridgeSettings => "Cartridge settings...",
            Text::JoystickSettings => "Joystick settings...",
            Text::C128Settings => "C128 settings...",
            Text::JamAction => "Default CPU JAM action...",
            Text::DriveSound => "Drive sound emulation...",
            Text::ScreenshotSettings => "Screenshot settings...",
            Text::RamSettings => "RAM settings...",
            Text::SoundSettings => "Sound settings...",
            Text::NetworkSettings => "Netplay...",
            Text::AutostartSettings => "Autostart settings...",
            Text::SaveSettings => "Save current settings",
            Text::LoadSettings => "Load saved settings",
            Text::SaveSettingsFile => "Save current settings to file...",
            Text::LoadSettingsFile => "Load settings from file...",
            Text::RestoreDefaults => "Restore default settings",
            Text::SaveSettingsOnExit => "Save settings on exit",
            Text::ConfirmOnExit => "Confirm on exit",
            Text::LanguageMenu => "Language",
            Text::LanguageName(lang) => lang.native_name(),

            Text::Monitor => "Activate monitor",
            Text::About => "About...",
            Text::Contributors => "Contributors...",
            Text::License => "License...",
            Text::NoWarranty => "No warranty!...",
            Text::CommandLineOptions => "Command line options...",
            Text::CompileFeatures => "Compile time features...",

            Text::LoadPsid => "Load PSID file...",
            Text::NextTune => "Next tune",
            Text::PreviousTune => "Previous tune",
            Text::PsidOverride => "Override PSID settings",
            Text::SidFilters => "SID filters",

            Text::ConfigFilenameSelect => "Select config file",
            Text::SelectDiskImage => "Attach disk image",
            Text::SelectTapeImage => "Attach tape image",
            Text::SelectAutostartImage => "Autostart disk/tape image",
            Text::SelectSnapshot => "Select snapshot file",
            Text::SelectFlipList => "Select flip list file",
            Text::SelectPsid => "Load PSID file",
            Text::SelectStartSnapshot => "Select start snapshot for event history",
            Text::SelectEndSnapshot => "Select end snapshot for event history",
            Text::CannotSaveSettings => "Cannot save settings.",
            Text::SettingsSaved => "Settings saved successfully.",
            Text::CannotLoadSettings => "Cannot load settings.",
            Text::SettingsLoaded => "Settings loaded successfully.",
            Text::DefaultsRestored => "Default settings restored.",
            Text::SoundRecordingStopped => "Sound recording stopped...",
            Text::Question => "Question",
            Text::ReallyExit => "Do you really want to exit?",
            Text::ContributorsIntro => "Who made what?",
            Text::WarrantyIntro => "This program is distributed WITHOUT ANY WARRANTY!",
            Text::CommandLineIntro => "Which command line options are available?",
            Text::FeaturesIntro => "Which compile time features are available?",
        };
        Cow::Borrowed(s)
    }

    fn german(self) -> Option<&'static str> {
        let s = match self {
            Text::File => "Datei",
            Text::Edit => "Bearbeiten",
            Text::Options => "Optionen",
            Text::Settings => "Einstellungen",
            Text::Help => "Hilfe",
            Text::Tune => "Stück",
            Text::AttachDiskImage => "Disk Image einlegen",
            Text::DetachDiskImage => "Disk Image entfernen",
            Text::AllDrives => "Alle",
            Text::AttachTapeImage => "Band Image einlegen...",
            Text::DetachTapeImage => "Band Image entfernen",
            Text::Reset => "Zurücksetzen",
            Text::ResetHard => "Hart",
            Text::ResetSoft => "Weich",
            Text::Exit => "Beenden",
            Text::Copy => "Kopieren",
            Text::Paste => "Einfügen",
            Text::LoadSnapshot => "Snapshot Image laden...",
            Text::SaveSnapshot => "Snapshot Image speichern...",
            Text::RefreshRate => "Wiederholrate",
            Text::MaximumSpeed => "Maximale Geschwindigkeit",
            Text::SpeedNoLimit => "Kein Limit",
            Text::SpeedCustom => "Benutzerdefiniert",
            Text::WarpMode => "Warp Modus",
            Text::Pause => "Pause",
            Text::Fullscreen => "Vollbild",
            Text::TrueDriveEmulation => "Präzise Floppy Emulation",
            Text::SoundPlayback => "Audio Emulation",
            Text::SwapJoysticks => "Joystick ports austauschen",
            Text::VideoStandard => "Video Standard",
            Text::C64ModelSettings => "C64 Modell",
            Text::C128Model => "C128 Modell",
            Text::SaveSettings => "Einstellungen speichern",
            Text::LoadSettings => "Einstellungen laden",
            Text::RestoreDefaults => "Standard wiederherstellen",
            Text::SaveSettingsOnExit => "Einstellungen beim Beenden speichern",
            Text::ConfirmOnExit => "Beenden bestätigen",
            Text::LanguageMenu => "Sprache",
            Text::Monitor => "Monitor aktivieren",
            Text::About => "Über VICE...",
            Text::NextTune => "Nächstes Stück",
            Text::PreviousTune => "Vorheriges Stück",
            Text::CannotSaveSettings => "Fehler beim Speichern der Einstellungen.",
            Text::SettingsSaved => "Einstellungen erfolgreich gespeichert.",
            Text::CannotLoadSettings => "Fehler beim Laden der Einstellungen.",
            Text::SettingsLoaded => "Einstellungen erfolgreich geladen.",
            Text::DefaultsRestored => "Standardeinstellungen wiederhergestellt.",
            Text::Question => "Frage",
            Text::ReallyExit => "Wirklich beenden?",
            _ => return None,
        };
        Some(s)
    }
}

pub trait Translate {
    fn translate(&self, text: Text, language: &str) -> Cow<'static, str>;
}

/// Built-in string table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Translate for Catalog {
    fn translate(&self, text: Text, language: &str) -> Cow<'static, str> {
        match Language::from_code(language) {
            Some(Language::German) => text
                .german()
                .map(Cow::Borrowed)
                .unwrap_or_else(|| text.english()),
            Some(_) => text.english(),
            None => {
                log::debug!("unknown UI language '{language}', using English");
                text.english()
            }
        }
    }
}
