//! Collaborators the menu core drives: the emulated machine and the
//! modal dialogs of the host toolkit.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    Hard,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetteControl {
    Stop,
    Start,
    Forward,
    Rewind,
    Record,
    Reset,
    ResetCounter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOp {
    Add,
    Remove,
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    About,
    Contributors,
    License,
    Warranty,
    CommandLine,
    Features,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsDialog {
    CustomSpeed,
    JamAction,
    DriveSound,
    Screenshot,
    Ram,
    Sound,
    Network,
    Autostart,
    Joystick,
    SoundRecord,
    MediaFile,
    Vicii,
    Sid,
    Cartridge,
    CustomC64Model,
    Vdc,
    C128,
}

/// Kind of file a requester is opened for. The model remembers the last
/// directory per style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorStyle {
    Disk,
    Tape,
    Autostart,
    Snapshot,
    Fliplist,
    Config,
    EventStart,
    EventEnd,
    Psid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRequest {
    pub title: String,
    pub style: SelectorStyle,
    pub save: bool,
    pub initial_dir: Option<PathBuf>,
}

/// Remembers the directory of the last file picked per selector style and
/// starts the next requester of that style there.
#[derive(Debug, Clone, Default)]
pub struct FileSelector {
    dirs: HashMap<SelectorStyle, PathBuf>,
}

impl FileSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(
        &mut self,
        dialogs: &mut dyn Dialogs,
        title: String,
        style: SelectorStyle,
        save: bool,
    ) -> Option<PathBuf> {
        let request = FileRequest {
            title,
            style,
            save,
            initial_dir: self.dirs.get(&style).cloned(),
        };
        let path = dialogs.browse_file(&request)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.dirs.insert(style, dir.to_path_buf());
        }
        Some(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsidInfo {
    pub songs: u16,
    pub default_song: u16,
}

pub trait Emulator {
    /// Schedules the pause trap at the next safe CPU instruction boundary.
    /// The emulator then calls `EventLoop::pause_trap`.
    fn trigger_trap(&mut self);
    fn suspend_speed_eval(&mut self);
    fn advance_frame(&mut self);
    fn network_connected(&self) -> bool;

    fn reset(&mut self, mode: ResetMode);
    fn reset_drive(&mut self, unit: u8);
    fn autostart(&mut self, path: &Path) -> Result<()>;
    fn attach_disk(&mut self, unit: u8, path: &Path) -> Result<()>;
    /// `None` detaches every drive.
    fn detach_disk(&mut self, unit: Option<u8>);
    fn attach_tape(&mut self, path: &Path) -> Result<()>;
    fn detach_tape(&mut self);
    fn datasette(&mut self, control: DatasetteControl);
    fn fliplist(&mut self, unit: u8, op: FlipOp);
    fn fliplist_load(&mut self, unit: u8, path: &Path) -> Result<()>;
    fn fliplist_save(&mut self, unit: u8, path: &Path) -> Result<()>;
    fn snapshot_load(&mut self, path: &Path) -> Result<()>;
    fn snapshot_save(&mut self, path: &Path) -> Result<()>;

    fn copy_screen(&mut self) -> Result<()>;
    fn paste_text(&mut self) -> Result<()>;
    fn swap_joysticks(&mut self);
    fn swap_userport_joysticks(&mut self);
    fn monitor(&mut self);

    fn event_record_active(&self) -> bool;
    fn set_event_record(&mut self, active: bool);
    fn event_playback_active(&self) -> bool;
    fn set_event_playback(&mut self, active: bool);
    fn event_set_milestone(&mut self);
    fn event_reset_milestone(&mut self);

    fn set_model(&mut self, model: &str);
    fn load_psid(&mut self, path: &Path) -> Result<PsidInfo>;
    fn set_tune(&mut self, tune: u16);

    /// Returns `true` when joystick emulation consumed the key.
    fn joystick_handle_key(&mut self, key: u8, pressed: bool) -> bool;
    fn keyboard_key(&mut self, key: u8, pressed: bool);

    fn info_text(&self, page: InfoPage) -> String;
}

pub trait Dialogs {
    fn browse_file(&mut self, request: &FileRequest) -> Option<PathBuf>;
    fn message(&mut self, text: &str);
    fn error(&mut self, text: &str);
    fn status_text(&mut self, text: &str);
    fn confirm(&mut self, title: &str, question: &str) -> bool;
    fn show_text(&mut self, title: &str, intro: &str, body: &str);
    fn open_settings(&mut self, dialog: SettingsDialog);
}

pub struct Host<'a> {
    pub emulator: &'a mut dyn Emulator,
    pub dialogs: &'a mut dyn Dialogs,
}

impl<'a> Host<'a> {
    pub fn new(emulator: &'a mut dyn Emulator, dialogs: &'a mut dyn Dialogs) -> Self {
        Self { emulator, dialogs }
    }
}
