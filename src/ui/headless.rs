//! In-memory toolkit, emulator and dialogs. The `run` subcommand replays
//! scripts against them and the tests drive the loop through them.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::ui::commands::CommandId;
use crate::ui::host::{
    DatasetteControl, Dialogs, Emulator, FileRequest, FlipOp, InfoPage, PsidInfo, ResetMode,
    SettingsDialog,
};
use crate::ui::menu::{MenuEntry, CHECKED};
use crate::ui::toolkit::{MenuCode, MenuError, MenuHandle, Message, SelectedItem, Toolkit, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolkitCall {
    CreateMenu(WindowId),
    DestroyMenu(WindowId, MenuHandle),
    SetChecked(MenuHandle, CommandId, bool),
    RefreshMenu(WindowId, MenuHandle),
    SetTitle(WindowId, String),
    Redraw(WindowId),
}

#[derive(Debug)]
struct HeadlessMenu {
    window: WindowId,
    entries: Vec<MenuEntry>,
    checked: BTreeMap<CommandId, bool>,
}

/// Scripted window system. Item codes are the command ids themselves.
#[derive(Debug, Default)]
pub struct HeadlessToolkit {
    next_window: u32,
    next_menu: u32,
    menus: HashMap<MenuHandle, HeadlessMenu>,
    queues: BTreeMap<WindowId, VecDeque<Message>>,
    /// Messages and the wait count at which they are delivered.
    scheduled: Vec<(usize, WindowId, Message)>,
    chains: HashMap<CommandId, CommandId>,
    titles: BTreeMap<WindowId, String>,
    calls: Vec<ToolkitCall>,
    fail_create: bool,
    closed: bool,
    close_when_drained: bool,
    waits: usize,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_window(&mut self) -> WindowId {
        self.next_window += 1;
        let id = WindowId(self.next_window);
        self.queues.insert(id, VecDeque::new());
        id
    }

    pub fn push(&mut self, window: WindowId, message: Message) {
        self.queues.entry(window).or_default().push_back(message);
    }

    pub fn schedule(&mut self, window: WindowId, message: Message) {
        self.schedule_after(1, window, message);
    }

    /// Queues `message` for delivery on the `waits`-th wait from now.
    pub fn schedule_after(&mut self, waits: usize, window: WindowId, message: Message) {
        self.scheduled.push((self.waits + waits.max(1), window, message));
    }

    /// Builds a pick message for the chain `ids`, selected in one menu
    /// session.
    pub fn pick_message(&mut self, ids: &[CommandId]) -> Option<Message> {
        let (first, _) = ids.split_first()?;
        for pair in ids.windows(2) {
            self.chains.insert(pair[0], pair[1]);
        }
        if let Some(last) = ids.last() {
            self.chains.remove(last);
        }
        Some(Message::MenuPick(MenuCode(*first)))
    }

    pub fn pick(&mut self, window: WindowId, ids: &[CommandId]) {
        if let Some(message) = self.pick_message(ids) {
            self.push(window, message);
        }
    }

    pub fn fail_menu_creation(&mut self, fail: bool) {
        self.fail_create = fail;
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Closes the event source once every queued and scheduled message
    /// has been delivered.
    pub fn close_when_drained(&mut self) {
        self.close_when_drained = true;
    }

    pub fn pending(&self) -> bool {
        self.queues.values().any(|q| !q.is_empty())
    }

    pub fn waits(&self) -> usize {
        self.waits
    }

    pub fn title(&self, window: WindowId) -> Option<&str> {
        self.titles.get(&window).map(String::as_str)
    }

    pub fn menu_of(&self, window: WindowId) -> Option<MenuHandle> {
        self.menus
            .iter()
            .find(|(_, m)| m.window == window)
            .map(|(handle, _)| *handle)
    }

    pub fn entries(&self, menu: MenuHandle) -> Option<&[MenuEntry]> {
        self.menus.get(&menu).map(|m| m.entries.as_slice())
    }

    pub fn is_checked(&self, menu: MenuHandle, id: CommandId) -> bool {
        self.menus
            .get(&menu)
            .and_then(|m| m.checked.get(&id).copied())
            .unwrap_or(false)
    }

    pub fn checked_state(&self, menu: MenuHandle) -> BTreeMap<CommandId, bool> {
        self.menus
            .get(&menu)
            .map(|m| m.checked.clone())
            .unwrap_or_default()
    }

    pub fn calls(&self) -> &[ToolkitCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<ToolkitCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Toolkit for HeadlessToolkit {
    fn create_menu(
        &mut self,
        window: WindowId,
        entries: &[MenuEntry],
    ) -> Result<MenuHandle, MenuError> {
        self.calls.push(ToolkitCall::CreateMenu(window));
        if std::mem::take(&mut self.fail_create) {
            return Err(MenuError::Create("scripted failure".to_string()));
        }
        if !entries.last().is_some_and(MenuEntry::is_end) {
            return Err(MenuError::Create("menu is not terminated".to_string()));
        }

        self.next_menu += 1;
        let handle = MenuHandle(self.next_menu);
        let checked = entries
            .iter()
            .filter_map(|e| e.command.map(|id| (id, e.flags & CHECKED != 0)))
            .collect();
        self.menus.insert(
            handle,
            HeadlessMenu {
                window,
                entries: entries.to_vec(),
                checked,
            },
        );
        Ok(handle)
    }

    fn destroy_menu(&mut self, window: WindowId, menu: MenuHandle) {
        self.calls.push(ToolkitCall::DestroyMenu(window, menu));
        self.menus.remove(&menu);
    }

    fn set_checked(&mut self, menu: MenuHandle, command: CommandId, checked: bool) {
        self.calls.push(ToolkitCall::SetChecked(menu, command, checked));
        if let Some(m) = self.menus.get_mut(&menu) {
            if let Some(state) = m.checked.get_mut(&command) {
                *state = checked;
            }
        }
    }

    fn refresh_menu(&mut self, window: WindowId, menu: MenuHandle) {
        self.calls.push(ToolkitCall::RefreshMenu(window, menu));
    }

    fn selected_item(&self, menu: MenuHandle, code: MenuCode) -> Option<SelectedItem> {
        let m = self.menus.get(&menu)?;
        let id = code.0;
        if !m.entries.iter().any(|e| e.command == Some(id)) {
            return None;
        }
        Some(SelectedItem {
            command: id,
            next: self.chains.get(&id).map_or(MenuCode::NULL, |n| MenuCode(*n)),
        })
    }

    fn next_message(&mut self, window: WindowId) -> Option<Message> {
        self.queues.get_mut(&window)?.pop_front()
    }

    fn wait(&mut self, _timeout: Option<Duration>) -> bool {
        self.waits += 1;
        if self.closed {
            return false;
        }
        let now = self.waits;
        let (due, later): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.scheduled).into_iter().partition(|(at, _, _)| *at <= now);
        self.scheduled = later;
        for (_, window, message) in due {
            self.push(window, message);
        }
        if self.close_when_drained && !self.pending() && self.scheduled.is_empty() {
            log::debug!("script drained, closing the event source");
            self.closed = true;
        }
        !self.closed
    }

    fn set_window_title(&mut self, window: WindowId, title: &str) {
        self.calls.push(ToolkitCall::SetTitle(window, title.to_string()));
        self.titles.insert(window, title.to_string());
    }

    fn redraw(&mut self, window: WindowId) {
        self.calls.push(ToolkitCall::Redraw(window));
    }
}

#[derive(Debug)]
pub struct RecordingEmulator {
    log: Vec<String>,
    pub network: bool,
    /// Keys claimed by the joystick emulation.
    pub joystick_keys: HashSet<u8>,
    /// Makes media and snapshot operations fail.
    pub fail_media: bool,
    pub psid_songs: u16,
    pub psid_default_song: u16,
    trap_pending: bool,
    event_record: bool,
    event_playback: bool,
}

impl Default for RecordingEmulator {
    fn default() -> Self {
        Self {
            log: Vec::new(),
            network: false,
            joystick_keys: HashSet::new(),
            fail_media: false,
            psid_songs: 1,
            psid_default_song: 1,
            trap_pending: false,
            event_record: false,
            event_playback: false,
        }
    }
}

impl RecordingEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    pub fn take_trap(&mut self) -> bool {
        std::mem::take(&mut self.trap_pending)
    }

    fn record(&mut self, entry: String) {
        log::trace!("emulator: {entry}");
        self.log.push(entry);
    }

    fn media(&mut self, what: &str, path: &Path) -> Result<()> {
        if self.fail_media {
            return Err(anyhow!("cannot open {what}"));
        }
        self.record(format!("{what} {}", path.display()));
        Ok(())
    }
}

fn direction(pressed: bool) -> &'static str {
    if pressed {
        "down"
    } else {
        "up"
    }
}

impl Emulator for RecordingEmulator {
    fn trigger_trap(&mut self) {
        self.trap_pending = true;
        self.record("trigger_trap".to_string());
    }

    fn suspend_speed_eval(&mut self) {
        self.record("suspend_speed_eval".to_string());
    }

    fn advance_frame(&mut self) {
        self.record("advance_frame".to_string());
    }

    fn network_connected(&self) -> bool {
        self.network
    }

    fn reset(&mut self, mode: ResetMode) {
        self.record(format!("reset {mode:?}"));
    }

    fn reset_drive(&mut self, unit: u8) {
        self.record(format!("reset_drive {unit}"));
    }

    fn autostart(&mut self, path: &Path) -> Result<()> {
        self.media("autostart", path)
    }

    fn attach_disk(&mut self, unit: u8, path: &Path) -> Result<()> {
        self.media(&format!("attach_disk {unit}"), path)
    }

    fn detach_disk(&mut self, unit: Option<u8>) {
        match unit {
            Some(unit) => self.record(format!("detach_disk {unit}")),
            None => self.record("detach_disk all".to_string()),
        }
    }

    fn attach_tape(&mut self, path: &Path) -> Result<()> {
        self.media("attach_tape", path)
    }

    fn detach_tape(&mut self) {
        self.record("detach_tape".to_string());
    }

    fn datasette(&mut self, control: DatasetteControl) {
        self.record(format!("datasette {control:?}"));
    }

    fn fliplist(&mut self, unit: u8, op: FlipOp) {
        self.record(format!("fliplist {unit} {op:?}"));
    }

    fn fliplist_load(&mut self, unit: u8, path: &Path) -> Result<()> {
        self.media(&format!("fliplist_load {unit}"), path)
    }

    fn fliplist_save(&mut self, unit: u8, path: &Path) -> Result<()> {
        self.media(&format!("fliplist_save {unit}"), path)
    }

    fn snapshot_load(&mut self, path: &Path) -> Result<()> {
        self.media("snapshot_load", path)
    }

    fn snapshot_save(&mut self, path: &Path) -> Result<()> {
        self.media("snapshot_save", path)
    }

    fn copy_screen(&mut self) -> Result<()> {
        self.record("copy_screen".to_string());
        Ok(())
    }

    fn paste_text(&mut self) -> Result<()> {
        self.record("paste_text".to_string());
        Ok(())
    }

    fn swap_joysticks(&mut self) {
        self.record("swap_joysticks".to_string());
    }

    fn swap_userport_joysticks(&mut self) {
        self.record("swap_userport_joysticks".to_string());
    }

    fn monitor(&mut self) {
        self.record("monitor".to_string());
    }

    fn event_record_active(&self) -> bool {
        self.event_record
    }

    fn set_event_record(&mut self, active: bool) {
        self.event_record = active;
        self.record(format!("event_record {active}"));
    }

    fn event_playback_active(&self) -> bool {
        self.event_playback
    }

    fn set_event_playback(&mut self, active: bool) {
        self.event_playback = active;
        self.record(format!("event_playback {active}"));
    }

    fn event_set_milestone(&mut self) {
        self.record("event_set_milestone".to_string());
    }

    fn event_reset_milestone(&mut self) {
        self.record("event_reset_milestone".to_string());
    }

    fn set_model(&mut self, model: &str) {
        self.record(format!("set_model {model}"));
    }

    fn load_psid(&mut self, path: &Path) -> Result<PsidInfo> {
        self.media("load_psid", path)?;
        Ok(PsidInfo {
            songs: self.psid_songs,
            default_song: self.psid_default_song,
        })
    }

    fn set_tune(&mut self, tune: u16) {
        self.record(format!("set_tune {tune}"));
    }

    fn joystick_handle_key(&mut self, key: u8, pressed: bool) -> bool {
        if !self.joystick_keys.contains(&key) {
            return false;
        }
        self.record(format!("joystick {key} {}", direction(pressed)));
        true
    }

    fn keyboard_key(&mut self, key: u8, pressed: bool) {
        self.record(format!("key {key} {}", direction(pressed)));
    }

    fn info_text(&self, page: InfoPage) -> String {
        format!("{page:?}")
    }
}

/// Dialogs that answer from a script and record what they were shown.
#[derive(Debug)]
pub struct ScriptedDialogs {
    pub confirm_answer: bool,
    files: VecDeque<PathBuf>,
    pub requests: Vec<FileRequest>,
    pub log: Vec<String>,
}

impl Default for ScriptedDialogs {
    fn default() -> Self {
        Self {
            confirm_answer: true,
            files: VecDeque::new(),
            requests: Vec::new(),
            log: Vec::new(),
        }
    }
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer for the next file requester. Requesters without a queued
    /// answer are cancelled.
    pub fn push_file(&mut self, path: PathBuf) {
        self.files.push_back(path);
    }
}

impl Dialogs for ScriptedDialogs {
    fn browse_file(&mut self, request: &FileRequest) -> Option<PathBuf> {
        self.requests.push(request.clone());
        self.files.pop_front()
    }

    fn message(&mut self, text: &str) {
        self.log.push(format!("message {text}"));
    }

    fn error(&mut self, text: &str) {
        self.log.push(format!("error {text}"));
    }

    fn status_text(&mut self, text: &str) {
        self.log.push(format!("status {text}"));
    }

    fn confirm(&mut self, _title: &str, question: &str) -> bool {
        self.log.push(format!("confirm {question}"));
        self.confirm_answer
    }

    fn show_text(&mut self, title: &str, intro: &str, _body: &str) {
        self.log.push(format!("show {title}: {intro}"));
    }

    fn open_settings(&mut self, dialog: SettingsDialog) {
        self.log.push(format!("settings {dialog:?}"));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Menu ids picked in a single menu session.
    Pick(Vec<CommandId>),
    /// Raw key code, bit 7 set on release.
    Key(u16),
    Close,
    SizeVerify,
    ChangeWindow,
    MenuVerify,
}

impl ScriptEvent {
    fn message(&self, toolkit: &mut HeadlessToolkit) -> Option<Message> {
        match self {
            ScriptEvent::Pick(ids) => toolkit.pick_message(ids),
            ScriptEvent::Key(code) => Some(Message::RawKey(*code)),
            ScriptEvent::Close => Some(Message::CloseWindow),
            ScriptEvent::SizeVerify => Some(Message::SizeVerify),
            ScriptEvent::ChangeWindow => Some(Message::ChangeWindow),
            ScriptEvent::MenuVerify => Some(Message::MenuVerify),
        }
    }
}

fn default_confirm() -> bool {
    true
}

/// A session replayed by the `run` subcommand.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default = "default_confirm")]
    pub confirm: bool,
    /// Answers to file requesters, in order.
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub network: bool,
    #[serde(default)]
    pub joystick_keys: Vec<u8>,
    /// Events delivered up front.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
    /// Events delivered after the loop first waits.
    #[serde(default)]
    pub later: Vec<ScriptEvent>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading script {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn install(
        &self,
        toolkit: &mut HeadlessToolkit,
        window: WindowId,
        emulator: &mut RecordingEmulator,
        dialogs: &mut ScriptedDialogs,
    ) {
        dialogs.confirm_answer = self.confirm;
        for file in &self.files {
            dialogs.push_file(file.clone());
        }
        emulator.network = self.network;
        emulator.joystick_keys.extend(self.joystick_keys.iter().copied());

        for event in &self.events {
            if let Some(message) = event.message(toolkit) {
                toolkit.push(window, message);
            }
        }
        for event in &self.later {
            if let Some(message) = event.message(toolkit) {
                toolkit.schedule(window, message);
            }
        }
    }
}
