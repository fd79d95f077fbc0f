use std::path::Path;

use anyhow::{Context, Result};

use crate::machine::{HookContext, HookOutcome, MachineClass, MachineHook, MachineProfile};
use crate::resources::ResourceStore;
use crate::translate::{Text, Translate};
use crate::ui::commands::{Command, CommandId};
use crate::ui::common;
use crate::ui::host::{Dialogs, Emulator, FileSelector, Host, SelectorStyle};
use crate::ui::menu::{MenuEntry, TemplateEntry};
use crate::ui::merge::merge;
use crate::ui::registry::CommandRegistry;
use crate::ui::sync::SyncState;

const DEFAULT_LANGUAGE: &str = "en";
const FLIPLIST_UNIT: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseChange {
    Paused,
    Resumed,
    Unchanged,
    Ignored,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ModelUpdate {
    pub refresh_menu: bool,
    pub quit: bool,
    pub pause: Option<PauseChange>,
}

impl ModelUpdate {
    fn refresh() -> Self {
        Self {
            refresh_menu: true,
            ..Default::default()
        }
    }
}

pub struct UiModel {
    class: MachineClass,
    template: Vec<TemplateEntry>,
    registry: CommandRegistry,
    hook: Option<Box<dyn MachineHook>>,
    resources: Box<dyn ResourceStore>,
    translator: Box<dyn Translate>,
    files: FileSelector,
    paused: bool,
    quit_pending: bool,
    last_error: Option<String>,
}

impl UiModel {
    pub fn new(
        profile: MachineProfile,
        resources: Box<dyn ResourceStore>,
        translator: Box<dyn Translate>,
    ) -> Self {
        Self {
            class: profile.class,
            template: profile.template,
            registry: profile.registry,
            hook: profile.hook,
            resources,
            translator,
            files: FileSelector::new(),
            paused: false,
            quit_pending: false,
            last_error: None,
        }
    }

    pub fn class(&self) -> MachineClass {
        self.class
    }

    pub fn template(&self) -> &[TemplateEntry] {
        &self.template
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn resources(&self) -> &dyn ResourceStore {
        &*self.resources
    }

    pub fn resources_mut(&mut self) -> &mut dyn ResourceStore {
        &mut *self.resources
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn quit_pending(&self) -> bool {
        self.quit_pending
    }

    pub fn request_quit(&mut self) {
        self.quit_pending = true;
    }

    pub fn language(&self) -> String {
        self.resources
            .get_string("Language")
            .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string())
    }

    pub fn text(&self, text: Text) -> String {
        self.translator.translate(text, &self.language()).into_owned()
    }

    pub fn merged_menu(&self) -> Vec<MenuEntry> {
        merge(&self.template, self.class, &*self.translator, &self.language())
    }

    pub fn sync_state(&self) -> SyncState {
        SyncState {
            paused: self.paused,
        }
    }

    /// Executes the command bound to menu id `id`.
    pub fn handle(&mut self, id: CommandId, host: &mut Host<'_>) -> Result<ModelUpdate> {
        if let Some(update) = self.run_hook(id, host) {
            return Ok(update);
        }

        let Some(command) = self.registry.decode(id) else {
            log::debug!("no command bound to menu id {id}");
            return Ok(ModelUpdate::default());
        };
        log::debug!("menu id {id}: {command:?}");

        let update = match command {
            Command::Autostart => self.with_file(
                host,
                Text::SelectAutostartImage,
                SelectorStyle::Autostart,
                false,
                |emu, path| emu.autostart(path),
            ),
            Command::AttachDisk(unit) => self.with_file(
                host,
                Text::SelectDiskImage,
                SelectorStyle::Disk,
                false,
                |emu, path| emu.attach_disk(unit, path),
            ),
            Command::DetachDisk(unit) => {
                host.emulator.detach_disk(Some(unit));
                ModelUpdate::default()
            }
            Command::DetachAllDisks => {
                host.emulator.detach_disk(None);
                ModelUpdate::default()
            }
            Command::Fliplist(op) => {
                host.emulator.fliplist(FLIPLIST_UNIT, op);
                ModelUpdate::default()
            }
            Command::FliplistLoad => self.with_file(
                host,
                Text::SelectFlipList,
                SelectorStyle::Fliplist,
                false,
                |emu, path| emu.fliplist_load(FLIPLIST_UNIT, path),
            ),
            Command::FliplistSave => self.with_file(
                host,
                Text::SelectFlipList,
                SelectorStyle::Fliplist,
                true,
                |emu, path| emu.fliplist_save(FLIPLIST_UNIT, path),
            ),
            Command::AttachTape => self.with_file(
                host,
                Text::SelectTapeImage,
                SelectorStyle::Tape,
                false,
                |emu, path| emu.attach_tape(path),
            ),
            Command::DetachTape => {
                host.emulator.detach_tape();
                ModelUpdate::default()
            }
            Command::Datasette(control) => {
                host.emulator.datasette(control);
                ModelUpdate::default()
            }
            Command::Reset(mode) => {
                host.emulator.reset(mode);
                ModelUpdate::default()
            }
            Command::ResetDrive(unit) => {
                host.emulator.reset_drive(unit);
                ModelUpdate::default()
            }
            Command::Exit => {
                self.request_quit();
                ModelUpdate {
                    quit: true,
                    ..Default::default()
                }
            }
            Command::Copy => host
                .emulator
                .copy_screen()
                .context("copy screen to clipboard")
                .map(|_| ModelUpdate::default())
                .unwrap_or_else(|err| self.note_error(&mut *host.dialogs, err)),
            Command::Paste => host
                .emulator
                .paste_text()
                .context("paste clipboard text")
                .map(|_| ModelUpdate::default())
                .unwrap_or_else(|err| self.note_error(&mut *host.dialogs, err)),
            Command::SnapshotLoad => self.with_file(
                host,
                Text::SelectSnapshot,
                SelectorStyle::Snapshot,
                false,
                |emu, path| emu.snapshot_load(path),
            ),
            Command::SnapshotSave => self.with_file(
                host,
                Text::SelectSnapshot,
                SelectorStyle::Snapshot,
                true,
                |emu, path| emu.snapshot_save(path),
            ),
            Command::EventToggleRecord => {
                let active = host.emulator.event_record_active();
                host.emulator.set_event_record(!active);
                ModelUpdate::default()
            }
            Command::EventTogglePlayback => {
                let active = host.emulator.event_playback_active();
                host.emulator.set_event_playback(!active);
                ModelUpdate::default()
            }
            Command::EventSetMilestone => {
                host.emulator.event_set_milestone();
                ModelUpdate::default()
            }
            Command::EventResetMilestone => {
                host.emulator.event_reset_milestone();
                ModelUpdate::default()
            }
            Command::EventDirectory => self.select_event_snapshots(&mut *host.dialogs),
            Command::SoundRecordStop => {
                if let Err(err) = self.resources.set_string("SoundRecordDeviceName", "") {
                    log::debug!("stop sound recording: {err}");
                }
                host.dialogs.status_text(&self.text(Text::SoundRecordingStopped));
                ModelUpdate::default()
            }
            Command::Pause => {
                let change = self.pause_emulation(!self.paused, &mut *host.emulator);
                ModelUpdate {
                    refresh_menu: true,
                    pause: Some(change),
                    ..Default::default()
                }
            }
            Command::AdvanceFrame => {
                if self.paused {
                    host.emulator.advance_frame();
                }
                ModelUpdate::default()
            }
            Command::SwapJoysticks => {
                host.emulator.swap_joysticks();
                ModelUpdate::default()
            }
            Command::SwapUserportJoysticks => {
                host.emulator.swap_userport_joysticks();
                ModelUpdate::default()
            }
            Command::Settings(dialog) => {
                host.dialogs.open_settings(dialog);
                ModelUpdate::refresh()
            }
            Command::SettingsSave => self.save_settings(&mut *host.dialogs, None),
            Command::SettingsLoad => self.load_settings(&mut *host.dialogs, None),
            Command::SettingsSaveFile => {
                let title = self.text(Text::ConfigFilenameSelect);
                match self.files.select(&mut *host.dialogs, title, SelectorStyle::Config, true) {
                    Some(path) => self.save_settings(&mut *host.dialogs, Some(&path)),
                    None => ModelUpdate::default(),
                }
            }
            Command::SettingsLoadFile => {
                let title = self.text(Text::ConfigFilenameSelect);
                match self.files.select(&mut *host.dialogs, title, SelectorStyle::Config, false) {
                    Some(path) => self.load_settings(&mut *host.dialogs, Some(&path)),
                    None => ModelUpdate::default(),
                }
            }
            Command::SettingsDefault => {
                self.resources.set_defaults();
                host.dialogs.message(&self.text(Text::DefaultsRestored));
                ModelUpdate::refresh()
            }
            Command::Monitor => {
                if !self.paused {
                    host.emulator.monitor();
                }
                ModelUpdate::default()
            }
            Command::ShowInfo(page) => {
                let (title, intro) = common::info_page_texts(page);
                let title = self.text(title);
                let intro = intro.map(|t| self.text(t)).unwrap_or_default();
                let body = host.emulator.info_text(page);
                host.dialogs.show_text(&title, &intro, &body);
                ModelUpdate::default()
            }
            Command::Language(language) => {
                if let Err(err) = self.resources.set_string("Language", language.code()) {
                    log::debug!("switch language: {err}");
                }
                ModelUpdate::refresh()
            }
            Command::Toggle(resource) => {
                if let Err(err) = self.resources.toggle(resource) {
                    log::debug!("toggle {resource}: {err}");
                }
                ModelUpdate::refresh()
            }
            Command::Select { resource, value } => {
                if let Err(err) = self.resources.set_int(resource, value) {
                    log::debug!("set {resource}={value}: {err}");
                }
                ModelUpdate::refresh()
            }
        };

        Ok(update)
    }

    /// Pauses or resumes emulation. Pausing schedules the CPU trap that
    /// enters the pause loop.
    pub fn pause_emulation(&mut self, pause: bool, emulator: &mut dyn Emulator) -> PauseChange {
        if emulator.network_connected() {
            log::debug!("network session connected, ignoring pause request");
            return PauseChange::Ignored;
        }

        match (pause, self.paused) {
            (true, false) => {
                self.paused = true;
                emulator.trigger_trap();
                log::info!("emulation paused");
                PauseChange::Paused
            }
            (false, true) => {
                self.paused = false;
                log::info!("emulation resumed");
                PauseChange::Resumed
            }
            _ => PauseChange::Unchanged,
        }
    }

    /// Settles a pending quit. Returns `true` when the application should
    /// exit; a declined confirmation clears the pending flag.
    pub fn confirm_quit(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if !self.quit_pending {
            return false;
        }

        if self.flag("ConfirmOnExit") {
            let title = self.text(Text::Question);
            let question = self.text(Text::ReallyExit);
            if !dialogs.confirm(&title, &question) {
                log::info!("exit cancelled");
                self.quit_pending = false;
                return false;
            }
        }

        if self.flag("SaveResourcesOnExit") {
            self.save_settings(dialogs, None);
        }
        true
    }

    fn flag(&self, name: &str) -> bool {
        match self.resources.get_int(name) {
            Ok(v) => v != 0,
            Err(err) => {
                log::debug!("{err}");
                false
            }
        }
    }

    fn run_hook(&mut self, id: CommandId, host: &mut Host<'_>) -> Option<ModelUpdate> {
        let hook = self.hook.as_mut()?;
        let language = self
            .resources
            .get_string("Language")
            .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string());
        let mut ctx = HookContext {
            emulator: &mut *host.emulator,
            dialogs: &mut *host.dialogs,
            files: &mut self.files,
            translator: &*self.translator,
            language: &language,
        };

        match hook.handle(id, &mut ctx) {
            Ok(HookOutcome::Handled) => Some(ModelUpdate::refresh()),
            Ok(HookOutcome::Ignored) => None,
            Err(err) => Some(self.note_error(&mut *host.dialogs, err)),
        }
    }

    fn with_file(
        &mut self,
        host: &mut Host<'_>,
        title: Text,
        style: SelectorStyle,
        save: bool,
        action: impl FnOnce(&mut dyn Emulator, &Path) -> Result<()>,
    ) -> ModelUpdate {
        let title = self.text(title);
        let Some(path) = self.files.select(&mut *host.dialogs, title, style, save) else {
            return ModelUpdate::default();
        };

        match action(&mut *host.emulator, &path).with_context(|| format!("{}", path.display())) {
            Ok(()) => {
                self.last_error = None;
                ModelUpdate::refresh()
            }
            Err(err) => self.note_error(&mut *host.dialogs, err),
        }
    }

    fn select_event_snapshots(&mut self, dialogs: &mut dyn Dialogs) -> ModelUpdate {
        let picks = [
            (Text::SelectStartSnapshot, SelectorStyle::EventStart, "EventStartSnapshot"),
            (Text::SelectEndSnapshot, SelectorStyle::EventEnd, "EventEndSnapshot"),
        ];
        for (title, style, resource) in picks {
            let title = self.text(title);
            if let Some(path) = self.files.select(dialogs, title, style, true) {
                if let Err(err) = self.resources.set_string(resource, &path.to_string_lossy()) {
                    log::debug!("{err}");
                }
            }
        }
        ModelUpdate::default()
    }

    fn save_settings(&mut self, dialogs: &mut dyn Dialogs, path: Option<&Path>) -> ModelUpdate {
        match self.resources.save(path) {
            Ok(()) => {
                self.last_error = None;
                dialogs.message(&self.text(Text::SettingsSaved));
            }
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err.to_string());
                dialogs.error(&self.text(Text::CannotSaveSettings));
            }
        }
        ModelUpdate::default()
    }

    fn load_settings(&mut self, dialogs: &mut dyn Dialogs, path: Option<&Path>) -> ModelUpdate {
        match self.resources.load(path) {
            Ok(()) => {
                self.last_error = None;
                dialogs.message(&self.text(Text::SettingsLoaded));
            }
            Err(err) => {
                log::warn!("{err}");
                self.last_error = Some(err.to_string());
                dialogs.error(&self.text(Text::CannotLoadSettings));
            }
        }
        ModelUpdate::refresh()
    }

    fn note_error(&mut self, dialogs: &mut dyn Dialogs, err: anyhow::Error) -> ModelUpdate {
        let text = format!("{err:#}");
        log::warn!("{text}");
        dialogs.error(&text);
        self.last_error = Some(text);
        ModelUpdate::refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::machine::c64;
    use crate::resources::{ResourceDefault, Resources};
    use crate::translate::Catalog;
    use crate::ui::commands::*;
    use crate::ui::headless::{RecordingEmulator, ScriptedDialogs};

    fn model(class: MachineClass) -> UiModel {
        let profile = MachineProfile::for_class(class).unwrap();
        let mut resources = Resources::new();
        resources.register_all(&profile.defaults);
        UiModel::new(profile, Box::new(resources), Box::new(Catalog))
    }

    fn snapshot(m: &UiModel) -> Vec<(String, String)> {
        let profile = MachineProfile::for_class(m.class()).unwrap();
        profile
            .defaults
            .iter()
            .map(|d: &ResourceDefault| {
                let v = m.resources().get_value(d.name).unwrap();
                (d.name.to_string(), v.to_string())
            })
            .collect()
    }

    struct Rig {
        emu: RecordingEmulator,
        dialogs: ScriptedDialogs,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                emu: RecordingEmulator::new(),
                dialogs: ScriptedDialogs::new(),
            }
        }

        fn handle(&mut self, m: &mut UiModel, id: CommandId) -> ModelUpdate {
            let mut host = Host::new(&mut self.emu, &mut self.dialogs);
            m.handle(id, &mut host).unwrap()
        }
    }

    #[test]
    fn toggle_command_flips_resource() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        let update = rig.handle(&mut m, CMD_WARP_MODE);
        assert!(update.refresh_menu);
        assert_eq!(m.resources().get_int("WarpMode").unwrap(), 1);
    }

    #[test]
    fn select_command_stores_value() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.handle(&mut m, CMD_SPEED_NO_LIMIT);
        assert_eq!(m.resources().get_int("Speed").unwrap(), 0);
        rig.handle(&mut m, CMD_VIDEO_NTSC);
        assert_eq!(m.resources().get_int("MachineVideoStandard").unwrap(), 2);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        let before = snapshot(&m);
        let update = rig.handle(&mut m, 9999);
        assert_eq!(update, ModelUpdate::default());
        assert_eq!(snapshot(&m), before);
        assert!(rig.emu.take_log().is_empty());
        assert!(rig.dialogs.log.is_empty());
    }

    #[test]
    fn machine_hook_runs_first() {
        let mut m = model(MachineClass::C64Sc);
        let mut rig = Rig::new();
        rig.handle(&mut m, c64::CMD_MODEL_BASE + 1);
        assert_eq!(rig.emu.take_log(), vec!["set_model c64c"]);

        rig.handle(&mut m, c64::CMD_SID_SETTINGS);
        assert_eq!(rig.dialogs.log, vec!["settings Sid"]);
    }

    #[test]
    fn handled_hook_stops_dispatch() {
        struct ClaimAll;
        impl MachineHook for ClaimAll {
            fn handle(&mut self, _id: CommandId, _ctx: &mut HookContext<'_>) -> Result<HookOutcome> {
                Ok(HookOutcome::Handled)
            }
        }

        let mut profile = MachineProfile::for_class(MachineClass::C64).unwrap();
        let mut resources = Resources::new();
        resources.register_all(&profile.defaults);
        profile.hook = Some(Box::new(ClaimAll));
        let mut m = UiModel::new(profile, Box::new(resources), Box::new(Catalog));

        let mut rig = Rig::new();
        rig.handle(&mut m, CMD_WARP_MODE);
        assert_eq!(m.resources().get_int("WarpMode").unwrap(), 0);
    }

    #[test]
    fn pause_toggles_and_schedules_trap() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        let update = rig.handle(&mut m, CMD_PAUSE);
        assert_eq!(update.pause, Some(PauseChange::Paused));
        assert!(m.is_paused());
        assert!(rig.emu.take_trap());

        let update = rig.handle(&mut m, CMD_PAUSE);
        assert_eq!(update.pause, Some(PauseChange::Resumed));
        assert!(!m.is_paused());
        assert!(!rig.emu.take_trap());
    }

    #[test]
    fn network_session_blocks_pause() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.emu.network = true;
        let update = rig.handle(&mut m, CMD_PAUSE);
        assert_eq!(update.pause, Some(PauseChange::Ignored));
        assert!(!m.is_paused());
        assert!(!rig.emu.take_trap());
    }

    #[test]
    fn frame_advance_and_monitor_depend_on_pause() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.handle(&mut m, CMD_ADVANCE_FRAME);
        rig.handle(&mut m, CMD_MONITOR);
        assert_eq!(rig.emu.take_log(), vec!["monitor"]);

        rig.handle(&mut m, CMD_PAUSE);
        rig.emu.take_log();
        rig.handle(&mut m, CMD_ADVANCE_FRAME);
        rig.handle(&mut m, CMD_MONITOR);
        assert_eq!(rig.emu.take_log(), vec!["advance_frame"]);
    }

    #[test]
    fn attach_failure_is_reported() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.emu.fail_media = true;
        rig.dialogs.push_file(PathBuf::from("/disks/game.d64"));
        rig.handle(&mut m, CMD_ATTACH_DISK_9);
        assert_eq!(rig.dialogs.log.len(), 1);
        assert!(rig.dialogs.log[0].starts_with("error /disks/game.d64"));
        assert!(m.last_error().is_some());
    }

    #[test]
    fn file_requests_remember_directory_per_style() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.dialogs.push_file(PathBuf::from("/disks/a.d64"));
        rig.handle(&mut m, CMD_ATTACH_DISK_8);
        rig.handle(&mut m, CMD_ATTACH_DISK_8);
        rig.handle(&mut m, CMD_ATTACH_TAPE);

        let requests = &rig.dialogs.requests;
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].initial_dir, None);
        assert_eq!(requests[1].initial_dir, Some(PathBuf::from("/disks")));
        assert_eq!(requests[2].style, SelectorStyle::Tape);
        assert_eq!(requests[2].initial_dir, None);
        assert_eq!(rig.emu.take_log(), vec!["attach_disk 8 /disks/a.d64"]);
    }

    #[test]
    fn settings_round_trip_through_chosen_file() {
        let dir = std::env::temp_dir().join("menusync_test_model");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");
        let _ = std::fs::remove_file(&path);

        let mut m = model(MachineClass::C128);
        let mut rig = Rig::new();
        rig.handle(&mut m, CMD_WARP_MODE);
        rig.dialogs.push_file(path.clone());
        rig.handle(&mut m, CMD_SETTINGS_SAVE_FILE);
        assert_eq!(rig.dialogs.log, vec!["message Settings saved successfully."]);

        rig.handle(&mut m, CMD_SETTINGS_DEFAULT);
        assert_eq!(m.resources().get_int("WarpMode").unwrap(), 0);

        rig.dialogs.push_file(path.clone());
        rig.handle(&mut m, CMD_SETTINGS_LOAD_FILE);
        assert_eq!(m.resources().get_int("WarpMode").unwrap(), 1);
        assert_eq!(
            rig.dialogs.log.last().map(String::as_str),
            Some("message Settings loaded successfully.")
        );

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn loading_a_missing_file_reports_error() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.dialogs
            .push_file(std::env::temp_dir().join("menusync_test_model_missing.json"));
        rig.handle(&mut m, CMD_SETTINGS_LOAD_FILE);
        assert_eq!(rig.dialogs.log, vec!["error Cannot load settings."]);
    }

    #[test]
    fn language_switch_and_translated_messages() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        rig.handle(&mut m, language_command(crate::translate::Language::German));
        assert_eq!(m.language(), "de");
        rig.handle(&mut m, CMD_SETTINGS_DEFAULT);
        // Defaults restore English before the message is rendered.
        assert_eq!(rig.dialogs.log, vec!["message Default settings restored."]);
    }

    #[test]
    fn quit_needs_confirmation_when_configured() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        assert!(!m.confirm_quit(&mut rig.dialogs));

        rig.handle(&mut m, CMD_EXIT);
        rig.dialogs.confirm_answer = false;
        assert!(!m.confirm_quit(&mut rig.dialogs));
        assert!(!m.quit_pending());

        rig.handle(&mut m, CMD_EXIT);
        rig.dialogs.confirm_answer = true;
        assert!(m.confirm_quit(&mut rig.dialogs));
        assert_eq!(
            rig.dialogs.log,
            vec![
                "confirm Do you really want to exit?",
                "confirm Do you really want to exit?"
            ]
        );
    }

    #[test]
    fn info_pages_show_emulator_text() {
        let mut m = model(MachineClass::Vsid);
        let mut rig = Rig::new();
        rig.handle(&mut m, CMD_CONTRIBUTORS);
        assert_eq!(rig.dialogs.log, vec!["show Contributors...: Who made what?"]);
    }

    #[test]
    fn sound_record_stop_clears_device() {
        let mut m = model(MachineClass::C64);
        let mut rig = Rig::new();
        m.resources_mut()
            .set_string("SoundRecordDeviceName", "wav")
            .unwrap();
        rig.handle(&mut m, CMD_SOUND_RECORD_STOP);
        assert_eq!(m.resources().get_string("SoundRecordDeviceName").unwrap(), "");
        assert_eq!(rig.dialogs.log, vec!["status Sound recording stopped..."]);
    }
}
