//! Message pump of the emulator windows and the pause sub-loop.

use std::time::Duration;

use crate::ui::common;
use crate::ui::host::{Emulator, Host};
use crate::ui::model::{ModelUpdate, PauseChange, UiModel};
use crate::ui::sync::sync_menu;
use crate::ui::toolkit::{MenuCode, MenuError, MenuHandle, Message, Toolkit, WindowId};

pub const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Window {
    pub id: WindowId,
    pub name: String,
    pub menu: Option<MenuHandle>,
    waiting_for_resize: bool,
    menu_failed: bool,
}

pub struct EventLoop {
    model: UiModel,
    windows: Vec<Window>,
}

impl EventLoop {
    pub fn new(model: UiModel) -> Self {
        Self {
            model,
            windows: Vec::new(),
        }
    }

    pub fn model(&self) -> &UiModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut UiModel {
        &mut self.model
    }

    pub fn is_paused(&self) -> bool {
        self.model.is_paused()
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Registers a window. Its menu is built on the next pass of
    /// [`EventLoop::handle_events`].
    pub fn open_window(&mut self, toolkit: &mut dyn Toolkit, id: WindowId, name: &str) {
        toolkit.set_window_title(id, &common::window_title(name, self.model.is_paused()));
        self.windows.push(Window {
            id,
            name: name.to_string(),
            menu: None,
            waiting_for_resize: false,
            menu_failed: false,
        });
    }

    pub fn close_window(&mut self, toolkit: &mut dyn Toolkit, id: WindowId) {
        self.menu_destroy(toolkit, id);
        self.windows.retain(|w| w.id != id);
    }

    pub fn shutdown(&mut self, toolkit: &mut dyn Toolkit) {
        let ids: Vec<_> = self.windows.iter().map(|w| w.id).collect();
        for id in ids {
            self.close_window(toolkit, id);
        }
    }

    /// Builds and attaches the merged menu of `window`, then syncs it.
    pub fn menu_create(&mut self, toolkit: &mut dyn Toolkit, window: WindowId) -> Result<(), MenuError> {
        if self.model.template().is_empty() {
            return Err(MenuError::NoTemplate);
        }
        let entries = self.model.merged_menu();
        self.menu_destroy(toolkit, window);
        let menu = toolkit.create_menu(window, &entries)?;

        let Some(w) = self.window_mut(window) else {
            toolkit.destroy_menu(window, menu);
            return Err(MenuError::Create(format!("unknown window {}", window.0)));
        };
        w.menu = Some(menu);
        w.menu_failed = false;
        log::debug!("menu for window {} built from {} entries", window.0, entries.len());

        self.menu_update(toolkit, window);
        Ok(())
    }

    pub fn menu_update(&self, toolkit: &mut dyn Toolkit, window: WindowId) {
        let Some(menu) = self.window(window).and_then(|w| w.menu) else {
            return;
        };
        sync_menu(
            toolkit,
            window,
            menu,
            self.model.registry(),
            self.model.resources(),
            self.model.sync_state(),
        );
    }

    pub fn menu_destroy(&mut self, toolkit: &mut dyn Toolkit, window: WindowId) {
        if let Some(menu) = self.window_mut(window).and_then(|w| w.menu.take()) {
            toolkit.destroy_menu(window, menu);
        }
    }

    /// Processes every pending message of every window. Returns once the
    /// queues are drained, unless a menu is open, in which case it waits
    /// for the selection.
    pub fn handle_events(&mut self, toolkit: &mut dyn Toolkit, host: &mut Host<'_>) -> LoopOutcome {
        loop {
            self.create_missing_menus(toolkit);

            let mut done = true;
            let ids: Vec<_> = self.windows.iter().map(|w| w.id).collect();
            for window in ids {
                while let Some(message) = toolkit.next_message(window) {
                    match message {
                        Message::MenuPick(code) => {
                            self.menu_pick(toolkit, host, window, code);
                            done = true;
                        }
                        Message::CloseWindow => self.model.request_quit(),
                        Message::RawKey(code) => self.raw_key(&mut *host.emulator, code),
                        Message::SizeVerify => {
                            if let Some(w) = self.window_mut(window) {
                                w.waiting_for_resize = true;
                            }
                        }
                        Message::ChangeWindow => {
                            let resized = self
                                .window_mut(window)
                                .is_some_and(|w| std::mem::take(&mut w.waiting_for_resize));
                            if resized {
                                toolkit.redraw(window);
                            }
                        }
                        Message::MenuVerify => {
                            host.emulator.suspend_speed_eval();
                            done = false;
                        }
                        Message::Other(class) => log::trace!("ignoring message class {class:#x}"),
                    }
                }
            }

            if self.model.quit_pending() && self.model.confirm_quit(&mut *host.dialogs) {
                log::info!("quit confirmed");
                return LoopOutcome::Quit;
            }
            if done {
                return LoopOutcome::Continue;
            }
            if !toolkit.wait(None) {
                log::info!("event source closed");
                return LoopOutcome::Quit;
            }
        }
    }

    /// Runs while emulation is paused, pumping messages until a resume.
    /// The emulator enters it from the trap scheduled by a pause request.
    pub fn pause_trap(&mut self, toolkit: &mut dyn Toolkit, host: &mut Host<'_>) -> LoopOutcome {
        if !self.model.is_paused() {
            return LoopOutcome::Continue;
        }

        self.display_paused(toolkit, true);
        host.emulator.suspend_speed_eval();
        while self.model.is_paused() {
            if !toolkit.wait(Some(PAUSE_POLL_INTERVAL)) {
                log::info!("event source closed while paused");
                return LoopOutcome::Quit;
            }
            if self.handle_events(toolkit, host) == LoopOutcome::Quit {
                return LoopOutcome::Quit;
            }
        }
        LoopOutcome::Continue
    }

    pub fn pause_emulation(
        &mut self,
        pause: bool,
        toolkit: &mut dyn Toolkit,
        emulator: &mut dyn Emulator,
    ) -> PauseChange {
        let change = self.model.pause_emulation(pause, emulator);
        if change == PauseChange::Resumed {
            self.display_paused(toolkit, false);
        }
        change
    }

    pub fn display_paused(&self, toolkit: &mut dyn Toolkit, paused: bool) {
        for w in &self.windows {
            toolkit.set_window_title(w.id, &common::window_title(&w.name, paused));
        }
    }

    fn create_missing_menus(&mut self, toolkit: &mut dyn Toolkit) {
        let missing: Vec<_> = self
            .windows
            .iter()
            .filter(|w| w.menu.is_none() && !w.menu_failed)
            .map(|w| w.id)
            .collect();
        for window in missing {
            if let Err(err) = self.menu_create(toolkit, window) {
                log::error!("window {} runs without a menu: {err}", window.0);
                if let Some(w) = self.window_mut(window) {
                    w.menu_failed = true;
                }
            }
        }
    }

    fn rebuild_menus(&mut self, toolkit: &mut dyn Toolkit) {
        let ids: Vec<_> = self.windows.iter().map(|w| w.id).collect();
        for id in ids {
            self.menu_destroy(toolkit, id);
            if let Some(w) = self.window_mut(id) {
                w.menu_failed = false;
            }
        }
        self.create_missing_menus(toolkit);
    }

    fn menu_pick(&mut self, toolkit: &mut dyn Toolkit, host: &mut Host<'_>, window: WindowId, code: MenuCode) {
        let Some(menu) = self.window(window).and_then(|w| w.menu) else {
            log::debug!("pick on window {} without a menu", window.0);
            return;
        };
        let language = self.model.language();

        let mut code = code;
        while code != MenuCode::NULL {
            let Some(item) = toolkit.selected_item(menu, code) else {
                break;
            };
            match self.model.handle(item.command, host) {
                Ok(update) => self.apply(toolkit, &update),
                Err(err) => log::warn!("menu id {}: {err:#}", item.command),
            }
            code = item.next;
        }

        if !common::same_language(&language, &self.model.language()) {
            log::info!("language switched to {}, rebuilding menus", self.model.language());
            self.rebuild_menus(toolkit);
            return;
        }
        let ids: Vec<_> = self.windows.iter().map(|w| w.id).collect();
        for id in ids {
            self.menu_update(toolkit, id);
        }
    }

    fn apply(&mut self, toolkit: &mut dyn Toolkit, update: &ModelUpdate) {
        if update.pause == Some(PauseChange::Resumed) {
            self.display_paused(toolkit, false);
        }
    }

    fn raw_key(&mut self, emulator: &mut dyn Emulator, code: u16) {
        if self.model.is_paused() {
            return;
        }
        let (key, pressed) = common::decode_raw_key(code);
        if !emulator.joystick_handle_key(key, pressed) {
            emulator.keyboard_key(key, pressed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{MachineClass, MachineProfile};
    use crate::resources::{ResourceStore, Resources};
    use crate::translate::{Catalog, Language};
    use crate::ui::commands::*;
    use crate::ui::headless::{HeadlessToolkit, RecordingEmulator, ScriptedDialogs, ToolkitCall};
    use crate::ui::menu::{MenuLabel, EntryKind};

    struct Rig {
        toolkit: HeadlessToolkit,
        emu: RecordingEmulator,
        dialogs: ScriptedDialogs,
        ev: EventLoop,
        window: WindowId,
    }

    impl Rig {
        fn new(class: MachineClass) -> Self {
            let profile = MachineProfile::for_class(class).unwrap();
            let mut resources = Resources::new();
            resources.register_all(&profile.defaults);
            let model = UiModel::new(profile, Box::new(resources), Box::new(Catalog));

            let mut toolkit = HeadlessToolkit::new();
            let window = toolkit.open_window();
            let mut ev = EventLoop::new(model);
            ev.open_window(&mut toolkit, window, "VICE");
            Self {
                toolkit,
                emu: RecordingEmulator::new(),
                dialogs: ScriptedDialogs::new(),
                ev,
                window,
            }
        }

        fn run(&mut self) -> LoopOutcome {
            let mut host = Host::new(&mut self.emu, &mut self.dialogs);
            self.ev.handle_events(&mut self.toolkit, &mut host)
        }

        fn trap(&mut self) -> LoopOutcome {
            let mut host = Host::new(&mut self.emu, &mut self.dialogs);
            self.ev.pause_trap(&mut self.toolkit, &mut host)
        }

        fn pick(&mut self, ids: &[CommandId]) {
            self.toolkit.pick(self.window, ids);
        }

        fn menu(&self) -> MenuHandle {
            self.ev.window(self.window).and_then(|w| w.menu).unwrap()
        }

        fn checked(&self, id: CommandId) -> bool {
            self.toolkit.is_checked(self.menu(), id)
        }

        fn int(&self, name: &str) -> i32 {
            self.ev.model().resources().get_int(name).unwrap()
        }
    }

    #[test]
    fn first_pass_builds_and_syncs_the_menu() {
        let mut rig = Rig::new(MachineClass::C64);
        assert_eq!(rig.run(), LoopOutcome::Continue);
        assert!(rig.checked(CMD_SPEED_100));
        assert!(rig.checked(CMD_SOUND));
        assert!(!rig.checked(CMD_WARP_MODE));
        assert!(rig.checked(language_command(Language::English)));
    }

    #[test]
    fn toggle_pick_updates_resource_and_checkmark() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.pick(&[CMD_WARP_MODE]);
        assert_eq!(rig.run(), LoopOutcome::Continue);
        assert_eq!(rig.int("WarpMode"), 1);
        assert!(rig.checked(CMD_WARP_MODE));
    }

    #[test]
    fn custom_speed_is_checked_for_unlisted_values() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.ev.model_mut().resources_mut().set_int("Speed", 77).unwrap();
        rig.ev.menu_update(&mut rig.toolkit, rig.window);
        assert!(rig.checked(CMD_SPEED_CUSTOM));
        assert!(!rig.checked(CMD_SPEED_100));

        rig.pick(&[CMD_SPEED_50]);
        rig.run();
        assert_eq!(rig.int("Speed"), 50);
        assert!(rig.checked(CMD_SPEED_50));
        assert!(!rig.checked(CMD_SPEED_CUSTOM));
    }

    #[test]
    fn chained_picks_run_in_order() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.pick(&[CMD_WARP_MODE, CMD_SOUND, CMD_RESET_SOFT]);
        rig.run();
        assert_eq!(rig.int("WarpMode"), 1);
        assert_eq!(rig.int("Sound"), 0);
        assert_eq!(rig.emu.take_log(), vec!["reset Soft"]);
    }

    #[test]
    fn joystick_sees_keys_before_the_keyboard() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.emu.joystick_keys.insert(0x4c);
        for code in [0x4c, 0x4c | 0x80, 0x20] {
            rig.toolkit.push(rig.window, Message::RawKey(code));
        }
        rig.run();
        assert_eq!(
            rig.emu.take_log(),
            vec!["joystick 76 down", "joystick 76 up", "key 32 down"]
        );
    }

    #[test]
    fn pause_loop_runs_until_resumed() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.pick(&[CMD_PAUSE]);
        rig.run();
        assert!(rig.ev.is_paused());
        assert!(rig.checked(CMD_PAUSE));
        assert!(rig.emu.take_trap());

        rig.toolkit.clear_calls();
        rig.emu.take_log();
        rig.toolkit.push(rig.window, Message::RawKey(0x20));
        rig.pick(&[CMD_PAUSE]);
        assert_eq!(rig.trap(), LoopOutcome::Continue);

        assert!(!rig.ev.is_paused());
        assert!(!rig.checked(CMD_PAUSE));
        assert_eq!(rig.toolkit.title(rig.window), Some("VICE"));
        assert!(rig
            .toolkit
            .calls()
            .contains(&ToolkitCall::SetTitle(rig.window, "VICE (paused)".to_string())));
        // Keys are swallowed while paused.
        assert_eq!(rig.emu.take_log(), vec!["suspend_speed_eval"]);
    }

    #[test]
    fn pause_loop_quits_when_the_source_closes() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.pick(&[CMD_PAUSE]);
        rig.run();
        rig.toolkit.close();
        assert_eq!(rig.trap(), LoopOutcome::Quit);
        assert!(rig.ev.is_paused());
    }

    #[test]
    fn idle_pause_keeps_polling_until_resumed() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.pick(&[CMD_PAUSE]);
        rig.run();
        let resume = rig.toolkit.pick_message(&[CMD_PAUSE]).unwrap();
        rig.toolkit.schedule_after(3, rig.window, resume);

        assert_eq!(rig.trap(), LoopOutcome::Continue);
        assert_eq!(rig.toolkit.waits(), 3);
        assert!(!rig.ev.is_paused());
        assert!(!rig.ev.model().quit_pending());
        assert!(rig.dialogs.log.is_empty());
    }

    #[test]
    fn pause_requests_drive_titles_and_trap() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.toolkit.clear_calls();

        let change = rig.ev.pause_emulation(true, &mut rig.toolkit, &mut rig.emu);
        assert_eq!(change, PauseChange::Paused);
        assert!(rig.ev.is_paused());
        assert!(rig.emu.take_trap());
        let resume = rig.toolkit.pick_message(&[CMD_PAUSE]).unwrap();
        rig.toolkit.schedule_after(2, rig.window, resume);
        assert_eq!(rig.trap(), LoopOutcome::Continue);
        assert!(rig
            .toolkit
            .take_calls()
            .contains(&ToolkitCall::SetTitle(rig.window, "VICE (paused)".to_string())));

        assert_eq!(
            rig.ev.pause_emulation(true, &mut rig.toolkit, &mut rig.emu),
            PauseChange::Paused
        );
        assert!(rig.emu.take_trap());
        rig.ev.display_paused(&mut rig.toolkit, true);
        assert_eq!(rig.toolkit.title(rig.window), Some("VICE (paused)"));
        let change = rig.ev.pause_emulation(false, &mut rig.toolkit, &mut rig.emu);
        assert_eq!(change, PauseChange::Resumed);
        assert!(!rig.ev.is_paused());
        assert_eq!(rig.toolkit.title(rig.window), Some("VICE"));
        assert_eq!(
            rig.ev.pause_emulation(false, &mut rig.toolkit, &mut rig.emu),
            PauseChange::Unchanged
        );

        rig.emu.network = true;
        assert_eq!(
            rig.ev.pause_emulation(true, &mut rig.toolkit, &mut rig.emu),
            PauseChange::Ignored
        );
        assert!(!rig.ev.is_paused());
        assert!(!rig.emu.take_trap());
    }

    #[test]
    fn recreating_a_menu_frees_the_old_one() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        let first = rig.menu();
        rig.toolkit.clear_calls();

        rig.ev.menu_create(&mut rig.toolkit, rig.window).unwrap();
        let second = rig.menu();
        assert_ne!(first, second);
        assert!(rig.toolkit.entries(first).is_none());
        assert_eq!(rig.toolkit.menu_of(rig.window), Some(second));
        assert_eq!(
            rig.toolkit.calls().first(),
            Some(&ToolkitCall::DestroyMenu(rig.window, first))
        );
    }

    #[test]
    fn pause_trap_without_pause_returns_immediately() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        assert_eq!(rig.trap(), LoopOutcome::Continue);
        assert_eq!(rig.toolkit.waits(), 0);
    }

    #[test]
    fn network_session_keeps_running() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.emu.network = true;
        rig.run();
        rig.pick(&[CMD_PAUSE]);
        rig.run();
        assert!(!rig.ev.is_paused());
        assert!(!rig.emu.take_trap());
        assert!(!rig.checked(CMD_PAUSE));
    }

    #[test]
    fn language_switch_rebuilds_the_menu() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        let old = rig.menu();
        rig.toolkit.clear_calls();

        rig.pick(&[language_command(Language::German)]);
        rig.run();

        let calls = rig.toolkit.take_calls();
        assert!(calls.contains(&ToolkitCall::DestroyMenu(rig.window, old)));
        assert!(calls.contains(&ToolkitCall::CreateMenu(rig.window)));
        let menu = rig.menu();
        assert_ne!(menu, old);
        let first_title = rig
            .toolkit
            .entries(menu)
            .unwrap()
            .iter()
            .find(|e| e.kind == EntryKind::Title)
            .map(|e| e.label.clone());
        assert_eq!(first_title, Some(MenuLabel::Text("Datei".to_string())));
        assert!(rig.checked(language_command(Language::German)));
        assert!(!rig.checked(language_command(Language::English)));
    }

    #[test]
    fn declined_quit_keeps_running() {
        let mut rig = Rig::new(MachineClass::C128);
        rig.run();
        rig.dialogs.confirm_answer = false;
        rig.toolkit.push(rig.window, Message::CloseWindow);
        assert_eq!(rig.run(), LoopOutcome::Continue);
        assert!(!rig.ev.model().quit_pending());

        rig.dialogs.confirm_answer = true;
        rig.pick(&[CMD_EXIT]);
        assert_eq!(rig.run(), LoopOutcome::Quit);
    }

    #[test]
    fn quit_without_confirmation() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.ev
            .model_mut()
            .resources_mut()
            .set_int("ConfirmOnExit", 0)
            .unwrap();
        rig.toolkit.push(rig.window, Message::CloseWindow);
        assert_eq!(rig.run(), LoopOutcome::Quit);
        assert!(rig.dialogs.log.is_empty());
    }

    #[test]
    fn open_menu_waits_for_the_selection() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.emu.take_log();
        rig.toolkit.push(rig.window, Message::MenuVerify);
        let pick = rig.toolkit.pick_message(&[CMD_WARP_MODE]).unwrap();
        rig.toolkit.schedule(rig.window, pick);

        assert_eq!(rig.run(), LoopOutcome::Continue);
        assert_eq!(rig.toolkit.waits(), 1);
        assert_eq!(rig.int("WarpMode"), 1);
        assert_eq!(rig.emu.take_log(), vec!["suspend_speed_eval"]);
    }

    #[test]
    fn open_menu_with_closed_source_quits() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.toolkit.push(rig.window, Message::MenuVerify);
        rig.toolkit.close();
        assert_eq!(rig.run(), LoopOutcome::Quit);
    }

    #[test]
    fn failed_menu_creation_degrades_to_no_menu() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.toolkit.fail_menu_creation(true);
        assert_eq!(rig.run(), LoopOutcome::Continue);
        assert!(rig.ev.window(rig.window).unwrap().menu.is_none());

        rig.toolkit.push(rig.window, Message::RawKey(0x20));
        assert_eq!(rig.run(), LoopOutcome::Continue);
        let creates = rig
            .toolkit
            .calls()
            .iter()
            .filter(|c| matches!(c, ToolkitCall::CreateMenu(_)))
            .count();
        assert_eq!(creates, 1);
        assert_eq!(rig.emu.take_log(), vec!["key 32 down"]);
    }

    #[test]
    fn resize_redraws() {
        let mut rig = Rig::new(MachineClass::C64);
        rig.run();
        rig.toolkit.clear_calls();
        rig.toolkit.push(rig.window, Message::SizeVerify);
        rig.toolkit.push(rig.window, Message::ChangeWindow);
        rig.run();
        assert_eq!(rig.toolkit.take_calls(), vec![ToolkitCall::Redraw(rig.window)]);

        rig.toolkit.push(rig.window, Message::ChangeWindow);
        rig.run();
        assert!(rig.toolkit.take_calls().is_empty());
    }

    #[test]
    fn closing_a_window_destroys_its_menu() {
        let mut rig = Rig::new(MachineClass::Vsid);
        rig.run();
        let menu = rig.menu();
        rig.ev.close_window(&mut rig.toolkit, rig.window);
        assert!(rig.ev.window(rig.window).is_none());
        assert!(rig
            .toolkit
            .calls()
            .contains(&ToolkitCall::DestroyMenu(rig.window, menu)));
    }
}
