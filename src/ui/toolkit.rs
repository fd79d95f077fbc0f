use std::time::Duration;

use thiserror::Error;

use crate::ui::commands::CommandId;
use crate::ui::menu::MenuEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

/// Opaque reference to a realized menu strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuHandle(pub u32);

/// Toolkit-native code of a picked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuCode(pub u16);

impl MenuCode {
    /// Terminates a chain of selected items.
    pub const NULL: MenuCode = MenuCode(0xFFFF);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedItem {
    pub command: CommandId,
    pub next: MenuCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    MenuPick(MenuCode),
    CloseWindow,
    /// Raw keyboard code, bit 7 set on release.
    RawKey(u16),
    SizeVerify,
    ChangeWindow,
    MenuVerify,
    Other(u32),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu creation failed: {0}")]
    Create(String),
    #[error("no menu template registered")]
    NoTemplate,
}

/// Native menu and message primitives of the window system.
pub trait Toolkit {
    fn create_menu(&mut self, window: WindowId, entries: &[MenuEntry])
        -> Result<MenuHandle, MenuError>;
    fn destroy_menu(&mut self, window: WindowId, menu: MenuHandle);
    fn set_checked(&mut self, menu: MenuHandle, command: CommandId, checked: bool);
    /// Re-attaches the strip so the window shows the current checkmarks.
    fn refresh_menu(&mut self, window: WindowId, menu: MenuHandle);
    fn selected_item(&self, menu: MenuHandle, code: MenuCode) -> Option<SelectedItem>;
    fn next_message(&mut self, window: WindowId) -> Option<Message>;
    /// Blocks until a message is pending or `timeout` elapses. Returns
    /// `false` once the event source is closed.
    fn wait(&mut self, timeout: Option<Duration>) -> bool;
    fn set_window_title(&mut self, window: WindowId, title: &str);
    fn redraw(&mut self, window: WindowId);
}
