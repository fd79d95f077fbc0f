use crate::translate::Text;
use crate::ui::commands::CommandId;

pub const CHECKIT: u16 = 0x0001;
pub const MENUTOGGLE: u16 = 0x0008;
pub const CHECKED: u16 = 0x0100;

pub const EXCLUDE_SIBLINGS: u32 = u32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Title,
    Item,
    SubItem,
    End,
}

/// One record of a static menu template.
///
/// An `Item` or `SubItem` without a label is a separator bar. An `Item`
/// without a command opens the sub-menu made of the `SubItem`s after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub kind: EntryKind,
    pub label: Option<Text>,
    pub accel: Option<char>,
    pub flags: u16,
    pub mutual_exclude: u32,
    pub command: Option<CommandId>,
}

impl TemplateEntry {
    const BLANK: TemplateEntry = TemplateEntry {
        kind: EntryKind::Item,
        label: None,
        accel: None,
        flags: 0,
        mutual_exclude: 0,
        command: None,
    };

    pub const fn title(label: Text) -> Self {
        Self {
            kind: EntryKind::Title,
            label: Some(label),
            ..Self::BLANK
        }
    }

    pub const fn item(label: Text, command: CommandId) -> Self {
        Self {
            label: Some(label),
            command: Some(command),
            ..Self::BLANK
        }
    }

    pub const fn submenu(label: Text) -> Self {
        Self {
            label: Some(label),
            ..Self::BLANK
        }
    }

    pub const fn check(label: Text, command: CommandId) -> Self {
        Self {
            flags: CHECKIT | MENUTOGGLE,
            ..Self::item(label, command)
        }
    }

    pub const fn sub(label: Text, command: CommandId) -> Self {
        Self {
            kind: EntryKind::SubItem,
            ..Self::item(label, command)
        }
    }

    pub const fn sub_check(label: Text, command: CommandId) -> Self {
        Self {
            kind: EntryKind::SubItem,
            ..Self::check(label, command)
        }
    }

    pub const fn sub_radio(label: Text, command: CommandId) -> Self {
        Self {
            kind: EntryKind::SubItem,
            flags: CHECKIT,
            mutual_exclude: EXCLUDE_SIBLINGS,
            ..Self::item(label, command)
        }
    }

    pub const fn bar() -> Self {
        Self::BLANK
    }

    pub const fn sub_bar() -> Self {
        Self {
            kind: EntryKind::SubItem,
            ..Self::BLANK
        }
    }

    pub const fn key(self, accel: char) -> Self {
        Self {
            accel: Some(accel),
            ..self
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self.kind, EntryKind::Item | EntryKind::SubItem) && self.label.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLabel {
    Text(String),
    Bar,
    None,
}

/// A merged entry as handed to the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub kind: EntryKind,
    pub label: MenuLabel,
    pub accel: Option<char>,
    pub flags: u16,
    pub mutual_exclude: u32,
    pub command: Option<CommandId>,
}

impl MenuEntry {
    pub const END: MenuEntry = MenuEntry {
        kind: EntryKind::End,
        label: MenuLabel::None,
        accel: None,
        flags: 0,
        mutual_exclude: 0,
        command: None,
    };

    pub fn is_end(&self) -> bool {
        self.kind == EntryKind::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_flags() {
        let e = TemplateEntry::sub_radio(Text::PalG, 500);
        assert_eq!(e.kind, EntryKind::SubItem);
        assert_eq!(e.flags, CHECKIT);
        assert_eq!(e.mutual_exclude, EXCLUDE_SIBLINGS);
        assert_eq!(e.command, Some(500));

        let e = TemplateEntry::check(Text::WarpMode, 418).key('W');
        assert_eq!(e.flags, CHECKIT | MENUTOGGLE);
        assert_eq!(e.accel, Some('W'));
    }

    #[test]
    fn separators_are_unlabelled_items() {
        assert!(TemplateEntry::bar().is_separator());
        assert!(TemplateEntry::sub_bar().is_separator());
        assert!(!TemplateEntry::submenu(Text::Reset).is_separator());
        assert!(!TemplateEntry::title(Text::File).is_separator());
    }
}
