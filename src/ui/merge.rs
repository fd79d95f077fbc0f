//! Builds the flat, translated menu for one machine class.

use crate::machine::MachineClass;
use crate::translate::{Text, Translate};
use crate::ui::menu::{MenuEntry, MenuLabel, TemplateEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Filter {
    Keep,
    Drop,
    /// Drop the entry and a separator right after it.
    DropWithSeparator,
}

fn availability(label: Text, class: MachineClass) -> Filter {
    if class == MachineClass::C64Sc {
        return match label {
            Text::OldNtscM => Filter::DropWithSeparator,
            Text::VideoStandard | Text::PalG | Text::NtscM => Filter::Drop,
            _ => Filter::Keep,
        };
    }

    // Model selection only exists on the cycle-exact C64.
    match label {
        Text::C64ModelSettings
        | Text::C64Pal
        | Text::C64cPal
        | Text::C64OldPal
        | Text::C64Ntsc
        | Text::C64cNtsc
        | Text::C64OldNtsc
        | Text::Drean
        | Text::C64sxPal
        | Text::C64sxNtsc
        | Text::C64Jap
        | Text::C64Gs
        | Text::Pet64Pal
        | Text::Pet64Ntsc
        | Text::Ultimax
        | Text::CustomC64Model => Filter::Drop,
        _ => Filter::Keep,
    }
}

pub fn merge(
    template: &[TemplateEntry],
    class: MachineClass,
    translator: &dyn Translate,
    language: &str,
) -> Vec<MenuEntry> {
    let mut out = Vec::with_capacity(template.len() + 1);
    let mut entries = template.iter().peekable();

    while let Some(entry) = entries.next() {
        if let Some(label) = entry.label {
            match availability(label, class) {
                Filter::Keep => {}
                Filter::Drop => continue,
                Filter::DropWithSeparator => {
                    entries.next_if(|next| next.is_separator());
                    continue;
                }
            }
        }

        let label = match entry.label {
            Some(text) => MenuLabel::Text(translator.translate(text, language).into_owned()),
            None => MenuLabel::Bar,
        };
        out.push(MenuEntry {
            kind: entry.kind,
            label,
            accel: entry.accel,
            flags: entry.flags,
            mutual_exclude: entry.mutual_exclude,
            command: entry.command,
        });
    }

    out.push(MenuEntry::END);
    out
}
