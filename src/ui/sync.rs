use crate::resources::ResourceStore;
use crate::translate::Language;
use crate::ui::commands::{language_command, CMD_PAUSE};
use crate::ui::registry::CommandRegistry;
use crate::ui::toolkit::{MenuHandle, Toolkit, WindowId};

/// UI state mirrored into the menu besides resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncState {
    pub paused: bool,
}

/// Re-derives every checkmark of `menu` from `resources`.
///
/// Resources that cannot be read leave their items as they are. Calling this
/// twice without changing a resource in between issues the same toolkit
/// calls both times.
pub fn sync_menu(
    toolkit: &mut dyn Toolkit,
    window: WindowId,
    menu: MenuHandle,
    registry: &CommandRegistry,
    resources: &dyn ResourceStore,
    state: SyncState,
) {
    for t in registry.toggles() {
        match resources.get_int(t.resource) {
            Ok(value) => toolkit.set_checked(menu, t.command, value != 0),
            Err(err) => log::debug!("menu sync: {err}"),
        }
    }

    for binding in registry.values() {
        let current = match resources.get_int(binding.resource) {
            Ok(v) => v,
            Err(err) => {
                log::debug!("menu sync: {err}");
                continue;
            }
        };

        if let Some(default) = binding.default {
            toolkit.set_checked(menu, default, false);
        }
        let mut checked = false;
        for v in binding.values {
            let hit = !checked && v.value == current;
            toolkit.set_checked(menu, v.command, hit);
            checked |= hit;
        }
        if !checked {
            if let Some(default) = binding.default {
                toolkit.set_checked(menu, default, true);
            }
        }
    }

    if registry.contains(CMD_PAUSE) {
        toolkit.set_checked(menu, CMD_PAUSE, state.paused);
    }

    match resources.get_string("Language") {
        Ok(current) => {
            for lang in Language::ALL {
                let id = language_command(lang);
                if registry.contains(id) {
                    toolkit.set_checked(menu, id, lang.code().eq_ignore_ascii_case(&current));
                }
            }
        }
        Err(err) => log::debug!("menu sync: {err}"),
    }

    toolkit.refresh_menu(window, menu);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{ResourceDefault, Resources};
    use crate::ui::bindings::{PossibleValue, ToggleBinding, ValueBinding, SPEED};
    use crate::ui::commands::*;
    use crate::ui::headless::{HeadlessToolkit, ToolkitCall};
    use crate::ui::menu::{MenuEntry, TemplateEntry};
    use crate::ui::merge::merge;
    use crate::machine::MachineClass;
    use crate::translate::{Catalog, Text};

    const ID_CUSTOM: CommandId = CMD_SPEED_CUSTOM;

    const TEMPLATE: &[TemplateEntry] = &[
        TemplateEntry::title(Text::Options),
        TemplateEntry::check(Text::WarpMode, CMD_WARP_MODE),
        TemplateEntry::check(Text::Pause, CMD_PAUSE),
        TemplateEntry::submenu(Text::MaximumSpeed),
        TemplateEntry::sub_radio(Text::Percent(200), CMD_SPEED_200),
        TemplateEntry::sub_radio(Text::Percent(100), CMD_SPEED_100),
        TemplateEntry::sub_radio(Text::Percent(50), CMD_SPEED_50),
        TemplateEntry::sub_radio(Text::Percent(20), CMD_SPEED_20),
        TemplateEntry::sub_radio(Text::Percent(10), CMD_SPEED_10),
        TemplateEntry::sub_radio(Text::SpeedNoLimit, CMD_SPEED_NO_LIMIT),
        TemplateEntry::sub_radio(Text::SpeedCustom, ID_CUSTOM),
    ];

    struct Fixture {
        toolkit: HeadlessToolkit,
        window: WindowId,
        menu: MenuHandle,
        registry: CommandRegistry,
        resources: Resources,
    }

    fn fixture(values: &[ValueBinding]) -> Fixture {
        let mut toolkit = HeadlessToolkit::new();
        let window = toolkit.open_window();
        let entries: Vec<MenuEntry> = merge(TEMPLATE, MachineClass::C64, &Catalog, "en");
        let menu = toolkit.create_menu(window, &entries).unwrap();

        let mut registry = CommandRegistry::new();
        registry.add_command(CMD_PAUSE, Command::Pause).unwrap();
        registry
            .add_toggles(&[ToggleBinding {
                resource: "WarpMode",
                command: CMD_WARP_MODE,
            }])
            .unwrap();
        registry.add_values(values).unwrap();

        let mut resources = Resources::new();
        resources.register_all(&[
            ResourceDefault::int("WarpMode", 0),
            ResourceDefault::int("Speed", 100),
        ]);
        toolkit.clear_calls();
        Fixture {
            toolkit,
            window,
            menu,
            registry,
            resources,
        }
    }

    fn sync(f: &mut Fixture, paused: bool) {
        sync_menu(
            &mut f.toolkit,
            f.window,
            f.menu,
            &f.registry,
            &f.resources,
            SyncState { paused },
        );
    }

    fn checked_ids(f: &Fixture) -> Vec<CommandId> {
        let mut ids: Vec<_> = [
            CMD_SPEED_200,
            CMD_SPEED_100,
            CMD_SPEED_50,
            CMD_SPEED_20,
            CMD_SPEED_10,
            CMD_SPEED_NO_LIMIT,
            ID_CUSTOM,
        ]
        .into_iter()
        .filter(|id| f.toolkit.is_checked(f.menu, *id))
        .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn sync_is_idempotent() {
        let mut f = fixture(&[SPEED]);
        f.resources.set_int("WarpMode", 1).unwrap();
        sync(&mut f, false);
        let first = f.toolkit.take_calls();
        let state = f.toolkit.checked_state(f.menu);
        sync(&mut f, false);
        assert_eq!(f.toolkit.take_calls(), first);
        assert_eq!(f.toolkit.checked_state(f.menu), state);
    }

    #[test]
    fn unmatched_value_checks_only_the_default() {
        let mut f = fixture(&[SPEED]);
        f.resources.set_int("Speed", 77).unwrap();
        sync(&mut f, false);
        assert_eq!(checked_ids(&f), vec![ID_CUSTOM]);
    }

    #[test]
    fn unmatched_value_without_default_checks_nothing() {
        let mut f = fixture(&[ValueBinding {
            default: None,
            ..SPEED
        }]);
        f.resources.set_int("Speed", 77).unwrap();
        sync(&mut f, false);
        assert!(checked_ids(&f).is_empty());
    }

    #[test]
    fn speed_100_checks_only_its_item() {
        let mut f = fixture(&[SPEED]);
        sync(&mut f, false);
        assert_eq!(checked_ids(&f), vec![CMD_SPEED_100]);
        assert!(!f.toolkit.is_checked(f.menu, CMD_SPEED_NO_LIMIT));
        assert!(!f.toolkit.is_checked(f.menu, ID_CUSTOM));
    }

    #[test]
    fn first_duplicate_value_wins() {
        const DUPES: &[PossibleValue] = &[
            PossibleValue { value: 0, command: CMD_SPEED_NO_LIMIT },
            PossibleValue { value: 100, command: CMD_SPEED_100 },
            PossibleValue { value: 100, command: CMD_SPEED_200 },
        ];
        let mut f = fixture(&[ValueBinding {
            resource: "Speed",
            values: DUPES,
            default: Some(ID_CUSTOM),
        }]);
        sync(&mut f, false);
        assert_eq!(checked_ids(&f), vec![CMD_SPEED_100]);
    }

    #[test]
    fn toggle_and_pause_follow_state() {
        let mut f = fixture(&[SPEED]);
        sync(&mut f, true);
        assert!(!f.toolkit.is_checked(f.menu, CMD_WARP_MODE));
        assert!(f.toolkit.is_checked(f.menu, CMD_PAUSE));

        f.resources.set_int("WarpMode", 5).unwrap();
        sync(&mut f, false);
        assert!(f.toolkit.is_checked(f.menu, CMD_WARP_MODE));
        assert!(!f.toolkit.is_checked(f.menu, CMD_PAUSE));
    }

    #[test]
    fn unreadable_resources_leave_items_alone() {
        let mut f = fixture(&[ValueBinding {
            resource: "MachineVideoStandard",
            ..SPEED
        }]);
        f.registry = {
            let mut r = CommandRegistry::new();
            r.add_toggles(&[ToggleBinding {
                resource: "Missing",
                command: CMD_WARP_MODE,
            }])
            .unwrap();
            r
        };
        sync(&mut f, false);
        assert_eq!(
            f.toolkit.take_calls(),
            vec![ToolkitCall::RefreshMenu(f.window, f.menu)]
        );
    }

    #[test]
    fn sync_ends_with_a_refresh() {
        let mut f = fixture(&[SPEED]);
        sync(&mut f, false);
        let calls = f.toolkit.take_calls();
        assert_eq!(calls.last(), Some(&ToolkitCall::RefreshMenu(f.window, f.menu)));
    }
}
