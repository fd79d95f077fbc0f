use std::collections::HashMap;

use thiserror::Error;

use crate::ui::bindings::{ToggleBinding, ValueBinding};
use crate::ui::commands::{Command, CommandId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command id {id} is declared twice ({first:?} and {second:?})")]
    DuplicateCommand {
        id: CommandId,
        first: Command,
        second: Command,
    },
}

/// Every command a machine profile understands, keyed by menu id.
///
/// The synchronizer reads the binding lists, the dispatcher decodes ids;
/// both come from the same declarations so they cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<CommandId, Command>,
    toggles: Vec<ToggleBinding>,
    values: Vec<ValueBinding>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, id: CommandId, command: Command) -> Result<(), RegistryError> {
        if let Some(first) = self.commands.get(&id) {
            return Err(RegistryError::DuplicateCommand {
                id,
                first: *first,
                second: command,
            });
        }
        self.commands.insert(id, command);
        Ok(())
    }

    pub fn add_commands(
        &mut self,
        commands: impl IntoIterator<Item = (CommandId, Command)>,
    ) -> Result<(), RegistryError> {
        for (id, command) in commands {
            self.add_command(id, command)?;
        }
        Ok(())
    }

    pub fn add_toggles(&mut self, toggles: &[ToggleBinding]) -> Result<(), RegistryError> {
        for t in toggles {
            self.add_command(t.command, Command::Toggle(t.resource))?;
            self.toggles.push(*t);
        }
        Ok(())
    }

    /// Registers one `Select` command per enumerated value. The default
    /// item is not registered here; it usually opens a dialog of its own.
    pub fn add_values(&mut self, values: &[ValueBinding]) -> Result<(), RegistryError> {
        for binding in values {
            for v in binding.values {
                self.add_command(
                    v.command,
                    Command::Select {
                        resource: binding.resource,
                        value: v.value,
                    },
                )?;
            }
            self.values.push(*binding);
        }
        Ok(())
    }

    pub fn decode(&self, id: CommandId) -> Option<Command> {
        self.commands.get(&id).copied()
    }

    pub fn contains(&self, id: CommandId) -> bool {
        self.commands.contains_key(&id)
    }

    pub fn toggles(&self) -> &[ToggleBinding] {
        &self.toggles
    }

    pub fn values(&self) -> &[ValueBinding] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::bindings::{PossibleValue, MAIN_TOGGLES, MAIN_VALUES};
    use crate::ui::commands::{self, CMD_EXIT, CMD_SPEED_100, CMD_WARP_MODE};

    #[test]
    fn shared_tables_register_without_conflicts() {
        let mut r = CommandRegistry::new();
        r.add_commands(commands::builtin()).unwrap();
        r.add_toggles(MAIN_TOGGLES).unwrap();
        r.add_values(MAIN_VALUES).unwrap();

        assert_eq!(r.decode(CMD_WARP_MODE), Some(Command::Toggle("WarpMode")));
        assert_eq!(
            r.decode(CMD_SPEED_100),
            Some(Command::Select {
                resource: "Speed",
                value: 100
            })
        );
        assert_eq!(r.decode(CMD_EXIT), Some(Command::Exit));
        assert_eq!(r.decode(9999), None);
        assert_eq!(r.toggles().len(), MAIN_TOGGLES.len());
        assert_eq!(r.values().len(), MAIN_VALUES.len());
    }

    #[test]
    fn builtin_and_binding_on_same_id_is_rejected() {
        let mut r = CommandRegistry::new();
        r.add_command(CMD_EXIT, Command::Exit).unwrap();
        let err = r
            .add_toggles(&[ToggleBinding {
                resource: "WarpMode",
                command: CMD_EXIT,
            }])
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateCommand {
                id: CMD_EXIT,
                first: Command::Exit,
                second: Command::Toggle("WarpMode"),
            }
        );
    }

    #[test]
    fn two_bindings_on_same_id_are_rejected() {
        const VALUES: &[PossibleValue] = &[
            PossibleValue { value: 1, command: 7 },
            PossibleValue { value: 2, command: 7 },
        ];
        let mut r = CommandRegistry::new();
        let err = r
            .add_values(&[ValueBinding {
                resource: "Speed",
                values: VALUES,
                default: None,
            }])
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCommand { id: 7, .. }));
    }
}
