use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;

use menusync::config;
use menusync::machine::{MachineClass, MachineProfile};
use menusync::resources::Resources;
use menusync::translate::Catalog;
use menusync::ui::commands::CommandId;
use menusync::ui::event_loop::{EventLoop, LoopOutcome};
use menusync::ui::headless::{HeadlessToolkit, RecordingEmulator, Script, ScriptedDialogs};
use menusync::ui::host::Host;
use menusync::ui::menu::{EntryKind, MenuLabel, CHECKIT};
use menusync::ui::model::UiModel;
use menusync::ui::toolkit::{MenuHandle, Toolkit};

#[derive(Parser, Debug)]
#[command(
    name = "menusync",
    version,
    about = "Emulator menu merging, state sync and command dispatch"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the merged, translated and synced menu of a machine.
    Menu {
        /// Machine class. Falls back to the config file, then c64.
        #[arg(long, value_enum)]
        machine: Option<MachineClass>,
        /// Language code used for the labels. Defaults to the configured one.
        #[arg(long)]
        language: Option<String>,
    },
    /// Dispatches menu ids against a recording emulator and prints the result.
    Dispatch {
        #[arg(long, value_enum)]
        machine: Option<MachineClass>,
        /// Menu ids, dispatched in order.
        ids: Vec<CommandId>,
    },
    /// Replays a JSON event script through the event loop.
    Run {
        #[arg(long, value_enum)]
        machine: Option<MachineClass>,
        #[arg(long)]
        script: PathBuf,
    },
    /// Prints the config path that would be used (if any).
    ConfigPath,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Menu { machine, language } => {
            let mut model = session(machine)?;
            if let Some(language) = language {
                model
                    .resources_mut()
                    .set_string("Language", &language)
                    .context("set language")?;
            }
            let mut toolkit = HeadlessToolkit::new();
            let window = toolkit.open_window();
            let mut event_loop = EventLoop::new(model);
            event_loop.open_window(&mut toolkit, window, "menu");
            event_loop
                .menu_create(&mut toolkit, window)
                .context("create menu")?;
            let menu = toolkit.menu_of(window).context("menu was not attached")?;
            print_menu(&toolkit, menu);
        }
        Command::Dispatch { machine, ids } => {
            let mut model = session(machine)?;
            let mut emulator = RecordingEmulator::new();
            let mut dialogs = ScriptedDialogs::new();
            for id in ids {
                let mut host = Host::new(&mut emulator, &mut dialogs);
                let update = model.handle(id, &mut host)?;
                log::debug!("menu id {id}: {update:?}");
            }
            report(&model, &emulator, &dialogs);
        }
        Command::Run { machine, script } => {
            let script = Script::load(&script)?;
            let model = session(machine)?;
            let name = format!("VICE: {}", model.class().name().to_uppercase());

            let mut toolkit = HeadlessToolkit::new();
            let mut emulator = RecordingEmulator::new();
            let mut dialogs = ScriptedDialogs::new();
            let window = toolkit.open_window();
            script.install(&mut toolkit, window, &mut emulator, &mut dialogs);
            toolkit.close_when_drained();

            let mut event_loop = EventLoop::new(model);
            event_loop.open_window(&mut toolkit, window, &name);
            loop {
                let mut outcome = {
                    let mut host = Host::new(&mut emulator, &mut dialogs);
                    event_loop.handle_events(&mut toolkit, &mut host)
                };
                if outcome == LoopOutcome::Continue && emulator.take_trap() {
                    let mut host = Host::new(&mut emulator, &mut dialogs);
                    outcome = event_loop.pause_trap(&mut toolkit, &mut host);
                }
                if outcome == LoopOutcome::Quit {
                    println!("quit");
                    break;
                }
                if !toolkit.wait(None) {
                    break;
                }
            }
            event_loop.shutdown(&mut toolkit);
            report(event_loop.model(), &emulator, &dialogs);
        }
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

fn session(machine: Option<MachineClass>) -> Result<UiModel> {
    let cfg = config::load_optional().context("load config")?;
    let class = machine
        .or_else(|| cfg.as_ref().and_then(|c| c.machine))
        .unwrap_or(MachineClass::C64);
    let profile =
        MachineProfile::for_class(class).with_context(|| format!("build {class} profile"))?;

    let mut resources = Resources::new();
    resources.register_all(&profile.defaults);
    if let Some(cfg) = &cfg {
        resources.apply(&cfg.resources);
    }
    log::info!("{class}: {} commands bound", profile.registry.len());
    Ok(UiModel::new(profile, Box::new(resources), Box::new(Catalog)))
}

fn print_menu(toolkit: &HeadlessToolkit, menu: MenuHandle) {
    for e in toolkit.entries(menu).unwrap_or_default() {
        let indent = match e.kind {
            EntryKind::Title => "",
            EntryKind::Item => "  ",
            EntryKind::SubItem => "    ",
            EntryKind::End => break,
        };
        let mark = match e.command {
            Some(id) if e.flags & CHECKIT != 0 => {
                if toolkit.is_checked(menu, id) {
                    "[x] "
                } else {
                    "[ ] "
                }
            }
            _ => "",
        };
        let label = match &e.label {
            MenuLabel::Text(s) => s.as_str(),
            MenuLabel::Bar => "--------",
            MenuLabel::None => "",
        };
        let mut line = format!("{indent}{mark}{label}");
        if let Some(key) = e.accel {
            line.push_str(&format!("  [{key}]"));
        }
        if let Some(id) = e.command {
            line.push_str(&format!("  #{id}"));
        }
        println!("{line}");
    }
}

fn report(model: &UiModel, emulator: &RecordingEmulator, dialogs: &ScriptedDialogs) {
    for entry in emulator.log() {
        println!("emulator: {entry}");
    }
    for entry in &dialogs.log {
        println!("dialog: {entry}");
    }

    let registry = model.registry();
    let names: BTreeSet<&str> = registry
        .toggles()
        .iter()
        .map(|t| t.resource)
        .chain(registry.values().iter().map(|v| v.resource))
        .chain(["Language"])
        .collect();
    for name in names {
        match model.resources().get_value(name) {
            Ok(value) => println!("{name} = {value}"),
            Err(err) => log::debug!("{err}"),
        }
    }
    println!("paused = {}", model.is_paused());
    if let Some(err) = model.last_error() {
        println!("last error: {err}");
    }
}
