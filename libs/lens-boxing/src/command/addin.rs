//! Add-in lifecycle: install and remove the command and its toolbar button.

use config::constants::{
    BoxingConfig, COMMAND_DESCRIPTION, COMMAND_ID, COMMAND_NAME, PANEL_ID, RESOURCE_FOLDER,
};

use super::execute::{run_command, CommandContext, MessageSink};
use super::registry::{HandlerId, HandlerRegistry};
use crate::error::{BoxingError, BoxingResult};

/// Identity of the command button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    /// Unique command id.
    pub id: String,
    /// Button label.
    pub name: String,
    /// Tooltip.
    pub description: String,
    /// Icon folder, relative to the add-in manifest.
    pub resource_folder: String,
    /// Toolbar panel that shows the button.
    pub panel_id: String,
}

impl Default for CommandDefinition {
    fn default() -> Self {
        Self {
            id: COMMAND_ID.to_string(),
            name: COMMAND_NAME.to_string(),
            description: COMMAND_DESCRIPTION.to_string(),
            resource_folder: RESOURCE_FOLDER.to_string(),
            panel_id: PANEL_ID.to_string(),
        }
    }
}

/// Host user interface as seen by the add-in lifecycle.
pub trait HostUi: MessageSink {
    /// Whether a command definition with this id exists.
    fn has_command_definition(&self, id: &str) -> bool;

    /// Registers a button command definition.
    fn add_button_definition(&mut self, definition: &CommandDefinition) -> BoxingResult<()>;

    /// Deletes a command definition. Returns `false` if it did not exist.
    fn remove_command_definition(&mut self, id: &str) -> BoxingResult<bool>;

    /// Whether the toolbar panel exists.
    fn has_panel(&self, panel_id: &str) -> bool;

    /// Whether the panel already shows a control for the command.
    fn panel_has_control(&self, panel_id: &str, command_id: &str) -> bool;

    /// Adds a control for the command to the panel.
    fn add_panel_control(&mut self, panel_id: &str, command_id: &str) -> BoxingResult<()>;

    /// Removes the command's control from the panel. Returns `false` if it
    /// was not there.
    fn remove_panel_control(&mut self, panel_id: &str, command_id: &str) -> BoxingResult<bool>;
}

/// The boxing add-in: owns the command definition and its listeners.
#[derive(Debug)]
pub struct AddIn {
    definition: CommandDefinition,
    config: BoxingConfig,
    handlers: HandlerRegistry,
    execute_handler: Option<HandlerId>,
}

impl AddIn {
    /// Creates a stopped add-in.
    pub fn new(config: BoxingConfig) -> Self {
        Self::with_definition(CommandDefinition::default(), config)
    }

    /// Creates a stopped add-in with a custom command identity.
    pub fn with_definition(definition: CommandDefinition, config: BoxingConfig) -> Self {
        Self {
            definition,
            config,
            handlers: HandlerRegistry::new(),
            execute_handler: None,
        }
    }

    /// Command identity.
    pub fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    /// Whether [`AddIn::start`] has installed the execute listener.
    pub fn is_started(&self) -> bool {
        self.execute_handler.is_some()
    }

    /// Listener registry; hosts may attach extra execute listeners.
    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Installs the command definition, its execute listener and its toolbar
    /// control. Failures are reported through the UI and returned.
    pub fn start(&mut self, ui: &mut dyn HostUi) -> BoxingResult<()> {
        let result = self.try_start(ui);
        if let Err(err) = &result {
            tracing::error!(%err, "failed to start add-in");
            ui.message_box(&format!("Failed to run add-in:\n{err}"));
        }
        result
    }

    fn try_start(&mut self, ui: &mut dyn HostUi) -> BoxingResult<()> {
        let def = &self.definition;
        if !ui.has_command_definition(&def.id) {
            ui.add_button_definition(def)?;
        }

        if self.execute_handler.is_none() {
            let config = self.config;
            let id = self.handlers.subscribe(move |ctx: &mut CommandContext<'_>| {
                run_command(ctx, &config);
            });
            self.execute_handler = Some(id);
        }

        let def = &self.definition;
        if ui.has_panel(&def.panel_id) && !ui.panel_has_control(&def.panel_id, &def.id) {
            ui.add_panel_control(&def.panel_id, &def.id)?;
        }

        tracing::info!(command = %def.id, panel = %def.panel_id, "add-in started");
        Ok(())
    }

    /// Removes the toolbar control and command definition and drops every
    /// listener. Failures are reported through the UI and returned.
    pub fn stop(&mut self, ui: &mut dyn HostUi) -> BoxingResult<()> {
        self.handlers.clear();
        self.execute_handler = None;

        let result = self.try_stop(ui);
        if let Err(err) = &result {
            tracing::error!(%err, "failed to stop add-in");
            ui.message_box(&format!("Failed to stop add-in:\n{err}"));
        }
        result
    }

    fn try_stop(&mut self, ui: &mut dyn HostUi) -> BoxingResult<()> {
        let def = &self.definition;
        if ui.has_panel(&def.panel_id) && ui.panel_has_control(&def.panel_id, &def.id) {
            ui.remove_panel_control(&def.panel_id, &def.id)?;
        }
        if ui.has_command_definition(&def.id) {
            ui.remove_command_definition(&def.id)?;
        }
        tracing::info!(command = %def.id, "add-in stopped");
        Ok(())
    }

    /// Delivers the host's execute event to every listener.
    pub fn trigger(&mut self, ctx: &mut CommandContext<'_>) -> BoxingResult<()> {
        if !self.is_started() {
            return Err(BoxingError::CommandNotRegistered(self.definition.id.clone()));
        }
        self.handlers.notify(ctx);
        Ok(())
    }
}
