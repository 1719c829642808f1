mod display_event_handler;
mod plugin_handler;
mod screens_changed_handler;
mod settings_handler;
