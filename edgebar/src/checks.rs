//! Static checks of a settings file, used by `edgebar-check`.
use crate::panel_groups;
use edgebar_core::{Edge, PanelConfig};
use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Finding {
    #[error("No panel groups found, a default panel will be created")]
    NoPanels,
    #[error("Panel {group}: unknown position \"{value}\", Bottom will be used")]
    BadPosition { group: String, value: String },
    #[error("Panel {group}: {reason}")]
    MalformedPanel { group: String, reason: String },
    #[error("Panel {panel} lists plugin {group}, but there is no such group")]
    MissingPluginGroup { panel: String, group: String },
    #[error("Plugin group {0} has no type")]
    MissingPluginType(String),
    #[error("Plugin group {group} has unknown type \"{type_id}\"")]
    UnknownPluginType { group: String, type_id: String },
}

/// Everything in `table` that would make the panel fall back to a default.
pub fn check_settings(table: &Table, known_types: &[&str]) -> Vec<Finding> {
    let mut findings = vec![];
    let panels: Vec<(String, &Table)> = panel_groups(table)
        .into_iter()
        .filter_map(|name| {
            let group = table.get(&name)?.as_table()?;
            Some((name, group))
        })
        .collect();
    if panels.is_empty() {
        findings.push(Finding::NoPanels);
    }

    for (name, group) in panels {
        if let Some(position) = group.get("position").and_then(Value::as_str) {
            if position.parse::<Edge>().is_err() {
                findings.push(Finding::BadPosition {
                    group: name.clone(),
                    value: position.to_owned(),
                });
            }
        }
        if let Err(err) = group.clone().try_into::<PanelConfig>() {
            findings.push(Finding::MalformedPanel {
                group: name.clone(),
                reason: err.message().trim().to_owned(),
            });
            continue;
        }

        let plugins = group.get("plugins").and_then(Value::as_array);
        for plugin in plugins.into_iter().flatten().filter_map(Value::as_str) {
            let Some(plugin_group) = table.get(plugin) else {
                findings.push(Finding::MissingPluginGroup {
                    panel: name.clone(),
                    group: plugin.to_owned(),
                });
                continue;
            };
            match plugin_group.get("type").and_then(Value::as_str) {
                None => findings.push(Finding::MissingPluginType(plugin.to_owned())),
                Some(type_id) if !known_types.contains(&type_id) => {
                    findings.push(Finding::UnknownPluginType {
                        group: plugin.to_owned(),
                        type_id: type_id.to_owned(),
                    });
                }
                Some(_) => {}
            }
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[&str] = &["mainmenu", "taskbar"];

    fn check(contents: &str) -> Vec<Finding> {
        let table: Table = contents.parse().expect("valid toml");
        check_settings(&table, KNOWN)
    }

    #[test]
    fn default_settings_are_clean() {
        let table = crate::TomlSettings::default_table().expect("defaults serialize");
        assert_eq!(check_settings(&table, KNOWN), vec![]);
    }

    #[test]
    fn an_empty_file_has_no_panels() {
        assert_eq!(check(""), vec![Finding::NoPanels]);
    }

    #[test]
    fn unknown_positions_are_reported() {
        let findings = check("[panel1]\nposition = \"middle\"\n");
        assert_eq!(
            findings,
            vec![Finding::BadPosition {
                group: "panel1".to_owned(),
                value: "middle".to_owned()
            }]
        );
    }

    #[test]
    fn wrongly_typed_values_are_reported() {
        let findings = check("[panel1]\niconSize = \"big\"\n");
        assert!(matches!(
            findings.as_slice(),
            [Finding::MalformedPanel { group, .. }] if group == "panel1"
        ));
    }

    #[test]
    fn plugin_groups_are_cross_checked() {
        let findings = check(
            r#"
[panel1]
plugins = ["mainmenu", "clock", "tasks", "gone"]

[mainmenu]
type = "mainmenu"

[clock]
type = "clock"

[tasks]
position = "middle"
"#,
        );
        assert_eq!(
            findings,
            vec![
                Finding::UnknownPluginType {
                    group: "clock".to_owned(),
                    type_id: "clock".to_owned()
                },
                Finding::MissingPluginType("tasks".to_owned()),
                Finding::MissingPluginGroup {
                    panel: "panel1".to_owned(),
                    group: "gone".to_owned()
                },
            ]
        );
    }

    #[test]
    fn listed_groups_are_never_checked_as_panels() {
        let findings = check(
            "[panel1]\nplugins = [\"tasks\"]\n\n[tasks]\niconSize = \"big\"\nposition = \"middle\"\n",
        );
        assert_eq!(findings, vec![Finding::MissingPluginType("tasks".to_owned())]);
    }
}
