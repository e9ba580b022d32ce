//! Netlist text rendering.

use crate::scene::{ComponentKind, Scene};

use super::resolver::NetAssignment;

/// First line of every generated netlist.
pub const HEADER: &str = "* Generated by schemcap";
/// Simulator options line emitted after the header.
pub const OPTIONS: &str = ".OPTIONS POST";
/// Terminating line.
pub const FOOTER: &str = ".END";

/// Renders component records against a resolved net assignment.
pub struct NetlistWriter;

impl NetlistWriter {
    /// Serialize every non-pin component as one record, in scene order.
    /// Terminals without a resolved net get a stable
    /// `NC_<component>_<terminal>` placeholder; nothing here can fail.
    /// Attribute strings pass through untouched.
    pub fn write(scene: &Scene, nets: &NetAssignment) -> String {
        let mut lines = vec![HEADER.to_string(), OPTIONS.to_string()];

        for component in &scene.components {
            if component.kind.is_pin() {
                continue;
            }

            let mut fields = vec![component.name.clone()];
            for terminal in &component.terminals {
                let position = component.terminal_position(terminal);
                let net = match nets.name_at(position) {
                    Some(name) => name.to_string(),
                    None => format!("NC_{}_{}", component.name, terminal.name),
                };
                fields.push(net);
            }

            match &component.kind {
                ComponentKind::Passive { value } => fields.push(value.clone()),
                ComponentKind::Mosfet {
                    model,
                    width,
                    length,
                } => {
                    fields.push(model.clone());
                    fields.push(format!("W={}", width));
                    fields.push(format!("L={}", length));
                }
                ComponentKind::Pin => {}
            }

            lines.push(fields.join(" "));
        }

        lines.push(FOOTER.to_string());
        lines.join("\n")
    }
}
