//! SchemCap CLI - schematic connectivity resolution and netlist export from
//! the command line.

use clap::{Parser, Subcommand, ValueEnum};
use schemcap::{ComponentKind, Device, NetlistExport, SchemCapCore, Scene};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "schemcap")]
#[command(about = "Schematic connectivity resolution and netlist export", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a scene snapshot and print its netlist
    Netlist {
        /// Path to a scene snapshot (JSON)
        #[arg(value_name = "SCENE")]
        scene: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Write the netlist to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Exit with an error code when any terminal is unconnected
        #[arg(long)]
        fail_on_unconnected: bool,
    },

    /// Print the resolved point-to-net map for a scene snapshot
    Nets {
        /// Path to a scene snapshot (JSON)
        #[arg(value_name = "SCENE")]
        scene: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List the device catalog
    Devices {
        /// Show terminal layouts and default attributes
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for CI/CD
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Netlist {
            scene,
            format,
            output,
            fail_on_unconnected,
        } => handle_netlist(&scene, format, output.as_deref(), fail_on_unconnected),
        Commands::Nets { scene, format } => handle_nets(&scene, format),
        Commands::Devices { verbose } => {
            handle_devices(verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn handle_netlist(
    scene_path: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    fail_on_unconnected: bool,
) -> i32 {
    let export = match SchemCapCore::export_netlist_file(scene_path) {
        Ok(export) => export,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if let Some(path) = output {
        if let Err(e) = std::fs::write(path, format!("{}\n", export.netlist)) {
            eprintln!("Error: {}", e);
            return 1;
        }
    } else {
        match format {
            OutputFormat::Human => println!("{}", export.netlist),
            OutputFormat::Json => output_netlist_json(scene_path, &export),
        }
    }

    if fail_on_unconnected && export.stats.unconnected_terminal_count > 0 {
        eprintln!(
            "Error: {} unconnected terminal(s)",
            export.stats.unconnected_terminal_count
        );
        return 1;
    }

    0
}

fn handle_nets(scene_path: &Path, format: OutputFormat) -> i32 {
    let scene = match Scene::from_file(scene_path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let export = SchemCapCore::export_netlist(&scene);

    match format {
        OutputFormat::Human => output_nets_human(scene_path, &export),
        OutputFormat::Json => output_nets_json(scene_path, &export),
    }

    0
}

fn output_netlist_json(scene_path: &Path, export: &NetlistExport) {
    let output = serde_json::json!({
        "file": scene_path.display().to_string(),
        "netlist": export.netlist,
        "stats": export.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn output_nets_human(scene_path: &Path, export: &NetlistExport) {
    println!("\nScene: {}", scene_path.display());
    println!("{}", "─".repeat(60));

    if export.nets.is_empty() {
        println!("  No connected terminals");
    } else {
        for (point, net) in export.nets.entries() {
            println!("  ({})  {}", point, net);
        }
    }

    println!("\n  Summary:");
    println!("    Components:  {}", export.stats.component_count);
    println!("    Wires:       {}", export.stats.wire_count);
    println!("    Terminals:   {}", export.stats.terminal_count);
    println!("    Nets:        {}", export.stats.net_count);
    println!("    Synthesized: {}", export.stats.synthesized_net_count);
    println!("    Unconnected: {}", export.stats.unconnected_terminal_count);
}

fn output_nets_json(scene_path: &Path, export: &NetlistExport) {
    let nets: serde_json::Map<String, serde_json::Value> = export
        .nets
        .entries()
        .map(|(point, net)| (point.to_string(), serde_json::Value::String(net.to_string())))
        .collect();
    let output = serde_json::json!({
        "file": scene_path.display().to_string(),
        "nets": nets,
        "stats": export.stats,
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn handle_devices(verbose: bool) {
    println!("Available devices:\n");

    for device in Device::ALL {
        println!("  {:?} (prefix {})", device, device.prefix());
        if verbose {
            let layout = device
                .terminals()
                .iter()
                .map(|t| format!("{}({},{})", t.name, t.offset.x, t.offset.y))
                .collect::<Vec<_>>()
                .join(" ");
            println!("    terminals: {}", layout);
            match device.kind() {
                ComponentKind::Passive { value } => {
                    println!("    default value: {}", value);
                }
                ComponentKind::Mosfet {
                    model,
                    width,
                    length,
                } => {
                    println!("    default model: {} W={} L={}", model, width, length);
                }
                ComponentKind::Pin => {
                    println!("    names the net it touches; excluded from netlist records");
                }
            }
        }
        println!();
    }
}
