//! Build an RC low-pass filter in code and print its netlist.

use schemcap::prelude::*;
use schemcap::Device;

fn main() {
    let mut builder = SceneBuilder::new();

    builder.place(Device::Pin, 100.0, 100.0).set_name("VIN");
    builder.place(Device::Pin, 300.0, 100.0).set_name("VOUT");
    builder.place(Device::Pin, 300.0, 240.0).set_name("GND");

    // Series resistor between the two rails.
    builder.place(Device::Resistor, 200.0, 100.0).set_value("4.7k");
    // Shunt capacitor from the output down to ground.
    builder
        .place(Device::Capacitor, 300.0, 180.0)
        .set_value("100n")
        .set_rotation(schemcap::Rotation::R90);

    builder.wire((100.0, 100.0), (170.0, 100.0));
    builder.wire((230.0, 100.0), (300.0, 100.0));
    builder.wire((300.0, 100.0), (300.0, 150.0));
    builder.wire((300.0, 210.0), (300.0, 240.0));

    let scene = builder.finish();
    let export = SchemCapCore::export_netlist(&scene);

    println!("{}", export.netlist);
    println!();
    println!("Resolved nets:");
    for (point, net) in export.nets.entries() {
        println!("  ({})  {}", point, net);
    }
    println!();
    println!(
        "{} nets, {} synthesized, {} unconnected terminal(s)",
        export.stats.net_count,
        export.stats.synthesized_net_count,
        export.stats.unconnected_terminal_count
    );
}
