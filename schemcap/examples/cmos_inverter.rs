//! A CMOS inverter with a rotated PMOS, exported to a netlist.

use schemcap::prelude::*;
use schemcap::{Device, Rotation};

fn main() {
    let mut builder = SceneBuilder::new();

    builder.place(Device::Pin, 280.0, 160.0).set_name("VDD");
    builder.place(Device::Pin, 240.0, 280.0).set_name("VIN");
    builder.place(Device::Pin, 360.0, 280.0).set_name("VOUT");
    builder.place(Device::Pin, 320.0, 380.0).set_name("VSS");

    // Pull-up PMOS, rotated so its source faces the supply.
    builder
        .place(Device::Pmos, 300.0, 220.0)
        .set_rotation(Rotation::R180);
    builder.place(Device::Nmos, 300.0, 320.0);

    builder.wire((280.0, 195.0), (280.0, 160.0)); // PMOS S to VDD
    builder.wire((280.0, 245.0), (360.0, 280.0)); // PMOS D to VOUT
    builder.wire((320.0, 295.0), (360.0, 280.0)); // NMOS D to VOUT
    builder.wire((320.0, 345.0), (320.0, 380.0)); // NMOS S to VSS
    builder.wire((330.0, 220.0), (240.0, 280.0)); // PMOS G to VIN
    builder.wire((270.0, 320.0), (240.0, 280.0)); // NMOS G to VIN
    builder.wire((280.0, 220.0), (280.0, 195.0)); // PMOS bulk tie
    builder.wire((320.0, 320.0), (320.0, 345.0)); // NMOS bulk tie

    let scene = builder.finish();
    let export = SchemCapCore::export_netlist(&scene);

    println!("{}", export.netlist);

    if export.stats.unconnected_terminal_count > 0 {
        eprintln!(
            "warning: {} unconnected terminal(s)",
            export.stats.unconnected_terminal_count
        );
        std::process::exit(1);
    }
}
