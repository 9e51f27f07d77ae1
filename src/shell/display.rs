use std::io::{self, Write};

use crate::inventory::Inventory;

pub const MENU: &str = "Menu\n\n\
[l] load Inventory from file\n\
[a] Add record\n\
[i] Display Current Inventory\n\
[d] delete record from Inventory\n\
[s] Save Inventory to file\n\
[x] exit\n";

pub fn write_inventory(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out, "======= The Current Inventory: =======")?;
    writeln!(out, "ID\tTitle (by: Creator)\n")?;
    for record in inventory {
        writeln!(out, "{record}")?;
    }
    writeln!(out, "======================================")
}
