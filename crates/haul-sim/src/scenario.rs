//! CSV scenario loader.
//!
//! # CSV format
//!
//! One row per world entity:
//!
//! ```csv
//! entity,kind,x,y,capacity,stored,flags
//! structure,base,5,5,300,0,
//! structure,storage,8,8,5000,4000,reserve
//! agent,,0,0,100,0,
//! deposit,,3,3,0,120,
//! ```
//!
//! | Column     | Meaning                                                     |
//! |------------|-------------------------------------------------------------|
//! | `entity`   | `structure`, `agent`, or `deposit`                          |
//! | `kind`     | structure kind label (ignored for agents and deposits)      |
//! | `x`, `y`   | grid position                                               |
//! | `capacity` | store capacity (ignored for deposits)                       |
//! | `stored`   | initial energy (deposit pile size for deposits)             |
//! | `flags`    | `reserve` marks a structure as the designated reserve       |
//!
//! Ids are assigned in row order, separately per entity class: the first
//! structure row becomes `StructureId(0)`, the first agent row `AgentId(0)`,
//! and so on.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use haul_core::{AgentId, GridPos, ResourceKind, Store, StructureId};
use haul_world::{AgentBody, Deposit, Structure, StructureKind, World};

use crate::{SimError, SimResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScenarioRecord {
    entity:   String,
    kind:     String,
    x:        i32,
    y:        i32,
    capacity: u32,
    stored:   u32,
    #[serde(default)]
    flags:    String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`World`] from a scenario CSV file.
pub fn load_scenario_csv(path: &Path) -> SimResult<World> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_scenario_reader<R: Read>(reader: R) -> SimResult<World> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut world = World::new();
    let mut next_structure = 0u32;
    let mut next_agent = 0u32;

    for result in csv_reader.deserialize::<ScenarioRecord>() {
        let row = result.map_err(|e| SimError::Parse(e.to_string()))?;
        let pos = GridPos::new(row.x, row.y);

        match row.entity.trim() {
            "structure" => {
                let kind = StructureKind::parse(row.kind.trim()).ok_or_else(|| {
                    SimError::Parse(format!("unknown structure kind {:?}", row.kind))
                })?;
                let id = StructureId(next_structure);
                next_structure += 1;
                world.add_structure(Structure::new(
                    id,
                    kind,
                    pos,
                    Store::stocked(row.capacity, ResourceKind::Energy, row.stored),
                ))?;
                if row.flags.trim() == "reserve" {
                    world.designate_reserve(id)?;
                }
            }
            "agent" => {
                let id = AgentId(next_agent);
                next_agent += 1;
                world.add_agent(AgentBody::new(
                    id,
                    pos,
                    Store::stocked(row.capacity, ResourceKind::Energy, row.stored),
                ))?;
            }
            "deposit" => {
                world.add_deposit(Deposit::new(pos, ResourceKind::Energy, row.stored));
            }
            other => {
                return Err(SimError::Parse(format!(
                    "invalid entity {other:?}: expected \"structure\", \"agent\", or \"deposit\""
                )));
            }
        }
    }

    Ok(world)
}
