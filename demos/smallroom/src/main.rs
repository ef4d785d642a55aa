//! smallroom — smallest end-to-end demo for the rust_haul framework.
//!
//! One hauler keeps an 11×11 room supplied: it drains loose deposits (and
//! the pre-stocked storage when the ground is bare), then tops up the base,
//! extensions, and tower by priority.  Run with `RUST_LOG=debug` to watch
//! the controller's decisions.

use std::path::Path;

use anyhow::Result;

use haul_controller::LogDiagnostics;
use haul_core::{AgentId, GridPos, ResourceKind, Store, StructureId};
use haul_sim::{CsvTelemetry, RegenConfig, SimBuilder, SimConfig};
use haul_world::{AgentBody, Deposit, Structure, StructureKind, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:        u64 = 42;
const TOTAL_TICKS: u64 = 60;
const AGENT_CAP:   u32 = 100;

// ── World setup ───────────────────────────────────────────────────────────────

fn build_room() -> Result<World> {
    const ENERGY: ResourceKind = ResourceKind::Energy;

    let mut world = World::new();

    // Sinks of every priority class, plus the pre-stocked reserve.
    let structures = [
        (StructureKind::Base,      GridPos::new(5, 5),   300, 0),
        (StructureKind::Extension, GridPos::new(3, 5),    50, 0),
        (StructureKind::Extension, GridPos::new(7, 5),    50, 0),
        (StructureKind::Tower,     GridPos::new(5, 1), 1_000, 200),
        (StructureKind::Storage,   GridPos::new(9, 9), 5_000, 2_000),
    ];
    for (i, (kind, pos, cap, stored)) in structures.into_iter().enumerate() {
        world.add_structure(Structure::new(
            StructureId(i as u32),
            kind,
            pos,
            Store::stocked(cap, ENERGY, stored),
        ))?;
    }
    world.designate_reserve(StructureId(4))?;

    // Two loose piles waiting on the ground.
    world.add_deposit(Deposit::new(GridPos::new(1, 2), ENERGY, 150));
    world.add_deposit(Deposit::new(GridPos::new(8, 2), ENERGY, 80));

    // The hauler, empty, bottom-left corner.
    world.add_agent(AgentBody::new(
        AgentId(0),
        GridPos::new(0, 10),
        Store::with_capacity(AGENT_CAP),
    ))?;

    Ok(world)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== smallroom — rust_haul logistics demo ===");
    println!("Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Build the room.
    let world = build_room()?;
    println!(
        "Room: {} structures, {} deposits, {} agent",
        world.structures().len(),
        world.deposits().len(),
        world.agents().len()
    );

    // 2. Sim config + deposit regeneration near the old piles.
    let config = SimConfig { total_ticks: TOTAL_TICKS, seed: SEED };
    let regen = RegenConfig {
        probability:  0.08,
        amount:       60,
        spawn_points: vec![GridPos::new(1, 2), GridPos::new(8, 2)],
    };

    // 3. Build the sim with logging diagnostics.
    let mut sim = SimBuilder::new(config, world, LogDiagnostics)
        .regen(regen)
        .build()?;

    // 4. Telemetry output.
    std::fs::create_dir_all("output/smallroom")?;
    let mut telemetry = CsvTelemetry::create(Path::new("output/smallroom"))?;

    // 5. Run.
    sim.run(&mut telemetry)?;
    if let Some(e) = telemetry.take_error() {
        eprintln!("telemetry error: {e}");
    }
    println!("Simulation complete: {} telemetry rows", telemetry.rows_written());
    println!();

    // 6. Final state table.
    let energy = ResourceKind::Energy;
    println!("{:<12} {:<10} {:>8} {:>10}", "Structure", "Pos", "Stored", "Capacity");
    println!("{}", "-".repeat(44));
    for s in sim.world.world().structures() {
        println!(
            "{:<12} {:<10} {:>8} {:>10}",
            s.kind.as_str(),
            s.pos.to_string(),
            s.store.used(energy),
            s.store.capacity()
        );
    }
    println!();

    let hauler = sim
        .world
        .world()
        .agent(AgentId(0))
        .expect("hauler still exists");
    println!(
        "Hauler at {} carrying {}/{} — mode: {}",
        hauler.pos,
        hauler.store.used(energy),
        hauler.store.capacity(),
        sim.memory(AgentId(0)).mode
    );

    Ok(())
}
