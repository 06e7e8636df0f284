use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use zendom::{compute_slots, Separators, SlotSpec, UDim};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("flex.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let children = [
        SlotSpec::fixed(UDim::from_offset(120.0)),
        SlotSpec::auto(),
        SlotSpec::fixed(UDim::from_scale(0.25)),
        SlotSpec::auto(),
    ];
    let spacing = UDim::from_offset(8.0);
    let axis = UDim::from_scale(1.0);

    for separators in [Separators::PerSlot, Separators::Between] {
        let slots = compute_slots(&children, spacing, axis, separators);
        let sizes = slots.resolve(1000.0);

        println!("{separators:?} (1000px)");
        for (slot, px) in slots.iter().zip(&sizes) {
            println!(
                "  #{} {:>5} scale={:.3} offset={:>7.2} -> {:>7.2}px {:?}",
                slot.index,
                if slot.auto { "auto" } else { "fixed" },
                slot.main.scale,
                slot.main.offset,
                px,
                slot.align,
            );
        }
        let gaps = separators.count(slots.len()) as f32;
        let used = sizes.iter().sum::<f32>() + slots.spacing_px(1000.0) * gaps;
        println!("  used {used:.2}px");
    }

    Ok(())
}
