//! Walk through set, flip, and render on a 40-bit array.
//!
//! Run with: `cargo run --example bit_int_array`

use anyhow::Result;
use bitintarray::BitArray;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;
    log::info!("{}", bitintarray::version());

    let mut bits = BitArray::new(40)?;
    println!("{}", bits);

    bits.set(3)?;

    let which = 39;
    bits.set(which)?;
    println!("{}", bits.render(true));
    println!("{}", bits.is_set(which)?);

    for _ in 0..2 {
        bits.flip(which)?;
        println!("{}", bits.render(true));
        println!("{}", bits.is_set(which)?);
    }

    log::info!("{} of {} bits set", bits.count_set(), bits.size());
    Ok(())
}
