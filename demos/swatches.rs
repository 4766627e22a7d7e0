//! Write `swatches.html` with every Furman palette, `ramps.html` with
//! the sequential and divergent ones interpolated, plus the CSS export
//! of the palettes named on the command line.  A color bar legend of
//! `purple_gold` centered on 0 is printed too.
//!
//! ```text
//! cargo run --example swatches -- cool purple_gold
//! ```

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use furman_palettes::{export::{export_to_file, Format}, palette, preview,
                      ContinuousScale, PaletteFind, PaletteType};

type Err = Box<dyn Error>;

fn main() -> Result<(), Err> {
    let names: Vec<String> = env::args().skip(1).collect();

    let mut fh = BufWriter::new(File::create("swatches.html")?);
    preview::write_preview::<&str>(&mut fh, &[], None)?;
    fh.flush()?;
    println!("wrote swatches.html");
    let ramps: Vec<_> = PaletteFind::new()
        .typ(PaletteType::Sequential).typ(PaletteType::Divergent)
        .find().map(|p| p.name()).collect();
    let mut fh = BufWriter::new(File::create("ramps.html")?);
    preview::write_preview(&mut fh, &ramps, Some(64))?;
    fh.flush()?;
    println!("wrote ramps.html");

    let map = ContinuousScale::new(palette("purple_gold")?)
        .limits(-1., 3.).midpoint(0.).build()?;
    for (v, c) in map.legend(9) {
        println!("{v:>6.2}  {c}");
    }

    for name in &names {
        let path = format!("{name}.css");
        export_to_file(name, Format::Css, None, &path)?;
        println!("wrote {path}");
    }
    Ok(())
}
