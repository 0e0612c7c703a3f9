//! Default starfield backdrop: 2000 white particles, pointer interaction.
//!
//! Run with: `cargo run --example basic`

use starfield::prelude::*;

fn main() -> Result<(), RunError> {
    Starfield::new().run()
}
