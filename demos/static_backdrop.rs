//! Static mode: the field renders exactly one frame and idles, the way it
//! does on touch devices and small viewports.
//!
//! Run with: `cargo run --example static_backdrop`

use starfield::prelude::*;

fn main() -> Result<(), RunError> {
    Starfield::new()
        .with_touch_device(true)
        .with_title("Starfield (static)")
        .run()
}
