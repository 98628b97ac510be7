//! The `fretquiz chart` command.

use anyhow::Result;

use fretquiz_core::render::render_chart;

use crate::commands::PlayArgs;

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.resolve_config()?;
    println!("{}", render_chart(config.neck_length, config.spelling));
    Ok(())
}
